//! Monogram generates deterministic placeholder avatars — the initials
//! image shown for users without a custom avatar — and caches them per user.
//!
//! The flow is generate-then-cache-on-first-miss:
//!
//! - Resolve the canonical cache name for `(size, theme)`
//! - Serve a cached entry when one exists
//! - Otherwise render (vector-first, raster fallback), persist, serve
//!
//! [`PlaceholderAvatar`] is the orchestrator; storage and rendering sit
//! behind the [`UserStore`] and renderer traits so embedders can bring their
//! own backends.
#![forbid(unsafe_code)]

pub mod avatar;
pub mod foundation;
pub mod identity;
pub mod render;
pub mod store;

pub use avatar::{Avatar, AvatarFile, NATIVE_SIZE, PlaceholderAvatar, placeholder_file_name};
pub use foundation::error::{MonogramError, MonogramResult};
pub use identity::{Identity, UserIdentity};
pub use render::{
    BlockInitialsRenderer, RasterRenderer, RenderStyle, Rgb, SvgInitialsRenderer, Theme,
    VectorRenderer,
};
pub use store::{CreateOutcome, FsUserStore, MemoryStore, StoreEntry, UserStore};
