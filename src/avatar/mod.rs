//! Avatar kinds and their shared capability surface.
//!
//! Every avatar kind (custom-uploaded, guest, placeholder) exposes the same
//! capability set; serving layers only ever talk to the [`Avatar`] trait.
//! This crate ships the placeholder kind.

use crate::foundation::error::MonogramResult;

pub mod placeholder;

pub use placeholder::{NATIVE_SIZE, PlaceholderAvatar, placeholder_file_name};

/// A served avatar artifact: store entry name plus PNG bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarFile {
    /// Store-assigned entry name (the cache key).
    pub name: String,
    /// PNG image data.
    pub data: Vec<u8>,
}

/// Capability set shared by all avatar kinds.
pub trait Avatar {
    /// Whether an avatar can be served at all. Placeholders always exist:
    /// they are generated on demand.
    fn exists(&self) -> bool;

    /// Whether this is a user-uploaded avatar.
    fn is_custom(&self) -> bool;

    /// Replace the avatar image. Kinds that cannot be user-set treat this
    /// as a no-op and must not error.
    fn set(&self, data: &[u8]) -> MonogramResult<()>;

    /// Drop every cached artifact for this user.
    fn remove(&self) -> MonogramResult<()>;

    /// Fetch (generating and caching if needed) the avatar at `size` pixels.
    ///
    /// `size` may be [`NATIVE_SIZE`] to request the unscaled original, which
    /// is only ever served from cache, never generated.
    fn get_file(&self, size: i32, dark: bool) -> MonogramResult<AvatarFile>;

    /// Notification that a user attribute changed. Any rendering input
    /// change invalidates the whole cache.
    fn user_changed(&self, feature: &str, old_value: &str, new_value: &str)
    -> MonogramResult<()>;
}
