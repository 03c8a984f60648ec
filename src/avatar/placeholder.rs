use crate::avatar::{Avatar, AvatarFile};
use crate::foundation::error::{MonogramError, MonogramResult};
use crate::identity::Identity;
use crate::render::{
    BlockInitialsRenderer, RasterRenderer, RenderStyle, SvgInitialsRenderer, Theme, VectorRenderer,
};
use crate::store::{StoreEntry, UserStore};

/// Sentinel size requesting the unscaled original. Looked up, never
/// generated.
pub const NATIVE_SIZE: i32 = -1;

/// Canonical cache file name for a `(size, theme)` pair.
///
/// Pure name derivation; size validation happens at generation time.
pub fn placeholder_file_name(size: i32, theme: Theme) -> String {
    let mut name = String::from("avatar-placeholder");
    if theme.is_dark() {
        name.push_str("-dark");
    }
    if size != NATIVE_SIZE {
        name.push('.');
        name.push_str(&size.to_string());
    }
    name.push_str(".png");
    name
}

/// The placeholder avatar: deterministic initials image, generated on first
/// miss and cached in the user's store.
///
/// Rendering is vector-first. The raster renderer only runs when the vector
/// renderer reports it cannot produce output on this host.
pub struct PlaceholderAvatar<I, S> {
    identity: I,
    store: S,
    vector: Box<dyn VectorRenderer>,
    raster: Box<dyn RasterRenderer>,
}

impl<I, S> PlaceholderAvatar<I, S>
where
    I: Identity,
    S: UserStore,
{
    pub fn new(
        identity: I,
        store: S,
        vector: Box<dyn VectorRenderer>,
        raster: Box<dyn RasterRenderer>,
    ) -> Self {
        Self {
            identity,
            store,
            vector,
            raster,
        }
    }

    /// Construct with the built-in SVG renderer and raster fallback.
    pub fn with_default_renderers(identity: I, store: S, style: RenderStyle) -> Self {
        let vector = Box::new(SvgInitialsRenderer::new(style.clone()));
        let raster = Box::new(BlockInitialsRenderer::new(style));
        Self::new(identity, store, vector, raster)
    }

    fn generate(&self, size_px: u32, theme: Theme) -> MonogramResult<Vec<u8>> {
        let display_name = self.identity.display_name();
        match self.vector.render(&display_name, size_px, theme)? {
            Some(bytes) => Ok(bytes),
            None => self.raster.render(&display_name, size_px, theme),
        }
    }

    fn persist(&self, name: &str, data: &[u8]) -> MonogramResult<()> {
        // A concurrent request may have created the entry after our lookup
        // missed; either way we own the same bytes, so overwrite.
        let mut entry = self.store.create(name)?.into_entry();
        entry.write(data)
    }
}

impl<I, S> Avatar for PlaceholderAvatar<I, S>
where
    I: Identity,
    S: UserStore,
{
    fn exists(&self) -> bool {
        true
    }

    fn is_custom(&self) -> bool {
        false
    }

    fn set(&self, _data: &[u8]) -> MonogramResult<()> {
        // Placeholders cannot be user-set.
        Ok(())
    }

    fn remove(&self) -> MonogramResult<()> {
        for entry in self.store.list()? {
            entry.delete()?;
        }
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(user = self.identity.unique_id()))]
    fn get_file(&self, size: i32, dark: bool) -> MonogramResult<AvatarFile> {
        let theme = Theme::from_dark_flag(dark);
        let name = placeholder_file_name(size, theme);

        if let Some(entry) = self.store.get(&name)? {
            tracing::debug!(key = %name, "placeholder cache hit");
            return Ok(AvatarFile {
                name,
                data: entry.bytes()?,
            });
        }

        // Covers both invalid sizes and the native-size sentinel, which is
        // lookup-only: a miss at NATIVE_SIZE is terminal.
        if size <= 0 {
            return Err(MonogramError::NotFound);
        }

        let data = self.generate(size as u32, theme)?;
        match self.persist(&name, &data) {
            Ok(()) => {
                tracing::debug!(key = %name, bytes = data.len(), "placeholder generated");
                Ok(AvatarFile { name, data })
            }
            Err(MonogramError::NotPermitted(reason)) => {
                tracing::warn!(
                    key = %name,
                    %reason,
                    "store rejected placeholder write, reporting not found"
                );
                Err(MonogramError::NotFound)
            }
            Err(other) => Err(other),
        }
    }

    fn user_changed(
        &self,
        feature: &str,
        _old_value: &str,
        _new_value: &str,
    ) -> MonogramResult<()> {
        // No way to tell which cached variants a change affects, so drop all
        // of them and let the next request regenerate.
        tracing::debug!(
            user = self.identity.unique_id(),
            feature,
            "user attribute changed, invalidating placeholder cache"
        );
        self.remove()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_the_canonical_scheme() {
        assert_eq!(
            placeholder_file_name(64, Theme::Light),
            "avatar-placeholder.64.png"
        );
        assert_eq!(
            placeholder_file_name(64, Theme::Dark),
            "avatar-placeholder-dark.64.png"
        );
        assert_eq!(
            placeholder_file_name(NATIVE_SIZE, Theme::Light),
            "avatar-placeholder.png"
        );
        assert_eq!(
            placeholder_file_name(NATIVE_SIZE, Theme::Dark),
            "avatar-placeholder-dark.png"
        );
    }

    #[test]
    fn file_names_never_collide_across_sizes_and_themes() {
        let mut seen = std::collections::BTreeSet::new();
        for size in [NATIVE_SIZE, 16, 32, 64, 128, 512] {
            for theme in [Theme::Light, Theme::Dark] {
                assert!(seen.insert(placeholder_file_name(size, theme)));
            }
        }
    }

    #[test]
    fn resolution_does_not_validate() {
        // Invalid sizes still resolve; rejection happens at generation time.
        assert_eq!(
            placeholder_file_name(0, Theme::Light),
            "avatar-placeholder.0.png"
        );
        assert_eq!(
            placeholder_file_name(-5, Theme::Light),
            "avatar-placeholder.-5.png"
        );
    }
}
