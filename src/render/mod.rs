//! Placeholder rendering.
//!
//! Two renderers sit behind trait seams: the vector renderer composes SVG
//! markup and rasterizes it with `resvg`, the raster renderer paints pixels
//! directly with `image`. The vector path is preferred; returning `Ok(None)`
//! from it means "cannot render here, use the fallback".

use crate::foundation::error::{MonogramError, MonogramResult};

mod encode;
pub mod initials;
pub mod raster;
pub mod svg;

pub use raster::BlockInitialsRenderer;
pub use svg::SvgInitialsRenderer;

/// Avatar color theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS hex form, e.g. `#c44545`.
    pub fn css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Visual style shared by both renderers.
///
/// Serde-friendly so embedders can load a style from JSON; the compiled-in
/// default matches the upstream placeholder look: an 18-slot hue wheel,
/// white initials on a colored ground in the light theme, colored initials
/// on a near-black ground in the dark theme.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Font family requested for the initials (vector path only).
    pub font_family: String,
    /// Initials height as a fraction of the avatar edge.
    pub text_ratio: f32,
    /// Initials color in the light theme.
    pub light_text: Rgb,
    /// Background color in the dark theme.
    pub dark_background: Rgb,
    /// Background (light) / initials (dark) colors, selected by name hash.
    pub palette: Vec<Rgb>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            text_ratio: 0.45,
            light_text: Rgb(0xff, 0xff, 0xff),
            dark_background: Rgb(0x17, 0x17, 0x17),
            palette: vec![
                Rgb(0xc4, 0x45, 0x45),
                Rgb(0xc4, 0x6f, 0x45),
                Rgb(0xc4, 0x9a, 0x45),
                Rgb(0xc4, 0xc4, 0x45),
                Rgb(0x9a, 0xc4, 0x45),
                Rgb(0x6f, 0xc4, 0x45),
                Rgb(0x45, 0xc4, 0x45),
                Rgb(0x45, 0xc4, 0x6f),
                Rgb(0x45, 0xc4, 0x9a),
                Rgb(0x45, 0xc4, 0xc4),
                Rgb(0x45, 0x9a, 0xc4),
                Rgb(0x45, 0x6f, 0xc4),
                Rgb(0x45, 0x45, 0xc4),
                Rgb(0x6f, 0x45, 0xc4),
                Rgb(0x9a, 0x45, 0xc4),
                Rgb(0xc4, 0x45, 0xc4),
                Rgb(0xc4, 0x45, 0x9a),
                Rgb(0xc4, 0x45, 0x6f),
            ],
        }
    }
}

impl RenderStyle {
    /// Palette color assigned to a display name. Stable across runs.
    pub fn name_color(&self, display_name: &str) -> Rgb {
        if self.palette.is_empty() {
            return Rgb(0x76, 0x76, 0x76);
        }
        let slot = initials::palette_slot(display_name, self.palette.len());
        self.palette[slot]
    }

    /// `(background, initials)` colors for a display name under a theme.
    pub fn colors(&self, display_name: &str, theme: Theme) -> (Rgb, Rgb) {
        let name_color = self.name_color(display_name);
        match theme {
            Theme::Light => (name_color, self.light_text),
            Theme::Dark => (self.dark_background, name_color),
        }
    }
}

/// Preferred renderer: may refuse with `Ok(None)` when it cannot produce
/// output on this host (e.g. no usable fonts), signalling the caller to try
/// the raster fallback.
pub trait VectorRenderer {
    fn render(&self, text: &str, size_px: u32, theme: Theme) -> MonogramResult<Option<Vec<u8>>>;
}

/// Fallback renderer. Must produce bytes for every valid size; failure here
/// is a fatal rendering error, not a cache-layer outcome.
pub trait RasterRenderer {
    fn render(&self, text: &str, size_px: u32, theme: Theme) -> MonogramResult<Vec<u8>>;
}

// Keeps pixmap allocations bounded.
const MAX_DIM: u32 = 16_384;

pub(crate) fn check_size(size_px: u32) -> MonogramResult<()> {
    if size_px == 0 {
        return Err(MonogramError::validation("avatar size must be > 0"));
    }
    if size_px > MAX_DIM {
        return Err(MonogramError::validation(format!(
            "avatar size too large: {size_px} (max {MAX_DIM})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_default_survives_json_round_trip() {
        let style = RenderStyle::default();
        let json = serde_json::to_string(&style).unwrap();
        let back: RenderStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }

    #[test]
    fn style_fields_default_individually() {
        let style: RenderStyle = serde_json::from_str(r#"{"text_ratio": 0.5}"#).unwrap();
        assert_eq!(style.text_ratio, 0.5);
        assert_eq!(style.palette.len(), 18);
    }

    #[test]
    fn theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);
        assert_eq!(
            serde_json::from_str::<Theme>(r#""light""#).unwrap(),
            Theme::Light
        );
    }

    #[test]
    fn colors_swap_roles_per_theme() {
        let style = RenderStyle::default();
        let (light_bg, light_fg) = style.colors("Jane Doe", Theme::Light);
        let (dark_bg, dark_fg) = style.colors("Jane Doe", Theme::Dark);
        assert_eq!(light_fg, style.light_text);
        assert_eq!(dark_bg, style.dark_background);
        assert_eq!(light_bg, dark_fg);
    }

    #[test]
    fn css_hex_is_lowercase_six_digits() {
        assert_eq!(Rgb(0x0a, 0xff, 0x00).css(), "#0aff00");
    }
}
