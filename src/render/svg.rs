use std::sync::Arc;

use crate::foundation::error::{MonogramError, MonogramResult};
use crate::render::{RenderStyle, Theme, VectorRenderer, check_size, encode, initials};

/// Vector renderer: composes SVG markup for the initials and rasterizes it
/// with `resvg` against the system font database.
///
/// On hosts without a single usable font face (containers, CI) it reports
/// `Ok(None)` so the caller can fall back to the raster renderer instead of
/// producing an avatar with invisible text.
pub struct SvgInitialsRenderer {
    style: RenderStyle,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl SvgInitialsRenderer {
    /// Build a renderer over the system font database.
    pub fn new(style: RenderStyle) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self::with_fontdb(style, Arc::new(db))
    }

    /// Build a renderer over an explicit font database.
    pub fn with_fontdb(style: RenderStyle, fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self { style, fontdb }
    }

    /// The SVG markup rasterized by [`VectorRenderer::render`].
    ///
    /// Square canvas, full-bleed background rect, initials centered with the
    /// baseline offset tuned for capital letters.
    pub fn svg_source(&self, text: &str, size_px: u32, theme: Theme) -> String {
        let (bg, fg) = self.style.colors(text, theme);
        let edge = size_px as f32;
        let font_size = edge * self.style.text_ratio;
        let x = edge / 2.0;
        let y = edge / 2.0 + font_size * 0.35;
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" "#,
                r#"width="{s}" height="{s}" viewBox="0 0 {s} {s}">"#,
                r#"<rect width="{s}" height="{s}" fill="{bg}"/>"#,
                r#"<text x="{x}" y="{y}" text-anchor="middle" "#,
                r#"font-family="{family}" font-size="{fs}" fill="{fg}">{init}</text>"#,
                r#"</svg>"#
            ),
            s = size_px,
            bg = bg.css(),
            x = x,
            y = y,
            family = escape_xml(&self.style.font_family),
            fs = font_size,
            fg = fg.css(),
            init = escape_xml(&initials::initials(text)),
        )
    }
}

impl VectorRenderer for SvgInitialsRenderer {
    fn render(&self, text: &str, size_px: u32, theme: Theme) -> MonogramResult<Option<Vec<u8>>> {
        check_size(size_px)?;
        if self.fontdb.faces().next().is_none() {
            tracing::debug!("font database is empty, deferring to raster fallback");
            return Ok(None);
        }

        let source = self.svg_source(text, size_px, theme);
        let options = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(&source, &options)
            .map_err(|e| MonogramError::rendering(format!("svg parse: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(size_px, size_px)
            .ok_or_else(|| MonogramError::rendering("failed to allocate svg pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        encode::encode_png(size_px, size_px, pixmap.take(), true).map(Some)
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> SvgInitialsRenderer {
        SvgInitialsRenderer::with_fontdb(
            RenderStyle::default(),
            Arc::new(usvg::fontdb::Database::new()),
        )
    }

    #[test]
    fn source_contains_initials_and_theme_colors() {
        let r = renderer();
        let style = RenderStyle::default();
        let light = r.svg_source("Jane Doe", 64, Theme::Light);
        assert!(light.contains(">JD</text>"));
        assert!(light.contains(&style.name_color("Jane Doe").css()));

        let dark = r.svg_source("Jane Doe", 64, Theme::Dark);
        assert!(dark.contains(&style.dark_background.css()));
        assert_ne!(light, dark);
    }

    #[test]
    fn source_is_deterministic() {
        let r = renderer();
        assert_eq!(
            r.svg_source("Jane Doe", 128, Theme::Light),
            r.svg_source("Jane Doe", 128, Theme::Light)
        );
    }

    #[test]
    fn markup_escapes_reserved_characters() {
        let r = renderer();
        let source = r.svg_source("<script> &co", 64, Theme::Light);
        assert!(source.contains(">&lt;&amp;</text>"));
    }

    #[test]
    fn empty_fontdb_defers_to_fallback() {
        let r = renderer();
        assert!(r.render("Jane Doe", 64, Theme::Light).unwrap().is_none());
    }

    #[test]
    fn zero_size_is_rejected() {
        let r = renderer();
        assert!(r.render("Jane Doe", 0, Theme::Light).is_err());
    }
}
