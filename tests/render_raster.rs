use monogram::{BlockInitialsRenderer, RasterRenderer, RenderStyle, Theme};

#[test]
fn fallback_produces_png_with_requested_size() {
    let renderer = BlockInitialsRenderer::new(RenderStyle::default());
    let bytes = renderer.render("Jane Doe", 64, Theme::Light).unwrap();

    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!((img.width(), img.height()), (64, 64));
}

#[test]
fn fallback_is_deterministic() {
    let renderer = BlockInitialsRenderer::new(RenderStyle::default());
    let a = renderer.render("Jane Doe", 64, Theme::Light).unwrap();
    let b = renderer.render("Jane Doe", 64, Theme::Light).unwrap();
    assert_eq!(a, b);
}

#[test]
fn themes_render_differently() {
    let renderer = BlockInitialsRenderer::new(RenderStyle::default());
    let light = renderer.render("Jane Doe", 64, Theme::Light).unwrap();
    let dark = renderer.render("Jane Doe", 64, Theme::Dark).unwrap();
    assert_ne!(light, dark);
}

#[test]
fn light_background_matches_the_name_color() {
    let style = RenderStyle::default();
    let expected = style.name_color("Jane Doe");

    let renderer = BlockInitialsRenderer::new(style);
    let bytes = renderer.render("Jane Doe", 16, Theme::Light).unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();

    // Corner pixel is outside the glyph area.
    let px = img.get_pixel(0, 0);
    assert_eq!((px[0], px[1], px[2], px[3]), (expected.0, expected.1, expected.2, 0xff));
}

#[test]
fn invalid_sizes_are_rejected() {
    let renderer = BlockInitialsRenderer::new(RenderStyle::default());
    assert!(renderer.render("Jane Doe", 0, Theme::Light).is_err());
}
