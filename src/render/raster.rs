use crate::foundation::error::MonogramResult;
use crate::render::{RasterRenderer, RenderStyle, Rgb, Theme, check_size, encode, initials};

/// Raster fallback renderer, built directly on `image`.
///
/// Paints the themed background and the initials as blocky 3x5 glyphs, so it
/// works on hosts without a single font installed. Proper typography belongs
/// to the vector path; this one must never fail for a valid size.
pub struct BlockInitialsRenderer {
    style: RenderStyle,
}

impl BlockInitialsRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }
}

impl RasterRenderer for BlockInitialsRenderer {
    fn render(&self, text: &str, size_px: u32, theme: Theme) -> MonogramResult<Vec<u8>> {
        check_size(size_px)?;

        let (bg, fg) = self.style.colors(text, theme);
        let mut img = image::RgbaImage::from_pixel(
            size_px,
            size_px,
            image::Rgba([bg.0, bg.1, bg.2, 0xff]),
        );
        draw_initials(
            &mut img,
            &initials::initials(text),
            fg,
            self.style.text_ratio,
        );

        encode::encode_png(size_px, size_px, img.into_raw(), false)
    }
}

const GLYPH_ROWS: usize = 5;
const GLYPH_COLS: i64 = 3;
// One blank column between glyphs.
const GLYPH_PITCH: i64 = GLYPH_COLS + 1;

fn draw_initials(img: &mut image::RgbaImage, text: &str, color: Rgb, text_ratio: f32) {
    let glyphs: Vec<[u8; GLYPH_ROWS]> = text.chars().map(glyph).collect();
    if glyphs.is_empty() {
        return;
    }

    let edge = img.width() as i64;
    let cell = (((edge as f32) * text_ratio / GLYPH_ROWS as f32).round() as i64).max(1);
    let total_w = (glyphs.len() as i64 * GLYPH_PITCH - 1) * cell;
    let total_h = GLYPH_ROWS as i64 * cell;
    // May go negative for tiny avatars; drawing clips to the image.
    let x0 = (edge - total_w) / 2;
    let y0 = (edge - total_h) / 2;

    let px = image::Rgba([color.0, color.1, color.2, 0xff]);
    for (gi, rows) in glyphs.iter().enumerate() {
        let gx = x0 + gi as i64 * GLYPH_PITCH * cell;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if bits & (0b100 >> col) == 0 {
                    continue;
                }
                fill_cell(img, gx + col * cell, y0 + row as i64 * cell, cell, px);
            }
        }
    }
}

fn fill_cell(img: &mut image::RgbaImage, x: i64, y: i64, cell: i64, px: image::Rgba<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    for yy in y.max(0)..(y + cell).min(h) {
        for xx in x.max(0)..(x + cell).min(w) {
            img.put_pixel(xx as u32, yy as u32, px);
        }
    }
}

/// 3x5 bitmap for one initial; rows are 3-bit masks, MSB on the left.
/// Characters outside the table render as a filled block.
fn glyph(c: char) -> [u8; GLYPH_ROWS] {
    match c {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b101, 0b111, 0b111, 0b111, 0b101],
        'O' | '0' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b110, 0b001, 0b010, 0b100, 0b111],
        '3' => [0b110, 0b001, 0b010, 0b001, 0b110],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b110, 0b001, 0b110],
        '6' => [0b011, 0b100, 0b110, 0b101, 0b010],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b010, 0b101, 0b010, 0b101, 0b010],
        '9' => [0b010, 0b101, 0b011, 0b001, 0b110],
        '?' => [0b110, 0b001, 0b010, 0b000, 0b010],
        _ => [0b111, 0b111, 0b111, 0b111, 0b111],
    }
}
