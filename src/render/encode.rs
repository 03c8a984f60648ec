use std::io::Cursor;

use crate::foundation::error::{MonogramError, MonogramResult};

/// Encode an RGBA8 buffer as PNG.
///
/// PNG carries straight alpha; premultiplied input (e.g. a rasterized SVG
/// pixmap) is un-premultiplied first.
pub(crate) fn encode_png(
    width: u32,
    height: u32,
    mut rgba: Vec<u8>,
    premultiplied: bool,
) -> MonogramResult<Vec<u8>> {
    if premultiplied {
        unpremultiply(&mut rgba);
    }
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| MonogramError::rendering("pixel buffer does not match dimensions"))?;
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| MonogramError::rendering(format!("png encode: {e}")))?;
    Ok(out)
}

fn unpremultiply(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in px[..3].iter_mut() {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_decodable_png() {
        let png = encode_png(2, 2, vec![0u8; 16], false).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!((img.width(), img.height()), (2, 2));
    }

    #[test]
    fn unpremultiply_restores_straight_alpha() {
        // 50% gray at 50% alpha, premultiplied: channel = 128 * 128 / 255.
        let mut px = vec![64, 64, 64, 128];
        unpremultiply(&mut px);
        assert_eq!(px[3], 128);
        assert!((px[0] as i16 - 128).abs() <= 1, "got {}", px[0]);
    }

    #[test]
    fn dimension_mismatch_is_a_rendering_error() {
        let err = encode_png(3, 3, vec![0u8; 4], false).unwrap_err();
        assert!(err.to_string().contains("rendering error:"));
    }
}
