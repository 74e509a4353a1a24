//! Raster rendering of a composed design onto the garment mockup.
//!
//! The mockup is built as an SVG document (silhouette filled with the garment
//! color, centered print text) and rasterized with resvg; decoded artwork is
//! then alpha-composited over the chest area. Hosts that paint their own
//! preview can ignore this module and consume
//! [`ComposedDesign`](super::ComposedDesign) directly.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use palette::{IntoColor, Srgb, SrgbLuma};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use thiserror::Error;

use super::ComposedDesign;
use crate::design::GarmentColor;

/// Logical width of the mockup viewport.
pub const MOCKUP_WIDTH: u32 = 200;
/// Logical height of the mockup viewport.
pub const MOCKUP_HEIGHT: u32 = 220;

/// Artwork box width relative to the mockup width.
const ARTWORK_BOX_RATIO: f32 = 90.0 / 200.0;

/// Print line height in mockup units (14px type at 1.4 line height).
const LINE_HEIGHT: f32 = 20.0;

/// Vertical center of the chest print area in mockup units.
const PRINT_CENTER_Y: f32 = 112.0;

#[derive(Debug, Error)]
pub enum PreviewError {
    /// The requested pixel size cannot produce a rasterizable surface.
    #[error("preview size {0}px is too small to rasterize")]
    SizeTooSmall(u32),
    /// The generated mockup document failed to parse.
    #[error("mockup svg did not parse: {0}")]
    Mockup(String),
}

// ============================================================================
// Rendering
// ============================================================================

/// Rasterizes a composed design at the given pixel size.
///
/// The mockup is scaled so its larger dimension equals `size`, preserving the
/// 200x220 aspect. Artwork, when present, is aspect-fit into the chest box
/// (never upscaled) and composited over the silhouette.
pub fn render_preview(design: &ComposedDesign<'_>, size: u32) -> Result<RgbaImage, PreviewError> {
    if size == 0 {
        return Err(PreviewError::SizeTooSmall(size));
    }

    let svg = mockup_svg(design);
    let tree =
        Tree::from_str(&svg, &Options::default()).map_err(|e| PreviewError::Mockup(e.to_string()))?;

    let doc = tree.size();
    let scale = size as f32 / doc.width().max(doc.height());
    let width = (doc.width() * scale).ceil() as u32;
    let height = (doc.height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(PreviewError::SizeTooSmall(size))?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    let mut base = pixmap_to_rgba(&pixmap);

    if let Some(artwork) = design.artwork {
        let box_px = ((width as f32 * ARTWORK_BOX_RATIO) as u32).max(1);
        let fitted = fit_within(artwork, box_px);
        let x = (width as i32 - fitted.width() as i32) / 2;
        let y = (height as i32 - fitted.height() as i32) / 2;
        composite_over(&mut base, &fitted, x, y);
    }

    Ok(base)
}

/// Builds the mockup SVG document for a composed design.
fn mockup_svg(design: &ComposedDesign<'_>) -> String {
    let fill = design.garment.hex();
    let ink = ink_color(design.garment);

    let mut svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r##"<path d="M40,40 L70,10 H130 L160,40 L150,60 L140,50 V200 H60 V50 L50,60 Z" fill="{fill}" stroke="#333333" stroke-width="2"/>"##,
            r##"<path d="M70,10 Q100,30 130,10" fill="none" stroke="#333333" stroke-width="2"/>"##,
            r##"<path d="M70,10 L40,40 L50,60" fill="none" stroke="#333333" stroke-width="2"/>"##,
            r##"<path d="M130,10 L160,40 L150,60" fill="none" stroke="#333333" stroke-width="2"/>"##,
        ),
        w = MOCKUP_WIDTH,
        h = MOCKUP_HEIGHT,
        fill = fill,
    );

    // Lines are laid out as a centered block; blank lines hold their slot but
    // paint nothing.
    let count = design.lines.len();
    for (idx, line) in design.lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let offset = idx as f32 - (count as f32 - 1.0) / 2.0;
        let y = PRINT_CENTER_Y + offset * LINE_HEIGHT;
        svg.push_str(&format!(
            r#"<text x="100" y="{y:.1}" text-anchor="middle" font-size="14" font-weight="bold" fill="{ink}">{text}</text>"#,
            text = xml_escape(line),
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Picks a print ink that stays legible against the garment: dark garments
/// get light ink.
fn ink_color(garment: GarmentColor) -> &'static str {
    let (r, g, b) = garment.rgb();
    let rgb = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let luma: SrgbLuma = rgb.into_color();
    if luma.luma < 0.5 { "#f3f4f6" } else { "#111827" }
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

// ============================================================================
// Bitmap helpers
// ============================================================================

/// Scales an image down to fit within a square box, preserving aspect ratio.
/// Images already inside the box are returned unscaled.
fn fit_within(image: &RgbaImage, box_px: u32) -> RgbaImage {
    let (w, h) = image.dimensions();
    let scale = (box_px as f32 / w as f32)
        .min(box_px as f32 / h as f32)
        .min(1.0);
    if scale >= 1.0 {
        return image.clone();
    }
    let new_w = ((w as f32 * scale).round() as u32).max(1);
    let new_h = ((h as f32 * scale).round() as u32).max(1);
    imageops::resize(image, new_w, new_h, FilterType::Triangle)
}

fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for y in 0..pixmap.height() {
        for x in 0..pixmap.width() {
            // tiny_skia stores premultiplied alpha
            let p = pixmap.pixel(x, y).expect("pixel within pixmap bounds");
            let (r, g, b, a) = unpremultiply(p.red(), p.green(), p.blue(), p.alpha());
            img.put_pixel(x, y, Rgba([r, g, b, a]));
        }
    }
    img
}

fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        return (0, 0, 0, 0);
    }
    let alpha = a as f32 / 255.0;
    let restore = |c: u8| (c as f32 / alpha).round().min(255.0) as u8;
    (restore(r), restore(g), restore(b), a)
}

/// Composites `src` onto `dest` at the given position with source-over
/// blending. Pixels falling outside `dest` are skipped.
fn composite_over(dest: &mut RgbaImage, src: &RgbaImage, x: i32, y: i32) {
    let (dw, dh) = (dest.width() as i32, dest.height() as i32);
    for sy in 0..src.height() {
        for sx in 0..src.width() {
            let dx = x + sx as i32;
            let dy = y + sy as i32;
            if dx < 0 || dy < 0 || dx >= dw || dy >= dh {
                continue;
            }
            let blended = blend_over(*src.get_pixel(sx, sy), *dest.get_pixel(dx as u32, dy as u32));
            dest.put_pixel(dx as u32, dy as u32, blended);
        }
    }
}

fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |s: u8, d: u8| {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        (((s * sa + d * da * (1.0 - sa)) / out_a) * 255.0).round() as u8
    };
    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_design(garment: GarmentColor) -> ComposedDesign<'static> {
        ComposedDesign {
            garment,
            artwork: None,
            lines: vec![""],
        }
    }

    #[test]
    fn default_mockup_has_a_white_body() {
        let img = render_preview(&blank_design(GarmentColor::White), 64).unwrap();
        // Larger dimension matches the requested size.
        assert_eq!(img.height(), 64);
        assert!(img.width() < img.height());

        let center = img.get_pixel(img.width() / 2, img.height() / 2);
        assert_eq!(center.0, [255, 255, 255, 255]);
    }

    #[test]
    fn garment_color_fills_the_body() {
        let img = render_preview(&blank_design(GarmentColor::Black), 64).unwrap();
        let center = img.get_pixel(img.width() / 2, img.height() / 2);
        assert!(center[0] < 50 && center[1] < 50 && center[2] < 50);
        assert_eq!(center[3], 255);

        let img = render_preview(&blank_design(GarmentColor::Red), 64).unwrap();
        let center = img.get_pixel(img.width() / 2, img.height() / 2);
        assert!(center[0] > 200 && center[1] < 50 && center[2] < 50);
    }

    #[test]
    fn artwork_is_composited_over_the_chest() {
        let artwork = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 255, 255]));
        let design = ComposedDesign {
            garment: GarmentColor::White,
            artwork: Some(&artwork),
            lines: vec![""],
        };

        let img = render_preview(&design, 64).unwrap();
        let center = img.get_pixel(img.width() / 2, img.height() / 2);
        assert!(center[2] > 200 && center[0] < 50, "chest should be covered by the blue artwork");

        // A corner stays outside both silhouette and artwork.
        assert_eq!(img.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn oversized_artwork_is_scaled_into_the_box() {
        let artwork = RgbaImage::from_pixel(500, 500, Rgba([0, 255, 0, 255]));
        let design = ComposedDesign {
            garment: GarmentColor::White,
            artwork: Some(&artwork),
            lines: vec![""],
        };

        let img = render_preview(&design, 220).unwrap();
        // Chest center is covered by the scaled-down artwork.
        let center = img.get_pixel(img.width() / 2, img.height() / 2);
        assert!(center[1] > 200 && center[0] < 50);

        // Just below the collar is above the artwork box: still the white
        // silhouette, so the artwork was scaled rather than spilling.
        let probe = img.get_pixel(img.width() / 2, 22);
        assert!(
            !(probe[0] < 50 && probe[1] > 200 && probe[2] < 50),
            "artwork must not spill above its box"
        );
    }

    #[test]
    fn zero_size_is_rejected() {
        let result = render_preview(&blank_design(GarmentColor::White), 0);
        assert!(matches!(result, Err(PreviewError::SizeTooSmall(0))));
    }

    #[test]
    fn fit_within_never_upscales() {
        let small = RgbaImage::new(4, 4);
        let fitted = fit_within(&small, 100);
        assert_eq!(fitted.dimensions(), (4, 4));

        let wide = RgbaImage::new(200, 50);
        let fitted = fit_within(&wide, 100);
        assert_eq!(fitted.dimensions(), (100, 25));
    }

    #[test]
    fn blend_over_is_opaque_source_wins() {
        let out = blend_over(Rgba([10, 20, 30, 255]), Rgba([200, 200, 200, 255]));
        assert_eq!(out.0, [10, 20, 30, 255]);
    }

    #[test]
    fn blend_over_mixes_translucent_source() {
        let out = blend_over(Rgba([0, 0, 255, 128]), Rgba([255, 0, 0, 255]));
        assert!(out[0] > 0 && out[2] > 0);
        assert_eq!(out[3], 255);
    }

    #[test]
    fn text_is_escaped_into_the_document() {
        let design = ComposedDesign {
            garment: GarmentColor::White,
            artwork: None,
            lines: vec!["A & B", "<tag>"],
        };
        let svg = mockup_svg(&design);
        assert!(svg.contains("A &amp; B"));
        assert!(svg.contains("&lt;tag&gt;"));
        assert!(!svg.contains("<tag>"));
    }

    #[test]
    fn blank_lines_paint_nothing() {
        let svg = mockup_svg(&blank_design(GarmentColor::White));
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn dark_garments_get_light_ink() {
        assert_eq!(ink_color(GarmentColor::Black), "#f3f4f6");
        assert_eq!(ink_color(GarmentColor::Blue), "#f3f4f6");
        assert_eq!(ink_color(GarmentColor::White), "#111827");
        assert_eq!(ink_color(GarmentColor::Yellow), "#111827");
    }
}
