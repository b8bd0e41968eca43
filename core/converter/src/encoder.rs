//! FILENAME: core/converter/src/encoder.rs
//! PURPOSE: PNG bytes -> multi-resolution ICO bytes.
//! CONTEXT: Decoding and resampling are done by `image`, the container by `ico`.

use crate::ConvertError;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};

/// Largest edge the ICO directory can describe (stored as 0 in the header).
pub const MAX_ICON_EDGE: u32 = 256;

/// Standard Windows icon resolutions.
pub const DEFAULT_ICON_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

// ============================================================================
// ICON SIZES
// ============================================================================

/// Ordered, de-duplicated set of square edge lengths embedded in one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSizes(Vec<u32>);

impl IconSizes {
    pub fn new(sizes: impl IntoIterator<Item = u32>) -> Result<Self, ConvertError> {
        let mut sizes: Vec<u32> = sizes.into_iter().collect();
        if sizes.is_empty() {
            return Err(ConvertError::Encode("no icon sizes requested".to_string()));
        }
        if let Some(bad) = sizes.iter().find(|&&s| s == 0 || s > MAX_ICON_EDGE) {
            return Err(ConvertError::Encode(format!(
                "icon size {} outside 1..={}",
                bad, MAX_ICON_EDGE
            )));
        }
        sizes.sort_unstable();
        sizes.dedup();
        Ok(IconSizes(sizes))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for IconSizes {
    fn default() -> Self {
        IconSizes(DEFAULT_ICON_SIZES.to_vec())
    }
}

// ============================================================================
// ENCODING
// ============================================================================

/// Decode `png_bytes` and re-encode them as an ICO holding one entry per size.
pub fn encode_png_to_ico(png_bytes: &[u8], sizes: &IconSizes) -> Result<Vec<u8>, ConvertError> {
    let source = image::load_from_memory_with_format(png_bytes, ImageFormat::Png)?.to_rgba8();
    log::debug!(
        "decoded png {}x{}, encoding {} icon sizes",
        source.width(),
        source.height(),
        sizes.len()
    );

    let canvas = square_canvas(source);
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for &size in sizes.as_slice() {
        let resized = if canvas.width() == size {
            canvas.clone()
        } else {
            imageops::resize(&canvas, size, size, FilterType::Lanczos3)
        };
        let image = IconImage::from_rgba_data(size, size, resized.into_raw());
        let entry = IconDirEntry::encode(&image)
            .map_err(|e| ConvertError::Encode(format!("{}x{} entry: {}", size, size, e)))?;
        icon_dir.add_entry(entry);
    }

    let mut out = Vec::new();
    icon_dir
        .write(&mut out)
        .map_err(|e| ConvertError::Encode(e.to_string()))?;
    Ok(out)
}

/// Center a non-square image on a transparent square canvas.
fn square_canvas(source: RgbaImage) -> RgbaImage {
    let (width, height) = source.dimensions();
    if width == height {
        return source;
    }

    let edge = width.max(height);
    let mut canvas = RgbaImage::new(edge, edge);
    let x = i64::from((edge - width) / 2);
    let y = i64::from((edge - height) / 2);
    imageops::overlay(&mut canvas, &source, x, y);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_icon_sizes_sorted_and_deduped() {
        let sizes = IconSizes::new([64, 16, 32, 16]).unwrap();
        assert_eq!(sizes.as_slice(), &[16, 32, 64]);
    }

    #[test]
    fn test_icon_sizes_rejects_out_of_range() {
        assert!(IconSizes::new([0]).is_err());
        assert!(IconSizes::new([512]).is_err());
        assert!(IconSizes::new(Vec::new()).is_err());
    }

    #[test]
    fn test_default_sizes() {
        assert_eq!(IconSizes::default().as_slice(), &DEFAULT_ICON_SIZES);
    }

    #[test]
    fn test_encode_has_ico_header() {
        let ico = encode_png_to_ico(&png_bytes(64, 64), &IconSizes::default()).unwrap();
        // reserved = 0, type = 1 (icon), count = 7
        assert_eq!(&ico[0..6], &[0, 0, 1, 0, 7, 0]);
    }

    #[test]
    fn test_encode_entries_match_sizes() {
        let sizes = IconSizes::new([16, 48, 256]).unwrap();
        let ico = encode_png_to_ico(&png_bytes(100, 100), &sizes).unwrap();
        let dir = IconDir::read(Cursor::new(ico)).unwrap();
        let edges: Vec<(u32, u32)> = dir
            .entries()
            .iter()
            .map(|e| (e.width(), e.height()))
            .collect();
        assert_eq!(edges, vec![(16, 16), (48, 48), (256, 256)]);
    }

    #[test]
    fn test_square_canvas_centers_wide_image() {
        let wide = RgbaImage::from_pixel(40, 20, Rgba([0, 0, 255, 255]));
        let canvas = square_canvas(wide);
        assert_eq!(canvas.dimensions(), (40, 40));
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);
        assert_eq!(canvas.get_pixel(20, 20), &Rgba([0, 0, 255, 255]));
        assert_eq!(canvas.get_pixel(20, 39)[3], 0);
    }

    #[test]
    fn test_encode_rejects_non_png_bytes() {
        let err = encode_png_to_ico(b"definitely not a png", &IconSizes::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)));
    }
}
