use crate::transforms::Transform;
use anyhow::{ensure, Result};
use image::{DynamicImage, GenericImageView};

// ============================================================================
// ToGrayscale
// ============================================================================

/// Converts any decoded image to single-channel 8-bit greyscale.
///
/// Already-greyscale images pass through unchanged; RGB/RGBA and other
/// layouts are reduced via the standard luma weighting.
#[derive(Debug)]
pub struct ToGrayscale;

impl Transform<DynamicImage, DynamicImage> for ToGrayscale {
    fn apply(&self, img: DynamicImage) -> Result<DynamicImage> {
        Ok(match img {
            DynamicImage::ImageLuma8(_) => img,
            _ => DynamicImage::ImageLuma8(img.into_luma8()),
        })
    }
}

// ============================================================================
// FlattenPixels
// ============================================================================

/// Flattens a greyscale image into a 1-D pixel vector in row-major order.
///
/// The output length is always `width * height`. Non-greyscale inputs are
/// reduced to luma first, so chaining after [`ToGrayscale`](super::ToGrayscale)
/// makes that step a no-op here.
#[derive(Debug)]
pub struct FlattenPixels;

impl Transform<DynamicImage, Vec<u8>> for FlattenPixels {
    fn apply(&self, img: DynamicImage) -> Result<Vec<u8>> {
        let (width, height) = img.dimensions();
        ensure!(
            width > 0 && height > 0,
            "Image dimensions must be positive (got {}x{})",
            width,
            height
        );

        let pixels = match img {
            DynamicImage::ImageLuma8(img) => img.into_raw(),
            _ => img.into_luma8().into_raw(),
        };
        Ok(pixels)
    }
}
