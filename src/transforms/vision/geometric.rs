use crate::transforms::Transform;
use anyhow::{ensure, Result};
use image::{imageops::FilterType, DynamicImage};

// ============================================================================
// Resize
// ============================================================================

/// Resizes an image to exactly the specified dimensions.
///
/// The aspect ratio is *not* preserved: every output row must have the same
/// fixed pixel count, so the image is stretched to the target if needed.
/// Users must specify the filter type.
///
/// # Filter Types
/// - `Nearest`: nearest neighbour, fastest
/// - `Triangle`: bilinear filter, good all-round default
/// - `CatmullRom`: bicubic sharpening
/// - `Lanczos3`: highest quality re-sampling but slowest
///
/// # Example
/// ```ignore
/// # use image::imageops::FilterType;
/// let resize = Resize::new(128, 128, FilterType::Triangle)?;
/// let resized = resize.apply(img)?;
/// ```
#[derive(Debug)]
pub struct Resize {
    width: u32,
    height: u32,
    filter: FilterType,
}

impl Resize {
    /// Creates a new Resize transform.
    pub fn new(width: u32, height: u32, filter: FilterType) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "Image dimensions must be positive after resizing (got {}x{})",
            width,
            height
        );
        Ok(Self {
            width,
            height,
            filter,
        })
    }
}

impl Transform<DynamicImage, DynamicImage> for Resize {
    fn apply(&self, img: DynamicImage) -> Result<DynamicImage> {
        Ok(img.resize_exact(self.width, self.height, self.filter))
    }
}
