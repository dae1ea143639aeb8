use crate::label::Label;
use crate::row::Row;
use crate::transforms::Transform;
use anyhow::{Context, Result};
use image::{io::Reader as ImageReader, DynamicImage};
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::PathBuf;

// ============================================================================
// LoadImage - Base image loader
// ============================================================================

/// Loads images from file paths.
///
/// The whole file is read through a buffered reader and the format is
/// guessed from the content, not the extension, since the dataset carries
/// no extension guarantee. The file handle is scoped to the read and released
/// before decoding.
///
/// # Input/Output
/// - **Input**: `PathBuf` - file path to image
/// - **Output**: `DynamicImage` - decoded image ready for processing
#[derive(Debug, Clone)]
pub struct LoadImage {
    buffer_size: usize,
}

impl LoadImage {
    /// Creates a new image loader with an 8KB read buffer.
    pub fn new() -> Self {
        Self { buffer_size: 8192 }
    }
}

impl Default for LoadImage {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform<PathBuf, DynamicImage> for LoadImage {
    fn apply(&self, path: PathBuf) -> Result<DynamicImage> {
        let buffer = {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open image: {}", path.display()))?;
            let file_size = file.metadata()?.len() as usize;
            let mut reader = BufReader::with_capacity(self.buffer_size, file);
            let mut buffer = Vec::with_capacity(file_size);
            reader
                .read_to_end(&mut buffer)
                .with_context(|| format!("Failed to read image: {}", path.display()))?;
            buffer
        };

        let image = ImageReader::new(Cursor::new(buffer))
            .with_guessed_format()?
            .decode()
            .with_context(|| format!("Failed to decode image: {}", path.display()))?;

        Ok(image)
    }
}

// ============================================================================
// LoadImageToRow
// ============================================================================

/// Loads images from file paths and converts them to dataset `Row`s.
///
/// Combines the per-image steps into a single operation:
/// 1. Infers the class label from the file path text
/// 2. Loads the image using the [`LoadImage`] transform
/// 3. Applies the pixel pipeline (greyscale → resize → flatten)
/// 4. Assembles a `Row` with the label prepended to the pixel vector
///
/// # Type Parameters
/// - `T`: pixel pipeline converting `DynamicImage` -> `Vec<u8>`
///
/// # Example
/// ```ignore
/// let pipeline = ToGrayscale
///     .then(Resize::new(128, 128, FilterType::Triangle)?)
///     .then(FlattenPixels);
/// let loader = LoadImageToRow::new(pipeline);
///
/// let row = loader.apply(PathBuf::from("train/PNEUMONIA/person1_virus_6.jpeg"))?;
/// assert_eq!(row.label, Label::Virus);
/// assert_eq!(row.pixels.len(), 128 * 128);
/// ```
#[derive(Debug, Clone)]
pub struct LoadImageToRow<T> {
    image_loader: LoadImage,
    pixel_pipeline: T,
}

impl<T> LoadImageToRow<T> {
    pub fn new(pixel_pipeline: T) -> Self {
        Self {
            image_loader: LoadImage::new(),
            pixel_pipeline,
        }
    }
}

impl<T> Transform<PathBuf, Row> for LoadImageToRow<T>
where
    T: Transform<DynamicImage, Vec<u8>>,
{
    fn apply(&self, path: PathBuf) -> Result<Row> {
        let label = Label::from_path(&path);

        let image = self
            .image_loader
            .apply(path.clone())
            .with_context(|| format!("Failed to load image: {}", path.display()))?;

        let pixels = self
            .pixel_pipeline
            .apply(image)
            .with_context(|| format!("Failed to transform image: {}", path.display()))?;

        Ok(Row::new(label, pixels))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::vision::{FlattenPixels, Resize, ToGrayscale};
    use image::{imageops::FilterType, GenericImageView, GrayImage, Luma};
    use std::fs;
    use tempfile::tempdir;

    fn write_test_image(path: &std::path::Path, width: u32, height: u32, value: u8) -> Result<()> {
        let img = GrayImage::from_pixel(width, height, Luma([value]));
        // Always PNG content, whatever the file name says: the loader must
        // guess the format from the bytes, and PNG keeps pixel values exact.
        DynamicImage::ImageLuma8(img).save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }

    #[test]
    fn test_load_image() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("IM-0001.jpeg");
        write_test_image(&path, 4, 3, 99)?;

        let loaded = LoadImage::new().apply(path)?;
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(loaded.to_luma8().get_pixel(0, 0), &Luma([99]));
        Ok(())
    }

    #[test]
    fn test_load_image_to_row() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("person1_virus_6.jpeg");
        write_test_image(&path, 64, 64, 150)?;

        let pipeline = ToGrayscale
            .then(Resize::new(16, 16, FilterType::Triangle)?)
            .then(FlattenPixels);
        let loader = LoadImageToRow::new(pipeline);

        let row = loader.apply(path)?;
        assert_eq!(row.label, Label::Virus);
        assert_eq!(row.pixels.len(), 16 * 16);
        // Solid input stays solid through resize.
        assert!(row.pixels.iter().all(|&p| p == 150));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let loader = LoadImage::new();
        assert!(loader.apply(PathBuf::from("nonexistent.jpg")).is_err());
    }

    #[test]
    fn test_undecodable_file_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("notes.jpeg");
        fs::write(&path, b"this is not an image")?;

        let result = LoadImage::new().apply(path.clone());
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains(&path.display().to_string()));
        Ok(())
    }
}
