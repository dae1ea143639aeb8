//! Vision transforms for turning image files into flat pixel rows.
//!
//! # Module Organization
//!
//! ```text
//! transforms/vision/
//! ├── geometric.rs     → spatial transformations (exact resize)
//! ├── conversion.rs    → format conversions (greyscale, flatten)
//! └── io.rs            → image loading, path → row assembly
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::transforms::Transform;
//! use crate::transforms::vision::{FlattenPixels, LoadImageToRow, Resize, ToGrayscale};
//! use image::imageops::FilterType;
//!
//! let pipeline = ToGrayscale
//!     .then(Resize::new(128, 128, FilterType::Triangle)?)
//!     .then(FlattenPixels);
//! let loader = LoadImageToRow::new(pipeline);
//! let row = loader.apply(path)?;
//! ```

pub mod conversion;
pub mod geometric;
pub mod io;

pub use conversion::{FlattenPixels, ToGrayscale};
pub use geometric::Resize;
pub use io::{LoadImage, LoadImageToRow};
