use crate::config::{ConvertConfig, Split};
use crate::dataset::DataSource;
use crate::readers::ClassDirSource;
use crate::row::Row;
use crate::transforms::vision::{FlattenPixels, LoadImageToRow, Resize, ToGrayscale};
use crate::transforms::Transform;
use crate::writers::CsvSink;
use anyhow::{Context, Result};
use image::imageops::FilterType;
use std::fs;

/// Converts one split: walk its class directories, transform every image
/// into a row, then write all rows in a single pass.
///
/// Rows are fully collected in memory before the destination file is
/// opened, so a failure anywhere in the read/transform phase leaves no
/// output file behind for this split. The first undecodable image aborts
/// the conversion.
pub fn convert_split(split: &Split, resolution: u32) -> Result<usize> {
    let pipeline = ToGrayscale
        .then(Resize::new(resolution, resolution, FilterType::Triangle)?)
        .then(FlattenPixels);
    let loader = LoadImageToRow::new(pipeline);

    let source = ClassDirSource::new(&split.source_dir);
    let mut rows: Vec<Row> = Vec::new();
    for path in source.stream().with_context(|| {
        format!("Failed to enumerate split '{}'", split.name)
    })? {
        let path = path?;
        log::debug!("converting {}", path.display());
        rows.push(loader.apply(path)?);
    }

    CsvSink::new(&split.output_file).write_rows(&rows)
}

/// Converts every split of the dataset, test first, then train.
///
/// The output root is created if absent. Each split is converted
/// independently; the first failure aborts the run.
pub fn run(config: &ConvertConfig) -> Result<()> {
    fs::create_dir_all(&config.output_root).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_root.display()
        )
    })?;

    for split in config.splits() {
        log::info!(
            "converting split '{}' from {}",
            split.name,
            split.source_dir.display()
        );
        let written = convert_split(&split, config.resolution)?;
        log::info!(
            "wrote {} rows to {}",
            written,
            split.output_file.display()
        );
    }

    Ok(())
}
