use std::path::{Path, PathBuf};

/// One dataset partition: a source directory and its destination CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub name: String,
    pub source_dir: PathBuf,
    pub output_file: PathBuf,
}

impl Split {
    fn new(name: &str, data_root: &Path, output_root: &Path) -> Self {
        Self {
            name: name.to_string(),
            source_dir: data_root.join(name),
            output_file: output_root.join(format!("{}.csv", name)),
        }
    }
}

/// Conversion parameters, passed explicitly into the driver.
///
/// Defaults reproduce the dataset's conventional layout: images under
/// `DataFiles/chest_xray/{test,train}` and CSV output under
/// `DataFiles/chest_xray/csv_format`.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub data_root: PathBuf,
    pub output_root: PathBuf,
    /// Images are resized to `resolution x resolution` greyscale.
    pub resolution: u32,
}

impl ConvertConfig {
    pub fn new(data_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>, resolution: u32) -> Self {
        Self {
            data_root: data_root.into(),
            output_root: output_root.into(),
            resolution,
        }
    }

    /// The splits to convert, in processing order: test first, then train.
    pub fn splits(&self) -> Vec<Split> {
        ["test", "train"]
            .iter()
            .map(|name| Split::new(name, &self.data_root, &self.output_root))
            .collect()
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        let data_root = PathBuf::from("DataFiles/chest_xray");
        let output_root = data_root.join("csv_format");
        Self {
            data_root,
            output_root,
            resolution: 128,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reproduces_dataset_layout() {
        let config = ConvertConfig::default();
        assert_eq!(config.data_root, PathBuf::from("DataFiles/chest_xray"));
        assert_eq!(
            config.output_root,
            PathBuf::from("DataFiles/chest_xray/csv_format")
        );
        assert_eq!(config.resolution, 128);
    }

    #[test]
    fn test_splits_order_and_paths() {
        let config = ConvertConfig::new("data", "out", 128);
        let splits = config.splits();

        assert_eq!(splits.len(), 2);
        assert_eq!(splits[0].name, "test");
        assert_eq!(splits[0].source_dir, PathBuf::from("data/test"));
        assert_eq!(splits[0].output_file, PathBuf::from("out/test.csv"));
        assert_eq!(splits[1].name, "train");
        assert_eq!(splits[1].source_dir, PathBuf::from("data/train"));
        assert_eq!(splits[1].output_file, PathBuf::from("out/train.csv"));
    }
}
