use crate::dataset::DataSource;
use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Streams image file paths from a split directory laid out as
/// `<split>/<class-dir>/<image-file>`.
///
/// Only regular files exactly two levels below the split root are yielded:
/// non-directory entries at the root level are skipped, and nothing deeper
/// than the class directories is descended into. The class directory names
/// are not consumed here; labels are re-derived from the file path by the
/// row loader. No extension filtering is applied; every file found is
/// expected to decode as an image.
///
/// # Example
/// ```ignore
/// let source = ClassDirSource::new("DataFiles/chest_xray/train");
/// for path in source.stream()? {
///     let row = loader.apply(path?)?;
/// }
/// ```
pub struct ClassDirSource {
    split_dir: PathBuf,
}

impl ClassDirSource {
    /// Creates a new source over a split directory.
    pub fn new(split_dir: impl Into<PathBuf>) -> Self {
        Self {
            split_dir: split_dir.into(),
        }
    }
}

impl DataSource<PathBuf> for ClassDirSource {
    fn stream(&self) -> Result<Box<dyn Iterator<Item = Result<PathBuf>> + Send>> {
        // Early validation: the split root must exist and be a directory.
        let metadata = fs::metadata(&self.split_dir).with_context(|| {
            format!("Failed to access split directory: {}", self.split_dir.display())
        })?;
        if !metadata.is_dir() {
            bail!("Path is not a directory: {}", self.split_dir.display());
        }

        // min_depth(2) skips root-level entries (files there are not part of
        // any class), max_depth(2) stops at the class directories' contents.
        // Entries are sorted by file name so that two runs over unchanged
        // input enumerate, and therefore write, in identical order.
        let iter = WalkDir::new(&self.split_dir)
            .min_depth(2)
            .max_depth(2)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() {
                        Some(Ok(entry.into_path()))
                    } else {
                        None
                    }
                }
                Err(e) => Some(Err(anyhow!("Failed to read directory entry: {}", e))),
            });

        Ok(Box::new(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_two_level_walk() -> Result<()> {
        let dir = tempdir()?;
        let d = dir.path();

        // split/
        //   NORMAL/      -> 2 files
        //   PNEUMONIA/   -> 1 file + 1 nested dir (not descended into)
        //   stray.txt    -> root-level file, skipped
        fs::create_dir(d.join("NORMAL"))?;
        fs::create_dir(d.join("PNEUMONIA"))?;
        fs::create_dir(d.join("PNEUMONIA").join("nested"))?;
        File::create(d.join("NORMAL").join("IM-0001.jpeg"))?;
        File::create(d.join("NORMAL").join("IM-0002.jpeg"))?;
        File::create(d.join("PNEUMONIA").join("person1_virus_6.jpeg"))?;
        File::create(d.join("PNEUMONIA").join("nested").join("deep.jpeg"))?;
        File::create(d.join("stray.txt"))?;

        let source = ClassDirSource::new(d);
        let files: Vec<_> = source.stream()?.collect::<Result<Vec<_>>>()?;

        assert_eq!(files.len(), 3, "only depth-2 regular files are yielded");
        assert!(files.iter().all(|p| p.is_file()));
        Ok(())
    }

    #[test]
    fn test_empty_class_dir_contributes_nothing() -> Result<()> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("NORMAL"))?;

        let source = ClassDirSource::new(dir.path());
        let files: Vec<_> = source.stream()?.collect::<Result<Vec<_>>>()?;
        assert!(files.is_empty());
        Ok(())
    }

    #[test]
    fn test_deterministic_order() -> Result<()> {
        let dir = tempdir()?;
        let d = dir.path();
        fs::create_dir(d.join("a"))?;
        fs::create_dir(d.join("b"))?;
        File::create(d.join("b").join("2.jpeg"))?;
        File::create(d.join("a").join("1.jpeg"))?;
        File::create(d.join("a").join("0.jpeg"))?;

        let source = ClassDirSource::new(d);
        let first: Vec<_> = source.stream()?.collect::<Result<Vec<_>>>()?;
        let second: Vec<_> = source.stream()?.collect::<Result<Vec<_>>>()?;

        assert_eq!(first, second);
        let names: Vec<_> = first
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["0.jpeg", "1.jpeg", "2.jpeg"]);
        Ok(())
    }

    #[test]
    fn test_missing_split_dir_is_an_error() {
        let source = ClassDirSource::new("does/not/exist");
        assert!(source.stream().is_err());
    }

    #[test]
    fn test_file_as_split_root_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("not_a_dir");
        File::create(&file)?;

        let source = ClassDirSource::new(&file);
        assert!(source.stream().is_err());
        Ok(())
    }
}
