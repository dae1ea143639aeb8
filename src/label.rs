use std::fmt;
use std::path::Path;

/// Class tag assigned to every image in the dataset.
///
/// The tag is derived from the image's file path, not from the enclosing
/// class directory: the pneumonia images carry their subtype in the file
/// name (`person3_virus_15.jpeg`, `person78_bacteria_382.jpeg`) while the
/// normal images (`IM-0001-0001.jpeg`) carry neither keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Virus,
    Bacteria,
    Normal,
}

impl Label {
    /// Infers the label from a file path.
    ///
    /// Matching is case-insensitive over the full path text, in fixed
    /// priority order: "virus" first, then "bacteria", else `Normal`.
    /// Total: every path maps to exactly one label.
    pub fn from_path(path: &Path) -> Self {
        let text = path.to_string_lossy().to_lowercase();
        if text.contains("virus") {
            Label::Virus
        } else if text.contains("bacteria") {
            Label::Bacteria
        } else {
            Label::Normal
        }
    }

    /// Returns the tag as it appears in the first CSV field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Virus => "virus",
            Label::Bacteria => "bacteria",
            Label::Normal => "normal",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
