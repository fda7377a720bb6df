use serde::{Deserialize, Serialize};

/// A folder selected through a platform folder picker.
///
/// Pure data counterpart of [`PickedFile`](crate::PickedFile): no
/// stream, no lifecycle, no invariants beyond value storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickedFolder {
    /// Display name of the folder, without the path.
    pub name: String,
    /// Full path or platform URI of the folder.
    pub path: String,
}

impl PickedFolder {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
