use serde::{Deserialize, Serialize};

/// Facts about a file the operator picked or dropped onto the upload area.
///
/// Captured once at selection time and never mutated; a new pick replaces the
/// whole value. The MIME type is whatever the browser declared for the file,
/// not the result of content sniffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSelection {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl FileSelection {
    pub fn new(
        name: impl Into<String>,
        size_bytes: u64,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }
}
