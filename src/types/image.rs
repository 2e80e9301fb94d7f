//! In-memory image payloads accepted by the workbench.

use std::sync::Arc;

/// An image queued for classification: name, declared MIME type, raw bytes.
///
/// The workbench trusts the declared MIME type for intake filtering; the
/// backend is the authority on whether the bytes actually decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Whether the declared MIME type marks this file as an image.
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Client-side preview resource for a selected image.
///
/// Ownership is the release discipline: the handle is dropped on every path
/// that discards a preview (replacement, reset, controller teardown).
#[derive(Debug, Clone)]
pub struct Preview {
    content_type: String,
    data: Arc<[u8]>,
}

impl Preview {
    pub(crate) fn of(file: &ImageFile) -> Self {
        Self {
            content_type: file.content_type.clone(),
            data: Arc::from(file.bytes.as_slice()),
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_mime_types_are_accepted() {
        let png = ImageFile::new("scan.png", "image/png", vec![1, 2, 3]);
        let jpeg = ImageFile::new("scan.jpg", "image/jpeg", vec![1, 2, 3]);
        assert!(png.is_image());
        assert!(jpeg.is_image());
    }

    #[test]
    fn non_image_mime_types_are_rejected() {
        let pdf = ImageFile::new("report.pdf", "application/pdf", vec![1]);
        let empty = ImageFile::new("mystery", "", vec![1]);
        assert!(!pdf.is_image());
        assert!(!empty.is_image());
    }

    #[test]
    fn preview_carries_the_file_contents() {
        let file = ImageFile::new("scan.png", "image/png", vec![9, 8, 7]);
        let preview = Preview::of(&file);
        assert_eq!(preview.content_type(), "image/png");
        assert_eq!(preview.data(), &[9, 8, 7]);
    }
}
