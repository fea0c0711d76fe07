//! File categories accepted by the CV intake and certificate forms.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Size shown next to the certificate picker. Advisory only.
pub const CERTIFICATE_MAX_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadCategory {
    Document,
    Image,
    Video,
}

impl UploadCategory {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            UploadCategory::Document => &["pdf", "doc", "docx"],
            UploadCategory::Image => &["jpg", "jpeg", "png"],
            UploadCategory::Video => &["webm"],
        }
    }

    pub fn mime_types(self) -> &'static [&'static str] {
        match self {
            UploadCategory::Document => &[
                "application/pdf",
                "application/msword",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ],
            UploadCategory::Image => &["image/jpeg", "image/png"],
            UploadCategory::Video => &["video/webm"],
        }
    }

    /// Classify by file extension (case-insensitive).
    pub fn from_file_name(name: &str) -> Option<UploadCategory> {
        let ext = Path::new(name).extension()?.to_str()?.to_lowercase();
        [Self::Document, Self::Image, Self::Video]
            .into_iter()
            .find(|category| category.extensions().contains(&ext.as_str()))
    }

    /// Classify by MIME type, ignoring parameters such as `;codecs=vp9`.
    pub fn from_mime(mime: &str) -> Option<UploadCategory> {
        let essence = mime.split(';').next()?.trim().to_lowercase();
        [Self::Document, Self::Image, Self::Video]
            .into_iter()
            .find(|category| category.mime_types().contains(&essence.as_str()))
    }
}

/// Result of checking a file against an upload slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCheck {
    pub category: Option<UploadCategory>,
    pub accepted: bool,
    /// Set when the file exceeds the displayed limit. Never blocks the upload.
    pub size_warning: Option<String>,
}

/// Check a file for a slot that accepts `allowed` categories.
pub fn check_upload(
    file_name: &str,
    size_bytes: u64,
    allowed: &[UploadCategory],
    advisory_max_bytes: Option<u64>,
) -> UploadCheck {
    let category = UploadCategory::from_file_name(file_name);
    let accepted = category.is_some_and(|c| allowed.contains(&c));
    let size_warning = advisory_max_bytes
        .filter(|max| size_bytes > *max)
        .map(|max| {
            format!(
                "{file_name} is {:.1} MB, above the recommended {} MB",
                size_bytes as f64 / (1024.0 * 1024.0),
                max / (1024 * 1024)
            )
        });
    UploadCheck {
        category,
        accepted,
        size_warning,
    }
}
