//! Media assets attached to posts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of media asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Still image
    #[default]
    Image,
    /// Video clip
    Video,
    /// Animated GIF
    Gif,
    /// Document attachment (PDF and similar)
    Document,
}

impl MediaType {
    /// Returns true for kinds that carry pixel dimensions.
    #[must_use]
    pub const fn has_dimensions(self) -> bool {
        matches!(self, Self::Image | Self::Video | Self::Gif)
    }

    /// Returns true for kinds that carry a playback duration.
    #[must_use]
    pub const fn has_duration(self) -> bool {
        matches!(self, Self::Video | Self::Gif)
    }
}

/// An uploaded media asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Backend-assigned identifier.
    pub id: String,
    /// Public URL of the asset.
    pub url: String,
    /// Kind of asset.
    #[serde(rename = "type")]
    pub kind: MediaType,
    /// Original filename at upload time.
    pub filename: String,
    /// MIME type reported at upload time.
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
    /// Pixel width, for visual kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Pixel height, for visual kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Playback duration in seconds, for timed kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Preview image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Alternative text for accessibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Free-form labels.
    #[serde(default)]
    pub tags: Vec<String>,
    /// When the asset was uploaded.
    pub created_at: DateTime<Utc>,
}

impl Media {
    /// Creates a new asset record with the current timestamp.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        url: impl Into<String>,
        kind: MediaType,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            kind,
            filename: filename.into(),
            mime_type: mime_type.into(),
            size,
            width: None,
            height: None,
            duration: None,
            thumbnail_url: None,
            alt: None,
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Sets the pixel dimensions.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Sets the playback duration in seconds.
    #[must_use]
    pub const fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Width divided by height, when both dimensions are known.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if h > 0 => Some(f64::from(w) / f64::from(h)),
            _ => None,
        }
    }

    /// Returns a human-readable size string (e.g., "1.2 KB").
    #[must_use]
    pub fn size_display(&self) -> String {
        format_bytes(self.size)
    }
}

/// Formats bytes into a human-readable string.
fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    #[allow(clippy::cast_precision_loss)]
    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_applicability() {
        assert!(MediaType::Image.has_dimensions());
        assert!(!MediaType::Image.has_duration());
        assert!(MediaType::Video.has_duration());
        assert!(!MediaType::Document.has_dimensions());
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1_048_576), "1.00 MB");
        assert_eq!(format_bytes(1_073_741_824), "1.00 GB");
    }

    #[test]
    fn test_aspect_ratio() {
        let media = Media::new("m1", "https://cdn.example.com/a.jpg", MediaType::Image, "a.jpg", "image/jpeg", 2048)
            .with_dimensions(1920, 1080);

        let ratio = media.aspect_ratio().unwrap();
        assert!((ratio - 16.0 / 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_aspect_ratio_requires_both_dimensions() {
        let media = Media::new("m1", "https://cdn.example.com/a.pdf", MediaType::Document, "a.pdf", "application/pdf", 2048);
        assert_eq!(media.aspect_ratio(), None);
    }

    #[test]
    fn test_media_wire_shape() {
        let media = Media::new("m1", "https://cdn.example.com/clip.mp4", MediaType::Video, "clip.mp4", "video/mp4", 4096)
            .with_dimensions(1280, 720)
            .with_duration(12.5);

        let json = serde_json::to_value(&media).unwrap();
        assert_eq!(json["type"], "video");
        assert_eq!(json["mimeType"], "video/mp4");
        assert_eq!(json["duration"], 12.5);
        assert!(json.get("thumbnailUrl").is_none());
    }
}
