//! Launch and media entry models.
//!
//! Entries are owned by exactly one user and are only ever replaced as part of
//! their owning list. The serialized field names are camelCase; legacy names
//! written by the earlier web build (`type`, `isFile`, `canViewInSite`) are
//! accepted on read so old flat-key data imports unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LaunchdeckError;

/// Generates a fresh entry identifier.
///
/// Identifiers are random UUIDv4 strings, so rapid successive inserts never
/// collide. Identifiers loaded from older data are kept as opaque strings.
#[must_use]
pub fn new_entry_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// How a launch entry is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchKind {
    /// A navigable URI, including custom application schemes like `steam://`.
    #[default]
    Link,
    /// A local path or an uploaded executable.
    Local,
}

impl fmt::Display for LaunchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link => f.write_str("link"),
            Self::Local => f.write_str("local"),
        }
    }
}

impl FromStr for LaunchKind {
    type Err = LaunchdeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "link" => Ok(Self::Link),
            "local" => Ok(Self::Local),
            other => Err(LaunchdeckError::Validation(format!(
                "unknown launch kind '{other}' (expected link or local)"
            ))),
        }
    }
}

/// Category of a media entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Document,
    Image,
    Video,
}

impl MediaKind {
    /// Returns `true` for kinds that can be rendered inline (images and videos).
    #[must_use]
    pub const fn is_visual(self) -> bool {
        matches!(self, Self::Image | Self::Video)
    }

    /// Infers the category from a declared media type such as `image/png`.
    ///
    /// `image/*` maps to [`MediaKind::Image`], `video/*` to [`MediaKind::Video`],
    /// everything else to [`MediaKind::Document`].
    ///
    /// ```
    /// use launchdeck::domain::MediaKind;
    ///
    /// assert_eq!(MediaKind::from_media_type("image/png"), MediaKind::Image);
    /// assert_eq!(MediaKind::from_media_type("video/mp4"), MediaKind::Video);
    /// assert_eq!(MediaKind::from_media_type("application/pdf"), MediaKind::Document);
    /// ```
    #[must_use]
    pub fn from_media_type(media_type: &str) -> Self {
        if media_type.starts_with("image/") {
            Self::Image
        } else if media_type.starts_with("video/") {
            Self::Video
        } else {
            Self::Document
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => f.write_str("document"),
            Self::Image => f.write_str("image"),
            Self::Video => f.write_str("video"),
        }
    }
}

impl FromStr for MediaKind {
    type Err = LaunchdeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "document" => Ok(Self::Document),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            other => Err(LaunchdeckError::Validation(format!(
                "unknown media kind '{other}' (expected document, image or video)"
            ))),
        }
    }
}

/// A user-added shortcut to an external application ("game").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchEntry {
    pub id: String,
    pub name: String,

    /// Navigable URI, or a `data:` URI when the entry was uploaded as a file.
    pub url: String,

    #[serde(alias = "type", default)]
    pub kind: LaunchKind,

    #[serde(alias = "isFile", default)]
    pub is_embedded_file: bool,
}

/// A user-added document, image or video reference ("file").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEntry {
    pub id: String,
    pub name: String,
    pub url: String,

    #[serde(alias = "type")]
    pub kind: MediaKind,

    #[serde(alias = "canViewInSite", default)]
    pub viewable_inline: bool,
}

impl MediaEntry {
    /// Whether the entry should be shown inline.
    ///
    /// The stored flag is only honored for images and videos.
    #[must_use]
    pub const fn can_view_inline(&self) -> bool {
        self.viewable_inline && self.kind.is_visual()
    }
}
