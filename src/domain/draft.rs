//! Add-entry drafts, presence validation and file-to-entry conversion.
//!
//! A draft is what the presentation layer collects before an entry exists: a
//! name plus either a url or an attached file. Converting a draft validates the
//! required fields, assigns a fresh identifier and, for uploads, embeds the file
//! content as a `data:` URI.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use std::path::Path;

use super::entry::{new_entry_id, LaunchEntry, LaunchKind, MediaEntry, MediaKind};
use super::error::{LaunchdeckError, Result};

/// Media type used when a file's extension is not recognised.
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Extension to media type table used by [`FilePayload::read`].
const EXTENSION_MEDIA_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
    ("bmp", "image/bmp"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    ("mov", "video/quicktime"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("json", "application/json"),
    ("html", "text/html"),
    ("zip", "application/zip"),
    ("exe", "application/vnd.microsoft.portable-executable"),
];

/// A user-selected file, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    /// File name as chosen by the user, without directories.
    pub file_name: String,

    /// Declared media type, e.g. `image/png`.
    pub media_type: String,

    pub bytes: Vec<u8>,
}

impl FilePayload {
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk, inferring its media type from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchdeckError::Io`] if the file cannot be read.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("read_file_payload", path = ?path).entered();

        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let media_type = media_type_for_path(path);

        tracing::debug!(size = bytes.len(), media_type, "file payload read");
        Ok(Self::new(file_name, media_type, bytes))
    }

    /// Encodes the content as `data:<media-type>;base64,<payload>`.
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        let media_type = if self.media_type.is_empty() {
            FALLBACK_MEDIA_TYPE
        } else {
            self.media_type.as_str()
        };
        format!("data:{media_type};base64,{}", BASE64_STANDARD.encode(&self.bytes))
    }

    #[must_use]
    pub fn media_kind(&self) -> MediaKind {
        MediaKind::from_media_type(&self.media_type)
    }
}

fn media_type_for_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return FALLBACK_MEDIA_TYPE;
    };
    let ext = ext.to_ascii_lowercase();

    EXTENSION_MEDIA_TYPES
        .iter()
        .find(|(known, _)| *known == ext.as_str())
        .map_or(FALLBACK_MEDIA_TYPE, |&(_, media_type)| media_type)
}

fn require_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LaunchdeckError::Validation("name is required".to_string()));
    }
    Ok(name.to_string())
}

fn name_or_file_name(name: &str, file: &FilePayload) -> Result<String> {
    if name.trim().is_empty() {
        require_name(&file.file_name)
    } else {
        require_name(name)
    }
}

fn require_url(url: &str) -> Result<String> {
    let url = url.trim();
    if url.is_empty() {
        return Err(LaunchdeckError::Validation(
            "either a url or a file is required".to_string(),
        ));
    }
    Ok(url.to_string())
}

/// Input for a new launch entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchDraft {
    pub name: String,
    pub url: String,
    pub kind: LaunchKind,

    /// When set, takes precedence over `url`.
    pub file: Option<FilePayload>,
}

impl LaunchDraft {
    /// Draft pointing at a url or custom scheme.
    pub fn link(name: impl Into<String>, url: impl Into<String>, kind: LaunchKind) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            kind,
            file: None,
        }
    }

    /// Draft carrying an uploaded file.
    pub fn upload(name: impl Into<String>, file: FilePayload, kind: LaunchKind) -> Self {
        Self {
            name: name.into(),
            url: String::new(),
            kind,
            file: Some(file),
        }
    }

    /// Validates the draft and builds the entry with a fresh identifier.
    ///
    /// A blank name on an upload falls back to the file name.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchdeckError::Validation`] if no name can be found, or if
    /// there is neither a non-blank url nor an attached file.
    pub fn into_entry(self) -> Result<LaunchEntry> {
        let (name, url, is_embedded_file) = match self.file {
            Some(file) => (
                name_or_file_name(&self.name, &file)?,
                file.to_data_uri(),
                true,
            ),
            None => (require_name(&self.name)?, require_url(&self.url)?, false),
        };

        Ok(LaunchEntry {
            id: new_entry_id(),
            name,
            url,
            kind: self.kind,
            is_embedded_file,
        })
    }
}

/// Input for a new media entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDraft {
    pub name: String,
    pub url: String,
    pub kind: MediaKind,
    pub viewable_inline: bool,

    /// When set, replaces `url`.
    pub file: Option<FilePayload>,
}

impl MediaDraft {
    pub fn link(
        name: impl Into<String>,
        url: impl Into<String>,
        kind: MediaKind,
        viewable_inline: bool,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            kind,
            viewable_inline,
            file: None,
        }
    }

    /// Draft carrying an uploaded file.
    ///
    /// Kind and inline flag default from the file's media type; both fields can
    /// be changed before [`into_entry`](Self::into_entry). A blank name falls
    /// back to the file name.
    pub fn upload(name: impl Into<String>, file: FilePayload) -> Self {
        let kind = file.media_kind();
        Self {
            name: name.into(),
            url: String::new(),
            kind,
            viewable_inline: kind.is_visual(),
            file: Some(file),
        }
    }

    /// Validates the draft and builds the entry with a fresh identifier.
    ///
    /// Document entries are always stored with `viewable_inline = false`.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchdeckError::Validation`] if no name can be found, or if
    /// there is neither a url nor a file.
    pub fn into_entry(self) -> Result<MediaEntry> {
        let (name, url) = match self.file {
            Some(file) => (name_or_file_name(&self.name, &file)?, file.to_data_uri()),
            None => (require_name(&self.name)?, require_url(&self.url)?),
        };

        Ok(MediaEntry {
            id: new_entry_id(),
            name,
            url,
            kind: self.kind,
            viewable_inline: self.viewable_inline && self.kind.is_visual(),
        })
    }
}
