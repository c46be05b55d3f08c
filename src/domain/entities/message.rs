use chrono::NaiveDateTime;

/// Kind of media a message references, classified by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
}

impl MediaKind {
    pub fn from_filename(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" => Some(MediaKind::Image),
            "mp4" | "mov" | "avi" => Some(MediaKind::Video),
            "opus" | "mp3" | "m4a" | "ogg" | "wav" => Some(MediaKind::Audio),
            "pdf" => Some(MediaKind::Document),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Document => "document",
        }
    }
}

/// A single transcript message, ordered by appearance in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Gregorian timestamp (Buddhist-era year already corrected)
    pub timestamp: NaiveDateTime,
    pub sender: String,
    pub content: String,
}

impl Message {
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            content: content.into(),
        }
    }

    /// Filename of the attached media, if the content is a media reference.
    ///
    /// Two forms are recognized: a bracketed `<attached: file>` marker, and a
    /// bare filename whose extension names a known media kind.
    pub fn media_reference(&self) -> Option<&str> {
        let content = self.content.trim();
        if let Some(rest) = content.strip_prefix("<attached:") {
            if let Some(name) = rest.strip_suffix('>') {
                return Some(name.trim());
            }
        }
        if !content.contains(char::is_whitespace) && MediaKind::from_filename(content).is_some() {
            return Some(content);
        }
        None
    }
}
