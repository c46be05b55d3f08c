//! Media resolution and external transcoding

use std::path::Path;
use std::process::Command;

use crate::application::errors::MediaError;
use crate::domain::entities::MediaKind;
use crate::domain::traits::Transcoder;

/// A media reference mapped to a displayable asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMedia {
    /// Path relative to the generated page, usable as a src/href
    pub href: String,
    /// None when the extension is unknown; rendered as a plain link
    pub kind: Option<MediaKind>,
}

/// Invokes an external command (ffmpeg by default) to convert audio files
pub struct FfmpegTranscoder {
    command: String,
}

impl FfmpegTranscoder {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Transcoder for FfmpegTranscoder {
    fn transcode(&self, source: &Path, dest: &Path) -> Result<(), MediaError> {
        let status = Command::new(&self.command)
            .arg("-i")
            .arg(source)
            .arg(dest)
            .status()?;
        if status.success() {
            tracing::info!("Converted {} to {}", source.display(), dest.display());
            Ok(())
        } else {
            Err(MediaError::TranscoderFailure {
                command: self.command.clone(),
                status,
            })
        }
    }
}

/// Maps referenced filenames to displayable assets, transcoding audio
/// formats browsers refuse to play
pub struct MediaResolver<'a, T: Transcoder> {
    media_dir: &'a Path,
    transcoder: &'a T,
    convert_audio: bool,
}

impl<'a, T: Transcoder> MediaResolver<'a, T> {
    pub fn new(media_dir: &'a Path, transcoder: &'a T, convert_audio: bool) -> Self {
        Self {
            media_dir,
            transcoder,
            convert_audio,
        }
    }

    /// Resolve one referenced filename.
    ///
    /// Opus audio is transcoded to mp3 next to the source; if the mp3 is
    /// already there the transcoder is not invoked again. A transcoder
    /// failure is reported and the mp3 reference kept, so the page points at
    /// whatever the command managed to produce. Single attempt, no retries.
    pub fn resolve(&self, filename: &str) -> ResolvedMedia {
        if self.convert_audio && filename.to_ascii_lowercase().ends_with(".opus") {
            let derived = Path::new(filename).with_extension("mp3");
            let dest = self.media_dir.join(&derived);
            if !dest.exists() {
                let source = self.media_dir.join(filename);
                if let Err(e) = self.transcoder.transcode(&source, &dest) {
                    tracing::error!("Error converting {}: {}", filename, e);
                }
            }
            return ResolvedMedia {
                href: derived.to_string_lossy().into_owned(),
                kind: Some(MediaKind::Audio),
            };
        }
        ResolvedMedia {
            href: filename.to_string(),
            kind: MediaKind::from_filename(filename),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;
    use std::io;

    /// Writes the destination file and counts invocations
    struct CountingTranscoder {
        calls: Cell<usize>,
    }

    impl CountingTranscoder {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl Transcoder for CountingTranscoder {
        fn transcode(&self, _source: &Path, dest: &Path) -> Result<(), MediaError> {
            self.calls.set(self.calls.get() + 1);
            fs::write(dest, b"mp3")?;
            Ok(())
        }
    }

    /// Always fails without producing output
    struct BrokenTranscoder;

    impl Transcoder for BrokenTranscoder {
        fn transcode(&self, _source: &Path, _dest: &Path) -> Result<(), MediaError> {
            Err(MediaError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "no such command",
            )))
        }
    }

    #[test]
    fn opus_is_transcoded_once() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("note.opus"), b"opus").unwrap();

        let transcoder = CountingTranscoder::new();
        let resolver = MediaResolver::new(dir.path(), &transcoder, true);

        let first = resolver.resolve("note.opus");
        let second = resolver.resolve("note.opus");

        assert_eq!(transcoder.calls.get(), 1);
        assert_eq!(first.href, "note.mp3");
        assert_eq!(first.kind, Some(MediaKind::Audio));
        assert_eq!(second, first);
    }

    #[test]
    fn transcoder_failure_keeps_the_derived_reference() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("note.opus"), b"opus").unwrap();

        let resolver = MediaResolver::new(dir.path(), &BrokenTranscoder, true);
        let resolved = resolver.resolve("note.opus");

        assert_eq!(resolved.href, "note.mp3");
        assert!(!dir.path().join("note.mp3").exists());
    }

    #[test]
    fn conversion_disabled_keeps_the_original_reference() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = MediaResolver::new(dir.path(), &BrokenTranscoder, false);
        let resolved = resolver.resolve("note.opus");
        assert_eq!(resolved.href, "note.opus");
        assert_eq!(resolved.kind, Some(MediaKind::Audio));
    }

    #[test]
    fn non_audio_references_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        let transcoder = CountingTranscoder::new();
        let resolver = MediaResolver::new(dir.path(), &transcoder, true);

        let photo = resolver.resolve("photo.jpg");
        assert_eq!(photo.href, "photo.jpg");
        assert_eq!(photo.kind, Some(MediaKind::Image));

        let other = resolver.resolve("notes.txt");
        assert_eq!(other.kind, None);
        assert_eq!(transcoder.calls.get(), 0);
    }
}
