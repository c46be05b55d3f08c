use std::path::Path;

use crate::application::errors::MediaError;

/// External media transcoder (ffmpeg in production).
///
/// A single blocking attempt; callers decide what a failure means.
pub trait Transcoder {
    /// Produce `dest` from `source`.
    fn transcode(&self, source: &Path, dest: &Path) -> Result<(), MediaError>;
}
