pub mod transcoder;

pub use transcoder::Transcoder;
