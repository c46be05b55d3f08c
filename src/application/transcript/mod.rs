//! Transcript parsing - segmentation and timestamp normalization

pub mod parser;

pub use parser::{SkippedChunk, Transcript, TranscriptParser};
