//! Conversion pipeline - stage, parse, resolve media, render, write

use std::path::PathBuf;

use crate::application::errors::ConvertError;
use crate::application::transcript::TranscriptParser;
use crate::domain::traits::Transcoder;
use crate::infrastructure::config::Config;
use crate::infrastructure::html::HtmlRenderer;
use crate::infrastructure::media::{MediaResolver, ResolvedMedia};
use crate::infrastructure::workspace;

/// Runs the whole export-to-page conversion as one linear pass
pub struct ConvertService<T: Transcoder> {
    config: Config,
    transcoder: T,
}

impl<T: Transcoder> ConvertService<T> {
    pub fn new(config: Config, transcoder: T) -> Self {
        Self { config, transcoder }
    }

    /// Stage the export, parse the transcript, resolve media references and
    /// write the page next to the copied media. Returns the page path.
    pub fn run(&self) -> Result<PathBuf, ConvertError> {
        let staged = workspace::stage(&self.config.input.directory, &self.config.output.directory)?;
        let chat_path = staged.join(&self.config.input.chat_file);
        let text = std::fs::read_to_string(&chat_path)?;

        let transcript = TranscriptParser::new().parse(&text);
        tracing::info!(
            "Parsed {} messages from {} senders",
            transcript.messages.len(),
            transcript.participants.len()
        );
        for skipped in &transcript.skipped {
            tracing::warn!("Skipping chunk at line {}: {}", skipped.line, skipped.reason);
        }

        let resolver =
            MediaResolver::new(&staged, &self.transcoder, self.config.transcoder.enabled);
        let media: Vec<Option<ResolvedMedia>> = transcript
            .messages
            .iter()
            .map(|m| m.media_reference().map(|name| resolver.resolve(name)))
            .collect();

        let renderer = HtmlRenderer::new(self.config.page.title.as_str());
        let html = renderer.render(&transcript.messages, &transcript.participants, &media)?;

        let page_path = chat_path.with_extension("html");
        std::fs::write(&page_path, html)?;
        tracing::info!("HTML file saved at {}", page_path.display());
        Ok(page_path)
    }
}
