//! Static HTML rendering of a parsed transcript

use crate::application::errors::RenderError;
use crate::domain::entities::{MediaKind, Message, ParticipantSet};
use crate::infrastructure::media::ResolvedMedia;

const PAGE_STYLE: &str = "\
        body { font-family: Arial, sans-serif; background: #ece5dd; margin: 0; }
        h1 { font-size: 1.2em; text-align: center; padding: 10px; }
        .chat { max-width: 700px; margin: 0 auto; padding: 10px; }
        .message { margin-bottom: 10px; clear: both; }
        .message .bubble { display: inline-block; max-width: 75%; padding: 6px 10px; border-radius: 8px; }
        .left .bubble { float: left; background: #ffffff; }
        .right .bubble { float: right; background: #dcf8c6; }
        .sender { font-weight: bold; display: block; }
        .timestamp { color: gray; font-size: 0.8em; display: block; }
        img { max-width: 300px; height: auto; }
        video { max-width: 300px; height: auto; }
        audio { width: 300px; }";

/// Renders messages as a self-contained two-party chat page
pub struct HtmlRenderer {
    title: String,
}

impl HtmlRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Render the page.
    ///
    /// `media` carries the resolved asset for each message, index-aligned
    /// with `messages` (None for plain text). Alignment needs at least two
    /// distinct senders: the first participant goes left, everyone else
    /// right.
    pub fn render(
        &self,
        messages: &[Message],
        participants: &ParticipantSet,
        media: &[Option<ResolvedMedia>],
    ) -> Result<String, RenderError> {
        let first = match participants.first() {
            Some(name) if participants.len() >= 2 => name,
            _ => {
                return Err(RenderError::InsufficientParticipants {
                    found: participants.len(),
                })
            }
        };

        let title = escape(&self.title);
        let mut html = format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"UTF-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             <title>{title}</title>\n\
             <style>\n{PAGE_STYLE}\n</style>\n\
             </head>\n\
             <body>\n\
             <h1>{title}</h1>\n\
             <div class=\"chat\">\n"
        );

        for (message, media) in messages.iter().zip(media) {
            let side = if message.sender == first {
                "left"
            } else {
                "right"
            };
            let body = match media {
                Some(resolved) => media_tag(resolved),
                None => escape(&message.content).replace('\n', "<br>"),
            };
            let sender = escape(&message.sender);
            let timestamp = message.timestamp.format("%d/%m/%Y, %H:%M");
            html.push_str(&format!(
                "<div class=\"message {side}\"><div class=\"bubble\">\
                 <span class=\"sender\">{sender}</span>\
                 {body}\
                 <span class=\"timestamp\">[{timestamp}]</span>\
                 </div></div>\n"
            ));
        }

        html.push_str("</div>\n</body>\n</html>\n");
        Ok(html)
    }
}

fn media_tag(resolved: &ResolvedMedia) -> String {
    let href = escape(&resolved.href);
    match resolved.kind {
        Some(MediaKind::Image) => format!("<img src=\"{href}\" alt=\"Image\">"),
        Some(MediaKind::Video) => format!(
            "<video controls><source src=\"{href}\" type=\"video/mp4\">\
             Your browser does not support the video tag.</video>"
        ),
        Some(MediaKind::Audio) => format!(
            "<audio controls><source src=\"{href}\" type=\"audio/mpeg\">\
             Your browser does not support the audio element.</audio>"
        ),
        Some(MediaKind::Document) | None => format!("<a href=\"{href}\">{href}</a>"),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
