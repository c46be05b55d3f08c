//! Transcript parser - Splits exported chat text into structured messages

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex_lite::{Captures, Regex};

use crate::application::errors::ChunkError;
use crate::domain::entities::{Message, ParticipantSet};

/// Years to subtract from a Buddhist-era year to get the Gregorian year
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Recognizes the start of a message: `[D/M/YYYY BE, HH:MM:SS] `
static MESSAGE_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\d{1,2})/(\d{1,2})/(\d{4}) BE, (\d{1,2}):(\d{2}):(\d{2})\] ").unwrap()
});

/// A chunk that matched the timestamp prefix but could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedChunk {
    /// 1-based line number of the chunk's first line
    pub line: usize,
    pub reason: ChunkError,
}

/// Result of one parse pass over a transcript
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub messages: Vec<Message>,
    pub participants: ParticipantSet,
    pub skipped: Vec<SkippedChunk>,
}

/// Parses exported transcript text into ordered messages plus the set of
/// senders encountered
#[derive(Debug, Default)]
pub struct TranscriptParser;

impl TranscriptParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a whole exported transcript.
    ///
    /// A message starts at a line matching the timestamp prefix and extends
    /// up to the next such line or end of input; intermediate lines are
    /// continuation lines and are kept in the content with their line breaks.
    /// Chunks with an invalid calendar date or no `": "` sender delimiter are
    /// recorded in `skipped` and do not abort the pass; the parser itself
    /// never fails. Sender names containing `": "` are ambiguous, the first
    /// occurrence wins.
    pub fn parse(&self, text: &str) -> Transcript {
        let mut transcript = Transcript::default();

        // Scan-and-slice: group each header line with its continuation lines.
        // Lines before the first header belong to no message and are dropped.
        let mut chunks: Vec<(usize, Vec<&str>)> = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            if MESSAGE_START.is_match(line) {
                chunks.push((idx + 1, vec![line]));
            } else if let Some((_, chunk)) = chunks.last_mut() {
                chunk.push(line);
            }
        }

        for (line, chunk) in chunks {
            match parse_chunk(&chunk) {
                Ok(message) => {
                    transcript.participants.observe(&message.sender);
                    transcript.messages.push(message);
                }
                Err(reason) => transcript.skipped.push(SkippedChunk { line, reason }),
            }
        }
        transcript
    }
}

fn parse_chunk(lines: &[&str]) -> Result<Message, ChunkError> {
    let header = lines[0];
    let caps = MESSAGE_START
        .captures(header)
        .ok_or_else(|| ChunkError::MalformedTimestamp(header.to_string()))?;

    let timestamp = normalize_timestamp(&caps)?;

    let rest = &header[caps[0].len()..];
    let (sender, first_line) = rest
        .split_once(": ")
        .ok_or(ChunkError::MissingSenderDelimiter)?;

    let mut content = first_line.to_string();
    for line in &lines[1..] {
        content.push('\n');
        content.push_str(line);
    }

    Ok(Message::new(timestamp, sender, content.trim()))
}

/// Rebuild a Gregorian timestamp from the captured Buddhist-era digits.
/// Invalid calendar dates are rejected, never clamped.
fn normalize_timestamp(caps: &Captures<'_>) -> Result<NaiveDateTime, ChunkError> {
    let malformed = || ChunkError::MalformedTimestamp(caps[0].trim_end().to_string());
    let num = |i: usize| caps[i].parse::<u32>().map_err(|_| malformed());

    let year: i32 = caps[3].parse().map_err(|_| malformed())?;
    let date = NaiveDate::from_ymd_opt(year - BUDDHIST_ERA_OFFSET, num(2)?, num(1)?)
        .ok_or_else(|| malformed())?;
    date.and_hms_opt(num(4)?, num(5)?, num(6)?)
        .ok_or_else(|| malformed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Transcript {
        TranscriptParser::new().parse(text)
    }

    #[test]
    fn one_message_per_timestamped_line_in_order() {
        let transcript = parse(concat!(
            "[1/1/2566 BE, 10:00:00] Alice: hello\n",
            "[1/1/2566 BE, 10:00:05] Bob: hi\n",
            "[1/1/2566 BE, 10:00:09] Alice: how are you\n",
        ));
        assert_eq!(transcript.messages.len(), 3);
        assert_eq!(transcript.messages[0].content, "hello");
        assert_eq!(transcript.messages[1].sender, "Bob");
        assert_eq!(transcript.messages[2].content, "how are you");
        assert!(transcript.skipped.is_empty());
    }

    #[test]
    fn continuation_lines_stay_with_their_message() {
        let transcript = parse("[1/1/2566 BE, 10:00:00] Alice: line one\nline two");
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.messages[0].sender, "Alice");
        assert_eq!(transcript.messages[0].content, "line one\nline two");
    }

    #[test]
    fn buddhist_year_is_converted_to_gregorian() {
        let transcript = parse("[15/6/2566 BE, 09:30:45] Alice: hello");
        let ts = transcript.messages[0].timestamp;
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(2023, 6, 15)
                .unwrap()
                .and_hms_opt(9, 30, 45)
                .unwrap()
        );
    }

    #[test]
    fn participants_in_first_seen_order() {
        let transcript = parse(concat!(
            "[1/1/2566 BE, 10:00:00] Alice: a\n",
            "[1/1/2566 BE, 10:00:01] Bob: b\n",
            "[1/1/2566 BE, 10:00:02] Alice: c\n",
            "[1/1/2566 BE, 10:00:03] Bob: d\n",
        ));
        assert_eq!(
            transcript.participants.iter().collect::<Vec<_>>(),
            vec!["Alice", "Bob"]
        );
    }

    #[test]
    fn invalid_calendar_date_is_skipped_and_reported() {
        let transcript = parse(concat!(
            "[32/1/2566 BE, 10:00:00] Alice: bad day\n",
            "[31/4/2566 BE, 10:00:00] Alice: april has 30 days\n",
            "[1/1/2566 BE, 10:00:05] Bob: still here\n",
        ));
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.messages[0].sender, "Bob");
        assert_eq!(transcript.skipped.len(), 2);
        assert_eq!(transcript.skipped[0].line, 1);
        assert_eq!(
            transcript.skipped[0].reason,
            ChunkError::MalformedTimestamp("[32/1/2566 BE, 10:00:00]".to_string())
        );
        assert!(matches!(
            transcript.skipped[1].reason,
            ChunkError::MalformedTimestamp(_)
        ));
    }

    #[test]
    fn chunk_without_sender_delimiter_is_skipped_and_reported() {
        let transcript = parse(concat!(
            "[1/1/2566 BE, 10:00:00] no delimiter here\n",
            "[1/1/2566 BE, 10:00:05] Alice: fine\n",
        ));
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.skipped.len(), 1);
        assert_eq!(
            transcript.skipped[0].reason,
            ChunkError::MissingSenderDelimiter
        );
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let transcript = parse("");
        assert!(transcript.messages.is_empty());
        assert!(transcript.participants.is_empty());
        assert!(transcript.skipped.is_empty());
    }

    #[test]
    fn preamble_before_first_header_is_ignored() {
        let transcript = parse(concat!(
            "Messages to this chat are end-to-end encrypted.\n",
            "[1/1/2566 BE, 10:00:00] Alice: hello\n",
        ));
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.messages[0].content, "hello");
    }

    #[test]
    fn sender_with_colon_space_splits_at_first_occurrence() {
        let transcript = parse("[1/1/2566 BE, 10:00:00] Alice: note: remember this");
        assert_eq!(transcript.messages[0].sender, "Alice");
        assert_eq!(transcript.messages[0].content, "note: remember this");
    }

    #[test]
    fn blank_continuation_lines_are_kept_inside_content() {
        let transcript = parse("[1/1/2566 BE, 10:00:00] Alice: first\n\nthird");
        assert_eq!(transcript.messages[0].content, "first\n\nthird");
    }
}
