/// Ordered set of distinct senders, in order of first appearance.
///
/// The renderer needs exactly two entries to assign left/right alignment,
/// but the set itself holds however many senders the transcript contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantSet {
    names: Vec<String>,
}

impl ParticipantSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sender; duplicates keep their original position.
    pub fn observe(&mut self, sender: &str) {
        if !self.names.iter().any(|n| n == sender) {
            self.names.push(sender.to_string());
        }
    }

    /// The first-seen sender, rendered on the left.
    pub fn first(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
