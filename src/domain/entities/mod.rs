//! Domain entities - Core business objects with no external dependencies

pub mod message;
pub mod participant;

pub use message::{MediaKind, Message};
pub use participant::ParticipantSet;
