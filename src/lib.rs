//! chatpage - renders an exported WhatsApp transcript as a static chat page

pub mod application;
pub mod domain;
pub mod infrastructure;
