pub mod config;
pub mod html;
pub mod media;
pub mod workspace;
