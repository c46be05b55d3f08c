pub mod entities;
pub mod traits;
