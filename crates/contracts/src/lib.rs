//! Shared DTOs between the table editor frontend and the metadata API.

pub mod meta;
pub mod system;
