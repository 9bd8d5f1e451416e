//! jsonbox - a minimal, self-hostable JSON drop box
//!
//! Clients POST arbitrary JSON drops, later fetch or soft-delete them by
//! id, and list the drops that have not been deleted.

pub mod cli;
pub mod config;
pub mod http;
pub mod store;
