//! # Domain Models
//!
//! Plain data types shared by every FlagDeck crate; the only dependency is `serde`.
//! No I/O and no networking: directory, card and configuration types only.

pub mod card;
pub mod config;
pub mod directory;
