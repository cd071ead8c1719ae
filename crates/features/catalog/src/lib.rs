//! Catalog feature slice: turns the remote code directory into flag cards.
//!
//! * [`loader::load_directory`] fetches the directory and degrades every failure to
//!   an empty directory plus one diagnostic log entry.
//! * [`render::render`] rebuilds a [`render::CardContainer`] from a directory
//!   snapshot and a search term.
//! * [`binding::SearchBinding`] connects a search field to the two above so that
//!   only the most recent request is ever applied.

pub mod binding;
pub mod filter;
pub mod loader;
pub mod render;

pub use binding::{Refresh, RenderGate, RenderTicket, SearchBinding, Snapshot};
pub use loader::{LoadedDirectory, load_directory, load_directory_reporting};
pub use render::{CardContainer, render};
