mod app;
mod card;
mod grid;
mod search;
mod toast;

pub use app::App;
pub(crate) use card::FlagCardView;
pub(crate) use grid::FlagGrid;
pub(crate) use search::SearchBox;
pub(crate) use toast::{ToastStack, Toaster};
