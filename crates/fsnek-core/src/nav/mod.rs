//! Navigation logic: the directory browser and its cursor history.

pub mod browser;
pub mod history;

pub use browser::Browser;
pub use history::CursorHistory;
