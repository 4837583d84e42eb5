//! Text box editing with a cursor marker

mod editor;
mod types;


pub use editor::*;
pub use types::*;
