pub mod alphabet;
pub mod board;
pub mod config;
pub mod error;
pub mod panel;
pub mod prefs;
pub mod theme;
pub mod tiles;
pub mod volume;

pub use alphabet::*;
pub use board::*;
pub use config::*;
pub use error::*;
pub use panel::*;
pub use prefs::*;
pub use theme::*;
pub use tiles::*;
pub use volume::*;
