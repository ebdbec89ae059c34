pub mod modal;
pub mod reveal;
pub mod scroll;
pub mod terminal;
