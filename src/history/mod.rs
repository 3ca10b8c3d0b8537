pub mod action;
pub use action::*;

pub mod error;
pub use error::*;

pub mod game;
pub use game::*;

pub mod hand;
pub use hand::*;

pub mod line;
pub use line::*;

pub mod parser;
pub use parser::*;

pub mod patterns;
pub use patterns::*;

pub mod player;
pub use player::*;

pub mod splitter;
pub use splitter::*;

#[cfg(test)]
pub mod fixtures;
