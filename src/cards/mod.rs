pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod combination;
pub use combination::*;

pub mod draw;
pub use draw::*;

pub mod histogram;
pub use histogram::*;

pub mod made;
pub use made::*;

pub mod rank;
pub use rank::*;

pub mod street;
pub use street::*;

pub mod suit;
pub use suit::*;
