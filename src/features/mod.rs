pub mod extractor;
pub use extractor::*;

pub mod feature;
pub use feature::*;

pub mod pack;
pub use pack::*;

pub mod row;
pub use row::*;

pub mod snapshot;
pub use snapshot::*;

pub mod table;
pub use table::*;

pub mod tally;
pub use tally::*;

pub mod wagers;
pub use wagers::*;
