pub mod order;
pub mod search;

pub use order::*;
pub use search::*;
