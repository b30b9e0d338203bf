pub mod catalog;
pub mod field;

pub use catalog::*;
pub use field::*;
