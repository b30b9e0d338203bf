pub mod graph;
pub mod layout;
pub mod validate;

pub use graph::*;
