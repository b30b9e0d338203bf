pub mod compose;
pub mod decompose;
pub mod record;
pub mod wire;

pub use compose::*;
pub use decompose::*;
pub use record::*;
pub use wire::*;
