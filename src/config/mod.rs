pub mod defaults;
pub mod normalize;
pub mod path;

pub use defaults::*;
pub use normalize::*;
pub use path::*;
