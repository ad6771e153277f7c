mod grocery;
mod plan;

pub use grocery::*;
pub use plan::*;
