mod error;
pub mod mealplan;
pub mod shopping;
pub mod store;

pub use error::*;
pub use store::{FileStore, MemoryStore, Store};
