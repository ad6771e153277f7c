pub mod aggregation;
pub mod collate;
pub mod partition;
mod root;

pub use aggregation::{Aggregation, GroceryAggregationService};
pub use partition::{AggregatedItem, GroceryEntry, GroceryList};
pub use root::*;

pub use mealgrid_shared::shopping::{CUSTOM_ITEMS_RECORD, PURCHASED_ITEMS_RECORD, TRANSITION_DELAY};
