use std::time::Duration;

/// Store record holding the ordered custom grocery items.
pub const CUSTOM_ITEMS_RECORD: &str = "customGroceryItems";

/// Store record holding the names marked as purchased.
pub const PURCHASED_ITEMS_RECORD: &str = "purchasedItems";

/// How long a front end may wait for the row transition before rebuilding the list.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(400);
