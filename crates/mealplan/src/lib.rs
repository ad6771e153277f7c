mod record;
mod root;

pub use record::*;
pub use root::*;

pub use mealgrid_shared::mealplan::{Day, MealSlotKey, PLAN_RECORD, Slot};
