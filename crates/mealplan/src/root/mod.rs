mod remove;
mod save;

pub use save::SaveMealInput;

use std::collections::BTreeMap;

use mealgrid_shared::{
    Store,
    mealplan::{MealSlotKey, PLAN_RECORD},
    store::{load_json, save_json},
};

use crate::MealRecord;

const INGREDIENTS_SUFFIX: &str = "-ingredients";

/// Meals planned for the week, one per grid cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanState {
    meals: BTreeMap<MealSlotKey, MealRecord>,
}

impl PlanState {
    pub fn load<S: Store + ?Sized>(store: &S) -> Self {
        let records: BTreeMap<String, String> = load_json(store, PLAN_RECORD);

        Self::from_records(records)
    }

    pub fn get_meal(&self, key: &MealSlotKey) -> Option<&MealRecord> {
        self.meals.get(key)
    }

    /// Active meals in grid order.
    pub fn meals(&self) -> impl Iterator<Item = (&MealSlotKey, &MealRecord)> {
        self.meals.iter().filter(|(_, meal)| meal.is_active())
    }

    pub fn len(&self) -> usize {
        self.meals().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn persist<S: Store + ?Sized>(&self, store: &mut S) -> mealgrid_shared::Result<()> {
        save_json(store, PLAN_RECORD, &self.to_records())
    }

    /// Flatten into the `"{day}-{slot}"` / `"{day}-{slot}-ingredients"` record layout.
    pub fn to_records(&self) -> BTreeMap<String, String> {
        let mut records = BTreeMap::new();

        for (key, meal) in self.meals() {
            records.insert(key.to_string(), meal.name.to_owned());

            if meal.ingredients().next().is_some() {
                records.insert(
                    format!("{key}{INGREDIENTS_SUFFIX}"),
                    meal.ingredients_raw.to_owned(),
                );
            }
        }

        records
    }

    pub fn from_records(mut records: BTreeMap<String, String>) -> Self {
        let mut meals = BTreeMap::new();
        let keys = records.keys().cloned().collect::<Vec<_>>();

        for raw_key in keys {
            if raw_key.ends_with(INGREDIENTS_SUFFIX) {
                continue;
            }

            let Some(name) = records.remove(&raw_key) else {
                continue;
            };

            let ingredients_raw = records
                .remove(&format!("{raw_key}{INGREDIENTS_SUFFIX}"))
                .unwrap_or_default();

            let Ok(key) = raw_key.parse::<MealSlotKey>() else {
                tracing::warn!(record = %raw_key, "unknown plan record dropped");
                continue;
            };

            let name = name.trim();
            if name.is_empty() {
                continue;
            }

            meals.insert(key, MealRecord::new(name, ingredients_raw));
        }

        for orphan in records.keys() {
            tracing::warn!(record = %orphan, "ingredients without a meal dropped");
        }

        Self { meals }
    }
}
