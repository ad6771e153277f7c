use std::time::Duration;

use mealgrid_mealplan::{MealRecord, MealSlotKey, PlanState, SaveMealInput};
use mealgrid_shared::Store;
use mealgrid_shopping::{Aggregation, GroceryAggregationService, GroceryList, Shopping};

/// Application root: owns the store and every piece of planner state.
///
/// Each intent applies its mutation, persists the affected records and leaves
/// the derived grocery list to be recomputed on the next read.
pub struct Planner<S: Store> {
    store: S,
    plan: PlanState,
    shopping: Shopping,
}

/// What the meal editor shows when a cell is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellEditor {
    pub key: MealSlotKey,
    pub name: String,
    pub ingredients: String,
    pub removable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub key: MealSlotKey,
    pub meal: Option<String>,
}

impl CellView {
    pub fn is_selected(&self) -> bool {
        self.meal.is_some()
    }

    pub fn label(&self) -> &str {
        self.meal.as_deref().unwrap_or("+")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toggled {
    pub purchased: bool,
    /// Hint for front ends animating the row; the list is already up to date.
    pub refresh_after: Duration,
}

impl<S: Store> Planner<S> {
    pub fn load(store: S) -> Self {
        let plan = PlanState::load(&store);
        let shopping = Shopping::load(&store);

        tracing::debug!(
            meals = plan.len(),
            custom_items = shopping.custom.list_items().len(),
            purchased = shopping.purchases.len(),
            "planner loaded"
        );

        Self {
            store,
            plan,
            shopping,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn plan(&self) -> &PlanState {
        &self.plan
    }

    pub fn shopping(&self) -> &Shopping {
        &self.shopping
    }

    pub fn meal(&self, key: &MealSlotKey) -> Option<&MealRecord> {
        self.plan.get_meal(key)
    }

    pub fn select_cell(&self, key: MealSlotKey) -> CellEditor {
        match self.plan.get_meal(&key) {
            Some(meal) => CellEditor {
                key,
                name: meal.name.to_owned(),
                ingredients: meal.ingredients_raw.to_owned(),
                removable: true,
            },
            None => CellEditor {
                key,
                name: String::new(),
                ingredients: String::new(),
                removable: false,
            },
        }
    }

    /// Every grid cell in order, with the planned meal if any.
    pub fn cells(&self) -> Vec<CellView> {
        MealSlotKey::all()
            .map(|key| CellView {
                key,
                meal: self.plan.get_meal(&key).map(|m| m.name.to_owned()),
            })
            .collect()
    }

    pub fn save_meal(
        &mut self,
        key: MealSlotKey,
        name: &str,
        ingredients: &str,
    ) -> mealgrid_shared::Result<()> {
        self.plan
            .set_meal(&mut self.store, SaveMealInput::new(key, name, ingredients))
    }

    pub fn remove_meal(&mut self, key: MealSlotKey) -> mealgrid_shared::Result<()> {
        self.plan.remove_meal(&mut self.store, &key)
    }

    pub fn add_grocery_item(&mut self, name: &str) -> mealgrid_shared::Result<()> {
        self.shopping.add_item(&mut self.store, name)
    }

    pub fn remove_grocery_item(&mut self, name: &str) -> mealgrid_shared::Result<()> {
        self.shopping.remove_item(&mut self.store, name)
    }

    /// Flip the purchase mark of a row on the grocery list.
    pub fn toggle_purchased(&mut self, name: &str) -> mealgrid_shared::Result<Toggled> {
        if !self.aggregation().contains_key(name) {
            mealgrid_shared::user!("{name} is not on the grocery list");
        }

        let purchased = self.shopping.purchases.toggle(&mut self.store, name)?;

        Ok(Toggled {
            purchased,
            refresh_after: mealgrid_shopping::TRANSITION_DELAY,
        })
    }

    /// Reset meals, custom items and purchases, removing all three records.
    pub fn clear_all(&mut self) -> mealgrid_shared::Result<()> {
        self.plan.clear(&mut self.store)?;
        self.shopping.clear(&mut self.store)?;

        tracing::info!("planner cleared");

        Ok(())
    }

    pub fn aggregation(&self) -> Aggregation {
        GroceryAggregationService::aggregate(&self.plan, &self.shopping.custom)
    }

    pub fn grocery_list(&self) -> GroceryList {
        GroceryList::partition(&self.aggregation(), &self.shopping.purchases)
    }
}
