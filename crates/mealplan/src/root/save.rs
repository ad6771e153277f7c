use mealgrid_shared::{Store, mealplan::MealSlotKey};
use validator::Validate;

use crate::{MealRecord, parse_ingredients};

#[derive(Validate)]
pub struct SaveMealInput {
    pub key: MealSlotKey,
    #[validate(length(min = 1, message = "Please enter a meal name!"))]
    pub name: String,
    pub ingredients: String,
}

impl SaveMealInput {
    pub fn new(key: MealSlotKey, name: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
            ingredients: ingredients.into(),
        }
    }
}

impl super::PlanState {
    /// Assign a meal to a cell, replacing whatever was there.
    pub fn set_meal<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        input: SaveMealInput,
    ) -> mealgrid_shared::Result<()> {
        let input = SaveMealInput {
            name: input.name.trim().to_owned(),
            ..input
        };
        input.validate()?;

        let ingredients = input.ingredients.trim();
        let ingredients_raw = if parse_ingredients(ingredients).next().is_some() {
            ingredients.to_owned()
        } else {
            String::new()
        };

        let mut next = self.clone();
        next.meals
            .insert(input.key, MealRecord::new(input.name.to_owned(), ingredients_raw));
        next.persist(store)?;
        *self = next;

        tracing::info!(cell = %input.key, meal = %input.name, "meal saved");

        Ok(())
    }
}
