use mealgrid_shared::{Store, mealplan::MealSlotKey};

impl super::PlanState {
    pub fn remove_meal<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        key: &MealSlotKey,
    ) -> mealgrid_shared::Result<()> {
        let mut next = self.clone();
        let removed = next.meals.remove(key);
        next.persist(store)?;
        *self = next;

        match removed {
            Some(meal) => tracing::info!(cell = %key, meal = %meal.name, "meal removed"),
            None => tracing::debug!(cell = %key, "no meal to remove"),
        }

        Ok(())
    }

    /// Drop every meal along with the persisted record.
    pub fn clear<S: Store + ?Sized>(&mut self, store: &mut S) -> mealgrid_shared::Result<()> {
        store.remove(mealgrid_shared::mealplan::PLAN_RECORD)?;
        self.meals.clear();

        Ok(())
    }
}
