use std::collections::HashMap;

use mealgrid_mealplan::PlanState;

use crate::CustomItems;

/// Item name to number of occurrences across every source.
pub type Aggregation = HashMap<String, u32>;

/// Grocery Aggregation Service
///
/// Stateless fold over the two grocery sources:
/// - every ingredient line of every active meal counts once, repeats included
/// - every custom item counts once
///
/// Names are matched exactly, so "rice" and "Rice" stay separate lines.
pub struct GroceryAggregationService;

impl GroceryAggregationService {
    pub fn aggregate(plan: &PlanState, custom: &CustomItems) -> Aggregation {
        let mut groups = Aggregation::new();

        for (_, meal) in plan.meals() {
            for ingredient in meal.ingredients() {
                *groups.entry(ingredient.to_owned()).or_insert(0) += 1;
            }
        }

        for item in custom.list_items() {
            *groups.entry(item.to_owned()).or_insert(0) += 1;
        }

        groups
    }
}
