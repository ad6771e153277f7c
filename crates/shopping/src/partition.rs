use crate::{Aggregation, Purchases, collate};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregatedItem {
    pub name: String,
    pub count: u32,
}

/// Display-ready grocery list.
///
/// `Empty` is returned when nothing aggregates at all, so callers can show a
/// "no items" message instead of an empty container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroceryList {
    Empty,
    Items {
        unpurchased: Vec<AggregatedItem>,
        purchased: Vec<AggregatedItem>,
    },
}

/// One row of the rendered list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroceryEntry<'a> {
    pub name: &'a str,
    pub count: u32,
    pub purchased: bool,
}

impl GroceryEntry<'_> {
    /// Row text, prefixed with the count when the item is needed more than once.
    pub fn label(&self) -> String {
        if self.count > 1 {
            format!("{}x {}", self.count, self.name)
        } else {
            self.name.to_owned()
        }
    }
}

impl GroceryList {
    pub fn partition(aggregation: &Aggregation, purchases: &Purchases) -> Self {
        if aggregation.is_empty() {
            return GroceryList::Empty;
        }

        let (mut purchased, mut unpurchased): (Vec<_>, Vec<_>) = aggregation
            .iter()
            .map(|(name, count)| AggregatedItem {
                name: name.to_owned(),
                count: *count,
            })
            .partition(|item| purchases.is_purchased(&item.name));

        unpurchased.sort_by(|a, b| collate::compare(&a.name, &b.name));
        purchased.sort_by(|a, b| collate::compare(&a.name, &b.name));

        GroceryList::Items {
            unpurchased,
            purchased,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GroceryList::Empty)
    }

    pub fn unpurchased(&self) -> &[AggregatedItem] {
        match self {
            GroceryList::Empty => &[],
            GroceryList::Items { unpurchased, .. } => unpurchased,
        }
    }

    pub fn purchased(&self) -> &[AggregatedItem] {
        match self {
            GroceryList::Empty => &[],
            GroceryList::Items { purchased, .. } => purchased,
        }
    }

    /// Rows in display order: everything still to buy, then what is already bought.
    pub fn entries(&self) -> impl Iterator<Item = GroceryEntry<'_>> {
        let to_buy = self.unpurchased().iter().map(|item| GroceryEntry {
            name: &item.name,
            count: item.count,
            purchased: false,
        });

        let bought = self.purchased().iter().map(|item| GroceryEntry {
            name: &item.name,
            count: item.count,
            purchased: true,
        });

        to_buy.chain(bought)
    }
}
