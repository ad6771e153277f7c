mod custom;
mod purchase;
mod reset;

pub use custom::CustomItems;
pub use purchase::Purchases;

use mealgrid_shared::Store;

/// Grocery state kept alongside the plan: free standing items and purchase flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Shopping {
    pub custom: CustomItems,
    pub purchases: Purchases,
}

impl Shopping {
    pub fn load<S: Store + ?Sized>(store: &S) -> Self {
        Self {
            custom: CustomItems::load(store),
            purchases: Purchases::load(store),
        }
    }

    pub fn add_item<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        name: &str,
    ) -> mealgrid_shared::Result<()> {
        self.custom.add_item(store, name)
    }

    /// Remove a grocery row.
    ///
    /// The purchase flag goes with it so the same name added later starts
    /// unpurchased. Names that also come from meal ingredients keep rendering
    /// until the meal changes.
    pub fn remove_item<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        name: &str,
    ) -> mealgrid_shared::Result<()> {
        self.custom.remove_item(store, name)?;

        if self.purchases.is_purchased(name) {
            self.purchases.mark_unpurchased(store, name)?;
        }

        Ok(())
    }
}
