use std::collections::BTreeSet;

use mealgrid_shared::{
    Store,
    shopping::PURCHASED_ITEMS_RECORD,
    store::{load_json, save_json},
};

/// Names currently checked off.
///
/// Entries are kept even when nothing aggregates under that name anymore; they
/// simply never render until the name comes back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Purchases {
    names: BTreeSet<String>,
}

impl Purchases {
    pub fn load<S: Store + ?Sized>(store: &S) -> Self {
        let names: Vec<String> = load_json(store, PURCHASED_ITEMS_RECORD);

        Self {
            names: names.into_iter().collect(),
        }
    }

    pub fn is_purchased(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn mark_purchased<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        name: &str,
    ) -> mealgrid_shared::Result<()> {
        let mut next = self.names.clone();
        let changed = next.insert(name.to_owned());
        self.commit(store, next)?;

        if changed {
            tracing::info!(item = name, "marked purchased");
        }

        Ok(())
    }

    pub fn mark_unpurchased<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        name: &str,
    ) -> mealgrid_shared::Result<()> {
        let mut next = self.names.clone();
        let changed = next.remove(name);
        self.commit(store, next)?;

        if changed {
            tracing::info!(item = name, "marked unpurchased");
        }

        Ok(())
    }

    /// Flip the checkbox for `name`, returning whether it is now purchased.
    pub fn toggle<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        name: &str,
    ) -> mealgrid_shared::Result<bool> {
        if self.is_purchased(name) {
            self.mark_unpurchased(store, name)?;

            return Ok(false);
        }

        self.mark_purchased(store, name)?;

        Ok(true)
    }

    fn commit<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        names: BTreeSet<String>,
    ) -> mealgrid_shared::Result<()> {
        save_json(store, PURCHASED_ITEMS_RECORD, &names)?;
        self.names = names;

        Ok(())
    }

    pub(super) fn clear<S: Store + ?Sized>(&mut self, store: &mut S) -> mealgrid_shared::Result<()> {
        store.remove(PURCHASED_ITEMS_RECORD)?;
        self.names.clear();

        Ok(())
    }
}
