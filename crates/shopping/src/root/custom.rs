use mealgrid_shared::{
    Store,
    shopping::CUSTOM_ITEMS_RECORD,
    store::{load_json, save_json},
};

/// Grocery items added by hand, in insertion order, without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomItems {
    items: Vec<String>,
}

impl CustomItems {
    pub fn load<S: Store + ?Sized>(store: &S) -> Self {
        let mut custom = Self::default();
        let items: Vec<String> = load_json(store, CUSTOM_ITEMS_RECORD);

        for item in items {
            let item = item.trim();
            if !item.is_empty() && !custom.contains(item) {
                custom.items.push(item.to_owned());
            }
        }

        custom
    }

    pub fn list_items(&self) -> &[String] {
        &self.items
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    pub fn add_item<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        name: &str,
    ) -> mealgrid_shared::Result<()> {
        let name = name.trim();

        if name.is_empty() {
            return Ok(());
        }

        if self.contains(name) {
            tracing::debug!(item = name, "grocery item already listed");
            return Ok(());
        }

        let mut next = self.items.clone();
        next.push(name.to_owned());
        self.commit(store, next)?;

        tracing::info!(item = name, "grocery item added");

        Ok(())
    }

    pub fn remove_item<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        name: &str,
    ) -> mealgrid_shared::Result<()> {
        let Some(index) = self.items.iter().position(|item| item == name) else {
            tracing::debug!(item = name, "grocery item not listed");
            return Ok(());
        };

        let mut next = self.items.clone();
        next.remove(index);
        self.commit(store, next)?;

        tracing::info!(item = name, "grocery item removed");

        Ok(())
    }

    fn commit<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        items: Vec<String>,
    ) -> mealgrid_shared::Result<()> {
        save_json(store, CUSTOM_ITEMS_RECORD, &items)?;
        self.items = items;

        Ok(())
    }

    pub(super) fn clear<S: Store + ?Sized>(&mut self, store: &mut S) -> mealgrid_shared::Result<()> {
        store.remove(CUSTOM_ITEMS_RECORD)?;
        self.items.clear();

        Ok(())
    }
}
