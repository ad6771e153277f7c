use mealgrid_shared::Store;

impl super::Shopping {
    /// Forget every custom item and purchase flag, removing both records.
    pub fn clear<S: Store + ?Sized>(&mut self, store: &mut S) -> mealgrid_shared::Result<()> {
        self.custom.clear(store)?;
        self.purchases.clear(store)
    }
}
