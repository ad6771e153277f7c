use mealgrid::{CellEditor, Planner};
use mealgrid_mealplan::{Day, MealSlotKey, PLAN_RECORD, Slot};
use mealgrid_shared::{Error, FileStore, MemoryStore, Store};
use mealgrid_shopping::{CUSTOM_ITEMS_RECORD, GroceryList, PURCHASED_ITEMS_RECORD, TRANSITION_DELAY};
use temp_dir::TempDir;

fn monday_dinner() -> MealSlotKey {
    MealSlotKey::new(Day::Monday, Slot::Dinner)
}

fn labels(list: &GroceryList) -> Vec<(String, bool)> {
    list.entries().map(|e| (e.label(), e.purchased)).collect()
}

#[test]
fn adobo_week_end_to_end() -> anyhow::Result<()> {
    let mut planner = Planner::load(MemoryStore::new());
    assert_eq!(planner.grocery_list(), GroceryList::Empty);

    planner.save_meal(monday_dinner(), "Adobo", "Soy sauce\nVinegar\nSoy sauce")?;
    planner.add_grocery_item("Rice")?;
    let toggled = planner.toggle_purchased("Vinegar")?;
    assert!(toggled.purchased);
    assert_eq!(toggled.refresh_after, TRANSITION_DELAY);

    assert_eq!(
        labels(&planner.grocery_list()),
        vec![
            ("Rice".to_owned(), false),
            ("2x Soy sauce".to_owned(), false),
            ("Vinegar".to_owned(), true),
        ]
    );

    planner.remove_meal(monday_dinner())?;
    assert_eq!(labels(&planner.grocery_list()), vec![("Rice".to_owned(), false)]);
    assert!(planner.shopping().purchases.is_purchased("Vinegar"));

    planner.save_meal(monday_dinner(), "Adobo", "Vinegar")?;
    assert_eq!(
        labels(&planner.grocery_list()),
        vec![("Rice".to_owned(), false), ("Vinegar".to_owned(), true)]
    );

    Ok(())
}

#[test]
fn select_cell_prefills_editor() -> anyhow::Result<()> {
    let mut planner = Planner::load(MemoryStore::new());
    planner.save_meal(monday_dinner(), "Adobo", "Soy sauce\nVinegar")?;

    assert_eq!(
        planner.select_cell(monday_dinner()),
        CellEditor {
            key: monday_dinner(),
            name: "Adobo".to_owned(),
            ingredients: "Soy sauce\nVinegar".to_owned(),
            removable: true,
        }
    );

    let empty = planner.select_cell(MealSlotKey::new(Day::Sunday, Slot::Breakfast));
    assert!(empty.name.is_empty());
    assert!(empty.ingredients.is_empty());
    assert!(!empty.removable);

    Ok(())
}

#[test]
fn grid_cells_follow_the_plan() -> anyhow::Result<()> {
    let mut planner = Planner::load(MemoryStore::new());
    planner.save_meal(monday_dinner(), "Adobo", "")?;

    let cells = planner.cells();
    assert_eq!(cells.len(), 21);

    let dinner = cells.iter().find(|c| c.key == monday_dinner()).unwrap();
    assert!(dinner.is_selected());
    assert_eq!(dinner.label(), "Adobo");

    let selected = cells.iter().filter(|c| c.is_selected()).count();
    assert_eq!(selected, 1);
    assert_eq!(cells[0].label(), "+");

    Ok(())
}

#[test]
fn invalid_save_leaves_store_untouched() -> anyhow::Result<()> {
    let mut planner = Planner::load(MemoryStore::new());

    let err = planner.save_meal(monday_dinner(), "", "Rice").unwrap_err();

    assert!(matches!(err, Error::Validate(_)));
    assert!(planner.store().is_empty());
    assert!(planner.meal(&monday_dinner()).is_none());
    assert!(planner.grocery_list().is_empty());

    Ok(())
}

#[test]
fn state_survives_restart_through_file_store() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("mealgrid.json");

    {
        let mut planner = Planner::load(FileStore::open(&path)?);
        planner.save_meal(monday_dinner(), "Adobo", "Soy sauce\nVinegar")?;
        planner.add_grocery_item("Rice")?;
        planner.toggle_purchased("Rice")?;
    }

    let planner = Planner::load(FileStore::open(&path)?);
    assert_eq!(planner.meal(&monday_dinner()).unwrap().name, "Adobo");
    assert_eq!(
        labels(&planner.grocery_list()),
        vec![
            ("Soy sauce".to_owned(), false),
            ("Vinegar".to_owned(), false),
            ("Rice".to_owned(), true),
        ]
    );

    Ok(())
}

#[test]
fn malformed_records_start_empty() -> anyhow::Result<()> {
    let mut store = MemoryStore::new();
    store.set(PLAN_RECORD, "[".to_owned())?;
    store.set(CUSTOM_ITEMS_RECORD, "42".to_owned())?;
    store.set(PURCHASED_ITEMS_RECORD, "null".to_owned())?;

    let planner = Planner::load(store);

    assert!(planner.plan().is_empty());
    assert!(planner.shopping().custom.list_items().is_empty());
    assert!(planner.shopping().purchases.is_empty());
    assert!(planner.grocery_list().is_empty());

    Ok(())
}

#[test]
fn toggle_rejects_names_off_the_list() -> anyhow::Result<()> {
    let mut planner = Planner::load(MemoryStore::new());
    planner.add_grocery_item("Rice")?;

    let err = planner.toggle_purchased("Typo").unwrap_err();

    assert!(matches!(err, Error::User(_)));
    assert_eq!(err.to_string(), "Typo is not on the grocery list");
    assert!(planner.shopping().purchases.is_empty());
    assert!(!planner.store().contains(PURCHASED_ITEMS_RECORD));

    Ok(())
}

#[test]
fn clear_all_removes_every_record() -> anyhow::Result<()> {
    let mut planner = Planner::load(MemoryStore::new());
    planner.save_meal(monday_dinner(), "Adobo", "Soy sauce")?;
    planner.add_grocery_item("Rice")?;
    planner.toggle_purchased("Soy sauce")?;

    planner.clear_all()?;

    assert!(planner.grocery_list().is_empty());
    assert!(planner.cells().iter().all(|c| !c.is_selected()));

    let store = planner.into_store();
    assert!(!store.contains(PLAN_RECORD));
    assert!(!store.contains(CUSTOM_ITEMS_RECORD));
    assert!(!store.contains(PURCHASED_ITEMS_RECORD));

    Ok(())
}
