use std::io::Write;

use anyhow::Result;
use mealgrid_shared::Store;
use mealgrid_shopping::GroceryList;

use crate::Planner;

pub fn render_list(list: &GroceryList) -> String {
    if list.is_empty() {
        return "No items yet.\n".to_owned();
    }

    list.entries()
        .map(|entry| {
            let check = if entry.purchased { "[x]" } else { "[ ]" };
            format!("{check} {}\n", entry.label())
        })
        .collect()
}

pub fn print_list<S: Store>(planner: &Planner<S>, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", render_list(&planner.grocery_list()))?;

    Ok(())
}

pub fn add_item<S: Store>(planner: &mut Planner<S>, name: &str, out: &mut impl Write) -> Result<()> {
    planner.add_grocery_item(name)?;
    print_list(planner, out)
}

pub fn remove_item<S: Store>(
    planner: &mut Planner<S>,
    name: &str,
    out: &mut impl Write,
) -> Result<()> {
    planner.remove_grocery_item(name.trim())?;
    print_list(planner, out)
}

pub fn toggle_item<S: Store>(
    planner: &mut Planner<S>,
    name: &str,
    out: &mut impl Write,
) -> Result<()> {
    let toggled = planner.toggle_purchased(name.trim())?;
    tracing::debug!(refresh_after = ?toggled.refresh_after, "list refresh hint ignored");

    print_list(planner, out)
}
