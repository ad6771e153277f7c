use std::io::Write;

use anyhow::Result;
use mealgrid_mealplan::{Day, MealSlotKey};
use mealgrid_shared::Store;
use strum::VariantArray;

use crate::{CellView, Planner};

pub fn render_grid(cells: &[CellView]) -> String {
    let mut out = String::new();

    for day in Day::VARIANTS {
        let row = cells
            .iter()
            .filter(|cell| cell.key.day == *day)
            .map(|cell| {
                let mark = if cell.is_selected() { "*" } else { " " };
                format!("{mark}{}: {}", cell.key.slot, cell.label())
            })
            .collect::<Vec<_>>()
            .join(" | ");

        out.push_str(&format!("{:<9} {row}\n", day.to_string()));
    }

    out
}

pub fn print_plan<S: Store>(planner: &Planner<S>, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", render_grid(&planner.cells()))?;

    Ok(())
}

pub fn show_cell<S: Store>(
    planner: &Planner<S>,
    key: MealSlotKey,
    out: &mut impl Write,
) -> Result<()> {
    let editor = planner.select_cell(key);

    if editor.name.is_empty() {
        writeln!(out, "{key}: no meal planned")?;
        return Ok(());
    }

    writeln!(out, "{key}: {}", editor.name)?;
    for line in editor.ingredients.lines() {
        writeln!(out, "  {line}")?;
    }

    Ok(())
}

pub fn set_meal<S: Store>(
    planner: &mut Planner<S>,
    key: MealSlotKey,
    name: &str,
    ingredients: &[String],
    out: &mut impl Write,
) -> Result<()> {
    planner
        .save_meal(key, name, &ingredients.join("\n"))
        .map_err(|err| anyhow::anyhow!(err.message()))?;

    writeln!(out, "{key}: {}", name.trim())?;

    Ok(())
}

pub fn remove_meal<S: Store>(
    planner: &mut Planner<S>,
    key: MealSlotKey,
    out: &mut impl Write,
) -> Result<()> {
    if planner.meal(&key).is_none() {
        writeln!(out, "{key}: no meal planned")?;
        return Ok(());
    }

    planner.remove_meal(key)?;
    writeln!(out, "{key}: removed")?;

    Ok(())
}

pub fn clear_all<S: Store>(planner: &mut Planner<S>, yes: bool, out: &mut impl Write) -> Result<()> {
    if !yes {
        writeln!(
            out,
            "Clear all meals, groceries, and purchase history? This cannot be undone. Re-run with --yes to confirm."
        )?;
        return Ok(());
    }

    planner.clear_all()?;
    writeln!(out, "Everything cleared.")?;

    Ok(())
}
