/// Meal assigned to a grid cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MealRecord {
    pub name: String,
    /// Newline separated ingredients as typed, possibly empty.
    pub ingredients_raw: String,
}

impl MealRecord {
    pub fn new(name: impl Into<String>, ingredients_raw: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients_raw: ingredients_raw.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn ingredients(&self) -> impl Iterator<Item = &str> {
        parse_ingredients(&self.ingredients_raw)
    }
}

/// Split ingredient text into trimmed, non-empty lines.
pub fn parse_ingredients(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('\n').map(str::trim).filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_skips_blank_lines() {
        let raw = "  Soy sauce \n\n\tVinegar\r\n   \nSoy sauce";
        let lines = parse_ingredients(raw).collect::<Vec<_>>();
        assert_eq!(lines, vec!["Soy sauce", "Vinegar", "Soy sauce"]);
    }

    #[test]
    fn parse_empty_text() {
        assert_eq!(parse_ingredients("").count(), 0);
        assert_eq!(parse_ingredients(" \n \n").count(), 0);
    }

    #[test]
    fn blank_name_is_not_active() {
        assert!(MealRecord::new("Adobo", "").is_active());
        assert!(!MealRecord::new("  ", "Rice").is_active());
    }
}
