//! Name ordering for the grocery list.
//!
//! Uses the Unicode root collation, the same table browsers fall back to for
//! `localeCompare` without a locale tailoring.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorBorrowed, options::CollatorOptions};

thread_local! {
    static ROOT: Option<CollatorBorrowed<'static>> =
        Collator::try_new(Default::default(), CollatorOptions::default())
            .inspect_err(|err| tracing::warn!(error = %err, "root collation unavailable, sorting by code point"))
            .ok();
}

pub fn compare(a: &str, b: &str) -> Ordering {
    ROOT.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => Ordering::Equal,
    })
    .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names = names.iter().map(|n| n.to_string()).collect::<Vec<_>>();
        names.sort_by(|a, b| compare(a, b));
        names
    }

    #[test]
    fn case_does_not_split_the_alphabet() {
        assert_eq!(
            sorted(&["banana", "Cherry", "apple", "Bread"]),
            vec!["apple", "banana", "Bread", "Cherry"]
        );
    }

    #[test]
    fn lowercase_first_on_ties() {
        assert_eq!(sorted(&["Rice", "rice"]), vec!["rice", "Rice"]);
        assert_eq!(compare("rice", "rice"), Ordering::Equal);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(
            sorted(&["Soy sauce", "Soy", "Salt"]),
            vec!["Salt", "Soy", "Soy sauce"]
        );
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        assert_eq!(
            sorted(&["Fennel", "Éclair", "Crème fraîche", "apple", "Zucchini", "Creme"]),
            vec!["apple", "Creme", "Crème fraîche", "Éclair", "Fennel", "Zucchini"]
        );
        assert_eq!(sorted(&["Éclair", "eclair"]), vec!["eclair", "Éclair"]);
    }

    #[test]
    fn punctuation_sorts_before_letters() {
        assert_eq!(sorted(&["apple", "{x}", "Zucchini"]), vec!["{x}", "apple", "Zucchini"]);
    }
}
