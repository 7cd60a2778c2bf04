//! Catalog and choice filtering
//!
//! All matching is a case-insensitive substring test. These functions are
//! pure and keep catalog order.

use crate::catalog::{Catalog, ChoiceOption, FilterDefinition};

/// Filter the catalog by `keyword` against definition labels
///
/// The keyword is trimmed first; an empty or whitespace-only keyword returns
/// the full catalog in its original order.
///
/// # Examples
///
/// ```
/// use filterbar::catalog::{Catalog, FilterDefinition};
/// use filterbar::search::filter_catalog;
///
/// let catalog = Catalog::new(vec![
///     FilterDefinition::text("name", "Name"),
///     FilterDefinition::date("created", "Created at"),
/// ]).unwrap();
///
/// let hits = filter_catalog(&catalog, "  CREATED ");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, "created");
/// ```
#[must_use]
pub fn filter_catalog<'a>(catalog: &'a Catalog, keyword: &str) -> Vec<&'a FilterDefinition> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return catalog.iter().collect();
    }
    catalog
        .iter()
        .filter(|def| def.label.to_lowercase().contains(&keyword))
        .collect()
}

/// Check whether a choice matches typed input
///
/// Matches against the choice label or the display form of its value.
#[must_use]
pub fn match_choice(choice: &ChoiceOption, input: &str) -> bool {
    let input = input.to_lowercase();
    choice.label.to_lowercase().contains(&input)
        || choice.value.to_string().to_lowercase().contains(&input)
}

/// Filter a definition's choices by typed input, keeping choice order
#[must_use]
pub fn filter_choices<'a>(definition: &'a FilterDefinition, input: &str) -> Vec<&'a ChoiceOption> {
    definition
        .choices
        .iter()
        .filter(|c| match_choice(c, input))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ChoiceOption;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            FilterDefinition::text("name", "Name"),
            FilterDefinition::single_choice(
                "status",
                "Status",
                vec![
                    ChoiceOption::new("running", "Running"),
                    ChoiceOption::new(404, "Not found"),
                ],
            ),
            FilterDefinition::date_range("created", "Created range"),
        ])
        .unwrap()
    }

    fn ids(defs: &[&FilterDefinition]) -> Vec<String> {
        defs.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn test_empty_keyword_returns_everything_in_order() {
        let catalog = catalog();
        assert_eq!(ids(&filter_catalog(&catalog, "")), vec!["name", "status", "created"]);
        assert_eq!(ids(&filter_catalog(&catalog, "   ")), vec!["name", "status", "created"]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let catalog = catalog();
        assert_eq!(ids(&filter_catalog(&catalog, "TAT")), vec!["status"]);
        assert_eq!(ids(&filter_catalog(&catalog, " a ")), vec!["name", "status", "created"]);
    }

    #[test]
    fn test_non_matching_keyword_is_empty() {
        let catalog = catalog();
        assert!(filter_catalog(&catalog, "zzz").is_empty());
    }

    #[test]
    fn test_match_choice_by_label_or_value() {
        let catalog = catalog();
        let status = catalog.get("status").unwrap();
        assert_eq!(filter_choices(status, "RUN").len(), 1);
        assert_eq!(filter_choices(status, "40")[0].label, "Not found");
        assert_eq!(filter_choices(status, "").len(), 2);
        assert!(filter_choices(status, "paused").is_empty());
    }
}
