//! Output formatting for CLI display
//!
//! Plain text in quiet mode, colored and indented otherwise.

use crate::catalog::FilterDefinition;
use crate::filters::AppliedFilter;
use crate::url::Pagination;
use colored::Colorize;
use std::fmt::Write;

/// Format an applied filter
#[must_use]
pub fn applied_filter(filter: &AppliedFilter, quiet: bool) -> String {
    if quiet {
        format!("{}={}", filter.option_id, filter.value.display_text())
    } else {
        format!(
            "  {}: {} {}",
            filter.label.bold(),
            filter.display_value.green(),
            format!("({})", filter.option_id).dimmed()
        )
    }
}

/// Format a catalog definition
#[must_use]
pub fn definition(definition: &FilterDefinition, quiet: bool) -> String {
    if quiet {
        return definition.id.clone();
    }
    let mut line = format!(
        "  {} {} [{}]",
        definition.id.cyan(),
        definition.label,
        definition.kind
    );
    if !definition.choices.is_empty() {
        let choices: Vec<String> = definition
            .choices
            .iter()
            .map(|c| format!("{}={}", c.value, c.label))
            .collect();
        // Writing into a String cannot fail
        let _ = write!(line, " {}", choices.join(", ").dimmed());
    }
    line
}

/// Format a pagination cursor
#[must_use]
pub fn pagination(pagination: Pagination, quiet: bool) -> String {
    if quiet {
        format!("{} {}", pagination.page_num, pagination.page_size)
    } else {
        format!(
            "Page {} ({} per page)",
            pagination.page_num.to_string().bold(),
            pagination.page_size
        )
    }
}

/// Format a warning line
#[must_use]
pub fn warning(message: &str) -> String {
    format!("{} {message}", "warning:".yellow().bold())
}
