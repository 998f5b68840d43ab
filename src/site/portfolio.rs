//! Portfolio grid with category filter buttons.

use tracing::warn;

use crate::toggle::{ToggleError, ToggleGroup};

/// Filter value that shows every project
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioItem {
    pub title: String,
    pub category: String,
}

impl PortfolioItem {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
        }
    }
}

/// Result of clicking a filter button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChange {
    /// Filter buttons whose highlight changed
    pub changed: Vec<String>,
    /// Toast text announcing the filter
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Portfolio {
    filters: ToggleGroup,
    items: Vec<PortfolioItem>,
}

impl Portfolio {
    /// Build a portfolio; `all` is always the first filter and starts active.
    pub fn new<I, S>(categories: I, items: Vec<PortfolioItem>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids = std::iter::once(ALL.to_string()).chain(categories.into_iter().map(Into::into));
        let mut filters = ToggleGroup::exclusive(ids);
        if let Err(e) = filters.set_active(ALL) {
            warn!(error = %e, "portfolio has no default filter");
        }
        Self { filters, items }
    }

    pub fn filters(&self) -> &ToggleGroup {
        &self.filters
    }

    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    pub fn current_filter(&self) -> &str {
        self.filters.active().unwrap_or(ALL)
    }

    /// Activate a filter button. Always exclusive, re-selecting is allowed.
    pub fn select(&mut self, filter: &str) -> Result<FilterChange, ToggleError> {
        let changed = self.filters.set_active(filter)?;
        Ok(FilterChange {
            changed,
            message: filter_message(filter),
        })
    }

    pub fn is_shown(&self, item: &PortfolioItem) -> bool {
        let filter = self.current_filter();
        filter == ALL || item.category == filter
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &PortfolioItem> {
        self.items.iter().filter(|item| self.is_shown(item))
    }
}

pub fn filter_message(filter: &str) -> String {
    let label = if filter == ALL { "All Projects" } else { filter };
    format!("Portfolio filtered by: {label}")
}
