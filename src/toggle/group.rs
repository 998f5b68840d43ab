//! Toggle group state machine.

use super::{ToggleError, ToggleItem, ToggleMode};

/// Ordered collection of toggle items under one [`ToggleMode`].
///
/// Every mutating method returns the ids whose `active` flag changed, in item
/// order, so a renderer can play exactly the open/close transitions needed.
#[derive(Debug, Clone)]
pub struct ToggleGroup {
    items: Vec<ToggleItem>,
    mode: ToggleMode,
}

impl ToggleGroup {
    /// Create a group with every item inactive. Duplicate ids are collapsed.
    pub fn new<I, S>(mode: ToggleMode, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<ToggleItem> = Vec::new();
        for id in ids {
            let id = id.into();
            if !items.iter().any(|item| item.id == id) {
                items.push(ToggleItem::new(id));
            }
        }
        Self { items, mode }
    }

    /// Group where at most one item is active, e.g. an accordion or filter bar
    pub fn exclusive<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ToggleMode::Exclusive, ids)
    }

    /// Group whose items flip on and off without affecting each other
    pub fn independent<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ToggleMode::Independent, ids)
    }

    pub fn mode(&self) -> ToggleMode {
        self.mode
    }

    pub fn items(&self) -> &[ToggleItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Whether `id` is active. Unknown ids report false.
    pub fn is_active(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id && item.active)
    }

    /// Ids of all active items, in item order
    pub fn active_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.active)
            .map(|item| item.id.as_str())
            .collect()
    }

    /// The single active item of an exclusive group (first active otherwise)
    pub fn active(&self) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.active)
            .map(|item| item.id.as_str())
    }

    /// Toggle `id`.
    ///
    /// Exclusive: an active target closes (leaving nothing open); an inactive
    /// target closes every other item and opens. Independent: only the target
    /// flips.
    pub fn toggle(&mut self, id: &str) -> Result<Vec<String>, ToggleError> {
        let target = self.require(id)?;

        let next: Vec<bool> = match self.mode {
            ToggleMode::Exclusive => {
                let open = !self.items[target].active;
                (0..self.items.len()).map(|i| open && i == target).collect()
            }
            ToggleMode::Independent => self
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| if i == target { !item.active } else { item.active })
                .collect(),
        };

        Ok(self.apply(&next))
    }

    /// Force `id` active. Exclusive groups close every other item.
    pub fn set_active(&mut self, id: &str) -> Result<Vec<String>, ToggleError> {
        let target = self.require(id)?;

        let next: Vec<bool> = match self.mode {
            ToggleMode::Exclusive => (0..self.items.len()).map(|i| i == target).collect(),
            ToggleMode::Independent => self
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| i == target || item.active)
                .collect(),
        };

        Ok(self.apply(&next))
    }

    /// Force `id` inactive, leaving other items alone.
    pub fn set_inactive(&mut self, id: &str) -> Result<Vec<String>, ToggleError> {
        let target = self.require(id)?;

        let next: Vec<bool> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| i != target && item.active)
            .collect();

        Ok(self.apply(&next))
    }

    /// Close every item (outside click on the menu, Esc on the modal).
    pub fn deactivate_all(&mut self) -> Vec<String> {
        let next = vec![false; self.items.len()];
        self.apply(&next)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn require(&self, id: &str) -> Result<usize, ToggleError> {
        self.position(id)
            .ok_or_else(|| ToggleError::UnknownItem(id.to_string()))
    }

    /// Write the new flags and collect the ids that changed
    fn apply(&mut self, next: &[bool]) -> Vec<String> {
        let mut changed = Vec::new();
        for (item, &active) in self.items.iter_mut().zip(next) {
            if item.active != active {
                item.active = active;
                changed.push(item.id.clone());
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accordion() -> ToggleGroup {
        ToggleGroup::exclusive(["q1", "q2", "q3"])
    }

    #[test]
    fn new_group_starts_all_inactive() {
        let group = accordion();
        assert_eq!(group.len(), 3);
        assert!(group.active_ids().is_empty());
        assert_eq!(group.active(), None);
    }

    #[test]
    fn new_collapses_duplicate_ids() {
        let group = ToggleGroup::exclusive(["a", "b", "a"]);
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn accordion_scenario_reports_minimal_changes() {
        let mut group = accordion();

        assert_eq!(group.toggle("q1").unwrap(), vec!["q1"]);
        assert_eq!(group.active_ids(), vec!["q1"]);

        assert_eq!(group.toggle("q2").unwrap(), vec!["q1", "q2"]);
        assert_eq!(group.active_ids(), vec!["q2"]);

        assert_eq!(group.toggle("q2").unwrap(), vec!["q2"]);
        assert!(group.active_ids().is_empty());
    }

    #[test]
    fn exclusive_toggle_twice_closes_everything() {
        let mut group = accordion();
        group.toggle("q3").unwrap();
        group.toggle("q3").unwrap();
        assert!(group.active_ids().is_empty());
    }

    #[test]
    fn exclusive_never_has_more_than_one_active() {
        let mut group = accordion();
        let sequence = ["q1", "q3", "q3", "q2", "q1", "q1", "q2", "q3", "q2"];
        for id in sequence {
            group.toggle(id).unwrap();
            assert!(group.active_ids().len() <= 1, "after toggling {id}");
        }
    }

    #[test]
    fn set_active_results_in_exactly_target() {
        let mut group = ToggleGroup::exclusive(["all", "branding", "print"]);
        group.set_active("print").unwrap();

        let changed = group.set_active("branding").unwrap();
        assert_eq!(changed, vec!["branding", "print"]);
        assert_eq!(group.active_ids(), vec!["branding"]);

        // Re-selecting the active filter changes nothing
        assert!(group.set_active("branding").unwrap().is_empty());
        assert_eq!(group.active_ids(), vec!["branding"]);
    }

    #[test]
    fn independent_toggle_flips_only_target() {
        let mut group = ToggleGroup::independent(["menu", "modal"]);
        assert_eq!(group.toggle("menu").unwrap(), vec!["menu"]);
        assert_eq!(group.toggle("modal").unwrap(), vec!["modal"]);
        assert_eq!(group.active_ids(), vec!["menu", "modal"]);

        assert_eq!(group.toggle("menu").unwrap(), vec!["menu"]);
        assert_eq!(group.active_ids(), vec!["modal"]);
    }

    #[test]
    fn independent_set_active_keeps_others() {
        let mut group = ToggleGroup::independent(["a", "b"]);
        group.set_active("a").unwrap();
        group.set_active("b").unwrap();
        assert_eq!(group.active_ids(), vec!["a", "b"]);
    }

    #[test]
    fn set_inactive_on_inactive_item_is_noop() {
        let mut group = ToggleGroup::independent(["menu"]);
        assert!(group.set_inactive("menu").unwrap().is_empty());
        assert!(!group.is_active("menu"));
    }

    #[test]
    fn deactivate_all_reports_previously_active() {
        let mut group = ToggleGroup::independent(["a", "b", "c"]);
        group.toggle("a").unwrap();
        group.toggle("c").unwrap();

        assert_eq!(group.deactivate_all(), vec!["a", "c"]);
        assert!(group.deactivate_all().is_empty());
    }

    #[test]
    fn unknown_id_is_rejected_without_mutation() {
        let mut group = accordion();
        group.toggle("q1").unwrap();

        assert_eq!(
            group.toggle("q9"),
            Err(ToggleError::UnknownItem("q9".to_string()))
        );
        assert!(group.set_active("nope").is_err());
        assert!(group.set_inactive("nope").is_err());
        assert_eq!(group.active_ids(), vec!["q1"]);
        assert!(!group.is_active("q9"));
    }
}
