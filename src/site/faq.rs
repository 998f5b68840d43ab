//! FAQ accordion: one answer open at a time.

use crate::toggle::{ToggleError, ToggleGroup};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone)]
pub struct Faq {
    entries: Vec<FaqEntry>,
    accordion: ToggleGroup,
}

impl Faq {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        let accordion = ToggleGroup::exclusive(entries.iter().map(|e| e.id.clone()));
        Self { entries, accordion }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.accordion.is_active(id)
    }

    pub fn open_entry(&self) -> Option<&FaqEntry> {
        let id = self.accordion.active()?;
        self.entries.iter().find(|e| e.id == id)
    }

    /// Click a question: closes the others, or closes itself if already open.
    pub fn toggle(&mut self, id: &str) -> Result<Vec<String>, ToggleError> {
        self.accordion.toggle(id)
    }
}
