use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};

use super::ElementIds;

/// Host page collaborator: canvases, numeric inputs and text outputs.
pub trait Page {
    /// Raw value of an input field, `None` when the field does not exist.
    fn input_value(&self, id: &str) -> Option<String>;

    fn has_canvas(&self, id: &str) -> bool;

    /// Writes `text` into an output element; fails when it does not exist.
    fn set_text(&mut self, id: &str, text: &str) -> ChartResult<()>;
}

/// Reads a numeric input, falling back to `default` when the field is absent
/// or its value does not parse as a finite number.
pub fn read_numeric_input<P: Page + ?Sized>(page: &P, id: &str, default: f64) -> f64 {
    let Some(raw) = page.input_value(id) else {
        return default;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!(input = id, value = %raw, default, "non-numeric input, using default");
            default
        }
    }
}

pub(crate) fn require_canvas<P: Page + ?Sized>(page: &P, id: &str) -> ChartResult<()> {
    if page.has_canvas(id) {
        Ok(())
    } else {
        Err(ChartError::missing_element(id))
    }
}

/// In-memory page used by tests and headless rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryPage {
    canvases: IndexSet<String>,
    inputs: IndexMap<String, String>,
    texts: IndexMap<String, String>,
}

impl MemoryPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Page carrying every element referenced by `ids`, with empty inputs.
    #[must_use]
    pub fn with_elements(ids: &ElementIds) -> Self {
        Self::new()
            .with_canvas(&ids.cost_chart)
            .with_canvas(&ids.time_chart)
            .with_canvas(&ids.skill_match_chart)
            .with_text_slot(&ids.cost_savings_text)
            .with_text_slot(&ids.time_efficiency_text)
            .with_text_slot(&ids.skill_match_text)
    }

    #[must_use]
    pub fn with_canvas(mut self, id: impl Into<String>) -> Self {
        self.canvases.insert(id.into());
        self
    }

    #[must_use]
    pub fn with_input(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.inputs.insert(id.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_text_slot(mut self, id: impl Into<String>) -> Self {
        self.texts.insert(id.into(), String::new());
        self
    }

    pub fn set_input(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.inputs.insert(id.into(), value.into());
    }

    pub fn remove_input(&mut self, id: &str) -> Option<String> {
        self.inputs.shift_remove(id)
    }

    #[must_use]
    pub fn text(&self, id: &str) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn texts(&self) -> &IndexMap<String, String> {
        &self.texts
    }
}

impl Page for MemoryPage {
    fn input_value(&self, id: &str) -> Option<String> {
        self.inputs.get(id).cloned()
    }

    fn has_canvas(&self, id: &str) -> bool {
        self.canvases.contains(id)
    }

    fn set_text(&mut self, id: &str, text: &str) -> ChartResult<()> {
        let slot = self
            .texts
            .get_mut(id)
            .ok_or_else(|| ChartError::missing_element(id))?;
        text.clone_into(slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryPage, Page, read_numeric_input};

    #[test]
    fn numeric_input_falls_back_for_missing_and_garbage() {
        let page = MemoryPage::new()
            .with_input("budget", " 2500 ")
            .with_input("deadline", "soon");
        assert_eq!(read_numeric_input(&page, "budget", 10_000.0), 2_500.0);
        assert_eq!(read_numeric_input(&page, "deadline", 30.0), 30.0);
        assert_eq!(read_numeric_input(&page, "absent", 7.0), 7.0);
    }

    #[test]
    fn numeric_input_keeps_zero_and_negative_values() {
        let page = MemoryPage::new().with_input("budget", "0").with_input("deadline", "-5");
        assert_eq!(read_numeric_input(&page, "budget", 10_000.0), 0.0);
        assert_eq!(read_numeric_input(&page, "deadline", 30.0), -5.0);
    }

    #[test]
    fn set_text_requires_existing_slot() {
        let mut page = MemoryPage::new().with_text_slot("out");
        page.set_text("out", "42%").expect("slot exists");
        assert_eq!(page.text("out"), Some("42%"));
        assert!(page.set_text("missing", "x").is_err());
    }
}
