use tracing::debug;

use crate::form::SubmissionResult;

use super::{EditorContext, SubmitHandle};

struct Tab {
    label: String,
    handle: Box<dyn SubmitHandle>,
}

/// Parent multi-tab edit screen. Child editors register a [`SubmitHandle`]
/// each; the shared save action drives the active tab through its handle and
/// never touches editor internals.
#[derive(Default)]
pub struct EditHouseScreen {
    tabs: Vec<Tab>,
    active: usize,
}

impl EditHouseScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tab(&mut self, label: impl Into<String>, handle: Box<dyn SubmitHandle>) {
        self.tabs.push(Tab {
            label: label.into(),
            handle,
        });
    }

    pub fn tab_labels(&self) -> impl Iterator<Item = &str> {
        self.tabs.iter().map(|tab| tab.label.as_str())
    }

    pub fn active_tab(&self) -> usize {
        self.active
    }

    pub fn select_tab(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active = index;
        }
    }

    /// Saves the active tab. A screen without tabs has nothing to save.
    pub fn save_active(&mut self, ctx: &mut EditorContext<'_>) -> SubmissionResult {
        match self.tabs.get_mut(self.active) {
            Some(tab) => {
                debug!(tab = %tab.label, "saving active tab");
                tab.handle.submit(ctx)
            }
            None => SubmissionResult::Saved,
        }
    }

    /// Saves every tab in order, stopping at the first failure so the user
    /// lands on a single set of errors at a time.
    pub fn save_all(&mut self, ctx: &mut EditorContext<'_>) -> SubmissionResult {
        for tab in &mut self.tabs {
            let result = tab.handle.submit(ctx);
            if !result.is_saved() {
                debug!(tab = %tab.label, ?result, "tab save failed, stopping");
                return result;
            }
        }
        SubmissionResult::Saved
    }
}
