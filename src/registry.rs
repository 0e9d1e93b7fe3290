//! Ordered option registry owned by each menu node.
//!
//! Indices are purely positional: 0-based in the API, 1-based in the
//! rendered listing. Inserting past the end appends; looking up past the
//! end fails with `InvalidIndex`.

use std::fmt;

use crate::action::MenuAction;
use crate::error::{MenuError, MenuResult};
use crate::menu::Menu;

/// What selecting a registered entry does.
pub enum EntryAction {
    /// Labeled placeholder; selecting it just re-displays the screen
    None,
    /// Leaf action with a single entry point
    Handler(Box<dyn MenuAction>),
    /// Nested menu to descend into
    Submenu(Menu),
}

impl EntryAction {
    /// Wraps a closure or `MenuAction` implementor as a handler entry.
    pub fn handler(action: impl MenuAction + 'static) -> Self {
        Self::Handler(Box::new(action))
    }

    pub fn is_submenu(&self) -> bool {
        matches!(self, Self::Submenu(_))
    }
}

impl fmt::Debug for EntryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Handler(_) => f.write_str("Handler"),
            Self::Submenu(menu) => f.debug_tuple("Submenu").field(&menu.name()).finish(),
        }
    }
}

#[derive(Debug)]
struct OptionEntry {
    label: String,
    action: EntryAction,
}

/// Ordered collection of `(label, action)` entries.
#[derive(Debug, Default)]
pub struct OptionRegistry {
    entries: Vec<OptionEntry>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts at `at`, shifting later entries up by one. Any `at` past the
    /// end appends instead. Returns the index actually used.
    pub fn insert(&mut self, label: &str, action: EntryAction, at: usize) -> usize {
        let entry = OptionEntry {
            label: label.to_string(),
            action,
        };
        if at >= self.entries.len() {
            self.entries.push(entry);
            self.entries.len() - 1
        } else {
            self.entries.insert(at, entry);
            at
        }
    }

    /// Appends at the end. Returns the index used.
    pub fn append(&mut self, label: &str, action: EntryAction) -> usize {
        self.insert(label, action, self.entries.len())
    }

    /// Removes the entry at `index`, shifting later entries down.
    pub fn remove_at(&mut self, index: usize) -> MenuResult<()> {
        if index >= self.entries.len() {
            return Err(MenuError::InvalidIndex(index));
        }
        self.entries.remove(index);
        Ok(())
    }

    /// Returns the action stored at `index` (which may be the placeholder).
    pub fn get(&self, index: usize) -> MenuResult<&EntryAction> {
        self.entries
            .get(index)
            .map(|entry| &entry.action)
            .ok_or(MenuError::InvalidIndex(index))
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> MenuResult<&mut EntryAction> {
        self.entries
            .get_mut(index)
            .map(|entry| &mut entry.action)
            .ok_or(MenuError::InvalidIndex(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the 1-based listing, one `"<n> : <label>"` line per entry,
    /// with no trailing newline. Empty registry renders the empty string.
    pub fn render(&self) -> String {
        let lines: Vec<String> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{} : {}", i + 1, entry.label))
            .collect();
        lines.join("\n")
    }
}
