//! Builder for declaring states.

use crate::core::{EntryAction, StateId};
use crate::error::StateDeclarationError;

/// Builder for declaring a state with a fluent API.
#[derive(Debug, Default)]
pub struct StateBuilder {
    id: Option<StateId>,
    entry: Option<EntryAction>,
}

impl StateBuilder {
    /// Create a new state builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the state identifier (required).
    pub fn id(mut self, id: impl Into<StateId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the entry action (required).
    pub fn on_entry<F>(mut self, entry: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.entry = Some(EntryAction::new(entry));
        self
    }

    /// Validate the declaration.
    pub fn build(self) -> Result<(StateId, EntryAction), StateDeclarationError> {
        let id = self.id.ok_or(StateDeclarationError::MissingId)?;
        let entry = self.entry.ok_or(StateDeclarationError::MissingEntryAction)?;
        Ok((id, entry))
    }
}
