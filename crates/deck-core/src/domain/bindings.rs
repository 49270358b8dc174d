//! Key binding table: configurable mapping from abstract control actions to
//! physical key codes.
//!
//! Key codes use the DOM `KeyboardEvent.code` string convention ("Enter",
//! "ArrowLeft", "KeyH"), which is what the shell's input layer reports.
//! Action names are the vocabulary the mirroring surface understands
//! ("left", "selectDown", "back").
//!
//! The table is ordered: `resolve` returns the *first* entry whose key code
//! matches, in insertion order.  Construction rejects tables where two
//! actions share a key code (or where an action appears twice), so in any
//! table built through [`BindingTable::bind`] every key resolves to at most
//! one action and the first-match rule never has to break a tie.

use thiserror::Error;

/// Errors that can occur when building a binding table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    /// The same action name was bound twice.
    #[error("action '{0}' is already bound")]
    DuplicateAction(String),

    /// Two actions were bound to the same physical key code.
    #[error("key code '{key_code}' is already bound to action '{bound_action}'")]
    DuplicateKeyCode {
        key_code: String,
        bound_action: String,
    },
}

/// Ordered mapping from action name to physical key code.
///
/// # Examples
///
/// ```rust
/// use deck_core::BindingTable;
///
/// let mut table = BindingTable::new();
/// table.bind("selectDown", "Enter").unwrap();
/// table.bind("back", "Backspace").unwrap();
///
/// assert_eq!(table.resolve("Enter"), Some("selectDown"));
/// assert_eq!(table.resolve("KeyQ"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    /// `(action, key_code)` pairs in insertion order.
    ///
    /// A `Vec` rather than a map: the table is small (a dozen entries), it
    /// is scanned linearly on the hot path anyway, and insertion order is
    /// part of the resolution contract.
    entries: Vec<(String, String)>,
}

impl BindingTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `action` to `key_code`, appending at the end of the resolution
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::DuplicateAction`] if `action` is already
    /// bound, or [`BindingError::DuplicateKeyCode`] if another action
    /// already claims `key_code`.
    pub fn bind(&mut self, action: &str, key_code: &str) -> Result<(), BindingError> {
        if self.entries.iter().any(|(a, _)| a == action) {
            return Err(BindingError::DuplicateAction(action.to_string()));
        }
        if let Some((bound, _)) = self.entries.iter().find(|(_, k)| k == key_code) {
            return Err(BindingError::DuplicateKeyCode {
                key_code: key_code.to_string(),
                bound_action: bound.clone(),
            });
        }
        self.entries.push((action.to_string(), key_code.to_string()));
        Ok(())
    }

    /// Builds a table from `(action, key_code)` pairs, preserving their order.
    ///
    /// # Errors
    ///
    /// Fails with the same errors as [`bind`](Self::bind) on the first
    /// duplicate encountered.
    pub fn from_entries<I, A, K>(entries: I) -> Result<Self, BindingError>
    where
        I: IntoIterator<Item = (A, K)>,
        A: AsRef<str>,
        K: AsRef<str>,
    {
        let mut table = Self::new();
        for (action, key_code) in entries {
            table.bind(action.as_ref(), key_code.as_ref())?;
        }
        Ok(table)
    }

    /// Resolves a physical key code to its bound action name.
    ///
    /// Returns the first matching entry in insertion order, or `None` when
    /// the key is unbound.  An unbound key is expected, not an error.
    pub fn resolve(&self, key_code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, k)| k == key_code)
            .map(|(action, _)| action.as_str())
    }

    /// Returns the key code bound to `action`, if any.
    pub fn key_for(&self, action: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(a, _)| a == action)
            .map(|(_, k)| k.as_str())
    }

    /// Returns `true` if any action is bound to `key_code`.
    pub fn contains_key_code(&self, key_code: &str) -> bool {
        self.entries.iter().any(|(_, k)| k == key_code)
    }

    /// Number of bindings in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no bindings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(action, key_code)` pairs in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, k)| (a.as_str(), k.as_str()))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
