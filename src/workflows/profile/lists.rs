use serde::Serialize;

use crate::config::DraftPolicy;

/// Stable synthetic identifier assigned to a row at insertion. Keys are never
/// reused within a list, so consumers tracking rows survive middle deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RowKey(u64);

/// Behavior dials for one dynamic list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRules {
    /// Maximum number of rows; appends beyond it are silent no-ops.
    pub ceiling: Option<usize>,
    /// When set, the row at index 0 cannot be removed.
    pub protected_head: bool,
    /// Edits are truncated to this many characters before storage.
    pub max_entry_chars: Option<usize>,
}

impl ListRules {
    /// Majors: at most `max_majors` rows, primary major protected.
    pub fn majors(policy: &DraftPolicy) -> Self {
        Self {
            ceiling: Some(policy.max_majors),
            protected_head: true,
            max_entry_chars: None,
        }
    }

    /// Positions: unbounded row count, entries clipped at input time.
    pub fn positions(policy: &DraftPolicy) -> Self {
        Self {
            ceiling: None,
            protected_head: false,
            max_entry_chars: Some(policy.max_position_chars),
        }
    }
}

/// One user-visible row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub key: RowKey,
    pub value: String,
}

/// Errors raised by rejected list mutations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("the first entry is protected and cannot be removed")]
    ProtectedEntry,
    #[error("no entry at index {index}")]
    OutOfRange { index: usize },
}

/// Ordered, index-addressed list of text rows with stable per-row keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryList {
    rules: ListRules,
    rows: Vec<Row>,
    next_key: u64,
}

impl EntryList {
    /// A list holding a single blank row, the shape every draft starts with.
    pub fn new(rules: ListRules) -> Self {
        Self::seeded(rules, [String::new()])
    }

    /// A list pre-filled from stored values (edit flow). Values are clipped to
    /// the entry limit but the ceiling is not enforced against seed data.
    pub fn seeded<I>(rules: ListRules, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut list = Self {
            rules,
            rows: Vec::new(),
            next_key: 0,
        };
        for value in values {
            let clipped = list.clip(value);
            let key = list.mint_key();
            list.rows.push(Row {
                key,
                value: clipped,
            });
        }
        list
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.value.as_str())
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(|row| row.value.as_str())
    }

    /// Append one blank row. At the ceiling nothing happens and `false` is
    /// returned; the UI disables the affordance rather than surfacing an error.
    pub fn push_blank(&mut self) -> bool {
        if let Some(ceiling) = self.rules.ceiling {
            if self.rows.len() >= ceiling {
                return false;
            }
        }
        let key = self.mint_key();
        self.rows.push(Row {
            key,
            value: String::new(),
        });
        true
    }

    /// Replace the value at `index`, clipping to the entry limit first.
    pub fn edit(&mut self, index: usize, value: impl Into<String>) -> Result<(), ListError> {
        let clipped = self.clip(value.into());
        match self.rows.get_mut(index) {
            Some(row) => {
                row.value = clipped;
                Ok(())
            }
            None => Err(ListError::OutOfRange { index }),
        }
    }

    /// Remove the row at `index`. Removing a protected head is an explicit
    /// rejection and leaves the list untouched.
    pub fn remove(&mut self, index: usize) -> Result<(), ListError> {
        if index >= self.rows.len() {
            return Err(ListError::OutOfRange { index });
        }
        if index == 0 && self.rules.protected_head {
            return Err(ListError::ProtectedEntry);
        }
        self.rows.remove(index);
        Ok(())
    }

    fn mint_key(&mut self) -> RowKey {
        let key = RowKey(self.next_key);
        self.next_key += 1;
        key
    }

    fn clip(&self, value: String) -> String {
        match self.rules.max_entry_chars {
            Some(max) => match value.char_indices().nth(max) {
                Some((cut, _)) => value[..cut].to_string(),
                None => value,
            },
            None => value,
        }
    }
}
