//! Session-scoped temporary classifications keyed by player name.
//!
//! War and helper share one map so that a name can never hold both sides;
//! mute lives in its own map and is independent of either side. Each map holds
//! at most one record per name.

use hashbrown::HashMap;
use rosterwatch_types::Category;
use rosterwatch_types::formatting::quoted;

use crate::error::OverlayError;
use crate::messages::MessageSink;

/// One temporary classification of a player name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempEntry {
    pub name: String,
    pub category: Category,
}

/// Per-name view of the overlay, consumed by the status aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TempFlags {
    pub war: bool,
    pub helper: bool,
    pub mute: bool,
}

/// Result of a successful add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// The name already held this category; nothing was inserted
    pub already_present: bool,
    /// Opposite side that was implicitly cleared
    pub replaced: Option<Category>,
}

#[derive(Debug, Clone, Copy)]
struct Record {
    category: Category,
    /// Insertion sequence, for stable listing
    seq: u64,
}

/// Owns every temporary classification of the running session.
#[derive(Debug, Clone, Default)]
pub struct OverlayStore {
    sides: HashMap<String, Record>,
    mutes: HashMap<String, u64>,
    next_seq: u64,
}

fn check_name(name: &str) -> Result<(), OverlayError> {
    if name.trim().is_empty() {
        return Err(OverlayError::EmptyIdentifier);
    }
    Ok(())
}

fn added_message(category: Category, name: &str) -> String {
    format!("Added {} to the Temp {} List", quoted(name), category)
}

fn removed_message(category: Category, name: &str) -> String {
    format!("Removed {} from the Temp {} List", quoted(name), category)
}

impl OverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Mutation ---

    /// Classify `name` under `category` and confirm through `sink`.
    ///
    /// Adding a side silently clears the opposite side for the same name.
    /// Re-adding an existing category leaves exactly one entry.
    pub fn add(
        &mut self,
        category: Category,
        name: &str,
        sink: &mut dyn MessageSink,
    ) -> Result<AddOutcome, OverlayError> {
        check_name(name)?;
        let outcome = self.insert(category, name);
        sink.push(added_message(category, name));
        tracing::debug!(
            name = %name,
            category = ?category,
            replaced = ?outcome.replaced,
            already_present = outcome.already_present,
            "Temp entry added"
        );
        Ok(outcome)
    }

    /// Remove `name` from `category`.
    ///
    /// Emits exactly one "removed" or "couldn't find" line unless `silent`.
    pub fn remove(
        &mut self,
        category: Category,
        name: &str,
        silent: bool,
        sink: &mut dyn MessageSink,
    ) -> Result<(), OverlayError> {
        check_name(name)?;
        if self.take(category, name) {
            if !silent {
                sink.push(removed_message(category, name));
            }
            tracing::debug!(name = %name, category = ?category, "Temp entry removed");
            Ok(())
        } else {
            let err = OverlayError::EntryNotFound {
                category,
                name: name.to_string(),
            };
            if !silent {
                sink.push(err.to_string());
            }
            Err(err)
        }
    }

    pub fn add_war(
        &mut self,
        name: &str,
        sink: &mut dyn MessageSink,
    ) -> Result<AddOutcome, OverlayError> {
        self.add(Category::War, name, sink)
    }

    pub fn remove_war(
        &mut self,
        name: &str,
        silent: bool,
        sink: &mut dyn MessageSink,
    ) -> Result<(), OverlayError> {
        self.remove(Category::War, name, silent, sink)
    }

    pub fn add_helper(
        &mut self,
        name: &str,
        sink: &mut dyn MessageSink,
    ) -> Result<AddOutcome, OverlayError> {
        self.add(Category::Helper, name, sink)
    }

    pub fn remove_helper(
        &mut self,
        name: &str,
        silent: bool,
        sink: &mut dyn MessageSink,
    ) -> Result<(), OverlayError> {
        self.remove(Category::Helper, name, silent, sink)
    }

    pub fn add_mute(
        &mut self,
        name: &str,
        sink: &mut dyn MessageSink,
    ) -> Result<AddOutcome, OverlayError> {
        self.add(Category::Mute, name, sink)
    }

    pub fn remove_mute(
        &mut self,
        name: &str,
        silent: bool,
        sink: &mut dyn MessageSink,
    ) -> Result<(), OverlayError> {
        self.remove(Category::Mute, name, silent, sink)
    }

    /// Drop every entry (session reset). Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.len();
        self.sides.clear();
        self.mutes.clear();
        tracing::debug!(dropped, "Temp lists cleared");
        dropped
    }

    fn insert(&mut self, category: Category, name: &str) -> AddOutcome {
        let seq = self.next_seq;

        let Some(opposite) = category.opposite() else {
            let already_present = self.mutes.contains_key(name);
            if !already_present {
                self.mutes.insert(name.to_string(), seq);
                self.next_seq += 1;
            }
            return AddOutcome {
                already_present,
                replaced: None,
            };
        };

        match self.sides.get_mut(name) {
            Some(record) if record.category == category => AddOutcome {
                already_present: true,
                replaced: None,
            },
            Some(record) => {
                debug_assert_eq!(record.category, opposite);
                *record = Record { category, seq };
                self.next_seq += 1;
                AddOutcome {
                    already_present: false,
                    replaced: Some(opposite),
                }
            }
            None => {
                self.sides.insert(name.to_string(), Record { category, seq });
                self.next_seq += 1;
                AddOutcome {
                    already_present: false,
                    replaced: None,
                }
            }
        }
    }

    fn take(&mut self, category: Category, name: &str) -> bool {
        if !category.is_side() {
            return self.mutes.remove(name).is_some();
        }
        if self.contains(category, name) {
            self.sides.remove(name);
            true
        } else {
            false
        }
    }

    // --- Queries ---

    pub fn contains(&self, category: Category, name: &str) -> bool {
        if category.is_side() {
            self.sides.get(name).is_some_and(|r| r.category == category)
        } else {
            self.mutes.contains_key(name)
        }
    }

    pub fn is_temp_war(&self, name: &str) -> bool {
        self.contains(Category::War, name)
    }

    pub fn is_temp_helper(&self, name: &str) -> bool {
        self.contains(Category::Helper, name)
    }

    pub fn is_temp_mute(&self, name: &str) -> bool {
        self.contains(Category::Mute, name)
    }

    pub fn flags_for(&self, name: &str) -> TempFlags {
        let side = self.sides.get(name).map(|r| r.category);
        TempFlags {
            war: side == Some(Category::War),
            helper: side == Some(Category::Helper),
            mute: self.mutes.contains_key(name),
        }
    }

    pub fn len(&self) -> usize {
        self.sides.len() + self.mutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sides.is_empty() && self.mutes.is_empty()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> Vec<TempEntry> {
        let mut ordered: Vec<(u64, TempEntry)> = self
            .sides
            .iter()
            .map(|(name, r)| {
                (
                    r.seq,
                    TempEntry {
                        name: name.clone(),
                        category: r.category,
                    },
                )
            })
            .chain(self.mutes.iter().map(|(name, seq)| {
                (
                    *seq,
                    TempEntry {
                        name: name.clone(),
                        category: Category::Mute,
                    },
                )
            }))
            .collect();
        ordered.sort_by_key(|(seq, _)| *seq);
        ordered.into_iter().map(|(_, entry)| entry).collect()
    }
}
