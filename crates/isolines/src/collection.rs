//! Named isoline groups.
//!
//! The collection is plain caller-owned state. Group order is insertion
//! order, which is also the order of listings and exports.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use isoline_common::CollectionError;

use crate::generator::{Isoline, IsolineGroup};

/// Normalize a user-supplied group name: trimmed, lowercased, and every run
/// of whitespace replaced by a single underscore.
pub fn normalize_group_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Display name of the isoline at `index` within `group` (1-based).
pub fn isoline_name(group: &str, index: usize) -> String {
    format!("{} {}", group, index + 1)
}

/// Heading for a group: the key with its first character upper-cased.
pub fn group_label(group: &str) -> String {
    let mut chars = group.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A listed isoline with its derived name.
#[derive(Debug, Clone, PartialEq)]
pub struct IsolineEntry<'a> {
    pub group: &'a str,
    pub index: usize,
    pub name: String,
    pub isoline: &'a Isoline,
}

/// Mapping from group name to its isolines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IsolinesCollection {
    groups: IndexMap<String, IsolineGroup>,
}

impl IsolinesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty group from a user-supplied name.
    ///
    /// Returns the normalized key.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyGroupName`] when nothing is left after
    /// normalization and [`CollectionError::GroupExists`] when the key is
    /// already taken.
    pub fn create_group(&mut self, name: &str) -> Result<String, CollectionError> {
        let key = normalize_group_name(name);
        if key.is_empty() {
            return Err(CollectionError::EmptyGroupName);
        }
        if self.groups.contains_key(&key) {
            return Err(CollectionError::GroupExists(key));
        }

        self.groups.insert(key.clone(), Vec::new());
        tracing::debug!(group = %key, "Created isoline group");
        Ok(key)
    }

    /// Insert or replace a group, keeping its position if it already exists.
    ///
    /// Returns the previous isolines of that group.
    pub fn insert_group(
        &mut self,
        name: impl Into<String>,
        isolines: IsolineGroup,
    ) -> Option<IsolineGroup> {
        self.groups.insert(name.into(), isolines)
    }

    /// Remove one isoline; the group goes away with its last isoline.
    pub fn remove_isoline(&mut self, group: &str, index: usize) -> Result<Isoline, CollectionError> {
        let isolines = self
            .groups
            .get_mut(group)
            .ok_or_else(|| CollectionError::GroupNotFound(group.to_string()))?;

        if index >= isolines.len() {
            return Err(CollectionError::IsolineNotFound {
                group: group.to_string(),
                index,
                len: isolines.len(),
            });
        }

        let removed = isolines.remove(index);
        if isolines.is_empty() {
            self.groups.shift_remove(group);
            tracing::debug!(group, "Removed last isoline, dropping group");
        }
        Ok(removed)
    }

    /// Remove a whole group.
    pub fn remove_group(&mut self, group: &str) -> Result<IsolineGroup, CollectionError> {
        self.groups
            .shift_remove(group)
            .ok_or_else(|| CollectionError::GroupNotFound(group.to_string()))
    }

    /// Remove every group.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    pub fn get(&self, group: &str) -> Option<&[Isoline]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    pub fn contains_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    /// Group names in insertion order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Groups and their isolines in insertion order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Isoline])> {
        self.groups
            .iter()
            .map(|(name, isolines)| (name.as_str(), isolines.as_slice()))
    }

    /// Every isoline with its derived name, group by group.
    pub fn entries(&self) -> impl Iterator<Item = IsolineEntry<'_>> {
        self.groups.iter().flat_map(|(group, isolines)| {
            isolines.iter().enumerate().map(move |(index, isoline)| IsolineEntry {
                group: group.as_str(),
                index,
                name: isoline_name(group, index),
                isoline,
            })
        })
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of isolines across all groups.
    pub fn total_isolines(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
