use crate::data::MUNICIPALITIES;
use crate::domain::model::{LocationKind, ResolvedLocation};
use std::collections::HashMap;
use std::sync::Arc;

const REGION_SUFFIX: &str = " län";

#[derive(Debug, Clone)]
struct LocationEntry {
    name: &'static str,
    id: &'static str,
    kind: LocationKind,
}

/// Immutable name -> id lookup built once at startup.
///
/// Holds the canonical names plus a precomputed normalized index. Nothing
/// mutates it after construction, so it is shared behind an `Arc` and read
/// concurrently without locking.
#[derive(Debug)]
pub struct LocationTable {
    entries: Vec<LocationEntry>,
    exact: HashMap<&'static str, usize>,
    normalized: HashMap<String, usize>,
    /// Normalized keys in canonical table order, for the partial-match scan.
    scan_order: Vec<(String, usize)>,
}

impl LocationTable {
    pub fn new(source: &[(&'static str, &'static str)]) -> Self {
        let mut entries = Vec::with_capacity(source.len());
        let mut exact = HashMap::with_capacity(source.len());
        let mut normalized = HashMap::with_capacity(source.len());
        let mut scan_order = Vec::with_capacity(source.len());

        for &(name, id) in source {
            let index = entries.len();
            let kind = if name.ends_with(REGION_SUFFIX) {
                LocationKind::Region
            } else {
                LocationKind::Municipality
            };
            entries.push(LocationEntry { name, id, kind });
            exact.entry(name).or_insert(index);

            let key = normalize_name(name);
            if key.is_empty() {
                continue;
            }
            if !normalized.contains_key(&key) {
                normalized.insert(key.clone(), index);
                scan_order.push((key, index));
            }
        }

        Self {
            entries,
            exact,
            normalized,
            scan_order,
        }
    }

    /// The bundled table of Swedish municipalities and counties.
    pub fn swedish() -> Self {
        Self::new(MUNICIPALITIES)
    }

    fn resolved(&self, index: usize) -> ResolvedLocation {
        let entry = &self.entries[index];
        ResolvedLocation {
            id: entry.id.to_string(),
            kind: entry.kind,
            name: entry.name.to_string(),
        }
    }
}

/// Lower-cases, folds Swedish diacritics to ASCII and drops everything that is
/// not a letter or digit.
pub fn normalize_name(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'å' | 'ä' => 'a',
            'ö' => 'o',
            'é' | 'è' | 'ë' => 'e',
            'ü' => 'u',
            other => other,
        })
        .filter(|c| c.is_alphanumeric())
        .collect()
}

#[derive(Debug, Clone)]
pub struct LocationResolver {
    table: Arc<LocationTable>,
}

impl LocationResolver {
    pub fn new(table: Arc<LocationTable>) -> Self {
        Self { table }
    }

    /// Maps a free-text place name to a location id.
    ///
    /// Tries, in order: the canonical name verbatim, the normalized name, and
    /// finally a containment scan in either direction over normalized keys.
    /// The scan returns the first hit in table order; when several entries
    /// overlap with the input the choice is arbitrary, not a guarantee.
    /// `None` means "search without a location filter".
    pub fn resolve(&self, name: &str) -> Option<ResolvedLocation> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        if let Some(&index) = self.table.exact.get(name) {
            tracing::debug!("Exact location match: '{}' -> {}", name, self.table.entries[index].id);
            return Some(self.table.resolved(index));
        }

        let key = normalize_name(name);
        if key.is_empty() {
            tracing::debug!("Location '{}' normalizes to nothing", name);
            return None;
        }

        if let Some(&index) = self.table.normalized.get(&key) {
            tracing::debug!(
                "Normalized location match: '{}' ({}) -> {}",
                name,
                key,
                self.table.entries[index].id
            );
            return Some(self.table.resolved(index));
        }

        let hit = self
            .table
            .scan_order
            .iter()
            .find(|(candidate, _)| candidate.contains(&key) || key.contains(candidate.as_str()));

        match hit {
            Some((candidate, index)) => {
                tracing::debug!(
                    "Partial location match: '{}' -> {} (key: {})",
                    name,
                    self.table.entries[*index].id,
                    candidate
                );
                Some(self.table.resolved(*index))
            }
            None => {
                tracing::warn!("Could not resolve location '{}' (normalized: {})", name, key);
                None
            }
        }
    }

    /// Canonical name for a location id, if the table knows it.
    pub fn name_for_id(&self, id: &str) -> Option<&str> {
        self.table
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.name)
    }
}
