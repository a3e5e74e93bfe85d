use ahash::{AHashMap, AHashSet};

use crate::{Location, Result};

/// Sparse set of living locations, indexed by row and then by column.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LivingIndex {
    rows: AHashMap<usize, AHashSet<usize>>,
    count: usize,
}

impl LivingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy that shares no storage with `self`.
    pub fn try_clone(&self) -> Result<Self> {
        let mut rows = AHashMap::new();
        rows.try_reserve(self.rows.len())?;
        for (&y, columns) in &self.rows {
            let mut copy = AHashSet::new();
            copy.try_reserve(columns.len())?;
            copy.extend(columns.iter().copied());
            rows.insert(y, copy);
        }
        Ok(Self {
            rows,
            count: self.count,
        })
    }

    /// Marks `location` as alive; does nothing if it already is.
    pub fn set(&mut self, location: Location) {
        if self.rows.entry(location.y).or_default().insert(location.x) {
            self.count += 1;
        }
    }

    /// Marks `location` as dead; does nothing if it already is.
    pub fn remove(&mut self, location: Location) {
        let Some(columns) = self.rows.get_mut(&location.y) else {
            return;
        };
        if columns.remove(&location.x) {
            self.count -= 1;
            if columns.is_empty() {
                self.rows.remove(&location.y);
            }
        }
    }

    pub fn contains(&self, location: Location) -> bool {
        self.rows
            .get(&location.y)
            .is_some_and(|columns| columns.contains(&location.x))
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Every living location, in no particular order.
    pub fn all(&self) -> Vec<Location> {
        let mut result = Vec::with_capacity(self.count);
        for (&y, columns) in &self.rows {
            result.extend(columns.iter().map(|&x| Location { x, y }));
        }
        result
    }
}
