//! Fare table storage.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::{FareRecord, Mode, Place};

use super::error::FareStoreError;

/// Row counts for both fare tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub bus: usize,
    pub train: usize,
}

impl TableCounts {
    /// Both tables hold at least one fare.
    pub fn is_populated(&self) -> bool {
        self.bus > 0 && self.train > 0
    }
}

/// Source of fare records.
///
/// Implementations hand back every fare for a route in storage order; the
/// [`FareRepository`](super::FareRepository) does the filtering, sorting
/// and aggregation on top.
pub trait FareStore: Send + Sync {
    /// All fares for a (mode, origin, destination) triple.
    fn route_fares(
        &self,
        mode: Mode,
        origin: &Place,
        destination: &Place,
    ) -> Result<Vec<FareRecord>, FareStoreError>;

    /// Number of fares held per mode.
    fn counts(&self) -> Result<TableCounts, FareStoreError>;
}

/// One mode's fares, indexed by route.
#[derive(Debug, Clone, Default)]
pub struct FareTable {
    rows: Vec<FareRecord>,
    by_route: HashMap<(Place, Place), Vec<usize>>,
}

impl FareTable {
    fn push(&mut self, record: FareRecord) {
        let key = (record.origin().clone(), record.destination().clone());
        self.by_route.entry(key).or_default().push(self.rows.len());
        self.rows.push(record);
    }

    /// Fares on a route, in insertion order.
    pub fn route(&self, origin: &Place, destination: &Place) -> Vec<FareRecord> {
        let key = (origin.clone(), destination.clone());
        self.by_route
            .get(&key)
            .map(|idxs| idxs.iter().map(|&i| self.rows[i].clone()).collect())
            .unwrap_or_default()
    }

    /// Every fare, in insertion order.
    pub fn rows(&self) -> &[FareRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The bus and train tables together.
///
/// The mode picks one of two fixed tables; there is no lookup by name.
#[derive(Debug, Clone, Default)]
pub struct FareTables {
    bus: FareTable,
    train: FareTable,
}

impl FareTables {
    /// Create empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build tables from records, routing each to its mode's table.
    pub fn from_records(records: impl IntoIterator<Item = FareRecord>) -> Self {
        let mut tables = Self::new();
        for record in records {
            tables.insert(record);
        }
        tables
    }

    /// Append a record to its mode's table.
    pub fn insert(&mut self, record: FareRecord) {
        match record.mode() {
            Mode::Bus => self.bus.push(record),
            Mode::Train => self.train.push(record),
        }
    }

    /// The table for a mode.
    pub fn table(&self, mode: Mode) -> &FareTable {
        match mode {
            Mode::Bus => &self.bus,
            Mode::Train => &self.train,
        }
    }

    pub fn counts(&self) -> TableCounts {
        TableCounts {
            bus: self.bus.len(),
            train: self.train.len(),
        }
    }
}

/// In-memory fare store.
///
/// Fare data is read-only during request handling. Readers share the lock;
/// the only writer is the seeding phase at startup.
#[derive(Debug, Default)]
pub struct InMemoryFareStore {
    tables: RwLock<FareTables>,
}

impl InMemoryFareStore {
    /// Create a store holding the given tables.
    pub fn new(tables: FareTables) -> Self {
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Swap in a fresh set of tables, dropping every existing fare.
    pub fn replace_all(&self, tables: FareTables) -> Result<(), FareStoreError> {
        let mut guard = self.tables.write().map_err(|_| FareStoreError::Poisoned)?;
        *guard = tables;
        Ok(())
    }
}

impl FareStore for InMemoryFareStore {
    fn route_fares(
        &self,
        mode: Mode,
        origin: &Place,
        destination: &Place,
    ) -> Result<Vec<FareRecord>, FareStoreError> {
        let guard = self.tables.read().map_err(|_| FareStoreError::Poisoned)?;
        Ok(guard.table(mode).route(origin, destination))
    }

    fn counts(&self) -> Result<TableCounts, FareStoreError> {
        let guard = self.tables.read().map_err(|_| FareStoreError::Poisoned)?;
        Ok(guard.counts())
    }
}
