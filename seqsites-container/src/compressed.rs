//! Column store that keeps one copy of each distinct column.
//!
//! Columns are addressed by logical position through a slot table: position
//! `p` refers to slot `position_index[p]` of `unique_sites`. Appending a column
//! whose content is already stored costs one slot reference.
//!
//! Slots are never reclaimed. Removing a position leaves its slot in place even
//! when nothing refers to it anymore, and removing a row can leave two slots
//! with identical content; neither is merged back.
use std::sync::Arc;

use fxhash::FxHashMap;
use log::{debug, trace};

use seqsites_core::{Column, SeqError, SeqResult, Sequence, Site, StateAlphabet};

use crate::shape::{StoreShape, sites_from_sequences};
use crate::traits::PositionedStore;

#[derive(Debug, Clone)]
pub struct CompressedSiteIndex<C: Column = Site> {
    shape: StoreShape,
    unique_sites: Vec<C>,
    position_index: Vec<usize>,
    slots: FxHashMap<C::Key, usize>,
}

impl<C: Column> CompressedSiteIndex<C> {
    ///
    /// Create an empty store for columns of the given alphabet.
    ///
    /// The number of rows is fixed by the first column added.
    ///
    pub fn new(alphabet: Arc<dyn StateAlphabet>) -> Self {
        CompressedSiteIndex {
            shape: StoreShape::new(alphabet),
            unique_sites: Vec::new(),
            position_index: Vec::new(),
            slots: FxHashMap::default(),
        }
    }

    /// Create an empty store with one named row per name.
    pub fn with_names(names: Vec<String>, alphabet: Arc<dyn StateAlphabet>) -> Self {
        CompressedSiteIndex {
            shape: StoreShape::with_names(alphabet, names),
            unique_sites: Vec::new(),
            position_index: Vec::new(),
            slots: FxHashMap::default(),
        }
    }

    pub fn alphabet(&self) -> &Arc<dyn StateAlphabet> {
        self.shape.alphabet()
    }

    pub fn row_names(&self) -> &[String] {
        self.shape.row_names()
    }

    pub fn number_of_unique_columns(&self) -> usize {
        self.unique_sites.len()
    }

    /// Distinct columns, in slot order.
    pub fn unique_columns(&self) -> &[C] {
        &self.unique_sites
    }

    /// Slot referenced by a logical position.
    pub fn slot_of(&self, pos: usize) -> SeqResult<usize> {
        self.position_index
            .get(pos)
            .copied()
            .ok_or_else(|| SeqError::out_of_range(pos, self.position_index.len(), "slot_of"))
    }

    // `column` must have passed `check_column`
    fn find_or_insert(&mut self, mut column: C) -> usize {
        self.shape.accept(&column);
        let key = column.content_key();
        if let Some(&slot) = self.slots.get(&key) {
            trace!("column already stored in slot {}", slot);
            return slot;
        }

        let slot = self.unique_sites.len();
        column.set_position(slot as i32);
        self.unique_sites.push(column);
        self.slots.insert(key, slot);
        slot
    }

    /// Make `pos` refer to the slot holding `column`.
    pub fn set_column_at(&mut self, pos: usize, column: C) -> SeqResult<()> {
        self.shape
            .check_position(pos, self.position_index.len(), "set_column_at")?;
        self.shape.check_column(&column)?;
        let slot = self.find_or_insert(column);
        self.position_index[pos] = slot;
        Ok(())
    }

    /// Remove `len` positions starting at `pos`.
    pub fn remove_columns(&mut self, pos: usize, len: usize) -> SeqResult<()> {
        let end = pos
            .checked_add(len)
            .filter(|&end| end <= self.position_index.len())
            .ok_or_else(|| {
                SeqError::out_of_range(
                    pos.saturating_add(len),
                    self.position_index.len() + 1,
                    "remove_columns",
                )
            })?;
        self.position_index.drain(pos..end);
        Ok(())
    }

    /// Weight of the resolved `state` in row `row` of column `col`.
    pub fn state_value_at(&self, col: usize, row: usize, state: i32) -> SeqResult<f64> {
        self.shape.check_row(row, "state_value_at")?;
        self.column_at(col)?.state_value_at(row, state)
    }

    /// Drop every column. The alphabet, the row names and the row count are kept.
    pub fn clear(&mut self) {
        self.unique_sites.clear();
        self.position_index.clear();
        self.slots.clear();
    }
}

impl CompressedSiteIndex<Site> {
    ///
    /// Compress aligned sequences.
    ///
    /// # Arguments
    /// * `sequences` - sequences of equal length sharing one alphabet
    /// * `alphabet` - the alphabet of the store, used when `sequences` is empty
    ///
    pub fn from_sequences(
        sequences: &[Sequence],
        alphabet: Arc<dyn StateAlphabet>,
    ) -> SeqResult<Self> {
        let (names, sites) = sites_from_sequences(sequences)?;
        let mut store = if sequences.is_empty() {
            Self::new(alphabet)
        } else {
            Self::with_names(names, alphabet)
        };
        for site in sites {
            store.append_column(site)?;
        }
        debug!(
            "compressed {} columns into {} unique columns",
            store.number_of_columns(),
            store.number_of_unique_columns()
        );
        Ok(store)
    }

    /// State of `row` at logical position `col`.
    pub fn value_at(&self, row: usize, col: usize) -> SeqResult<i32> {
        self.shape.check_row(row, "value_at")?;
        self.column_at(col)?.get(row)
    }

    /// Rebuild one row across all positions.
    pub fn sequence(&self, row: usize) -> SeqResult<Sequence> {
        self.shape.check_row(row, "sequence")?;
        let content = self
            .position_index
            .iter()
            .map(|&slot| self.unique_sites[slot].get(row))
            .collect::<SeqResult<Vec<_>>>()?;
        Sequence::new(self.shape.row_name(row), content, self.alphabet().clone())
    }
}

impl<C: Column> PositionedStore<C> for CompressedSiteIndex<C> {
    fn number_of_columns(&self) -> usize {
        self.position_index.len()
    }

    fn number_of_rows(&self) -> usize {
        self.shape.row_count()
    }

    fn column_at(&self, pos: usize) -> SeqResult<&C> {
        let slot = self.slot_of(pos)?;
        Ok(&self.unique_sites[slot])
    }

    fn append_column(&mut self, column: C) -> SeqResult<()> {
        self.shape.check_column(&column)?;
        let slot = self.find_or_insert(column);
        self.position_index.push(slot);
        Ok(())
    }

    fn insert_column_at(&mut self, pos: usize, column: C) -> SeqResult<()> {
        if pos > self.position_index.len() {
            return Err(SeqError::out_of_range(
                pos,
                self.position_index.len() + 1,
                "insert_column_at",
            ));
        }
        self.shape.check_column(&column)?;
        let slot = self.find_or_insert(column);
        self.position_index.insert(pos, slot);
        Ok(())
    }

    fn remove_column_at(&mut self, pos: usize) -> SeqResult<()> {
        self.shape
            .check_position(pos, self.position_index.len(), "remove_column_at")?;
        self.position_index.remove(pos);
        Ok(())
    }

    fn remove_row(&mut self, row: usize) -> SeqResult<()> {
        self.shape.check_row(row, "remove_row")?;
        for site in self.unique_sites.iter_mut() {
            site.remove_row(row)?;
        }
        self.shape.drop_row(row);

        // keys changed; the first slot with a given content wins new lookups
        self.slots.clear();
        for (slot, site) in self.unique_sites.iter().enumerate() {
            self.slots.entry(site.content_key()).or_insert(slot);
        }
        debug!(
            "removed row {}: {} unique columns, {} distinct contents",
            row,
            self.unique_sites.len(),
            self.slots.len()
        );
        Ok(())
    }
}
