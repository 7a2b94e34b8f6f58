use std::sync::Arc;

use seqsites_core::{Column, SeqError, SeqResult, Sequence, Site, StateAlphabet};

///
/// What every column of a store must agree on: the alphabet and the number
/// of rows. Row names, when given, fix the number of rows up front.
///
#[derive(Debug, Clone)]
pub(crate) struct StoreShape {
    alphabet: Arc<dyn StateAlphabet>,
    row_count: Option<usize>,
    row_names: Vec<String>,
}

impl StoreShape {
    pub(crate) fn new(alphabet: Arc<dyn StateAlphabet>) -> Self {
        StoreShape {
            alphabet,
            row_count: None,
            row_names: Vec::new(),
        }
    }

    pub(crate) fn with_names(alphabet: Arc<dyn StateAlphabet>, row_names: Vec<String>) -> Self {
        StoreShape {
            alphabet,
            row_count: Some(row_names.len()),
            row_names,
        }
    }

    pub(crate) fn alphabet(&self) -> &Arc<dyn StateAlphabet> {
        &self.alphabet
    }

    pub(crate) fn row_count(&self) -> usize {
        self.row_count.unwrap_or(0)
    }

    pub(crate) fn row_names(&self) -> &[String] {
        &self.row_names
    }

    pub(crate) fn row_name(&self, row: usize) -> String {
        self.row_names.get(row).cloned().unwrap_or_default()
    }

    /// Check a column before it goes in, without touching anything.
    pub(crate) fn check_column<C: Column>(&self, column: &C) -> SeqResult<()> {
        let expected = self.alphabet.alphabet_type();
        let found = column.alphabet_type();
        if expected != found {
            return Err(SeqError::AlphabetMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
        if let Some(rows) = self.row_count {
            if column.row_count() != rows {
                return Err(SeqError::DimensionMismatch {
                    expected: rows,
                    found: column.row_count(),
                });
            }
        }
        Ok(())
    }

    /// Record the row count of the first column.
    pub(crate) fn accept<C: Column>(&mut self, column: &C) {
        self.row_count.get_or_insert(column.row_count());
    }

    pub(crate) fn check_row(&self, row: usize, context: &'static str) -> SeqResult<()> {
        if row >= self.row_count() {
            return Err(SeqError::out_of_range(row, self.row_count(), context));
        }
        Ok(())
    }

    pub(crate) fn check_position(
        &self,
        pos: usize,
        len: usize,
        context: &'static str,
    ) -> SeqResult<()> {
        if pos >= len {
            return Err(SeqError::out_of_range(pos, len, context));
        }
        Ok(())
    }

    /// Forget one row; `check_row` must have passed.
    pub(crate) fn drop_row(&mut self, row: usize) {
        if let Some(rows) = self.row_count.as_mut() {
            *rows -= 1;
        }
        if row < self.row_names.len() {
            self.row_names.remove(row);
        }
    }
}

///
/// Cut aligned sequences into sites, one per column.
///
/// All sequences must share an alphabet and a length.
///
pub(crate) fn sites_from_sequences(sequences: &[Sequence]) -> SeqResult<(Vec<String>, Vec<Site>)> {
    let Some(first) = sequences.first() else {
        return Ok((Vec::new(), Vec::new()));
    };
    let alphabet = first.alphabet().clone();
    let length = first.len();

    for sequence in sequences {
        let found = sequence.alphabet().alphabet_type();
        if found != alphabet.alphabet_type() {
            return Err(SeqError::AlphabetMismatch {
                expected: alphabet.alphabet_type().to_string(),
                found: found.to_string(),
            });
        }
        if sequence.len() != length {
            return Err(SeqError::DimensionMismatch {
                expected: length,
                found: sequence.len(),
            });
        }
    }

    let names = sequences.iter().map(|s| s.name().to_string()).collect();
    let sites = (0..length)
        .map(|pos| {
            let content = sequences.iter().map(|s| s.content()[pos]).collect();
            Site::new(content, alphabet.clone()).map(|site| site.with_position(pos as i32 + 1))
        })
        .collect::<SeqResult<Vec<_>>>()?;
    Ok((names, sites))
}
