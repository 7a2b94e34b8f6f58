use std::sync::Arc;

use super::{Column, check_states};
use crate::alphabet::StateAlphabet;
use crate::errors::{SeqError, SeqResult};

///
/// Site struct, the states of every sequence at one alignment column
///
#[derive(Debug, Clone)]
pub struct Site {
    content: Vec<i32>,
    position: i32,
    alphabet: Arc<dyn StateAlphabet>,
}

impl Site {
    pub fn new(content: Vec<i32>, alphabet: Arc<dyn StateAlphabet>) -> SeqResult<Self> {
        check_states(&content, alphabet.as_ref())?;
        Ok(Site {
            content,
            position: 0,
            alphabet,
        })
    }

    /// Build a site from one symbol per sequence.
    pub fn from_symbols(symbols: &[&str], alphabet: Arc<dyn StateAlphabet>) -> SeqResult<Self> {
        let content = symbols
            .iter()
            .map(|symbol| alphabet.char_to_int(symbol))
            .collect::<SeqResult<Vec<_>>>()?;
        Ok(Site {
            content,
            position: 0,
            alphabet,
        })
    }

    /// Build a site from a string holding the states of all sequences back to back.
    pub fn from_text(text: &str, alphabet: Arc<dyn StateAlphabet>) -> SeqResult<Self> {
        let content = alphabet.encode(text)?;
        Ok(Site {
            content,
            position: 0,
            alphabet,
        })
    }

    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn content(&self) -> &[i32] {
        &self.content
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn get(&self, row: usize) -> SeqResult<i32> {
        self.content
            .get(row)
            .copied()
            .ok_or_else(|| SeqError::out_of_range(row, self.content.len(), "Site::get"))
    }

    pub fn set(&mut self, row: usize, state: i32) -> SeqResult<()> {
        if row >= self.content.len() {
            return Err(SeqError::out_of_range(row, self.content.len(), "Site::set"));
        }
        check_states(&[state], self.alphabet.as_ref())?;
        self.content[row] = state;
        Ok(())
    }

    pub fn to_text(&self) -> SeqResult<String> {
        self.alphabet.decode(&self.content)
    }
}

/// Sites compare by content and alphabet; the position is ignored.
impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
            && self.alphabet.alphabet_type() == other.alphabet.alphabet_type()
    }
}

impl Column for Site {
    type Key = Vec<i32>;

    fn row_count(&self) -> usize {
        self.content.len()
    }

    fn alphabet(&self) -> &Arc<dyn StateAlphabet> {
        &self.alphabet
    }

    fn content_key(&self) -> Vec<i32> {
        self.content.clone()
    }

    fn position(&self) -> i32 {
        self.position
    }

    fn set_position(&mut self, position: i32) {
        self.position = position;
    }

    fn remove_row(&mut self, row: usize) -> SeqResult<()> {
        if row >= self.content.len() {
            return Err(SeqError::out_of_range(row, self.content.len(), "Site::remove_row"));
        }
        self.content.remove(row);
        Ok(())
    }

    fn state_value_at(&self, row: usize, state: i32) -> SeqResult<f64> {
        let code = self.get(row)?;
        Ok(if self.alphabet.is_resolved_in(code, state)? {
            1.0
        } else {
            0.0
        })
    }
}
