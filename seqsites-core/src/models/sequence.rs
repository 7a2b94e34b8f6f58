use std::sync::Arc;

use super::check_states;
use crate::alphabet::StateAlphabet;
use crate::errors::{SeqError, SeqResult};

///
/// A named, encoded sequence
///
#[derive(Debug, Clone)]
pub struct Sequence {
    name: String,
    content: Vec<i32>,
    alphabet: Arc<dyn StateAlphabet>,
}

impl Sequence {
    pub fn new(
        name: impl Into<String>,
        content: Vec<i32>,
        alphabet: Arc<dyn StateAlphabet>,
    ) -> SeqResult<Self> {
        check_states(&content, alphabet.as_ref())?;
        Ok(Sequence {
            name: name.into(),
            content,
            alphabet,
        })
    }

    pub fn from_text(
        name: impl Into<String>,
        text: &str,
        alphabet: Arc<dyn StateAlphabet>,
    ) -> SeqResult<Self> {
        let content = alphabet.encode(text)?;
        Ok(Sequence {
            name: name.into(),
            content,
            alphabet,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn content(&self) -> &[i32] {
        &self.content
    }

    pub fn alphabet(&self) -> &Arc<dyn StateAlphabet> {
        &self.alphabet
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn get(&self, pos: usize) -> SeqResult<i32> {
        self.content
            .get(pos)
            .copied()
            .ok_or_else(|| SeqError::out_of_range(pos, self.content.len(), "Sequence::get"))
    }

    pub fn to_text(&self) -> SeqResult<String> {
        self.alphabet.decode(&self.content)
    }

    /// Same name and alphabet, new content.
    pub fn with_content(&self, content: Vec<i32>) -> SeqResult<Self> {
        Sequence::new(self.name.clone(), content, self.alphabet.clone())
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.content == other.content
            && self.alphabet.alphabet_type() == other.alphabet.alphabet_type()
    }
}
