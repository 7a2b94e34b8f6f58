pub mod probabilistic_site;
pub mod sequence;
pub mod site;

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use crate::alphabet::{AlphabetType, StateAlphabet};
use crate::errors::{SeqError, SeqResult};

// re-export for cleaner imports
pub use self::probabilistic_site::ProbabilisticSite;
pub use self::sequence::Sequence;
pub use self::site::Site;

///
/// One aligned column: a value per sequence (row) plus a coordinate tag.
///
/// Two columns are interchangeable in a store when their `content_key`s are
/// equal; the coordinate tag never takes part in that comparison.
///
pub trait Column: Clone + Debug {
    type Key: Hash + Eq + Clone;

    fn row_count(&self) -> usize;

    fn alphabet(&self) -> &Arc<dyn StateAlphabet>;

    fn alphabet_type(&self) -> AlphabetType {
        self.alphabet().alphabet_type()
    }

    /// Hashable view of the per-row content.
    fn content_key(&self) -> Self::Key;

    fn position(&self) -> i32;

    fn set_position(&mut self, position: i32);

    fn remove_row(&mut self, row: usize) -> SeqResult<()>;

    /// Weight of the resolved `state` in `row`: 0 or 1 for plain states,
    /// the stored probability for probabilistic columns.
    fn state_value_at(&self, row: usize, state: i32) -> SeqResult<f64>;
}

pub(crate) fn check_states(content: &[i32], alphabet: &dyn StateAlphabet) -> SeqResult<()> {
    match content.iter().find(|&&code| !alphabet.is_valid_code(code)) {
        Some(&code) => Err(SeqError::InvalidSymbol(format!(
            "{} is not a valid code of {}",
            code,
            alphabet.alphabet_type()
        ))),
        None => Ok(()),
    }
}
