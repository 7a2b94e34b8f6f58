use std::sync::Arc;

use super::Column;
use crate::alphabet::StateAlphabet;
use crate::errors::{SeqError, SeqResult};

/// A site whose rows are probability (or likelihood) vectors over the
/// resolved states of the alphabet, instead of single states.
#[derive(Debug, Clone)]
pub struct ProbabilisticSite {
    content: Vec<Vec<f64>>,
    position: i32,
    alphabet: Arc<dyn StateAlphabet>,
}

impl ProbabilisticSite {
    pub fn new(content: Vec<Vec<f64>>, alphabet: Arc<dyn StateAlphabet>) -> SeqResult<Self> {
        let width = alphabet.size();
        for row in &content {
            if row.len() != width {
                return Err(SeqError::DimensionMismatch {
                    expected: width,
                    found: row.len(),
                });
            }
            if let Some(value) = row.iter().find(|v| !v.is_finite()) {
                return Err(SeqError::InvalidValue(format!(
                    "{} is not a finite probability",
                    value
                )));
            }
        }
        Ok(ProbabilisticSite {
            content,
            position: 0,
            alphabet,
        })
    }

    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn content(&self) -> &[Vec<f64>] {
        &self.content
    }

    pub fn row(&self, row: usize) -> SeqResult<&[f64]> {
        self.content
            .get(row)
            .map(Vec::as_slice)
            .ok_or_else(|| SeqError::out_of_range(row, self.content.len(), "ProbabilisticSite::row"))
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl PartialEq for ProbabilisticSite {
    fn eq(&self, other: &Self) -> bool {
        self.content_key() == other.content_key()
            && self.alphabet.alphabet_type() == other.alphabet.alphabet_type()
    }
}

impl Column for ProbabilisticSite {
    type Key = Vec<u64>;

    fn row_count(&self) -> usize {
        self.content.len()
    }

    fn alphabet(&self) -> &Arc<dyn StateAlphabet> {
        &self.alphabet
    }

    fn content_key(&self) -> Vec<u64> {
        // every row has the alphabet width, so flattening keeps rows apart
        self.content
            .iter()
            .flatten()
            .map(|v| if *v == 0.0 { 0u64 } else { v.to_bits() })
            .collect()
    }

    fn position(&self) -> i32 {
        self.position
    }

    fn set_position(&mut self, position: i32) {
        self.position = position;
    }

    fn remove_row(&mut self, row: usize) -> SeqResult<()> {
        if row >= self.content.len() {
            return Err(SeqError::out_of_range(
                row,
                self.content.len(),
                "ProbabilisticSite::remove_row",
            ));
        }
        self.content.remove(row);
        Ok(())
    }

    fn state_value_at(&self, row: usize, state: i32) -> SeqResult<f64> {
        let values = self.row(row)?;
        if state < 0 || state as usize >= values.len() {
            return Err(SeqError::out_of_range(
                state,
                values.len(),
                "ProbabilisticSite::state_value_at",
            ));
        }
        Ok(values[state as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::NucleicAlphabet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_probabilistic_site_dimensions() {
        let dna: Arc<dyn StateAlphabet> = Arc::new(NucleicAlphabet::dna());
        assert!(ProbabilisticSite::new(vec![vec![1.0, 0.0, 0.0]], dna.clone()).is_err());
        assert!(ProbabilisticSite::new(vec![vec![f64::NAN, 0.0, 0.0, 0.0]], dna.clone()).is_err());

        let site = ProbabilisticSite::new(
            vec![vec![0.5, 0.5, 0.0, 0.0], vec![0.0, 0.0, 0.0, 1.0]],
            dna,
        )
        .unwrap();
        assert_eq!(site.row_count(), 2);
        assert_eq!(site.state_value_at(0, 1).unwrap(), 0.5);
        assert!(site.state_value_at(0, 4).is_err());
    }

    #[rstest]
    fn test_probabilistic_site_key_ignores_zero_sign() {
        let dna: Arc<dyn StateAlphabet> = Arc::new(NucleicAlphabet::dna());
        let a = ProbabilisticSite::new(vec![vec![1.0, 0.0, 0.0, 0.0]], dna.clone()).unwrap();
        let b = ProbabilisticSite::new(vec![vec![1.0, -0.0, 0.0, 0.0]], dna).unwrap();
        assert_eq!(a, b);
    }
}
