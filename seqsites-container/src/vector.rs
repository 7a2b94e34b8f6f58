use std::sync::Arc;

use seqsites_core::{Column, SeqError, SeqResult, Sequence, Site, StateAlphabet};

use crate::shape::{StoreShape, sites_from_sequences};
use crate::traits::PositionedStore;

///
/// Plain column store: one stored column per position, position tags kept as given.
///
#[derive(Debug, Clone)]
pub struct VectorSiteContainer<C: Column = Site> {
    shape: StoreShape,
    columns: Vec<C>,
}

impl<C: Column> VectorSiteContainer<C> {
    pub fn new(alphabet: Arc<dyn StateAlphabet>) -> Self {
        VectorSiteContainer {
            shape: StoreShape::new(alphabet),
            columns: Vec::new(),
        }
    }

    pub fn with_names(names: Vec<String>, alphabet: Arc<dyn StateAlphabet>) -> Self {
        VectorSiteContainer {
            shape: StoreShape::with_names(alphabet, names),
            columns: Vec::new(),
        }
    }

    pub fn alphabet(&self) -> &Arc<dyn StateAlphabet> {
        self.shape.alphabet()
    }

    pub fn row_names(&self) -> &[String] {
        self.shape.row_names()
    }

    pub fn columns(&self) -> &[C] {
        &self.columns
    }
}

impl VectorSiteContainer<Site> {
    /// Cut aligned sequences into sites tagged `1..=length`.
    pub fn from_sequences(
        sequences: &[Sequence],
        alphabet: Arc<dyn StateAlphabet>,
    ) -> SeqResult<Self> {
        let (names, sites) = sites_from_sequences(sequences)?;
        let mut container = if sequences.is_empty() {
            Self::new(alphabet)
        } else {
            Self::with_names(names, alphabet)
        };
        for site in sites {
            container.append_column(site)?;
        }
        Ok(container)
    }

    /// Rows as sequences.
    pub fn sequences(&self) -> SeqResult<Vec<Sequence>> {
        (0..self.number_of_rows())
            .map(|row| {
                let content = self
                    .columns
                    .iter()
                    .map(|site| site.get(row))
                    .collect::<SeqResult<Vec<_>>>()?;
                Sequence::new(self.shape.row_name(row), content, self.alphabet().clone())
            })
            .collect()
    }
}

impl<C: Column> PositionedStore<C> for VectorSiteContainer<C> {
    fn number_of_columns(&self) -> usize {
        self.columns.len()
    }

    fn number_of_rows(&self) -> usize {
        self.shape.row_count()
    }

    fn column_at(&self, pos: usize) -> SeqResult<&C> {
        self.columns
            .get(pos)
            .ok_or_else(|| SeqError::out_of_range(pos, self.columns.len(), "column_at"))
    }

    fn append_column(&mut self, column: C) -> SeqResult<()> {
        self.shape.check_column(&column)?;
        self.shape.accept(&column);
        self.columns.push(column);
        Ok(())
    }

    fn insert_column_at(&mut self, pos: usize, column: C) -> SeqResult<()> {
        if pos > self.columns.len() {
            return Err(SeqError::out_of_range(
                pos,
                self.columns.len() + 1,
                "insert_column_at",
            ));
        }
        self.shape.check_column(&column)?;
        self.shape.accept(&column);
        self.columns.insert(pos, column);
        Ok(())
    }

    fn remove_column_at(&mut self, pos: usize) -> SeqResult<()> {
        self.shape
            .check_position(pos, self.columns.len(), "remove_column_at")?;
        self.columns.remove(pos);
        Ok(())
    }

    fn remove_row(&mut self, row: usize) -> SeqResult<()> {
        self.shape.check_row(row, "remove_row")?;
        for column in self.columns.iter_mut() {
            column.remove_row(row)?;
        }
        self.shape.drop_row(row);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqsites_core::NucleicAlphabet;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn container() -> VectorSiteContainer {
        let dna: Arc<dyn StateAlphabet> = Arc::new(NucleicAlphabet::dna());
        let sequences = vec![
            Sequence::from_text("s1", "ACGT", dna.clone()).unwrap(),
            Sequence::from_text("s2", "ACCT", dna.clone()).unwrap(),
            Sequence::from_text("s3", "AC-T", dna.clone()).unwrap(),
        ];
        VectorSiteContainer::from_sequences(&sequences, dna).unwrap()
    }

    #[rstest]
    fn test_positions_are_kept(container: VectorSiteContainer) {
        assert_eq!(container.number_of_columns(), 4);
        assert_eq!(container.number_of_rows(), 3);
        assert_eq!(container.column_at(2).unwrap().position(), 3);
        assert_eq!(container.column_at(0).unwrap().to_text().unwrap(), "AAA");
    }

    #[rstest]
    fn test_remove_row(mut container: VectorSiteContainer) {
        container.remove_row(1).unwrap();
        let sequences = container.sequences().unwrap();
        let names: Vec<&str> = sequences.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["s1", "s3"]);
        assert_eq!(sequences[1].to_text().unwrap(), "AC-T");
    }

    #[rstest]
    fn test_insert_and_remove(mut container: VectorSiteContainer) {
        let dna = container.alphabet().clone();
        let site = Site::from_text("GGG", dna).unwrap().with_position(42);
        container.insert_column_at(4, site).unwrap();
        assert_eq!(container.column_at(4).unwrap().position(), 42);

        container.remove_column_at(0).unwrap();
        assert_eq!(container.number_of_columns(), 4);
        assert!(container.remove_column_at(4).is_err());
    }

    #[rstest]
    fn test_read_past_the_end(mut container: VectorSiteContainer) {
        assert!(matches!(
            container.column_at(4),
            Err(SeqError::IndexOutOfRange { index: 4, len: 4, .. })
        ));
        for _ in 0..4 {
            container.remove_column_at(0).unwrap();
        }
        assert!(matches!(
            container.column_at(0),
            Err(SeqError::IndexOutOfRange { index: 0, len: 0, .. })
        ));
    }
}
