use seqsites_core::{Column, SeqResult};

///
/// A store of columns addressed by their logical position.
///
/// Every column of a store has the same number of rows and the same alphabet.
/// Failed calls leave the store untouched.
///
pub trait PositionedStore<C: Column> {
    fn number_of_columns(&self) -> usize;

    /// Number of rows, fixed by the first column ever added.
    fn number_of_rows(&self) -> usize;

    fn column_at(&self, pos: usize) -> SeqResult<&C>;

    fn append_column(&mut self, column: C) -> SeqResult<()>;

    /// Insert `column` at `pos`, `0 <= pos <= number_of_columns()`.
    fn insert_column_at(&mut self, pos: usize, column: C) -> SeqResult<()>;

    fn remove_column_at(&mut self, pos: usize) -> SeqResult<()>;

    /// Drop one row from every column.
    fn remove_row(&mut self, row: usize) -> SeqResult<()>;

    fn is_empty(&self) -> bool {
        self.number_of_columns() == 0
    }
}
