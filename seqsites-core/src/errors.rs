use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeqError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Index {index} out of range [0, {len}) in {context}")]
    IndexOutOfRange {
        index: i64,
        len: usize,
        context: &'static str,
    },

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Alphabet mismatch: expected {expected}, found {found}")]
    AlphabetMismatch { expected: String, found: String },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Site is empty")]
    EmptySite,

    #[error("Stop codon can not be translated: {0}")]
    StopCodon(String),
}

pub type SeqResult<T> = std::result::Result<T, SeqError>;

impl SeqError {
    pub fn out_of_range(index: impl TryInto<i64>, len: usize, context: &'static str) -> Self {
        SeqError::IndexOutOfRange {
            index: index.try_into().unwrap_or(i64::MAX),
            len,
            context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_error_display() {
        let err = SeqError::out_of_range(7usize, 3, "column_at");
        assert_eq!(format!("{}", err), "Index 7 out of range [0, 3) in column_at");

        let err = SeqError::DimensionMismatch {
            expected: 4,
            found: 2,
        };
        assert_eq!(format!("{}", err), "Dimension mismatch: expected 4, found 2");

        let err = SeqError::InvalidSymbol("C1A3".to_string());
        assert_eq!(format!("{}", err), "Invalid symbol: C1A3");
    }

    #[rstest]
    fn test_negative_index_is_kept() {
        let err = SeqError::out_of_range(-2i32, 3, "int_to_char");
        assert!(matches!(err, SeqError::IndexOutOfRange { index: -2, .. }));
    }
}
