use super::{AlphabetType, GAP_CODE, INVALID_BYTE, StateAlphabet, byte_table, single_byte};
use crate::errors::{SeqError, SeqResult};

const PROTEIN_SIZE: usize = 20;
const PROTEIN_UNKNOWN: i32 = 23;

const PROTEIN_SYMBOLS: &[u8; 24] = b"ARNDCQEGHILKMFPSTWYVBZJX";

const PROTEIN_ENCODING_ARRAY: [i8; 256] = byte_table(
    b"ARNDCQEGHILKMFPSTWYVBZJX?-.",
    &[
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 23,
        -1, -1,
    ],
);

// B = N or D, Z = Q or E, J = I or L
const ASN_OR_ASP: i32 = 20;
const GLN_OR_GLU: i32 = 21;
const ILE_OR_LEU: i32 = 22;

/// The twenty amino acids, in the usual A R N D ... order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProteicAlphabet;

impl ProteicAlphabet {
    pub fn new() -> Self {
        ProteicAlphabet
    }

    fn check_code(&self, code: i32, context: &'static str) -> SeqResult<()> {
        if self.is_valid_code(code) {
            Ok(())
        } else {
            Err(SeqError::out_of_range(code, PROTEIN_UNKNOWN as usize + 1, context))
        }
    }
}

impl StateAlphabet for ProteicAlphabet {
    fn alphabet_type(&self) -> AlphabetType {
        AlphabetType::Protein
    }

    fn size(&self) -> usize {
        PROTEIN_SIZE
    }

    fn state_coding_size(&self) -> usize {
        1
    }

    fn unknown_code(&self) -> i32 {
        PROTEIN_UNKNOWN
    }

    fn int_to_char(&self, code: i32) -> SeqResult<String> {
        self.check_code(code, "int_to_char")?;
        if code == GAP_CODE {
            return Ok("-".to_string());
        }
        Ok((PROTEIN_SYMBOLS[code as usize] as char).to_string())
    }

    fn char_to_int(&self, symbol: &str) -> SeqResult<i32> {
        let byte = single_byte(symbol, &AlphabetType::Protein)?;
        match PROTEIN_ENCODING_ARRAY[byte as usize] {
            INVALID_BYTE => Err(SeqError::InvalidSymbol(format!(
                "'{}' is not an amino acid",
                symbol
            ))),
            code => Ok(code as i32),
        }
    }

    fn alias(&self, code: i32) -> SeqResult<Vec<i32>> {
        self.check_code(code, "alias")?;
        Ok(match code {
            GAP_CODE => vec![],
            ASN_OR_ASP => vec![2, 3],
            GLN_OR_GLU => vec![5, 6],
            ILE_OR_LEU => vec![9, 10],
            PROTEIN_UNKNOWN => (0..PROTEIN_SIZE as i32).collect(),
            resolved => vec![resolved],
        })
    }

    fn generic(&self, states: &[i32]) -> SeqResult<i32> {
        let mut resolved = Vec::new();
        for &state in states {
            if state == GAP_CODE {
                return Err(SeqError::InvalidSymbol(
                    "gap can not be part of a generic character".to_string(),
                ));
            }
            resolved.extend(self.alias(state)?);
        }
        resolved.sort_unstable();
        resolved.dedup();
        match resolved.as_slice() {
            [] => Err(SeqError::InvalidValue(
                "can not build a generic state from nothing".to_string(),
            )),
            [single] => Ok(*single),
            [2, 3] => Ok(ASN_OR_ASP),
            [5, 6] => Ok(GLN_OR_GLU),
            [9, 10] => Ok(ILE_OR_LEU),
            _ => Ok(PROTEIN_UNKNOWN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_protein_codes() {
        let protein = ProteicAlphabet::new();
        assert_eq!(protein.char_to_int("A").unwrap(), 0);
        assert_eq!(protein.char_to_int("v").unwrap(), 19);
        assert_eq!(protein.char_to_int("X").unwrap(), 23);
        assert_eq!(protein.char_to_int("-").unwrap(), -1);
        assert!(protein.char_to_int("O").is_err());
        assert_eq!(protein.int_to_char(13).unwrap(), "F");
    }

    #[rstest]
    fn test_protein_generic() {
        let protein = ProteicAlphabet::new();
        assert_eq!(protein.generic(&[2, 3]).unwrap(), 20);
        assert_eq!(protein.generic(&[6, 5, 21]).unwrap(), 21);
        assert_eq!(protein.generic(&[0, 1]).unwrap(), 23);
        assert_eq!(protein.alias(22).unwrap(), vec![9, 10]);
    }
}
