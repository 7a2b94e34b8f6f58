use super::{AlphabetType, GAP_CODE, INVALID_BYTE, StateAlphabet, byte_table, single_byte};
use crate::errors::{SeqError, SeqResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NucleicType {
    Dna,
    Rna,
}

/// DNA or RNA alphabet with IUPAC ambiguity codes.
///
/// A, C, G, T (or U) are the resolved states 0 to 3, followed by
/// M R W S Y K V H D B and N (code 14, the unknown state).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NucleicAlphabet {
    kind: NucleicType,
}

const NUCLEIC_SIZE: usize = 4;
const NUCLEIC_UNKNOWN: i32 = 14;

const DNA_SYMBOLS: &[u8; 15] = b"ACGTMRWSYKVHDBN";
const RNA_SYMBOLS: &[u8; 15] = b"ACGUMRWSYKVHDBN";

// A=1, C=2, G=4, T=8
const NUCLEIC_MASKS: [u8; 15] = [1, 2, 4, 8, 3, 5, 9, 6, 10, 12, 7, 11, 13, 14, 15];

const NUCLEIC_COMPLEMENTS: [i32; 15] = [3, 2, 1, 0, 9, 8, 6, 7, 5, 4, 13, 12, 11, 10, 14];

const DNA_ENCODING_ARRAY: [i8; 256] = byte_table(
    b"ACGTMRWSYKVHDBNXO0?-.",
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 14, 14, 14, 14, -1, -1],
);

const RNA_ENCODING_ARRAY: [i8; 256] = byte_table(
    b"ACGUMRWSYKVHDBNXO0?-.",
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 14, 14, 14, 14, -1, -1],
);

impl NucleicAlphabet {
    pub fn dna() -> Self {
        NucleicAlphabet {
            kind: NucleicType::Dna,
        }
    }

    pub fn rna() -> Self {
        NucleicAlphabet {
            kind: NucleicType::Rna,
        }
    }

    pub fn kind(&self) -> NucleicType {
        self.kind
    }

    fn symbols(&self) -> &'static [u8; 15] {
        match self.kind {
            NucleicType::Dna => DNA_SYMBOLS,
            NucleicType::Rna => RNA_SYMBOLS,
        }
    }

    fn encoding_array(&self) -> &'static [i8; 256] {
        match self.kind {
            NucleicType::Dna => &DNA_ENCODING_ARRAY,
            NucleicType::Rna => &RNA_ENCODING_ARRAY,
        }
    }

    fn check_code(&self, code: i32, context: &'static str) -> SeqResult<()> {
        if self.is_valid_code(code) {
            Ok(())
        } else {
            Err(SeqError::out_of_range(code, NUCLEIC_UNKNOWN as usize + 1, context))
        }
    }

    /// Watson-Crick complement, ambiguity codes included. The gap stays a gap.
    pub fn complement(&self, code: i32) -> SeqResult<i32> {
        self.check_code(code, "complement")?;
        if code == GAP_CODE {
            return Ok(GAP_CODE);
        }
        Ok(NUCLEIC_COMPLEMENTS[code as usize])
    }

    /// Bit mask of the resolved nucleotides a code stands for (A=1, C=2, G=4, T=8).
    pub fn mask(&self, code: i32) -> SeqResult<u8> {
        self.check_code(code, "mask")?;
        if code == GAP_CODE {
            return Ok(0);
        }
        Ok(NUCLEIC_MASKS[code as usize])
    }

    fn code_from_mask(mask: u8) -> Option<i32> {
        NUCLEIC_MASKS
            .iter()
            .position(|&m| m == mask)
            .map(|p| p as i32)
    }
}

impl StateAlphabet for NucleicAlphabet {
    fn alphabet_type(&self) -> AlphabetType {
        match self.kind {
            NucleicType::Dna => AlphabetType::Dna,
            NucleicType::Rna => AlphabetType::Rna,
        }
    }

    fn size(&self) -> usize {
        NUCLEIC_SIZE
    }

    fn state_coding_size(&self) -> usize {
        1
    }

    fn unknown_code(&self) -> i32 {
        NUCLEIC_UNKNOWN
    }

    fn int_to_char(&self, code: i32) -> SeqResult<String> {
        self.check_code(code, "int_to_char")?;
        if code == GAP_CODE {
            return Ok("-".to_string());
        }
        Ok((self.symbols()[code as usize] as char).to_string())
    }

    fn char_to_int(&self, symbol: &str) -> SeqResult<i32> {
        let byte = single_byte(symbol, &self.alphabet_type())?;
        match self.encoding_array()[byte as usize] {
            INVALID_BYTE => Err(SeqError::InvalidSymbol(format!(
                "'{}' is not a {} symbol",
                symbol,
                self.alphabet_type()
            ))),
            code => Ok(code as i32),
        }
    }

    fn alias(&self, code: i32) -> SeqResult<Vec<i32>> {
        let mask = self.mask(code)?;
        Ok((0..NUCLEIC_SIZE as i32)
            .filter(|&state| mask & (1 << state) != 0)
            .collect())
    }

    fn generic(&self, states: &[i32]) -> SeqResult<i32> {
        if states.is_empty() {
            return Err(SeqError::InvalidValue(
                "can not build a generic state from nothing".to_string(),
            ));
        }
        let mut mask = 0u8;
        for &state in states {
            if state == GAP_CODE {
                return Err(SeqError::InvalidSymbol(
                    "gap can not be part of a generic character".to_string(),
                ));
            }
            mask |= self.mask(state)?;
        }
        Ok(Self::code_from_mask(mask).unwrap_or(NUCLEIC_UNKNOWN))
    }
}
