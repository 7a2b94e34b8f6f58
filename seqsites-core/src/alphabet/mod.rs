//! State alphabets.
//!
//! Every alphabet maps symbols to integer codes laid out the same way:
//!
//! * `-1` is the gap,
//! * `0..size` are the resolved states, in rank order,
//! * codes above `size` (up to and including the unknown code) are
//!   generic/unresolved states.
//!
//! Containers only ever talk to alphabets through [`StateAlphabet`], so the
//! concrete alphabet is chosen once, at construction time, and shared behind
//! an `Arc`.
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::{SeqError, SeqResult};

pub mod codon;
pub mod nucleic;
pub mod protein;

pub use codon::CodonAlphabet;
pub use nucleic::{NucleicAlphabet, NucleicType};
pub use protein::ProteicAlphabet;

/// Code used by every alphabet for the gap state.
pub const GAP_CODE: i32 = -1;

/// Identifies an alphabet, used to check that sites and containers agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlphabetType {
    Dna,
    Rna,
    Protein,
    Codon(Box<AlphabetType>),
    Allelic {
        base: Box<AlphabetType>,
        nb_alleles: u32,
    },
}

impl Display for AlphabetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetType::Dna => write!(f, "DNA"),
            AlphabetType::Rna => write!(f, "RNA"),
            AlphabetType::Protein => write!(f, "Proteic"),
            AlphabetType::Codon(nucleic) => write!(f, "Codon({})", nucleic),
            AlphabetType::Allelic { base, nb_alleles } => {
                write!(f, "Allelic({}, {})", base, nb_alleles)
            }
        }
    }
}

/// Capability shared by all alphabets.
pub trait StateAlphabet: Send + Sync + fmt::Debug {
    fn alphabet_type(&self) -> AlphabetType;

    /// Number of resolved states.
    fn size(&self) -> usize;

    /// Number of characters used to write one state.
    fn state_coding_size(&self) -> usize;

    fn unknown_code(&self) -> i32;

    /// Symbol for a code, gap and generic codes included.
    fn int_to_char(&self, code: i32) -> SeqResult<String>;

    /// Code for a symbol, gap and generic symbols included.
    fn char_to_int(&self, symbol: &str) -> SeqResult<i32>;

    /// Resolved states compatible with `code`. Empty for the gap.
    fn alias(&self, code: i32) -> SeqResult<Vec<i32>>;

    /// Number of distinct non-gap codes, generic ones included.
    fn number_of_types(&self) -> usize {
        self.unknown_code() as usize + 1
    }

    fn gap_code(&self) -> i32 {
        GAP_CODE
    }

    fn is_gap(&self, code: i32) -> bool {
        code == GAP_CODE
    }

    fn is_valid_code(&self, code: i32) -> bool {
        (GAP_CODE..=self.unknown_code()).contains(&code)
    }

    fn is_unresolved(&self, code: i32) -> bool {
        code >= self.size() as i32 && code <= self.unknown_code()
    }

    fn is_valid(&self, symbol: &str) -> bool {
        self.char_to_int(symbol).is_ok()
    }

    /// Rank of a resolved symbol.
    fn state_rank(&self, symbol: &str) -> SeqResult<usize> {
        let code = self.char_to_int(symbol)?;
        if code >= 0 && (code as usize) < self.size() {
            Ok(code as usize)
        } else {
            Err(SeqError::InvalidSymbol(format!(
                "'{}' is not a resolved state of {}",
                symbol,
                self.alphabet_type()
            )))
        }
    }

    /// Symbol of the resolved state with the given rank.
    fn symbol_at(&self, rank: usize) -> SeqResult<String> {
        if rank >= self.size() {
            return Err(SeqError::out_of_range(rank, self.size(), "symbol_at"));
        }
        self.int_to_char(rank as i32)
    }

    /// True if the resolved state `state2` is one of the states `state1` may stand for.
    fn is_resolved_in(&self, state1: i32, state2: i32) -> SeqResult<bool> {
        if state2 < 0 || state2 as usize >= self.size() {
            return Err(SeqError::out_of_range(state2, self.size(), "is_resolved_in"));
        }
        Ok(self.alias(state1)?.contains(&state2))
    }

    /// Most specific code standing for all the given states.
    fn generic(&self, states: &[i32]) -> SeqResult<i32> {
        let Some(&first) = states.first() else {
            return Err(SeqError::InvalidValue(
                "can not build a generic state from nothing".to_string(),
            ));
        };
        for &state in states {
            if !self.is_valid_code(state) || self.is_gap(state) {
                return Err(SeqError::InvalidSymbol(format!(
                    "{} is not a valid state for a generic character",
                    state
                )));
            }
        }
        if states.iter().all(|&s| s == first) {
            Ok(first)
        } else {
            Ok(self.unknown_code())
        }
    }

    /// Encode a whole string, `state_coding_size()` characters at a time.
    fn encode(&self, text: &str) -> SeqResult<Vec<i32>> {
        let width = self.state_coding_size();
        let chars: Vec<char> = text.chars().collect();
        if chars.len() % width != 0 {
            return Err(SeqError::InvalidSymbol(format!(
                "length {} is not a multiple of the state width {}",
                chars.len(),
                width
            )));
        }
        chars
            .chunks(width)
            .map(|chunk| self.char_to_int(&chunk.iter().collect::<String>()))
            .collect()
    }

    fn decode(&self, codes: &[i32]) -> SeqResult<String> {
        let mut out = String::with_capacity(codes.len() * self.state_coding_size());
        for &code in codes {
            out.push_str(&self.int_to_char(code)?);
        }
        Ok(out)
    }
}

/// Build a `[i8; 256]` byte lookup table; unknown bytes map to `INVALID_BYTE`.
pub(crate) const INVALID_BYTE: i8 = i8::MIN;

pub(crate) const fn byte_table(symbols: &[u8], codes: &[i8]) -> [i8; 256] {
    let mut arr = [INVALID_BYTE; 256];
    let mut i = 0;
    while i < symbols.len() {
        let upper = symbols[i];
        arr[upper as usize] = codes[i];
        arr[upper.to_ascii_lowercase() as usize] = codes[i];
        i += 1;
    }
    arr
}

pub(crate) fn single_byte(symbol: &str, alphabet: &AlphabetType) -> SeqResult<u8> {
    match symbol.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(SeqError::InvalidSymbol(format!(
            "'{}' is not a single character of {}",
            symbol, alphabet
        ))),
    }
}
