use super::{AlphabetType, GAP_CODE, NucleicAlphabet, StateAlphabet};
use crate::errors::{SeqError, SeqResult};

const CODON_SIZE: usize = 64;
const CODON_UNKNOWN: i32 = 64;

/// Triplets over a nucleic alphabet.
///
/// The codon `n1 n2 n3` has code `16 * n1 + 4 * n2 + n3`, so with
/// A=0, C=1, G=2, T=3 the codon ATG is 14 and TAA is 48. Any codon holding an
/// ambiguous nucleotide or a partial gap is the unknown codon (64).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodonAlphabet {
    nucleic: NucleicAlphabet,
}

impl CodonAlphabet {
    pub fn new(nucleic: NucleicAlphabet) -> Self {
        CodonAlphabet { nucleic }
    }

    pub fn nucleic_alphabet(&self) -> &NucleicAlphabet {
        &self.nucleic
    }

    /// Codon made of three resolved nucleotides.
    pub fn codon(&self, n1: i32, n2: i32, n3: i32) -> SeqResult<i32> {
        for n in [n1, n2, n3] {
            if !(0..4).contains(&n) {
                return Err(SeqError::out_of_range(n, 4, "codon"));
            }
        }
        Ok(16 * n1 + 4 * n2 + n3)
    }

    /// The three nucleotides of a resolved codon.
    pub fn positions(&self, codon: i32) -> SeqResult<[i32; 3]> {
        if !(0..CODON_SIZE as i32).contains(&codon) {
            return Err(SeqError::out_of_range(codon, CODON_SIZE, "positions"));
        }
        Ok([codon / 16, (codon / 4) % 4, codon % 4])
    }

    pub fn nucleotide_at(&self, codon: i32, position: usize) -> SeqResult<i32> {
        if position > 2 {
            return Err(SeqError::out_of_range(position, 3, "nucleotide_at"));
        }
        Ok(self.positions(codon)?[position])
    }

    fn check_code(&self, code: i32, context: &'static str) -> SeqResult<()> {
        if self.is_valid_code(code) {
            Ok(())
        } else {
            Err(SeqError::out_of_range(code, CODON_SIZE + 1, context))
        }
    }
}

impl StateAlphabet for CodonAlphabet {
    fn alphabet_type(&self) -> AlphabetType {
        AlphabetType::Codon(Box::new(self.nucleic.alphabet_type()))
    }

    fn size(&self) -> usize {
        CODON_SIZE
    }

    fn state_coding_size(&self) -> usize {
        3
    }

    fn unknown_code(&self) -> i32 {
        CODON_UNKNOWN
    }

    fn int_to_char(&self, code: i32) -> SeqResult<String> {
        self.check_code(code, "int_to_char")?;
        match code {
            GAP_CODE => Ok("---".to_string()),
            CODON_UNKNOWN => Ok("NNN".to_string()),
            codon => {
                let mut out = String::with_capacity(3);
                for n in self.positions(codon)? {
                    out.push_str(&self.nucleic.int_to_char(n)?);
                }
                Ok(out)
            }
        }
    }

    fn char_to_int(&self, symbol: &str) -> SeqResult<i32> {
        let chars: Vec<char> = symbol.chars().collect();
        if chars.len() != 3 {
            return Err(SeqError::InvalidSymbol(format!(
                "'{}' is not a codon",
                symbol
            )));
        }
        let mut nucleotides = [0i32; 3];
        for (slot, c) in nucleotides.iter_mut().zip(chars) {
            *slot = self.nucleic.char_to_int(&c.to_string())?;
        }
        if nucleotides.iter().all(|&n| n == GAP_CODE) {
            return Ok(GAP_CODE);
        }
        if nucleotides.iter().any(|&n| !(0..4).contains(&n)) {
            return Ok(CODON_UNKNOWN);
        }
        self.codon(nucleotides[0], nucleotides[1], nucleotides[2])
    }

    fn alias(&self, code: i32) -> SeqResult<Vec<i32>> {
        self.check_code(code, "alias")?;
        Ok(match code {
            GAP_CODE => vec![],
            CODON_UNKNOWN => (0..CODON_SIZE as i32).collect(),
            codon => vec![codon],
        })
    }
}
