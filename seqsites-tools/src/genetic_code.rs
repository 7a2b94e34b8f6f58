use std::sync::Arc;

use log::debug;

use seqsites_allelic::{AlphabetConfig, AlphabetKind, GeneticCodeKind};
use seqsites_core::{
    CodonAlphabet, GAP_CODE, NucleicAlphabet, ProteicAlphabet, SeqError, SeqResult, Sequence,
    StateAlphabet,
};

// NCBI tables, codons in TCAG order
const STANDARD_TABLE: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";
const MOLD_MITOCHONDRIAL_TABLE: &[u8; 64] =
    b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

// rank in TCAG order of A, C, G, T
const TCAG_RANK: [usize; 4] = [2, 1, 3, 0];

const NB_CODONS: usize = 64;
const START_CODON: i32 = 14;

const STANDARD_ALT_STARTS: &[i32] = &[30, 62];
const MOLD_MITOCHONDRIAL_ALT_STARTS: &[i32] = &[12, 13, 15, 30, 46, 60, 62];

///
/// Translation table from codons to amino acids.
///
/// Stop codons have no amino acid; translating one is a `StopCodon` error.
///
#[derive(Debug, Clone)]
pub struct GeneticCode {
    kind: GeneticCodeKind,
    codons: CodonAlphabet,
    proteins: ProteicAlphabet,
    amino_acids: [Option<i32>; NB_CODONS],
    stops: Vec<i32>,
}

impl GeneticCode {
    pub fn new(kind: GeneticCodeKind, nucleic: NucleicAlphabet) -> Self {
        let table = match kind {
            GeneticCodeKind::Standard => STANDARD_TABLE,
            GeneticCodeKind::MoldMitochondrial => MOLD_MITOCHONDRIAL_TABLE,
        };
        let proteins = ProteicAlphabet::new();

        let mut amino_acids = [None; NB_CODONS];
        for (codon, amino_acid) in amino_acids.iter_mut().enumerate() {
            let ncbi = 16 * TCAG_RANK[codon / 16]
                + 4 * TCAG_RANK[(codon / 4) % 4]
                + TCAG_RANK[codon % 4];
            *amino_acid = match table[ncbi] {
                b'*' => None,
                letter => proteins.char_to_int(&(letter as char).to_string()).ok(),
            };
        }
        let stops = (0..NB_CODONS as i32)
            .filter(|&codon| amino_acids[codon as usize].is_none())
            .collect();

        GeneticCode {
            kind,
            codons: CodonAlphabet::new(nucleic),
            proteins,
            amino_acids,
            stops,
        }
    }

    pub fn standard() -> Self {
        GeneticCode::new(GeneticCodeKind::Standard, NucleicAlphabet::dna())
    }

    /// Mold, protozoan and coelenterate mitochondrial code (NCBI table 4).
    pub fn mold_mitochondrial() -> Self {
        GeneticCode::new(GeneticCodeKind::MoldMitochondrial, NucleicAlphabet::dna())
    }

    pub fn from_kind(kind: GeneticCodeKind) -> Self {
        GeneticCode::new(kind, NucleicAlphabet::dna())
    }

    /// Genetic code of a codon alphabet configuration.
    pub fn from_config(config: &AlphabetConfig) -> SeqResult<Self> {
        let nucleic = match config.alphabet {
            AlphabetKind::Codon => NucleicAlphabet::dna(),
            AlphabetKind::RnaCodon => NucleicAlphabet::rna(),
            other => {
                return Err(SeqError::Configuration(format!(
                    "a genetic code needs a codon alphabet, not {:?}",
                    other
                )));
            }
        };
        Ok(GeneticCode::new(
            config.genetic_code.unwrap_or_default(),
            nucleic,
        ))
    }

    pub fn kind(&self) -> GeneticCodeKind {
        self.kind
    }

    pub fn codon_alphabet(&self) -> &CodonAlphabet {
        &self.codons
    }

    pub fn protein_alphabet(&self) -> &ProteicAlphabet {
        &self.proteins
    }

    pub fn stop_codons(&self) -> &[i32] {
        &self.stops
    }

    pub fn is_stop(&self, codon: i32) -> bool {
        (0..NB_CODONS as i32).contains(&codon) && self.amino_acids[codon as usize].is_none()
    }

    /// ATG, whatever the code.
    pub fn is_start(&self, codon: i32) -> bool {
        codon == START_CODON
    }

    pub fn is_alt_start(&self, codon: i32) -> bool {
        let alt_starts = match self.kind {
            GeneticCodeKind::Standard => STANDARD_ALT_STARTS,
            GeneticCodeKind::MoldMitochondrial => MOLD_MITOCHONDRIAL_ALT_STARTS,
        };
        alt_starts.contains(&codon)
    }

    ///
    /// Amino acid coded by `codon`.
    ///
    /// The gap translates to a gap and the unknown codon to the unknown amino acid.
    ///
    pub fn translate(&self, codon: i32) -> SeqResult<i32> {
        if codon == GAP_CODE {
            return Ok(GAP_CODE);
        }
        if codon == self.codons.unknown_code() {
            return Ok(self.proteins.unknown_code());
        }
        if !(0..NB_CODONS as i32).contains(&codon) {
            return Err(SeqError::out_of_range(codon, NB_CODONS + 1, "translate"));
        }
        match self.amino_acids[codon as usize] {
            Some(amino_acid) => Ok(amino_acid),
            None => Err(SeqError::StopCodon(self.codons.int_to_char(codon)?)),
        }
    }

    pub fn translate_symbol(&self, codon: &str) -> SeqResult<String> {
        let amino_acid = self.translate(self.codons.char_to_int(codon)?)?;
        self.proteins.int_to_char(amino_acid)
    }

    /// True if both codons code the same amino acid.
    pub fn are_synonymous(&self, codon1: i32, codon2: i32) -> SeqResult<bool> {
        Ok(self.translate(codon1)? == self.translate(codon2)?)
    }

    /// Codons coding `amino_acid`.
    pub fn synonymous(&self, amino_acid: i32) -> SeqResult<Vec<i32>> {
        if amino_acid < 0 || amino_acid as usize >= self.proteins.size() {
            return Err(SeqError::out_of_range(
                amino_acid,
                self.proteins.size(),
                "synonymous",
            ));
        }
        Ok((0..NB_CODONS as i32)
            .filter(|&codon| self.amino_acids[codon as usize] == Some(amino_acid))
            .collect())
    }

    ///
    /// True if every change at the third position of `codon` keeps its amino acid.
    ///
    /// Stop codons, and codons one third position change away from a stop,
    /// are not fourfold degenerated.
    ///
    pub fn is_four_fold_degenerated(&self, codon: i32) -> SeqResult<bool> {
        let [n1, n2, n3] = self.codons.positions(codon)?;
        let Some(amino_acid) = self.amino_acids[codon as usize] else {
            return Ok(false);
        };
        for n in (0..4).filter(|&n| n != n3) {
            let mutant = self.codons.codon(n1, n2, n)?;
            if self.amino_acids[mutant as usize] != Some(amino_acid) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn check_codon_sequence(&self, sequence: &Sequence) -> SeqResult<()> {
        let expected = self.codons.alphabet_type();
        let found = sequence.alphabet().alphabet_type();
        if expected != found {
            return Err(SeqError::AlphabetMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
        Ok(())
    }

    ///
    /// Coding part of a codon sequence.
    ///
    /// # Arguments
    /// * `sequence` - a sequence over this code's codon alphabet
    /// * `look_for_init` - start at the first ATG instead of the first codon
    /// * `include_init` - keep that ATG in the result
    ///
    /// # Returns
    /// The codons up to the first stop codon (excluded) or the end of the
    /// sequence. Empty when an ATG is looked for and there is none.
    ///
    pub fn coding_sequence(
        &self,
        sequence: &Sequence,
        look_for_init: bool,
        include_init: bool,
    ) -> SeqResult<Sequence> {
        self.check_codon_sequence(sequence)?;
        let content = sequence.content();

        let start = if look_for_init {
            match content.iter().position(|&codon| self.is_start(codon)) {
                Some(init) if include_init => init,
                Some(init) => init + 1,
                None => content.len(),
            }
        } else {
            0
        };
        let end = content[start..]
            .iter()
            .position(|&codon| self.is_stop(codon))
            .map_or(content.len(), |offset| start + offset);

        debug!(
            "coding part of {} spans codons {}..{}",
            sequence.name(),
            start,
            end
        );
        sequence.with_content(content[start..end].to_vec())
    }

    /// Protein sequence of a codon sequence; stop codons are an error.
    pub fn translate_sequence(&self, sequence: &Sequence) -> SeqResult<Sequence> {
        self.check_codon_sequence(sequence)?;
        let content = sequence
            .content()
            .iter()
            .map(|&codon| self.translate(codon))
            .collect::<SeqResult<Vec<_>>>()?;
        Sequence::new(sequence.name(), content, Arc::new(self.proteins))
    }
}
