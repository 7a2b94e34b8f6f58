//! Allelic state alphabet.
//!
//! A sample of `N` gene copies drawn from a population can hold at most two
//! distinct resolved states of a base alphabet. Each such composition is one
//! state of the allelic alphabet:
//!
//! * codes `0..n` are the homozygous states (all `N` copies are base state `i`),
//! * then, for every pair of base states `i < j` in lexicographic order,
//!   `N - 1` codes, one per count of `i` from `1` to `N - 1`,
//! * `size` (the first code past the resolved states) is the unknown state,
//! * `-1` is the gap.
//!
//! States are written `symbol1 count1 symbol2 count2`, counts zero-padded to
//! the number of digits of `N`, so that every label has the same length.
use std::ops::Range;
use std::sync::Arc;

use log::trace;
use statrs::distribution::{Binomial, Discrete};

use seqsites_core::utils::{decimal_width, number_of_pairs};
use seqsites_core::{AlphabetType, GAP_CODE, SeqError, SeqResult, Sequence, StateAlphabet};

const UNKNOWN_SYMBOL: char = '?';

///
/// Decomposition of a resolved allelic state into its two base states.
///
/// Homozygous states have `first == second`, `first_count == N` and
/// `second_count == 0`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllelePair {
    pub first: usize,
    pub first_count: u32,
    pub second: usize,
    pub second_count: u32,
}

impl AllelePair {
    pub fn is_homozygous(&self) -> bool {
        self.second_count == 0
    }
}

#[derive(Debug, Clone)]
pub struct AllelicAlphabet {
    base: Arc<dyn StateAlphabet>,
    nb_alleles: u32,
    base_size: usize,
    size: usize,
    count_width: usize,
}

impl AllelicAlphabet {
    ///
    /// Build the allelic alphabet of samples of `nb_alleles` copies over `base`.
    ///
    /// # Arguments
    /// * `base` - the alphabet the alleles are written in
    /// * `nb_alleles` - sample size, at least 1
    ///
    pub fn new(base: Arc<dyn StateAlphabet>, nb_alleles: u32) -> SeqResult<Self> {
        if nb_alleles < 1 {
            return Err(SeqError::Configuration(format!(
                "an allelic alphabet needs at least one allele, got {}",
                nb_alleles
            )));
        }
        if matches!(base.alphabet_type(), AlphabetType::Allelic { .. }) {
            return Err(SeqError::Configuration(
                "allelic alphabets can not be nested".to_string(),
            ));
        }

        let base_size = base.size();
        if base_size == 0 {
            return Err(SeqError::Configuration(format!(
                "base alphabet {} has no resolved state",
                base.alphabet_type()
            )));
        }

        let size = number_of_pairs(base_size)
            .checked_mul(nb_alleles as usize - 1)
            .and_then(|pairs| pairs.checked_add(base_size))
            .filter(|&size| size < i32::MAX as usize)
            .ok_or_else(|| {
                SeqError::Configuration(format!(
                    "{} alleles over {} give too many states",
                    nb_alleles,
                    base.alphabet_type()
                ))
            })?;

        Ok(AllelicAlphabet {
            count_width: decimal_width(nb_alleles),
            base,
            nb_alleles,
            base_size,
            size,
        })
    }

    pub fn nb_alleles(&self) -> u32 {
        self.nb_alleles
    }

    /// The base alphabet.
    pub fn state_alphabet(&self) -> &Arc<dyn StateAlphabet> {
        &self.base
    }

    fn splits(&self) -> usize {
        self.nb_alleles as usize - 1
    }

    // index of the pair (i, j), i < j, in lexicographic order
    fn pair_index(&self, i: usize, j: usize) -> usize {
        i * (2 * self.base_size - i - 1) / 2 + (j - i - 1)
    }

    fn pair_states(&self, index: usize) -> SeqResult<(usize, usize)> {
        let mut remaining = index;
        for i in 0..self.base_size {
            let row = self.base_size - 1 - i;
            if remaining < row {
                return Ok((i, i + 1 + remaining));
            }
            remaining -= row;
        }
        Err(SeqError::out_of_range(
            index,
            number_of_pairs(self.base_size),
            "pair_states",
        ))
    }

    ///
    /// Code of the state holding `first_count` copies of base state `first`
    /// and the remaining copies of base state `second`.
    ///
    /// The two base states may be given in any order.
    ///
    pub fn code_of(&self, first: usize, first_count: u32, second: usize) -> SeqResult<i32> {
        for state in [first, second] {
            if state >= self.base_size {
                return Err(SeqError::out_of_range(state, self.base_size, "code_of"));
            }
        }
        if first_count > self.nb_alleles {
            return Err(SeqError::InvalidValue(format!(
                "{} copies exceed the sample size {}",
                first_count, self.nb_alleles
            )));
        }

        if first == second || first_count == self.nb_alleles {
            return Ok(first as i32);
        }
        if first_count == 0 {
            return Ok(second as i32);
        }

        let (i, count_i, j) = if first < second {
            (first, first_count, second)
        } else {
            (second, self.nb_alleles - first_count, first)
        };
        let code = self.base_size + self.pair_index(i, j) * self.splits() + count_i as usize - 1;
        Ok(code as i32)
    }

    /// Base states and counts of a resolved allelic code.
    pub fn allele_pair(&self, code: i32) -> SeqResult<AllelePair> {
        if code < 0 || code as usize >= self.size {
            return Err(SeqError::out_of_range(code, self.size, "allele_pair"));
        }
        let code = code as usize;
        if code < self.base_size {
            return Ok(AllelePair {
                first: code,
                first_count: self.nb_alleles,
                second: code,
                second_count: 0,
            });
        }

        let offset = code - self.base_size;
        let (first, second) = self.pair_states(offset / self.splits())?;
        let first_count = (offset % self.splits()) as u32 + 1;
        Ok(AllelePair {
            first,
            first_count,
            second,
            second_count: self.nb_alleles - first_count,
        })
    }

    fn format_count(&self, count: u32) -> String {
        format!("{:0width$}", count, width = self.count_width)
    }

    fn gap_label(&self) -> SeqResult<String> {
        let gap = self.base.int_to_char(GAP_CODE)?;
        Ok(format!(
            "{}{}{}{}",
            gap,
            self.format_count(self.nb_alleles),
            gap,
            self.format_count(0)
        ))
    }

    fn unknown_label(&self) -> String {
        let unknown: String = std::iter::repeat_n(UNKNOWN_SYMBOL, self.base.state_coding_size())
            .collect();
        format!(
            "{}{}{}{}",
            unknown,
            self.format_count(self.nb_alleles),
            unknown,
            self.format_count(0)
        )
    }

    ///
    /// Code of a label such as `A3C1`.
    ///
    /// Both base symbols must be resolved states, the counts must add up to
    /// the sample size, and a heterozygous label must list its lower ranked
    /// state first. A label naming the same state twice is homozygous
    /// whatever the split of its counts.
    ///
    pub fn state_label_to_code(&self, label: &str) -> SeqResult<i32> {
        let chars: Vec<char> = label.chars().collect();
        let width = self.base.state_coding_size();
        let block = width + self.count_width;
        if chars.len() != 2 * block {
            return Err(invalid_label(
                label,
                &format!("expected {} characters", 2 * block),
            ));
        }

        if label == self.gap_label()? {
            return Ok(GAP_CODE);
        }
        if label == self.unknown_label() {
            return Ok(self.unknown_code());
        }

        let part = |range: Range<usize>| chars[range].iter().collect::<String>();
        let first = self.parse_state(label, &part(0..width))?;
        let first_count = parse_count(label, &part(width..block))?;
        let second = self.parse_state(label, &part(block..block + width))?;
        let second_count = parse_count(label, &part(block + width..2 * block))?;

        if first_count as u64 + second_count as u64 != self.nb_alleles as u64 {
            return Err(invalid_label(
                label,
                &format!("counts must add up to {}", self.nb_alleles),
            ));
        }
        if first == second {
            return Ok(first as i32);
        }
        if first_count == 0 || second_count == 0 {
            return Err(invalid_label(
                label,
                "two distinct states must both be present",
            ));
        }
        if first > second {
            return Err(invalid_label(
                label,
                "the lower ranked state must come first",
            ));
        }
        self.code_of(first, first_count, second)
    }

    fn parse_state(&self, label: &str, symbol: &str) -> SeqResult<usize> {
        self.base.state_rank(symbol).map_err(|_| {
            invalid_label(
                label,
                &format!("'{}' is not a resolved {} state", symbol, self.base.alphabet_type()),
            )
        })
    }

    /// Label of a code, gap and unknown included.
    pub fn code_to_state_label(&self, code: i32) -> SeqResult<String> {
        if code == GAP_CODE {
            return self.gap_label();
        }
        if code == self.unknown_code() {
            return Ok(self.unknown_label());
        }
        if code < 0 || code as usize >= self.size {
            return Err(SeqError::out_of_range(
                code,
                self.size + 1,
                "code_to_state_label",
            ));
        }

        let pair = self.allele_pair(code)?;
        Ok(format!(
            "{}{}{}{}",
            self.base.symbol_at(pair.first)?,
            self.format_count(pair.first_count),
            self.base.symbol_at(pair.second)?,
            self.format_count(pair.second_count)
        ))
    }

    ///
    /// Allelic code of a base alphabet code.
    ///
    /// Resolved base states keep their code (they are the homozygous states),
    /// the gap stays a gap, and generic base states become unknown.
    ///
    pub fn translate_from_base(&self, state: i32) -> SeqResult<i32> {
        if !self.base.is_valid_code(state) {
            return Err(SeqError::out_of_range(
                state,
                self.base.number_of_types(),
                "translate_from_base",
            ));
        }
        if state == GAP_CODE {
            Ok(GAP_CODE)
        } else if (state as usize) < self.base_size {
            Ok(state)
        } else {
            Ok(self.unknown_code())
        }
    }

    ///
    /// Likelihood of every allelic state given observed counts of each base state.
    ///
    /// # Arguments
    /// * `counts` - one non-negative count per base state
    ///
    /// # Returns
    /// A vector of `size() + 1` values indexed by allelic code (unknown last):
    /// * no count at all: every state is equally possible (all ones),
    /// * one observed state: its homozygous state,
    /// * more than two observed states: the unknown state,
    /// * two observed states `i < j` with `p = c_i / (c_i + c_j)`: the
    ///   binomial probability of `k` copies of `i` among `N` for every
    ///   composition of the pair, `p^N` for `i` and `(1-p)^N` for `j`.
    ///
    pub fn compute_likelihoods(&self, counts: &[f64]) -> SeqResult<Vec<f64>> {
        if counts.len() != self.base_size {
            return Err(SeqError::DimensionMismatch {
                expected: self.base_size,
                found: counts.len(),
            });
        }
        if let Some(bad) = counts.iter().find(|c| !c.is_finite() || **c < 0.0) {
            return Err(SeqError::InvalidValue(format!(
                "allele counts must be finite and non-negative, got {}",
                bad
            )));
        }

        let observed: Vec<usize> = counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0.0)
            .map(|(state, _)| state)
            .collect();

        let mut likelihoods = vec![0.0; self.size + 1];
        match observed.as_slice() {
            [] => likelihoods.fill(1.0),
            [state] => likelihoods[*state] = 1.0,
            [first, second] => {
                // scaled by the larger count, the sum stays finite
                let scale = counts[*first].max(counts[*second]);
                let (c1, c2) = (counts[*first] / scale, counts[*second] / scale);
                let p = c1 / (c1 + c2);
                let binomial = Binomial::new(p, self.nb_alleles as u64)
                    .map_err(|e| SeqError::InvalidValue(e.to_string()))?;
                for k in 0..=self.nb_alleles {
                    let code = self.code_of(*first, k, *second)?;
                    likelihoods[code as usize] = binomial.pmf(k as u64);
                }
            }
            _ => {
                trace!(
                    "{} states observed, likelihood goes to the unknown state",
                    observed.len()
                );
                likelihoods[self.size] = 1.0;
            }
        }
        Ok(likelihoods)
    }

    ///
    /// Turn a sequence of count vectors into likelihood rows over this alphabet.
    ///
    /// Rows without any count (gaps) become rows of ones.
    ///
    pub fn convert_counts(&self, rows: &[Vec<f64>]) -> SeqResult<Vec<Vec<f64>>> {
        rows.iter()
            .map(|counts| self.compute_likelihoods(counts))
            .collect()
    }

    ///
    /// Likelihood rows of a sequence written in the base alphabet.
    ///
    /// Every site contributes one count per base state it may stand for, so a
    /// two-state ambiguity code reads as an even heterozygous sample.
    ///
    pub fn convert_sequence(&self, sequence: &Sequence) -> SeqResult<Vec<Vec<f64>>> {
        let found = sequence.alphabet().alphabet_type();
        let expected = self.base.alphabet_type();
        if found != expected {
            return Err(SeqError::AlphabetMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }

        let mut rows = Vec::with_capacity(sequence.len());
        for &state in sequence.content() {
            let mut counts = vec![0.0; self.base_size];
            for resolved in self.base.alias(state)? {
                counts[resolved as usize] += 1.0;
            }
            rows.push(self.compute_likelihoods(&counts)?);
        }
        Ok(rows)
    }
}

impl StateAlphabet for AllelicAlphabet {
    fn alphabet_type(&self) -> AlphabetType {
        AlphabetType::Allelic {
            base: Box::new(self.base.alphabet_type()),
            nb_alleles: self.nb_alleles,
        }
    }

    fn size(&self) -> usize {
        self.size
    }

    fn state_coding_size(&self) -> usize {
        2 * (self.base.state_coding_size() + self.count_width)
    }

    fn unknown_code(&self) -> i32 {
        self.size as i32
    }

    fn int_to_char(&self, code: i32) -> SeqResult<String> {
        self.code_to_state_label(code)
    }

    fn char_to_int(&self, symbol: &str) -> SeqResult<i32> {
        self.state_label_to_code(symbol)
    }

    fn alias(&self, code: i32) -> SeqResult<Vec<i32>> {
        if !self.is_valid_code(code) {
            return Err(SeqError::out_of_range(code, self.size + 1, "alias"));
        }
        Ok(match code {
            GAP_CODE => vec![],
            code if code == self.unknown_code() => (0..self.size as i32).collect(),
            code => vec![code],
        })
    }

    /// `state2` is a base state here: true when the allelic state `state1`
    /// carries at least one copy of it.
    fn is_resolved_in(&self, state1: i32, state2: i32) -> SeqResult<bool> {
        if !self.is_valid_code(state1) {
            return Err(SeqError::out_of_range(
                state1,
                self.size + 1,
                "is_resolved_in",
            ));
        }
        if state2 < 0 || state2 as usize >= self.base_size {
            return Err(SeqError::out_of_range(
                state2,
                self.base_size,
                "is_resolved_in",
            ));
        }

        if state1 == GAP_CODE {
            return Ok(false);
        }
        if state1 == self.unknown_code() {
            return Ok(true);
        }
        let pair = self.allele_pair(state1)?;
        let state2 = state2 as usize;
        Ok(pair.first == state2 || pair.second == state2)
    }
}

fn invalid_label(label: &str, reason: &str) -> SeqError {
    SeqError::InvalidSymbol(format!("'{}' is not an allelic state: {}", label, reason))
}

fn parse_count(label: &str, text: &str) -> SeqResult<u32> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid_label(label, &format!("'{}' is not a count", text)));
    }
    text.parse::<u32>()
        .map_err(|_| invalid_label(label, &format!("'{}' is not a count", text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqsites_core::{CodonAlphabet, NucleicAlphabet, ProteicAlphabet};

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn dna4() -> AllelicAlphabet {
        AllelicAlphabet::new(Arc::new(NucleicAlphabet::dna()), 4).unwrap()
    }

    #[rstest]
    #[case(1, 4)]
    #[case(2, 10)]
    #[case(4, 22)]
    #[case(10, 58)]
    fn test_dna_sizes(#[case] nb_alleles: u32, #[case] size: usize) {
        let alphabet = AllelicAlphabet::new(Arc::new(NucleicAlphabet::dna()), nb_alleles).unwrap();
        assert_eq!(alphabet.size(), size);
        assert_eq!(alphabet.unknown_code(), size as i32);
        assert_eq!(alphabet.number_of_types(), size + 1);
    }

    #[rstest]
    fn test_protein_size() {
        let alphabet = AllelicAlphabet::new(Arc::new(ProteicAlphabet::new()), 3).unwrap();
        assert_eq!(alphabet.size(), 20 + 190 * 2);
    }

    #[rstest]
    fn test_zero_alleles_rejected() {
        let result = AllelicAlphabet::new(Arc::new(NucleicAlphabet::dna()), 0);
        assert!(matches!(result, Err(SeqError::Configuration(_))));
    }

    #[rstest]
    fn test_nested_rejected(dna4: AllelicAlphabet) {
        let result = AllelicAlphabet::new(Arc::new(dna4), 2);
        assert!(matches!(result, Err(SeqError::Configuration(_))));
    }

    #[rstest]
    #[case("A4A0", 0)]
    #[case("T4T0", 3)]
    #[case("A1C3", 4)]
    #[case("A3C1", 6)]
    #[case("A1G3", 7)]
    #[case("C1G3", 13)]
    #[case("G3T1", 21)]
    fn test_label_to_code(dna4: AllelicAlphabet, #[case] label: &str, #[case] code: i32) {
        assert_eq!(dna4.state_label_to_code(label).unwrap(), code);
        assert_eq!(dna4.code_to_state_label(code).unwrap(), label);
    }

    #[rstest]
    fn test_every_code_round_trips(dna4: AllelicAlphabet) {
        for code in -1..=dna4.unknown_code() {
            let label = dna4.code_to_state_label(code).unwrap();
            assert_eq!(dna4.state_label_to_code(&label).unwrap(), code);
        }
    }

    #[rstest]
    fn test_codes_are_distinct_and_dense(dna4: AllelicAlphabet) {
        let mut codes = Vec::new();
        for i in 0..4 {
            for j in (i + 1)..4 {
                for k in 1..4 {
                    codes.push(dna4.code_of(i, k, j).unwrap());
                }
            }
        }
        codes.sort();
        assert_eq!(codes, (4..22).collect::<Vec<_>>());
    }

    #[rstest]
    #[case("A2A2")]
    #[case("A0A4")]
    fn test_homozygous_variants(dna4: AllelicAlphabet, #[case] label: &str) {
        assert_eq!(dna4.state_label_to_code(label).unwrap(), 0);
    }

    #[rstest]
    #[case("-4-0", -1)]
    #[case("?4?0", 22)]
    fn test_special_labels(dna4: AllelicAlphabet, #[case] label: &str, #[case] code: i32) {
        assert_eq!(dna4.state_label_to_code(label).unwrap(), code);
    }

    #[rstest]
    #[case("C1A3")]
    #[case("A3C2")]
    #[case("A4C0")]
    #[case("A3C")]
    #[case("A31C1")]
    #[case("N3C1")]
    #[case("AxC1")]
    fn test_invalid_labels(dna4: AllelicAlphabet, #[case] label: &str) {
        assert!(matches!(
            dna4.state_label_to_code(label),
            Err(SeqError::InvalidSymbol(_))
        ));
    }

    #[rstest]
    fn test_out_of_range_codes(dna4: AllelicAlphabet) {
        assert!(matches!(
            dna4.code_to_state_label(23),
            Err(SeqError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            dna4.code_to_state_label(-2),
            Err(SeqError::IndexOutOfRange { .. })
        ));
    }

    #[rstest]
    fn test_padded_counts() {
        let alphabet = AllelicAlphabet::new(Arc::new(NucleicAlphabet::dna()), 10).unwrap();
        assert_eq!(alphabet.state_coding_size(), 6);
        assert_eq!(alphabet.code_to_state_label(0).unwrap(), "A10A00");
        let code = alphabet.state_label_to_code("A03C07").unwrap();
        assert_eq!(alphabet.code_to_state_label(code).unwrap(), "A03C07");
    }

    #[rstest]
    fn test_codon_labels() {
        let codons = Arc::new(CodonAlphabet::new(NucleicAlphabet::dna()));
        let alphabet = AllelicAlphabet::new(codons, 2).unwrap();
        let code = alphabet.state_label_to_code("AAA1AAC1").unwrap();
        assert_eq!(code, 64);
        assert_eq!(alphabet.code_to_state_label(GAP_CODE).unwrap(), "---2---0");
        assert_eq!(alphabet.code_to_state_label(alphabet.unknown_code()).unwrap(), "???2???0");
    }

    #[rstest]
    fn test_is_resolved_in(dna4: AllelicAlphabet) {
        let a3c1 = dna4.state_label_to_code("A3C1").unwrap();
        assert!(dna4.is_resolved_in(a3c1, 0).unwrap());
        assert!(dna4.is_resolved_in(a3c1, 1).unwrap());
        assert!(!dna4.is_resolved_in(a3c1, 2).unwrap());
        assert!(dna4.is_resolved_in(2, 2).unwrap());
        assert!(!dna4.is_resolved_in(GAP_CODE, 0).unwrap());
        assert!(dna4.is_resolved_in(dna4.unknown_code(), 3).unwrap());
        assert!(dna4.is_resolved_in(0, 4).is_err());
        assert!(dna4.is_resolved_in(23, 0).is_err());
    }

    #[rstest]
    fn test_likelihoods_two_states(dna4: AllelicAlphabet) {
        let likelihoods = dna4.compute_likelihoods(&[3.0, 1.0, 0.0, 0.0]).unwrap();
        assert_eq!(likelihoods.len(), 23);

        let a3c1 = dna4.state_label_to_code("A3C1").unwrap() as usize;
        let a2c2 = dna4.state_label_to_code("A2C2").unwrap() as usize;
        assert!((likelihoods[a3c1] - 0.421875).abs() < 1e-9);
        assert!((likelihoods[a2c2] - 0.2109375).abs() < 1e-9);
        assert!((likelihoods[0] - 0.75f64.powi(4)).abs() < 1e-9);
        assert!((likelihoods[1] - 0.25f64.powi(4)).abs() < 1e-9);

        let total: f64 = likelihoods.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(likelihoods[2], 0.0);
        assert_eq!(likelihoods[22], 0.0);
    }

    #[rstest]
    #[case([1.0, 1.0, 0.0, 0.0])]
    #[case([1e308, 1e308, 0.0, 0.0])]
    #[case([1e-310, 1e-310, 0.0, 0.0])]
    fn test_likelihoods_even_split(dna4: AllelicAlphabet, #[case] counts: [f64; 4]) {
        let likelihoods = dna4.compute_likelihoods(&counts).unwrap();
        let a2c2 = dna4.state_label_to_code("A2C2").unwrap() as usize;
        assert!((likelihoods[a2c2] - 0.375).abs() < 1e-9);
        assert!((likelihoods[0] - 0.0625).abs() < 1e-9);
        assert!((likelihoods[1] - 0.0625).abs() < 1e-9);
    }

    #[rstest]
    fn test_likelihoods_single_state(dna4: AllelicAlphabet) {
        let likelihoods = dna4.compute_likelihoods(&[0.0, 0.0, 5.0, 0.0]).unwrap();
        let mut expected = vec![0.0; 23];
        expected[2] = 1.0;
        assert_eq!(likelihoods, expected);
    }

    #[rstest]
    fn test_likelihoods_many_states(dna4: AllelicAlphabet) {
        let likelihoods = dna4.compute_likelihoods(&[1.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(likelihoods[22], 1.0);
        assert_eq!(likelihoods.iter().sum::<f64>(), 1.0);
    }

    #[rstest]
    fn test_likelihoods_no_count(dna4: AllelicAlphabet) {
        let likelihoods = dna4.compute_likelihoods(&[0.0; 4]).unwrap();
        assert_eq!(likelihoods, vec![1.0; 23]);
    }

    #[rstest]
    fn test_likelihoods_bad_input(dna4: AllelicAlphabet) {
        assert!(matches!(
            dna4.compute_likelihoods(&[1.0, 2.0]),
            Err(SeqError::DimensionMismatch {
                expected: 4,
                found: 2
            })
        ));
        assert!(matches!(
            dna4.compute_likelihoods(&[1.0, -2.0, 0.0, 0.0]),
            Err(SeqError::InvalidValue(_))
        ));
        assert!(matches!(
            dna4.compute_likelihoods(&[1.0, f64::NAN, 0.0, 0.0]),
            Err(SeqError::InvalidValue(_))
        ));
    }

    #[rstest]
    fn test_translate_from_base(dna4: AllelicAlphabet) {
        assert_eq!(dna4.translate_from_base(3).unwrap(), 3);
        assert_eq!(dna4.translate_from_base(GAP_CODE).unwrap(), GAP_CODE);
        assert_eq!(dna4.translate_from_base(5).unwrap(), 22);
        assert!(dna4.translate_from_base(15).is_err());
    }

    #[rstest]
    fn test_convert_sequence(dna4: AllelicAlphabet) {
        let dna: Arc<dyn StateAlphabet> = Arc::new(NucleicAlphabet::dna());
        let sequence = Sequence::from_text("s1", "A-R", dna).unwrap();
        let rows = dna4.convert_sequence(&sequence).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], 1.0);
        assert_eq!(rows[1], vec![1.0; 23]);

        let a2g2 = dna4.state_label_to_code("A2G2").unwrap() as usize;
        assert!((rows[2][a2g2] - 0.375).abs() < 1e-9);
    }

    #[rstest]
    fn test_convert_sequence_wrong_alphabet(dna4: AllelicAlphabet) {
        let protein: Arc<dyn StateAlphabet> = Arc::new(ProteicAlphabet::new());
        let sequence = Sequence::from_text("s1", "MK", protein).unwrap();
        assert!(matches!(
            dna4.convert_sequence(&sequence),
            Err(SeqError::AlphabetMismatch { .. })
        ));
    }
}
