//! Functions over whole sequences.
use std::sync::Arc;

use seqsites_core::{
    AlphabetType, GAP_CODE, NucleicAlphabet, SeqError, SeqResult, Sequence, StateAlphabet,
};

fn nucleic_alphabet(sequence: &Sequence) -> SeqResult<NucleicAlphabet> {
    match sequence.alphabet().alphabet_type() {
        AlphabetType::Dna => Ok(NucleicAlphabet::dna()),
        AlphabetType::Rna => Ok(NucleicAlphabet::rna()),
        other => Err(SeqError::AlphabetMismatch {
            expected: "DNA or RNA".to_string(),
            found: other.to_string(),
        }),
    }
}

fn expect_alphabet(sequence: &Sequence, expected: AlphabetType) -> SeqResult<()> {
    let found = sequence.alphabet().alphabet_type();
    if found != expected {
        return Err(SeqError::AlphabetMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}

fn same_alphabet(seq1: &Sequence, seq2: &Sequence) -> SeqResult<()> {
    expect_alphabet(seq2, seq1.alphabet().alphabet_type())
}

// C or G share of a nucleic code, by its possible resolved states
fn gc_share(alphabet: &NucleicAlphabet, code: i32) -> SeqResult<f64> {
    let states = alphabet.alias(code)?;
    if states.is_empty() {
        return Ok(0.0);
    }
    let gc = states.iter().filter(|&&s| s == 1 || s == 2).count();
    Ok(gc as f64 / states.len() as f64)
}

///
/// GC content of a nucleic sequence.
///
/// Ambiguous states count for the share of their possible states that are C
/// or G (S counts 1, R counts 0.5, N counts 0.5).
///
/// # Arguments
/// * `ignore_unresolved` - leave ambiguous states out instead
/// * `ignore_gap` - leave gaps out of the total; otherwise they count as non-GC
///
/// # Returns
/// The GC fraction, 0 when nothing is counted.
///
pub fn gc_content(sequence: &Sequence, ignore_unresolved: bool, ignore_gap: bool) -> SeqResult<f64> {
    let alphabet = nucleic_alphabet(sequence)?;
    let mut gc = 0.0;
    let mut total = 0.0;
    for &code in sequence.content() {
        if code == GAP_CODE {
            if !ignore_gap {
                total += 1.0;
            }
        } else if alphabet.is_unresolved(code) {
            if !ignore_unresolved {
                gc += gc_share(&alphabet, code)?;
                total += 1.0;
            }
        } else {
            gc += gc_share(&alphabet, code)?;
            total += 1.0;
        }
    }
    Ok(if total > 0.0 { gc / total } else { 0.0 })
}

///
/// GC content of the `window` states centered on `pos`.
///
/// The window is shifted to stay inside the sequence. Gaps are left out and
/// ambiguous states count for their share.
///
pub fn gc_content_window(sequence: &Sequence, pos: usize, window: usize) -> SeqResult<f64> {
    if pos >= sequence.len() {
        return Err(SeqError::out_of_range(pos, sequence.len(), "gc_content_window"));
    }
    if window == 0 || window > sequence.len() {
        return Err(SeqError::InvalidValue(format!(
            "window of {} does not fit a sequence of length {}",
            window,
            sequence.len()
        )));
    }
    let start = pos
        .saturating_sub(window / 2)
        .min(sequence.len() - window);
    let part = sequence.with_content(sequence.content()[start..start + window].to_vec())?;
    gc_content(&part, false, true)
}

pub fn reverse(sequence: &Sequence) -> SeqResult<Sequence> {
    let mut content = sequence.content().to_vec();
    content.reverse();
    sequence.with_content(content)
}

/// Complementary strand, read in the same direction.
pub fn complement(sequence: &Sequence) -> SeqResult<Sequence> {
    let alphabet = nucleic_alphabet(sequence)?;
    let content = sequence
        .content()
        .iter()
        .map(|&code| alphabet.complement(code))
        .collect::<SeqResult<Vec<_>>>()?;
    sequence.with_content(content)
}

pub fn reverse_complement(sequence: &Sequence) -> SeqResult<Sequence> {
    reverse(&complement(sequence)?)
}

/// DNA to RNA; T becomes U.
pub fn transcribe(sequence: &Sequence) -> SeqResult<Sequence> {
    expect_alphabet(sequence, AlphabetType::Dna)?;
    Sequence::new(
        sequence.name(),
        sequence.content().to_vec(),
        Arc::new(NucleicAlphabet::rna()),
    )
}

/// RNA to DNA; U becomes T.
pub fn reverse_transcribe(sequence: &Sequence) -> SeqResult<Sequence> {
    expect_alphabet(sequence, AlphabetType::Rna)?;
    Sequence::new(
        sequence.name(),
        sequence.content().to_vec(),
        Arc::new(NucleicAlphabet::dna()),
    )
}

///
/// Percentage of identical states between two aligned sequences.
///
/// With `ignore_gaps`, positions where either sequence has a gap are left out.
///
pub fn percent_identity(seq1: &Sequence, seq2: &Sequence, ignore_gaps: bool) -> SeqResult<f64> {
    same_alphabet(seq1, seq2)?;
    if seq1.len() != seq2.len() {
        return Err(SeqError::DimensionMismatch {
            expected: seq1.len(),
            found: seq2.len(),
        });
    }

    let mut identical = 0usize;
    let mut compared = 0usize;
    for (&x, &y) in seq1.content().iter().zip(seq2.content()) {
        if ignore_gaps && (x == GAP_CODE || y == GAP_CODE) {
            continue;
        }
        compared += 1;
        if x == y {
            identical += 1;
        }
    }
    if compared == 0 {
        return Err(SeqError::InvalidValue(
            "no position left to compare".to_string(),
        ));
    }
    Ok(identical as f64 / compared as f64 * 100.0)
}

/// Number of non-gap positions.
pub fn number_of_sites(sequence: &Sequence) -> usize {
    sequence
        .content()
        .iter()
        .filter(|&&code| code != GAP_CODE)
        .count()
}

/// Number of positions holding a resolved state.
pub fn number_of_complete_sites(sequence: &Sequence) -> usize {
    let size = sequence.alphabet().size() as i32;
    sequence
        .content()
        .iter()
        .filter(|&&code| (0..size).contains(&code))
        .count()
}

pub fn remove_gaps(sequence: &Sequence) -> SeqResult<Sequence> {
    let content = sequence
        .content()
        .iter()
        .copied()
        .filter(|&code| code != GAP_CODE)
        .collect();
    sequence.with_content(content)
}

/// Positions `begin..end` of a sequence.
pub fn subsequence(sequence: &Sequence, begin: usize, end: usize) -> SeqResult<Sequence> {
    if end > sequence.len() {
        return Err(SeqError::out_of_range(end, sequence.len() + 1, "subsequence"));
    }
    if begin > end {
        return Err(SeqError::out_of_range(begin, end + 1, "subsequence"));
    }
    sequence.with_content(sequence.content()[begin..end].to_vec())
}

///
/// Join two pieces of the same sequence.
///
/// Both must have the same name and alphabet.
///
pub fn concatenate(seq1: &Sequence, seq2: &Sequence) -> SeqResult<Sequence> {
    same_alphabet(seq1, seq2)?;
    if seq1.name() != seq2.name() {
        return Err(SeqError::InvalidValue(format!(
            "can not concatenate sequences {} and {}",
            seq1.name(),
            seq2.name()
        )));
    }
    let mut content = seq1.content().to_vec();
    content.extend_from_slice(seq2.content());
    seq1.with_content(content)
}
