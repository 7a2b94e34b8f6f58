//! Polymorphism statistics over codon sites.
//!
//! Most functions want complete sites (every row a resolved codon) and fail
//! with `InvalidValue` otherwise. Stop codons inside a site make translation
//! fail with `StopCodon`.
use std::collections::BTreeMap;
use std::sync::Arc;

use log::trace;

use seqsites_core::{
    AlphabetType, CodonAlphabet, Column, GAP_CODE, NucleicAlphabet, SeqError, SeqResult, Site,
    StateAlphabet,
};

use crate::genetic_code::GeneticCode;
use crate::site_tools;

/// Fixed differences between two samples, split by their effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedDifferences {
    pub synonymous: usize,
    pub non_synonymous: usize,
}

fn codon_alphabet_of(site: &Site) -> SeqResult<CodonAlphabet> {
    let alphabet_type = site.alphabet().alphabet_type();
    match &alphabet_type {
        AlphabetType::Codon(inner) => match inner.as_ref() {
            AlphabetType::Dna => Ok(CodonAlphabet::new(NucleicAlphabet::dna())),
            AlphabetType::Rna => Ok(CodonAlphabet::new(NucleicAlphabet::rna())),
            _ => Err(not_codon(&alphabet_type)),
        },
        _ => Err(not_codon(&alphabet_type)),
    }
}

fn not_codon(found: &AlphabetType) -> SeqError {
    SeqError::AlphabetMismatch {
        expected: "Codon(DNA) or Codon(RNA)".to_string(),
        found: found.to_string(),
    }
}

fn check_site(site: &Site, code: &GeneticCode) -> SeqResult<()> {
    let expected = code.codon_alphabet().alphabet_type();
    let found = site.alphabet().alphabet_type();
    if expected != found {
        return Err(SeqError::AlphabetMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}

fn check_complete(site: &Site) -> SeqResult<()> {
    site_tools::is_complete(site)
        .then_some(())
        .ok_or_else(|| SeqError::InvalidValue("codon site is not complete".to_string()))
}

// nucleotides at one codon position, as a site of the underlying alphabet
fn nucleotide_site(site: &Site, codons: &CodonAlphabet, position: usize) -> SeqResult<Site> {
    let content = site
        .content()
        .iter()
        .map(|&codon| codons.nucleotide_at(codon, position))
        .collect::<SeqResult<Vec<_>>>()?;
    Site::new(content, Arc::new(*codons.nucleic_alphabet()))
}

pub fn has_stop(site: &Site, code: &GeneticCode) -> bool {
    site.content().iter().any(|&codon| code.is_stop(codon))
}

pub fn has_gap_or_stop(site: &Site, code: &GeneticCode) -> bool {
    site_tools::has_gap(site) || has_stop(site, code)
}

/// True if a polymorphic complete site varies at a single codon position.
pub fn is_mono_site_polymorphic(site: &Site) -> SeqResult<bool> {
    let codons = codon_alphabet_of(site)?;
    check_complete(site)?;
    if site_tools::is_constant(site, false)? {
        return Ok(false);
    }
    let mut polymorphic = 0;
    for position in 0..3 {
        if !site_tools::is_constant(&nucleotide_site(site, &codons, position)?, false)? {
            polymorphic += 1;
        }
    }
    Ok(polymorphic == 1)
}

/// True if a polymorphic complete site codes a single amino acid.
pub fn is_synonymous_polymorphic(site: &Site, code: &GeneticCode) -> SeqResult<bool> {
    check_site(site, code)?;
    check_complete(site)?;
    if site_tools::is_constant(site, false)? {
        return Ok(false);
    }
    let amino_acids = site
        .content()
        .iter()
        .map(|&codon| code.translate(codon))
        .collect::<SeqResult<Vec<_>>>()?;
    Ok(amino_acids.windows(2).all(|pair| pair[0] == pair[1]))
}

///
/// Copy of a complete codon site where rare nucleotides are replaced by the
/// most frequent one at their codon position.
///
/// A nucleotide is rare when its frequency at its position is strictly lower
/// than `freqmin`. A row whose rebuilt codon would be a stop keeps its codon.
///
pub fn codon_site_without_rare_variant(
    site: &Site,
    code: &GeneticCode,
    freqmin: f64,
) -> SeqResult<Site> {
    check_site(site, code)?;
    check_complete(site)?;
    if site_tools::is_constant(site, false)? {
        return Ok(site.clone());
    }

    let codons = code.codon_alphabet();
    let mut columns: Vec<Vec<i32>> = Vec::with_capacity(3);
    for position in 0..3 {
        let column = nucleotide_site(site, codons, position)?;
        let freqs = site_tools::frequencies(&column, false)?;
        let major = most_frequent(&freqs);
        columns.push(
            column
                .content()
                .iter()
                .map(|n| match freqs.get(n) {
                    Some(&f) if f < freqmin => major,
                    _ => *n,
                })
                .collect(),
        );
    }

    let mut content = Vec::with_capacity(site.size());
    for (row, &original) in site.content().iter().enumerate() {
        let rebuilt = codons.codon(columns[0][row], columns[1][row], columns[2][row])?;
        content.push(if code.is_stop(rebuilt) { original } else { rebuilt });
    }
    Ok(Site::new(content, site.alphabet().clone())?.with_position(site.position()))
}

// lowest code wins ties
fn most_frequent(freqs: &BTreeMap<i32, f64>) -> i32 {
    let mut best = (GAP_CODE, f64::NEG_INFINITY);
    for (&state, &f) in freqs {
        if f > best.1 {
            best = (state, f);
        }
    }
    best.0
}

/// Number of codon positions at which two resolved codons differ.
pub fn number_of_differences(codon1: i32, codon2: i32, codons: &CodonAlphabet) -> SeqResult<usize> {
    let p1 = codons.positions(codon1)?;
    let p2 = codons.positions(codon2)?;
    Ok((0..3).filter(|&pos| p1[pos] != p2[pos]).count())
}

// every order in which the given positions can change
fn orders(positions: &[usize]) -> Vec<Vec<usize>> {
    if positions.len() <= 1 {
        return vec![positions.to_vec()];
    }
    let mut out = Vec::new();
    for (k, &first) in positions.iter().enumerate() {
        let mut rest = positions.to_vec();
        rest.remove(k);
        for tail in orders(&rest) {
            let mut order = vec![first];
            order.extend(tail);
            out.push(order);
        }
    }
    out
}

// synonymous steps along each single-change path from codon1 to codon2;
// None for a path going through a stop codon
fn synonymous_steps(codon1: i32, codon2: i32, code: &GeneticCode) -> SeqResult<Vec<Option<usize>>> {
    let codons = code.codon_alphabet();
    let start = codons.positions(codon1)?;
    let end = codons.positions(codon2)?;
    // both ends must translate
    code.translate(codon1)?;
    code.translate(codon2)?;

    let differing: Vec<usize> = (0..3).filter(|&pos| start[pos] != end[pos]).collect();
    let mut paths = Vec::new();
    for order in orders(&differing) {
        let mut current = start;
        let mut previous = codon1;
        let mut steps = Some(0);
        for (step, &pos) in order.iter().enumerate() {
            current[pos] = end[pos];
            let next = codons.codon(current[0], current[1], current[2])?;
            if step + 1 < order.len() && code.is_stop(next) {
                steps = None;
                break;
            }
            if code.are_synonymous(previous, next)? {
                steps = steps.map(|s| s + 1);
            }
            previous = next;
        }
        paths.push(steps);
    }
    Ok(paths)
}

///
/// Number of synonymous differences between two codons.
///
/// Codons differing at several positions are linked by every path changing
/// one position at a time; paths through a stop codon are left out. The
/// result is the mean over the remaining paths, or with `minchange` the path
/// with the fewest non-synonymous changes.
///
pub fn number_of_synonymous_differences(
    codon1: i32,
    codon2: i32,
    code: &GeneticCode,
    minchange: bool,
) -> SeqResult<f64> {
    let valid: Vec<f64> = synonymous_steps(codon1, codon2, code)?
        .into_iter()
        .flatten()
        .map(|s| s as f64)
        .collect();
    if valid.is_empty() {
        trace!("every path from {} to {} goes through a stop", codon1, codon2);
        return Ok(0.0);
    }
    if minchange {
        Ok(valid.iter().copied().fold(f64::NEG_INFINITY, f64::max))
    } else {
        Ok(valid.iter().sum::<f64>() / valid.len() as f64)
    }
}

fn pi(site: &Site, code: &GeneticCode, minchange: bool, synonymous: bool) -> SeqResult<f64> {
    check_site(site, code)?;
    check_complete(site)?;
    if site.size() < 2 {
        return Err(SeqError::InvalidValue(
            "diversity needs at least two sequences".to_string(),
        ));
    }

    let freqs = site_tools::frequencies(site, false)?;
    let mut pi = 0.0;
    for (&codon1, &f1) in &freqs {
        for (&codon2, &f2) in &freqs {
            let syn = number_of_synonymous_differences(codon1, codon2, code, minchange)?;
            let differences = if synonymous {
                syn
            } else {
                number_of_differences(codon1, codon2, code.codon_alphabet())? as f64 - syn
            };
            pi += f1 * f2 * differences;
        }
    }
    let n = site.size() as f64;
    Ok(pi * n / (n - 1.0))
}

///
/// Synonymous diversity of a codon site, `n/(n-1) * sum x_i x_j P_ij` with
/// `P_ij` the synonymous differences between codons `i` and `j`.
///
/// Not normalized by the number of synonymous positions.
///
pub fn pi_synonymous(site: &Site, code: &GeneticCode, minchange: bool) -> SeqResult<f64> {
    pi(site, code, minchange, true)
}

/// Non-synonymous counterpart of [`pi_synonymous`].
pub fn pi_non_synonymous(site: &Site, code: &GeneticCode, minchange: bool) -> SeqResult<f64> {
    pi(site, code, minchange, false)
}

///
/// Synonymous share of the single-nucleotide changes of a codon, summed over
/// its three positions.
///
/// `ratio` is the transition/transversion ratio: a synonymous transition
/// counts `ratio / (ratio + 2)`, a synonymous transversion `1 / (ratio + 2)`.
/// Changes to a stop codon count nothing. Gaps, unknown codons and stop
/// codons have no synonymous position.
///
pub fn number_of_synonymous_positions(codon: i32, code: &GeneticCode, ratio: f64) -> SeqResult<f64> {
    let codons = code.codon_alphabet();
    if !codons.is_valid_code(codon) {
        return Err(SeqError::out_of_range(
            codon,
            codons.number_of_types(),
            "number_of_synonymous_positions",
        ));
    }
    if codon == GAP_CODE || codons.is_unresolved(codon) || code.is_stop(codon) {
        return Ok(0.0);
    }

    let nucleotides = codons.positions(codon)?;
    let amino_acid = code.translate(codon)?;
    let mut positions = 0.0;
    for pos in 0..3 {
        for n in (0..4).filter(|&n| n != nucleotides[pos]) {
            let mut mutant = nucleotides;
            mutant[pos] = n;
            let mutant = codons.codon(mutant[0], mutant[1], mutant[2])?;
            if code.is_stop(mutant) || code.translate(mutant)? != amino_acid {
                continue;
            }
            // A=0, C=1, G=2, T=3: transitions keep the parity
            if nucleotides[pos] % 2 == n % 2 {
                positions += ratio / (ratio + 2.0);
            } else {
                positions += 1.0 / (ratio + 2.0);
            }
        }
    }
    Ok(positions)
}

/// Mean of [`number_of_synonymous_positions`] over the rows of a site.
pub fn mean_number_of_synonymous_positions(
    site: &Site,
    code: &GeneticCode,
    ratio: f64,
) -> SeqResult<f64> {
    check_site(site, code)?;
    if site.is_empty() {
        return Err(SeqError::EmptySite);
    }
    let mut total = 0.0;
    for &codon in site.content() {
        total += number_of_synonymous_positions(codon, code, ratio)?;
    }
    Ok(total / site.size() as f64)
}

// drop rare variants when freqmin can make a difference
fn without_rare(site: &Site, code: &GeneticCode, freqmin: f64) -> SeqResult<Site> {
    if freqmin > 1.0 / site.size() as f64 {
        codon_site_without_rare_variant(site, code, freqmin)
    } else {
        Ok(site.clone())
    }
}

///
/// Number of substitutions at a complete codon site, assuming no
/// recombination between codons.
///
/// Counts the distinct nucleotides minus one at each position, and at least
/// the number of distinct codons minus one. Nucleotides rarer than `freqmin`
/// are first replaced (see [`codon_site_without_rare_variant`]).
///
pub fn number_of_substitutions(site: &Site, code: &GeneticCode, freqmin: f64) -> SeqResult<usize> {
    check_site(site, code)?;
    check_complete(site)?;
    if site_tools::is_constant(site, true)? {
        return Ok(0);
    }
    let site = without_rare(site, code, freqmin)?;
    if site_tools::is_constant(&site, true)? {
        return Ok(0);
    }

    let mut per_position = 0;
    for position in 0..3 {
        let column = nucleotide_site(&site, code.codon_alphabet(), position)?;
        per_position += site_tools::number_of_distinct_characters(&column)? - 1;
    }
    let distinct_codons = site_tools::number_of_distinct_characters(&site)? - 1;
    Ok(per_position.max(distinct_codons))
}

///
/// Number of non-synonymous substitutions at a complete codon site.
///
/// For each distinct codon, the fewest non-synonymous differences to any
/// other distinct codon are summed, then the smallest of those minima is
/// taken off. Paths between codons use `minchange`.
///
pub fn number_of_non_synonymous_substitutions(
    site: &Site,
    code: &GeneticCode,
    freqmin: f64,
) -> SeqResult<usize> {
    check_site(site, code)?;
    check_complete(site)?;
    if site_tools::is_constant(site, true)? {
        return Ok(0);
    }
    let site = without_rare(site, code, freqmin)?;
    if site_tools::is_constant(&site, true)? {
        return Ok(0);
    }

    let distinct: Vec<i32> = site_tools::counts(&site).into_keys().collect();
    let mut sum_of_minima = 0;
    let mut smallest = usize::MAX;
    for &codon1 in &distinct {
        let mut closest = usize::MAX;
        for &codon2 in distinct.iter().filter(|&&c| c != codon1) {
            let total = number_of_differences(codon1, codon2, code.codon_alphabet())?;
            let syn = number_of_synonymous_differences(codon1, codon2, code, true)? as usize;
            closest = closest.min(total - syn);
        }
        sum_of_minima += closest;
        smallest = smallest.min(closest);
    }
    Ok(sum_of_minima - smallest)
}

///
/// Synonymous and non-synonymous differences between the consensus codons
/// of two samples that are fixed in both.
///
/// # Arguments
/// * `site_in` - codons of the first sample
/// * `site_out` - codons of the second sample
/// * `codon_in` - consensus codon of `site_in`
/// * `codon_out` - consensus codon of `site_out`
///
/// A difference at a codon position is fixed when that position is constant
/// in both samples. Only fixed differences are counted, along the path with
/// the fewest non-synonymous changes.
///
pub fn fixed_differences(
    site_in: &Site,
    site_out: &Site,
    codon_in: i32,
    codon_out: i32,
    code: &GeneticCode,
) -> SeqResult<FixedDifferences> {
    check_site(site_in, code)?;
    check_site(site_out, code)?;
    check_complete(site_in)?;
    check_complete(site_out)?;

    let codons = code.codon_alphabet();
    let start = codons.positions(codon_in)?;
    let end = codons.positions(codon_out)?;
    let mut target = start;
    for pos in 0..3 {
        if start[pos] == end[pos] {
            continue;
        }
        let fixed_in = site_tools::is_constant(&nucleotide_site(site_in, codons, pos)?, false)?;
        let fixed_out = site_tools::is_constant(&nucleotide_site(site_out, codons, pos)?, false)?;
        if fixed_in && fixed_out {
            target[pos] = end[pos];
        }
    }

    let target = codons.codon(target[0], target[1], target[2])?;
    let total = number_of_differences(codon_in, target, codons)?;
    if total == 0 {
        return Ok(FixedDifferences::default());
    }
    if code.is_stop(target) {
        return Ok(FixedDifferences {
            synonymous: 0,
            non_synonymous: total,
        });
    }
    let synonymous = number_of_synonymous_differences(codon_in, target, code, true)? as usize;
    Ok(FixedDifferences {
        synonymous,
        non_synonymous: total - synonymous,
    })
}

/// True if every codon of the site, gaps and unknown codons aside, is fourfold
/// degenerated. A site with no such codon is not.
pub fn is_four_fold_degenerated(site: &Site, code: &GeneticCode) -> SeqResult<bool> {
    check_site(site, code)?;
    let unknown = code.codon_alphabet().unknown_code();
    let mut seen = false;
    for &codon in site.content() {
        if codon == GAP_CODE || codon == unknown {
            continue;
        }
        if !code.is_four_fold_degenerated(codon)? {
            return Ok(false);
        }
        seen = true;
    }
    Ok(seen)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn code() -> GeneticCode {
        GeneticCode::standard()
    }

    fn codon(text: &str) -> i32 {
        CodonAlphabet::new(NucleicAlphabet::dna())
            .char_to_int(text)
            .unwrap()
    }

    fn site(codons: &[&str]) -> Site {
        let alphabet: Arc<dyn StateAlphabet> = Arc::new(CodonAlphabet::new(NucleicAlphabet::dna()));
        Site::from_symbols(codons, alphabet).unwrap()
    }

    #[rstest]
    fn test_orders() {
        assert_eq!(orders(&[]), vec![Vec::<usize>::new()]);
        assert_eq!(orders(&[0, 2]), vec![vec![0, 2], vec![2, 0]]);
        assert_eq!(orders(&[0, 1, 2]).len(), 6);
    }

    #[rstest]
    #[case("ATG", "ATT", 1)]
    #[case("AAA", "TTT", 3)]
    #[case("CTA", "CTA", 0)]
    fn test_number_of_differences(#[case] c1: &str, #[case] c2: &str, #[case] expected: usize) {
        let codons = CodonAlphabet::new(NucleicAlphabet::dna());
        assert_eq!(number_of_differences(codon(c1), codon(c2), &codons).unwrap(), expected);
    }

    #[rstest]
    #[case("CTT", "CTC", 1.0)]
    #[case("ATT", "ATG", 0.0)]
    #[case("TTA", "CTG", 2.0)]
    // CGA -> TGA goes through a stop, only CGA -> CGG -> TGG counts
    #[case("CGA", "TGG", 1.0)]
    fn test_synonymous_differences(
        code: GeneticCode,
        #[case] c1: &str,
        #[case] c2: &str,
        #[case] expected: f64,
    ) {
        for minchange in [false, true] {
            let syn = number_of_synonymous_differences(codon(c1), codon(c2), &code, minchange).unwrap();
            assert!((syn - expected).abs() < 1e-12, "{} {} {}", c1, c2, syn);
        }
    }

    #[rstest]
    fn test_synonymous_differences_minchange(code: GeneticCode) {
        let mean = number_of_synonymous_differences(codon("AAA"), codon("TTT"), &code, false).unwrap();
        let max = number_of_synonymous_differences(codon("AAA"), codon("TTT"), &code, true).unwrap();
        assert!(max >= mean);
        assert!(number_of_synonymous_differences(codon("TAA"), codon("TTT"), &code, false).is_err());
    }

    #[rstest]
    #[case("GCA", 1.0, 1.0)]
    #[case("TTA", 1.0, 2.0 / 3.0)]
    #[case("TTA", 2.0, 1.0)]
    #[case("ATG", 1.0, 0.0)]
    #[case("TAA", 1.0, 0.0)]
    #[case("NNN", 1.0, 0.0)]
    #[case("---", 1.0, 0.0)]
    fn test_synonymous_positions(
        code: GeneticCode,
        #[case] c: &str,
        #[case] ratio: f64,
        #[case] expected: f64,
    ) {
        let positions = number_of_synonymous_positions(codon(c), &code, ratio).unwrap();
        assert!((positions - expected).abs() < 1e-12);
    }

    #[rstest]
    fn test_mean_synonymous_positions(code: GeneticCode) {
        let mean = mean_number_of_synonymous_positions(&site(&["GCA", "ATG"]), &code, 1.0).unwrap();
        assert!((mean - 0.5).abs() < 1e-12);
    }

    #[rstest]
    fn test_pi(code: GeneticCode) {
        let synonymous = site(&["TTA", "TTA", "TTG", "TTG"]);
        assert!((pi_synonymous(&synonymous, &code, false).unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(pi_non_synonymous(&synonymous, &code, false).unwrap(), 0.0);

        let replacement = site(&["TTA", "TTC"]);
        assert_eq!(pi_synonymous(&replacement, &code, false).unwrap(), 0.0);
        assert!((pi_non_synonymous(&replacement, &code, false).unwrap() - 1.0).abs() < 1e-12);

        assert!(pi_synonymous(&site(&["TTA"]), &code, false).is_err());
        assert!(pi_synonymous(&site(&["TTA", "NNN"]), &code, false).is_err());
    }

    #[rstest]
    fn test_number_of_substitutions(code: GeneticCode) {
        let complex = site(&["ATT", "ATT", "ATT", "ATC", "ATC", "AGT", "AGT", "AGC"]);
        assert_eq!(number_of_substitutions(&complex, &code, 0.0).unwrap(), 3);

        let double = site(&["ATT", "ACC"]);
        assert_eq!(number_of_substitutions(&double, &code, 0.0).unwrap(), 2);

        let mut rows = vec!["ATT"; 9];
        rows.push("ATC");
        let rare = site(&rows);
        assert_eq!(number_of_substitutions(&rare, &code, 0.0).unwrap(), 1);
        assert_eq!(number_of_substitutions(&rare, &code, 0.2).unwrap(), 0);
    }

    #[rstest]
    fn test_non_synonymous_substitutions(code: GeneticCode) {
        let lysine = site(&["AAA", "AAC", "AAG"]);
        assert_eq!(number_of_non_synonymous_substitutions(&lysine, &code, 0.0).unwrap(), 1);

        let isoleucine = site(&["ATT", "ATT", "ATC"]);
        assert_eq!(number_of_non_synonymous_substitutions(&isoleucine, &code, 0.0).unwrap(), 0);
    }

    #[rstest]
    fn test_without_rare_variant(code: GeneticCode) {
        let rare = site(&["ATT", "ATT", "ATT", "ATC"]);
        let cleaned = codon_site_without_rare_variant(&rare, &code, 0.3).unwrap();
        assert_eq!(cleaned, site(&["ATT"; 4]));

        // TGG would become the stop TAA and is kept
        let stop = site(&["TAC", "TAC", "TCA", "TCA", "TGG"]);
        let cleaned = codon_site_without_rare_variant(&stop, &code, 0.3).unwrap();
        assert_eq!(cleaned, stop);
    }

    #[rstest]
    fn test_fixed_differences(code: GeneticCode) {
        let site_in = site(&["ATT", "ATT", "ATC"]);
        let site_out = site(&["CTA", "CTA", "CTA"]);
        let fixed = fixed_differences(&site_in, &site_out, codon("ATT"), codon("CTA"), &code).unwrap();
        assert_eq!(
            fixed,
            FixedDifferences {
                synonymous: 0,
                non_synonymous: 1
            }
        );
    }

    #[rstest]
    fn test_polymorphism_flags(code: GeneticCode) {
        assert!(is_mono_site_polymorphic(&site(&["ATT", "ATC"])).unwrap());
        assert!(!is_mono_site_polymorphic(&site(&["ATT", "AGC"])).unwrap());
        assert!(!is_mono_site_polymorphic(&site(&["ATT", "ATT"])).unwrap());
        assert!(is_mono_site_polymorphic(&site(&["ATT", "---"])).is_err());

        assert!(is_synonymous_polymorphic(&site(&["TTA", "CTA"]), &code).unwrap());
        assert!(!is_synonymous_polymorphic(&site(&["TTA", "TTC"]), &code).unwrap());
    }

    #[rstest]
    fn test_stops_and_degeneracy(code: GeneticCode) {
        assert!(has_stop(&site(&["ATT", "TGA"]), &code));
        assert!(!has_stop(&site(&["ATT", "---"]), &code));
        assert!(has_gap_or_stop(&site(&["ATT", "---"]), &code));

        assert!(is_four_fold_degenerated(&site(&["GCA", "GCT", "---"]), &code).unwrap());
        assert!(!is_four_fold_degenerated(&site(&["GCA", "TTA"]), &code).unwrap());
        assert!(!is_four_fold_degenerated(&site(&["---", "NNN"]), &code).unwrap());
    }

    #[rstest]
    fn test_wrong_alphabet(code: GeneticCode) {
        let dna: Arc<dyn StateAlphabet> = Arc::new(NucleicAlphabet::dna());
        let nucleotides = Site::from_text("ACG", dna).unwrap();
        assert!(matches!(
            pi_synonymous(&nucleotides, &code, false),
            Err(SeqError::AlphabetMismatch { .. })
        ));
        assert!(is_mono_site_polymorphic(&nucleotides).is_err());
    }
}
