//! Statistics over single sites.
use std::collections::BTreeMap;

use seqsites_core::utils::ln_factorial;
use seqsites_core::{Column, GAP_CODE, SeqError, SeqResult, Site};

fn check_not_empty(site: &Site) -> SeqResult<()> {
    if site.is_empty() {
        return Err(SeqError::EmptySite);
    }
    Ok(())
}

pub fn has_gap(site: &Site) -> bool {
    site.content().contains(&GAP_CODE)
}

pub fn has_unknown(site: &Site) -> bool {
    let unknown = site.alphabet().unknown_code();
    site.content().contains(&unknown)
}

/// True if every row holds a resolved state.
pub fn is_complete(site: &Site) -> bool {
    let size = site.alphabet().size() as i32;
    site.content().iter().all(|code| (0..size).contains(code))
}

///
/// True if all rows hold the same state.
///
/// With `ignore_unknown`, gaps and unknown states are skipped; a site made
/// only of those is constant.
///
pub fn is_constant(site: &Site, ignore_unknown: bool) -> SeqResult<bool> {
    check_not_empty(site)?;
    let unknown = site.alphabet().unknown_code();
    let mut states = site
        .content()
        .iter()
        .filter(|&&code| !ignore_unknown || (code != GAP_CODE && code != unknown));
    Ok(match states.next() {
        Some(first) => states.all(|code| code == first),
        None => true,
    })
}

/// Same alphabet and same states, positions aside.
pub fn are_sites_identical(site1: &Site, site2: &Site) -> bool {
    site1 == site2
}

/// Number of rows holding each code, gaps and generic codes included.
pub fn counts(site: &Site) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for &code in site.content() {
        *counts.entry(code).or_insert(0) += 1;
    }
    counts
}

///
/// Frequency of each code in the site.
///
/// With `resolve_unknowns`, a generic code is split evenly among the resolved
/// states it stands for. Gaps keep their own entry.
///
pub fn frequencies(site: &Site, resolve_unknowns: bool) -> SeqResult<BTreeMap<i32, f64>> {
    check_not_empty(site)?;
    let alphabet = site.alphabet();
    let n = site.size() as f64;

    let mut freqs = BTreeMap::new();
    for &code in site.content() {
        if resolve_unknowns && code != GAP_CODE {
            let states = alphabet.alias(code)?;
            let share = 1.0 / (states.len() as f64 * n);
            for state in states {
                *freqs.entry(state).or_insert(0.0) += share;
            }
        } else {
            *freqs.entry(code).or_insert(0.0) += 1.0 / n;
        }
    }
    Ok(freqs)
}

/// Shannon entropy of the site, in nats.
pub fn variability_shannon(site: &Site, resolve_unknowns: bool) -> SeqResult<f64> {
    Ok(frequencies(site, resolve_unknowns)?
        .values()
        .filter(|&&f| f > 0.0)
        .map(|&f| -f * f.ln())
        .sum())
}

///
/// Log of the number of distinct orderings of the site's states:
/// `ln(n! / (n_1! n_2! ... n_k!))`.
///
pub fn variability_factorial(site: &Site) -> SeqResult<f64> {
    check_not_empty(site)?;
    let denominator: f64 = counts(site).values().map(|&c| ln_factorial(c)).sum();
    Ok(ln_factorial(site.size()) - denominator)
}

pub fn number_of_distinct_characters(site: &Site) -> SeqResult<usize> {
    check_not_empty(site)?;
    Ok(counts(site).len())
}

/// At least two resolved states each seen at least twice, on a complete site.
pub fn is_parsimony_informative(site: &Site) -> SeqResult<bool> {
    check_not_empty(site)?;
    if !is_complete(site) {
        return Ok(false);
    }
    Ok(counts(site).values().filter(|&&c| c > 1).count() > 1)
}
