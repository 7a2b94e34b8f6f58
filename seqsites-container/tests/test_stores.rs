//! Integration tests running the same edits through both stores.

use std::sync::Arc;

use anyhow::Result;
use pretty_assertions::assert_eq;
use rstest::rstest;

use seqsites_allelic::AllelicAlphabet;
use seqsites_container::{CompressedSiteIndex, PositionedStore, VectorSiteContainer};
use seqsites_core::{NucleicAlphabet, SeqError, Site, StateAlphabet};

fn fill<S: PositionedStore<Site>>(store: &mut S, alphabet: &Arc<dyn StateAlphabet>) -> Result<()> {
    for text in ["AAC", "AAC", "GTT", "AAC", "G-T"] {
        store.append_column(Site::from_text(text, alphabet.clone())?)?;
    }
    store.insert_column_at(1, Site::from_text("CCC", alphabet.clone())?)?;
    store.remove_column_at(0)?;
    store.remove_row(2)?;
    Ok(())
}

fn texts<S: PositionedStore<Site>>(store: &S) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for pos in 0..store.number_of_columns() {
        out.push(store.column_at(pos)?.to_text()?);
    }
    Ok(out)
}

#[rstest]
fn test_stores_agree() -> Result<()> {
    let dna: Arc<dyn StateAlphabet> = Arc::new(NucleicAlphabet::dna());
    let mut compressed: CompressedSiteIndex = CompressedSiteIndex::new(dna.clone());
    let mut plain: VectorSiteContainer = VectorSiteContainer::new(dna.clone());

    fill(&mut compressed, &dna)?;
    fill(&mut plain, &dna)?;

    assert_eq!(texts(&compressed)?, texts(&plain)?);
    assert_eq!(texts(&plain)?, vec!["CC", "AA", "GT", "AA", "G-"]);
    assert_eq!(compressed.number_of_rows(), 2);
    assert_eq!(compressed.number_of_unique_columns(), 4);
    Ok(())
}

#[rstest]
fn test_failed_edits_change_nothing() -> Result<()> {
    let dna: Arc<dyn StateAlphabet> = Arc::new(NucleicAlphabet::dna());
    let mut store: CompressedSiteIndex = CompressedSiteIndex::new(dna.clone());
    store.append_column(Site::from_text("AC", dna.clone())?)?;

    let err = store.insert_column_at(3, Site::from_text("AC", dna.clone())?);
    assert!(matches!(err, Err(SeqError::IndexOutOfRange { .. })));
    let err = store.append_column(Site::from_text("ACG", dna.clone())?);
    assert!(matches!(err, Err(SeqError::DimensionMismatch { .. })));
    let err = store.remove_row(5);
    assert!(matches!(err, Err(SeqError::IndexOutOfRange { .. })));

    assert_eq!(store.number_of_columns(), 1);
    assert_eq!(store.number_of_unique_columns(), 1);
    assert_eq!(store.number_of_rows(), 2);
    Ok(())
}

#[rstest]
fn test_allelic_columns() -> Result<()> {
    let alphabet: Arc<dyn StateAlphabet> =
        Arc::new(AllelicAlphabet::new(Arc::new(NucleicAlphabet::dna()), 4)?);
    let mut store: CompressedSiteIndex = CompressedSiteIndex::new(alphabet.clone());
    for text in ["A4A0A3C1", "A4A0A3C1", "C2G2T4T0"] {
        store.append_column(Site::from_text(text, alphabet.clone())?)?;
    }

    assert_eq!(store.number_of_unique_columns(), 2);
    // A3C1 carries C, A4A0 does not
    assert_eq!(store.state_value_at(1, 1, 1)?, 1.0);
    assert_eq!(store.state_value_at(1, 0, 1)?, 0.0);
    assert_eq!(store.sequence(1)?.to_text()?, "A3C1A3C1T4T0");
    Ok(())
}

#[rstest]
fn test_other_alphabet_is_rejected() -> Result<()> {
    let dna: Arc<dyn StateAlphabet> = Arc::new(NucleicAlphabet::dna());
    let allelic: Arc<dyn StateAlphabet> = Arc::new(AllelicAlphabet::new(dna.clone(), 2)?);
    let mut store: CompressedSiteIndex = CompressedSiteIndex::new(allelic);

    let err = store.append_column(Site::from_text("AC", dna)?);
    assert!(matches!(err, Err(SeqError::AlphabetMismatch { .. })));
    assert!(store.is_empty());
    assert_eq!(store.number_of_rows(), 0);
    Ok(())
}
