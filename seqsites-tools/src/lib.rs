//! # seqsites-tools
//!
//! Genetic codes and statistics over sequences, sites and codon sites.
//!
//! - [`GeneticCode`]: standard and mold mitochondrial translation tables
//! - [`sequence_tools`]: GC content, complement, transcription, identity
//! - [`site_tools`]: constancy, frequencies, variability
//! - [`codon_site_tools`]: synonymous and non-synonymous polymorphism
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use seqsites_core::{CodonAlphabet, NucleicAlphabet, Site, StateAlphabet};
//! use seqsites_tools::{GeneticCode, codon_site_tools};
//!
//! let code = GeneticCode::standard();
//! let codons: Arc<dyn StateAlphabet> = Arc::new(CodonAlphabet::new(NucleicAlphabet::dna()));
//! let site = Site::from_symbols(&["TTA", "CTA"], codons).unwrap();
//!
//! assert!(codon_site_tools::is_synonymous_polymorphic(&site, &code).unwrap());
//! ```
pub mod codon_site_tools;
pub mod genetic_code;
pub mod sequence_tools;
pub mod site_tools;

// re-export things
pub use codon_site_tools::FixedDifferences;
pub use genetic_code::GeneticCode;
pub use seqsites_allelic::GeneticCodeKind;
