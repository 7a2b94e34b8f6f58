//! # seqsites-core
//!
//! Shared building blocks for the seqsites crates:
//!
//! - **Alphabets**: the [`StateAlphabet`] capability and the DNA/RNA,
//!   protein and codon alphabets.
//! - **Models**: [`Site`], [`ProbabilisticSite`] and [`Sequence`], and the
//!   [`Column`] trait containers are generic over.
//! - **Errors**: [`SeqError`], used by every crate of the workspace.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use seqsites_core::{NucleicAlphabet, Site, StateAlphabet};
//!
//! let dna: Arc<dyn StateAlphabet> = Arc::new(NucleicAlphabet::dna());
//! let site = Site::from_text("ACGR", dna.clone()).unwrap();
//! assert_eq!(site.content(), &[0, 1, 2, 5]);
//! assert!(dna.is_resolved_in(5, 2).unwrap());
//! ```
pub mod alphabet;
pub mod errors;
pub mod models;
pub mod utils;

// re-export things
pub use alphabet::{
    AlphabetType, CodonAlphabet, GAP_CODE, NucleicAlphabet, NucleicType, ProteicAlphabet,
    StateAlphabet,
};
pub use errors::{SeqError, SeqResult};
pub use models::{Column, ProbabilisticSite, Sequence, Site};
