//! # seqsites-container
//!
//! Column stores for aligned sites. Both stores implement [`PositionedStore`]:
//!
//! - [`CompressedSiteIndex`]: keeps one copy of each distinct column and a
//!   slot reference per position, for alignments with many repeated columns.
//! - [`VectorSiteContainer`]: one stored column per position.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use seqsites_container::{CompressedSiteIndex, PositionedStore};
//! use seqsites_core::{NucleicAlphabet, Site, StateAlphabet};
//!
//! let dna: Arc<dyn StateAlphabet> = Arc::new(NucleicAlphabet::dna());
//! let mut store: CompressedSiteIndex = CompressedSiteIndex::new(dna.clone());
//! store.append_column(Site::from_text("ACG", dna.clone()).unwrap()).unwrap();
//! store.append_column(Site::from_text("ACG", dna.clone()).unwrap()).unwrap();
//!
//! assert_eq!(store.number_of_columns(), 2);
//! assert_eq!(store.number_of_unique_columns(), 1);
//! ```
pub mod compressed;
pub mod traits;
pub mod vector;

mod shape;

// re-export things
pub use compressed::CompressedSiteIndex;
pub use traits::PositionedStore;
pub use vector::VectorSiteContainer;
