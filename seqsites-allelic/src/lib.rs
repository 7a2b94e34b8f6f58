//! # seqsites-allelic
//!
//! Allelic state alphabets for population samples.
//!
//! An [`AllelicAlphabet`] wraps a base alphabet and a sample size `N`. Its
//! states are the compositions of a sample holding at most two distinct base
//! states, such as `A3C1` (three copies of A, one of C). From observed counts
//! of each base state, [`AllelicAlphabet::compute_likelihoods`] gives the
//! binomial likelihood of every composition.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use seqsites_allelic::AllelicAlphabet;
//! use seqsites_core::{NucleicAlphabet, StateAlphabet};
//!
//! let alphabet = AllelicAlphabet::new(Arc::new(NucleicAlphabet::dna()), 4).unwrap();
//! assert_eq!(alphabet.size(), 22);
//!
//! let code = alphabet.state_label_to_code("A3C1").unwrap();
//! let likelihoods = alphabet.compute_likelihoods(&[3.0, 1.0, 0.0, 0.0]).unwrap();
//! assert!((likelihoods[code as usize] - 0.421875).abs() < 1e-9);
//! ```
//!
//! Alphabets can also be described in TOML, see [`AlphabetConfig`].
pub mod allelic;
pub mod config;

// re-export things
pub use allelic::{AllelePair, AllelicAlphabet};
pub use config::{AlphabetConfig, AlphabetKind, ConfigError, ConfigResult, GeneticCodeKind};
