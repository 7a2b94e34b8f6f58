//! # seqsites
//!
//! Umbrella crate over the seqsites workspace. Core alphabets, sites and
//! sequences are always there; the rest comes with features:
//!
//! - `allelic` (default): allelic alphabets and alphabet configuration
//! - `container` (default): plain and compressed site stores
//! - `tools`: genetic codes and polymorphism statistics
#[doc(inline)]
pub use seqsites_core as core;

#[cfg(feature = "allelic")]
#[doc(inline)]
pub use seqsites_allelic as allelic;

#[cfg(feature = "container")]
#[doc(inline)]
pub use seqsites_container as container;

#[cfg(feature = "tools")]
#[doc(inline)]
pub use seqsites_tools as tools;
