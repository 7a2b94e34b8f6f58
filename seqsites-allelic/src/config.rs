use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use seqsites_core::{
    CodonAlphabet, NucleicAlphabet, ProteicAlphabet, SeqError, StateAlphabet,
};

use crate::allelic::AllelicAlphabet;

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum AlphabetKind {
    Dna,
    Rna,
    Protein,
    /// Codons over DNA.
    Codon,
    RnaCodon,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum GeneticCodeKind {
    #[default]
    Standard,
    MoldMitochondrial,
}

///
/// Alphabet description read from a TOML file:
///
/// ```toml
/// alphabet = "codon"
/// nb_alleles = 4
/// genetic_code = "standard"
/// ```
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct AlphabetConfig {
    pub alphabet: AlphabetKind,
    pub nb_alleles: Option<u32>,
    pub genetic_code: Option<GeneticCodeKind>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] SeqError),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl AlphabetConfig {
    /// The alphabet sequences are written in, before any allelic layer.
    pub fn base_alphabet(&self) -> Arc<dyn StateAlphabet> {
        match self.alphabet {
            AlphabetKind::Dna => Arc::new(NucleicAlphabet::dna()),
            AlphabetKind::Rna => Arc::new(NucleicAlphabet::rna()),
            AlphabetKind::Protein => Arc::new(ProteicAlphabet::new()),
            AlphabetKind::Codon => Arc::new(CodonAlphabet::new(NucleicAlphabet::dna())),
            AlphabetKind::RnaCodon => Arc::new(CodonAlphabet::new(NucleicAlphabet::rna())),
        }
    }

    ///
    /// Build the configured alphabet.
    ///
    /// # Returns
    /// * the base alphabet, or an `AllelicAlphabet` over it when `nb_alleles` is set
    ///
    pub fn build(&self) -> ConfigResult<Arc<dyn StateAlphabet>> {
        let is_codon = matches!(self.alphabet, AlphabetKind::Codon | AlphabetKind::RnaCodon);
        if self.genetic_code.is_some() && !is_codon {
            return Err(SeqError::Configuration(
                "a genetic code only applies to codon alphabets".to_string(),
            )
            .into());
        }

        let base = self.base_alphabet();
        match self.nb_alleles {
            Some(nb_alleles) => Ok(Arc::new(AllelicAlphabet::new(base, nb_alleles)?)),
            None => Ok(base),
        }
    }
}

impl TryFrom<&Path> for AlphabetConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        toml_str.parse()
    }
}

impl FromStr for AlphabetConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config = toml::from_str(s)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqsites_core::AlphabetType;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::path::PathBuf;

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/config/allelic_dna.toml");
        let config = AlphabetConfig::try_from(path.as_path()).unwrap();
        assert_eq!(config.alphabet, AlphabetKind::Dna);
        assert_eq!(config.nb_alleles, Some(4));
        assert_eq!(config.genetic_code, None);
    }

    #[rstest]
    fn test_missing_file() {
        let path = PathBuf::from("../tests/data/config/missing.toml");
        let result = AlphabetConfig::try_from(path.as_path());
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[rstest]
    #[case("alphabet = \"protein\"", AlphabetType::Protein)]
    #[case("alphabet = \"rna\"", AlphabetType::Rna)]
    #[case(
        "alphabet = \"codon\"\ngenetic_code = \"mold_mitochondrial\"",
        AlphabetType::Codon(Box::new(AlphabetType::Dna))
    )]
    #[case(
        "alphabet = \"dna\"\nnb_alleles = 2",
        AlphabetType::Allelic { base: Box::new(AlphabetType::Dna), nb_alleles: 2 }
    )]
    fn test_build(#[case] toml_str: &str, #[case] expected: AlphabetType) {
        let config: AlphabetConfig = toml_str.parse().unwrap();
        assert_eq!(config.build().unwrap().alphabet_type(), expected);
    }

    #[rstest]
    fn test_unknown_alphabet() {
        let result = "alphabet = \"klingon\"".parse::<AlphabetConfig>();
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[rstest]
    #[case("alphabet = \"dna\"\nnb_alleles = 0")]
    #[case("alphabet = \"protein\"\ngenetic_code = \"standard\"")]
    fn test_invalid_config(#[case] toml_str: &str) {
        let config: AlphabetConfig = toml_str.parse().unwrap();
        assert!(matches!(
            config.build(),
            Err(ConfigError::Invalid(SeqError::Configuration(_)))
        ));
    }
}
