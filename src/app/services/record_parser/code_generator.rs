//! Fallback collaborator codes
//!
//! Rows without a code get a synthesized one so every record can be keyed.
//! The default generator is random, which makes two parses of the same input
//! differ for those rows; tests and reproducible runs inject a seeded or
//! sequential generator instead.

use crate::constants::FALLBACK_CODE_SUFFIX_LEN;
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Source of codes for rows that arrive without one
pub trait CodeGenerator: fmt::Debug + Send {
    /// Produce the next code, starting with `prefix`
    fn next_code(&mut self, prefix: &str) -> String;
}

/// `prefix` + five random upper-case alphanumerics, e.g. `IDP-7K2QD`
#[derive(Debug)]
pub struct RandomCodeGenerator {
    rng: StdRng,
}

impl RandomCodeGenerator {
    /// Generator seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible generator for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn next_code(&mut self, prefix: &str) -> String {
        let suffix: String = (0..FALLBACK_CODE_SUFFIX_LEN)
            .map(|_| char::from(self.rng.sample(Alphanumeric)).to_ascii_uppercase())
            .collect();
        format!("{}{}", prefix, suffix)
    }
}

/// Deterministic `prefix` + zero-padded counter, e.g. `IDP-00001`
#[derive(Debug, Clone, Default)]
pub struct SequentialCodeGenerator {
    issued: u32,
}

impl SequentialCodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CodeGenerator for SequentialCodeGenerator {
    fn next_code(&mut self, prefix: &str) -> String {
        self.issued += 1;
        format!("{}{:05}", prefix, self.issued)
    }
}
