use log::trace;
use rand::rngs::StdRng;
use rand::{ Rng, SeedableRng };

use crate::errors::PassgenError;

pub const DEFAULT_CHARSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters a password is drawn from. Never empty; duplicates are kept and
/// make a character proportionally more likely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    pub fn new(set: &str) -> Result<Self, PassgenError> {
        let chars: Vec<char> = set.chars().collect();
        if chars.is_empty() {
            return Err(PassgenError::EmptyCharset);
        }

        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            chars: DEFAULT_CHARSET.chars().collect(),
        }
    }
}

pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// Seeds from the operating system. Create one per process.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, length: usize, charset: &Charset) -> String {
        trace!("generating {} chars from a set of {}", length, charset.len());

        (0..length)
            .map(|_| charset.chars[self.rng.random_range(0..charset.len())])
            .collect()
    }
}
