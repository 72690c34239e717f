//! Verification code generation

use std::sync::{Mutex, PoisonError};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::domain::entities::verification_code::{CODE_LENGTH, CODE_SPACE};

/// Source of verification codes
pub trait CodeGenerator: Send + Sync {
    /// Produce the next code; implementations must return six ASCII digits
    fn next_code(&self) -> String;
}

/// Uniform random codes from a generator seeded once per instance
///
/// One instance is created at process start and shared by every issuance;
/// each call draws independently from the same stream.
pub struct RandomCodeGenerator {
    rng: Mutex<StdRng>,
}

impl RandomCodeGenerator {
    /// Seed from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seed deterministically (reproducible sequences)
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn next_code(&self) -> String {
        let value = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            rng.gen_range(0..CODE_SPACE)
        };
        format_code(value)
    }
}

/// Render a value in `[0, CODE_SPACE)` as a zero-padded code
pub fn format_code(value: u32) -> String {
    format!("{:0width$}", value % CODE_SPACE, width = CODE_LENGTH)
}
