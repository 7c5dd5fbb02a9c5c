//! Whether round two opens with a challenge.

use rand::Rng;
use storyroom_error::{RoundtableError, RoundtableErrorKind};

/// Decides, once per run, whether the platform expert challenges the
/// director in round two.
///
/// Any `Fn() -> bool` closure is a policy, so tests can force either branch.
pub trait ChallengePolicy: Send + Sync {
    /// Draw the decision for one run.
    fn should_challenge(&self) -> bool;
}

/// Challenge with a fixed probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomChallenge {
    probability: f64,
}

impl RandomChallenge {
    /// Production default.
    pub const DEFAULT_PROBABILITY: f64 = 0.3;

    /// Challenge with `probability`.
    ///
    /// # Errors
    ///
    /// Fails when `probability` is outside `[0, 1]` or NaN.
    pub fn new(probability: f64) -> Result<Self, RoundtableError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(RoundtableError::new(RoundtableErrorKind::InvalidProbability(
                probability,
            )));
        }
        Ok(Self { probability })
    }

    /// Configured probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for RandomChallenge {
    fn default() -> Self {
        Self {
            probability: Self::DEFAULT_PROBABILITY,
        }
    }
}

impl ChallengePolicy for RandomChallenge {
    fn should_challenge(&self) -> bool {
        rand::thread_rng().gen_bool(self.probability)
    }
}

/// Always (or never) challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedChallenge(pub bool);

impl ChallengePolicy for FixedChallenge {
    fn should_challenge(&self) -> bool {
        self.0
    }
}

impl<F> ChallengePolicy for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn should_challenge(&self) -> bool {
        (self)()
    }
}
