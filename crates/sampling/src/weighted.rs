//! Weighted index draw over cumulative sums.

use rand::Rng;
use tracing::debug;

use crate::search::SearchStrategy;
use crate::{Result, SamplingError};

/// Draws indices with probability proportional to their weight.
///
/// Entry `i` owns the tickets `cumulative[i-1] + 1 ..= cumulative[i]`; a
/// zero-weight entry owns none.
#[derive(Debug, Clone)]
pub struct WeightedSampler {
    cumulative: Vec<u64>,
}

impl WeightedSampler {
    pub fn new<I, W>(weights: I) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: Into<u64>,
    {
        let mut total = 0u64;
        let cumulative: Vec<u64> = weights
            .into_iter()
            .map(|w| -> Result<u64> {
                total = total
                    .checked_add(w.into())
                    .ok_or(SamplingError::WeightOverflow)?;
                Ok(total)
            })
            .collect::<Result<_>>()?;

        if total == 0 {
            return Err(SamplingError::NoWeight);
        }

        debug!(entries = cumulative.len(), total, "Built weighted sampler");
        Ok(Self { cumulative })
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Cumulative weights, non-decreasing.
    pub fn cumulative(&self) -> &[u64] {
        &self.cumulative
    }

    /// Draw one index.
    ///
    /// [`SearchStrategy::Standard`] always returns `Some`. With
    /// [`SearchStrategy::Converging`] a draw can miss and return `None`; the
    /// caller decides whether to retry.
    pub fn pick_with_rng<R: Rng + ?Sized>(
        &self,
        strategy: SearchStrategy,
        rng: &mut R,
    ) -> Option<usize> {
        let target_ticket = rng.gen_range(0..self.total()) + 1;
        strategy.find(&target_ticket, &self.cumulative)
    }
}

#[cfg(test)]
#[path = "weighted_tests.rs"]
mod tests;
