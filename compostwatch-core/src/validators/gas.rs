//! Gas-concentration plausibility check
//!
//! The gas sensor sits at the bin vent where ammonia and CO₂ releases during
//! turning legitimately spike the ppm reading by orders of magnitude, so no
//! physical bounds are enforced - only numeric validity.

use crate::{
    errors::ReadingResult,
    traits::{require_finite, Plausibility},
};

/// Gas validator: finite readings only, no upper or lower bound
#[derive(Debug, Clone, Default)]
pub struct GasValidator;

impl Plausibility for GasValidator {
    fn check(&self, value: f32) -> ReadingResult<()> {
        require_finite(value)
    }
}
