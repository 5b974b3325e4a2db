//! Fixed-point simplification of slices
//!
//! Simplification replaces a slice by a simpler slice with the same
//! content. The passes are normalization, subtract pruning, lower-bound
//! application, and double-lcm removal; the simplifier drives them to a
//! joint fixed point. Order matters: normalization must precede pruning,
//! and a lower bound can create new strict divisibilities that re-enable
//! normalization.

use crate::slice_error::SliceError;

use super::Slice;

/// How aggressively the lower-bound pass iterates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MinType {
    /// Iterate the lower-bound pass to its own fixed point inside each
    /// simplifier round.
    #[default]
    Tight,
    /// One lower-bound cycle per simplifier round; the joint fixed point is
    /// still reached through the outer loop.
    Loose,
}

/// Fixed-point driver for the simplification passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Simplifier {
    pub min_type: MinType,
    /// Whether to run double-lcm removal as part of the fixed point.
    pub remove_double_lcm: bool,
}

impl Default for Simplifier {
    fn default() -> Self {
        Simplifier {
            min_type: MinType::Tight,
            remove_double_lcm: true,
        }
    }
}

impl Simplifier {
    /// Simplifies `slice` until every pass reports no progress, or a
    /// trivial base case surfaces. Afterwards a second call reports no
    /// progress at all.
    ///
    /// Precondition: the slice is normalized (freshly split slices are).
    pub fn simplify(&self, slice: &mut Slice) -> Result<(), SliceError> {
        loop {
            let mut changed = slice.normalize();
            changed |= slice.prune_subtract();
            changed |= match self.min_type {
                MinType::Tight => slice.apply_lower_bound()?,
                MinType::Loose => slice.apply_lower_bound_once()?,
            };
            if slice.is_trivial_base() {
                return Ok(());
            }
            if self.remove_double_lcm {
                changed |= slice.remove_double_lcm();
            }
            if !changed {
                return Ok(());
            }
        }
    }
}
