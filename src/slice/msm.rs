//! Maximal-standard-monomial slices
//!
//! The slice kind behind irreducible decomposition. The content of a slice
//! \((I, S, q)\) is the set of monomials \(q \cdot m\) where \(m\) is a
//! maximal standard monomial of \(I\) not divisible by a generator of
//! \(S\); a non-trivial base case emits \(q \cdot x_1 \cdots x_n\).
//!
//! The decomposition driver feeds the engine the artinian closure of its
//! input, under which every emitted label encodes one irreducible
//! component.

use crate::algebra::ideal::Ideal;
use crate::algebra::term::Term;
use crate::consume::TermConsumer;
use crate::slice_error::SliceError;

use super::{Slice, SliceTable};

static MSM: SliceTable = SliceTable {
    name: "msm",
    base_case,
    lower_bound,
};

/// The kind table for maximal standard monomials.
pub(crate) fn table() -> &'static SliceTable {
    &MSM
}

/// Creates the root slice \((I, \langle\rangle, 1)\) for a maximal standard
/// monomial computation.
pub fn new_slice(ideal: Ideal) -> Slice {
    Slice::new(&MSM, ideal)
}

/// Creates an msm slice from all three components.
pub fn slice_from_parts(ideal: Ideal, subtract: Ideal, multiply: Term) -> Result<Slice, SliceError> {
    Slice::from_parts(&MSM, ideal, subtract, multiply)
}

fn base_case(
    slice: &mut Slice,
    _simplified: bool,
    consumer: &mut dyn TermConsumer,
) -> Result<bool, SliceError> {
    if slice.ideal().is_zero_ideal() {
        return Ok(true);
    }
    let var_count = slice.var_count();
    if var_count == 0 {
        // The ring of no variables: the ideal is the whole ring and its one
        // irreducible component is labeled by the empty monomial.
        consumer.consume(slice.multiply());
        return Ok(true);
    }
    if slice.lcm().support_size() < var_count {
        // Some variable appears in no generator: no monomial has all of its
        // variable bumps land in the ideal, so the content is empty.
        return Ok(true);
    }
    if !slice.lcm().is_square_free() {
        return Ok(false);
    }
    // Square-free base case. A maximal standard monomial of a square-free
    // ideal must itself be square-free-trivial: bumping any variable it uses
    // would need a generator with an exponent of two. So the only candidate
    // is the identity, which works exactly when every variable is a
    // generator.
    let is_variable_ideal = slice.ideal().iter().all(Term::is_pure_power);
    if is_variable_ideal && !slice.subtract().contains_identity() {
        let mut label = slice.multiply().clone();
        label.checked_increment_all()?;
        consumer.consume(&label);
    }
    Ok(true)
}

fn lower_bound(slice: &Slice, var: usize) -> Option<Term> {
    let mut bound: Option<Term> = None;
    for g in slice.ideal().iter() {
        if g.exponent(var) == 0 {
            continue;
        }
        match bound.as_mut() {
            Some(b) => b.gcd_assign(g),
            None => bound = Some(g.clone()),
        }
    }
    let mut bound = bound?;
    debug_assert!(bound.exponent(var) >= 1);
    bound.set_exponent(var, bound.exponent(var) - 1);
    Some(bound)
}
