//! The slice: central data structure of the Slice Algorithm
//!
//! A slice is a triple \((I, S, q)\) of two monomial ideals and a monomial.
//! \(I\) is the *ideal* of the slice, \(S\) the *subtract* (monomials
//! excluded from the content), and \(q\) the *multiply* (a factor applied to
//! the content). Each slice stands for a part of the final output, its
//! *content*, and the content obeys the pivot split identity
//! \[(I,S,q) = (I\colon p,\ S\colon p,\ qp) \sqcup (I,\ S+\langle p\rangle,\ q)\]
//! for any monomial pivot \(p\): the left child collects the content
//! divisible by \(p\), the right child the rest.
//!
//! Two base cases end the recursion. In the *trivial* case some variable
//! appears in no minimal generator of \(I\), and the content is empty. In
//! the *non-trivial* case \(\operatorname{lcm}(I)\) is square-free with
//! full support, and kind-specific output goes to the consumer.
//!
//! What a base case emits, and which per-variable lower bound simplification
//! uses, depends on what is being computed. Rather than a virtual hierarchy,
//! every slice carries a [`SliceTable`] of function-valued fields chosen at
//! construction; [`msm`] supplies the table for maximal standard monomials
//! and irreducible decomposition.

pub mod engine;
pub mod independence;
pub mod msm;
pub mod simplify;
pub mod strategy;

use crate::algebra::ideal::Ideal;
use crate::algebra::term::Term;
use crate::consume::TermConsumer;
use crate::slice_error::SliceError;
use once_cell::sync::OnceCell;
use std::fmt;

/// Kind-specific behavior of a slice, selected at construction.
#[derive(Clone, Copy)]
pub struct SliceTable {
    /// Kind name, for debugging output.
    pub(crate) name: &'static str,
    /// Tests for a base case; on a non-trivial base case, emits the
    /// kind-specific artifact to the consumer. The flag tells whether the
    /// slice is known fully simplified.
    pub(crate) base_case: fn(&mut Slice, bool, &mut dyn TermConsumer) -> Result<bool, SliceError>,
    /// Computes the lower-bound divisor for one variable, or `None` when a
    /// base case was detected instead.
    pub(crate) lower_bound: fn(&Slice, usize) -> Option<Term>,
}

impl fmt::Debug for SliceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceTable").field("name", &self.name).finish()
    }
}

/// The \((I, S, q)\) triple, with a lazily cached lcm of \(I\).
#[derive(Clone, Debug)]
pub struct Slice {
    table: &'static SliceTable,
    ideal: Ideal,
    subtract: Ideal,
    multiply: Term,
    /// Cached lcm of the ideal; taken (invalidated) by every mutation of the
    /// ideal and rehydrated on demand by [`Slice::lcm`].
    lcm: OnceCell<Term>,
    /// Variable where lower-bound simplification last made progress.
    /// Starting the next pass there tends to find progress sooner.
    lower_bound_hint: usize,
}

impl Slice {
    /// Creates the slice \((I, \langle\rangle, 1)\).
    pub fn new(table: &'static SliceTable, ideal: Ideal) -> Self {
        let var_count = ideal.var_count();
        Slice {
            table,
            ideal,
            subtract: Ideal::new(var_count),
            multiply: Term::identity(var_count),
            lcm: OnceCell::new(),
            lower_bound_hint: 0,
        }
    }

    /// Creates a slice from all three components, checking arities.
    pub fn from_parts(
        table: &'static SliceTable,
        ideal: Ideal,
        subtract: Ideal,
        multiply: Term,
    ) -> Result<Self, SliceError> {
        if subtract.var_count() != ideal.var_count() {
            return Err(SliceError::ArityMismatch {
                expected: ideal.var_count(),
                actual: subtract.var_count(),
            });
        }
        if multiply.var_count() != ideal.var_count() {
            return Err(SliceError::ArityMismatch {
                expected: ideal.var_count(),
                actual: multiply.var_count(),
            });
        }
        Ok(Slice {
            table,
            ideal,
            subtract,
            multiply,
            lcm: OnceCell::new(),
            lower_bound_hint: 0,
        })
    }

    /// Number of variables in the ambient ring.
    #[inline]
    pub fn var_count(&self) -> usize {
        self.ideal.var_count()
    }

    /// The ideal \(I\). Mutation goes through the slice so the lcm cache
    /// stays honest.
    #[inline]
    pub fn ideal(&self) -> &Ideal {
        &self.ideal
    }

    /// The subtract \(S\).
    #[inline]
    pub fn subtract(&self) -> &Ideal {
        &self.subtract
    }

    /// The multiply \(q\).
    #[inline]
    pub fn multiply(&self) -> &Term {
        &self.multiply
    }

    /// The kind table this slice dispatches through.
    #[inline]
    pub(crate) fn table(&self) -> &'static SliceTable {
        self.table
    }

    /// The lcm of the generators of the ideal, recomputed lazily after each
    /// change to the ideal. Every step of the algorithm consults the lcm, so
    /// this is an inexpensive call on the hot path.
    pub fn lcm(&self) -> &Term {
        self.lcm.get_or_init(|| self.ideal.lcm())
    }

    #[inline]
    fn invalidate_lcm(&mut self) {
        self.lcm.take();
    }

    /// Reinitializes to \((\langle\rangle, \langle\rangle, 1)\) in a ring of
    /// `var_count` variables.
    pub fn reset_and_set_var_count(&mut self, var_count: usize) {
        self.ideal = Ideal::new(var_count);
        self.subtract = Ideal::new(var_count);
        self.multiply = Term::identity(var_count);
        self.lcm = OnceCell::new();
        self.lower_bound_hint = 0;
    }

    /// Clears the ideal and the subtract without touching the multiply,
    /// turning this slice into an obvious trivial base case.
    pub fn clear_ideal_and_subtract(&mut self) {
        self.ideal.clear();
        self.subtract.clear();
        self.invalidate_lcm();
    }

    /// Whether this slice is an obvious trivial base case: the ideal is zero
    /// or some variable appears in no generator.
    pub fn is_trivial_base(&self) -> bool {
        self.ideal.is_zero_ideal() || self.lcm().support_size() < self.var_count()
    }

    /// Removes the generators of the ideal strictly divisible by a generator
    /// of the subtract. Such generators witness only subtracted monomials,
    /// so the content does not change. Returns true iff anything was
    /// removed.
    pub fn normalize(&mut self) -> bool {
        let var_count = self.var_count();
        let mut removed = false;
        // The subtract rarely has more than a handful of generators; the
        // quadratic scan is fine.
        let subtract = std::mem::replace(&mut self.subtract, Ideal::new(var_count));
        for s in subtract.iter() {
            removed |= self.ideal.remove_strict_multiples(s);
        }
        self.subtract = subtract;
        if removed {
            self.invalidate_lcm();
        }
        removed
    }

    /// Removes the generators of the subtract that do not strictly divide
    /// the lcm of the ideal, or that lie in the ideal. Neither kind can
    /// exclude a monomial the ideal side still admits, so the content does
    /// not change. Returns true iff anything was removed.
    pub fn prune_subtract(&mut self) -> bool {
        let lcm = self.lcm().clone();
        let ideal = &self.ideal;
        let before = self.subtract.generator_count();
        let mut kept = Vec::with_capacity(before);
        for s in self.subtract.iter() {
            if s.strictly_divides(&lcm) && !ideal.contains(s) {
                kept.push(s.clone());
            }
        }
        if kept.len() == before {
            return false;
        }
        self.subtract = Ideal::from_terms(self.var_count(), kept)
            .expect("pruned generators share the slice arity");
        true
    }

    /// Replaces \((I, S, q)\) by the inner slice
    /// \((I\colon p, S\colon p, qp)\) and normalizes. Returns true iff a
    /// colon changed the support of any generator.
    pub fn inner_slice(&mut self, pivot: &Term) -> Result<bool, SliceError> {
        self.multiply.require_same_arity(pivot)?;
        let ideal_changed = self.ideal.colon_reminimize(pivot);
        let subtract_changed = self.subtract.colon_reminimize(pivot);
        self.multiply.checked_mul_assign(pivot)?;
        self.invalidate_lcm();
        self.normalize();
        Ok(ideal_changed || subtract_changed)
    }

    /// Replaces \((I, S, q)\) by the outer slice
    /// \((I, S + \langle p\rangle, q)\) and normalizes. A pure-power pivot
    /// is not inserted into the subtract: normalization alone already
    /// removes every generator it could ever exclude, after which the pivot
    /// would be pruned again.
    pub fn outer_slice(&mut self, pivot: &Term) -> Result<(), SliceError> {
        self.multiply.require_same_arity(pivot)?;
        if pivot.support_size() > 1 {
            self.subtract.add(pivot.clone())?;
            self.normalize();
        } else if self.ideal.remove_strict_multiples(pivot) {
            self.invalidate_lcm();
        }
        self.lower_bound_hint = pivot.first_nonzero_var().unwrap_or(0);
        Ok(())
    }

    /// Repeatedly computes the per-variable lower-bound divisor and applies
    /// it through [`inner_slice`](Self::inner_slice), starting at the hint
    /// variable, until a full cycle of variables yields only unit bounds.
    /// Detecting a base case clears the slice. Returns true iff any non-unit
    /// bound was applied, so the simplifier re-runs the other passes against
    /// the shrunken lcm.
    pub fn apply_lower_bound(&mut self) -> Result<bool, SliceError> {
        self.apply_lower_bound_inner(false)
    }

    /// One cycle of lower bounds over all variables, without iterating to
    /// the fixed point. Cheaper; the fixed point is still reached through
    /// the simplifier's outer loop.
    pub fn apply_lower_bound_once(&mut self) -> Result<bool, SliceError> {
        self.apply_lower_bound_inner(true)
    }

    fn apply_lower_bound_inner(&mut self, single_pass: bool) -> Result<bool, SliceError> {
        let var_count = self.var_count();
        if var_count == 0 || self.ideal.is_zero_ideal() {
            return Ok(false);
        }
        let lower_bound = self.table.lower_bound;
        let mut progress = false;
        let mut var = self.lower_bound_hint.min(var_count - 1);
        let mut stable = 0;
        let mut visited = 0;
        while stable < var_count {
            match lower_bound(self, var) {
                None => {
                    // Some variable appears in no generator: empty content.
                    self.clear_ideal_and_subtract();
                    return Ok(progress);
                }
                Some(bound) if !bound.is_identity() => {
                    self.inner_slice(&bound)?;
                    progress = true;
                    self.lower_bound_hint = var;
                    stable = 0;
                    if self.ideal.is_zero_ideal() {
                        return Ok(progress);
                    }
                }
                Some(_) => stable += 1,
            }
            var += 1;
            if var == var_count {
                var = 0;
            }
            visited += 1;
            if single_pass && visited == var_count {
                break;
            }
        }
        Ok(progress)
    }

    /// Removes the generators of the ideal that attain the lcm in two or
    /// more variables, iterating with a recomputed lcm until none remains.
    /// Such a generator can witness no maximal standard monomial: any
    /// monomial it pushes into the ideal already exceeds the lcm somewhere
    /// else. Returns true iff anything was removed.
    pub fn remove_double_lcm(&mut self) -> bool {
        let mut removed_any = false;
        loop {
            let lcm = self.lcm();
            let position = self.ideal.iter().position(|g| {
                let mut hits = 0;
                for var in 0..g.var_count() {
                    if lcm.exponent(var) > 0 && g.exponent(var) == lcm.exponent(var) {
                        hits += 1;
                        if hits == 2 {
                            return true;
                        }
                    }
                }
                false
            });
            match position {
                Some(index) => {
                    self.ideal.remove_generator(index);
                    self.invalidate_lcm();
                    removed_any = true;
                }
                None => return removed_any,
            }
        }
    }

    /// Tests for a base case through the kind table; a non-trivial base case
    /// emits its output to `consumer`. `simplified` asserts that the slice
    /// is fully simplified on entry.
    pub fn base_case(
        &mut self,
        simplified: bool,
        consumer: &mut dyn TermConsumer,
    ) -> Result<bool, SliceError> {
        if simplified {
            self.ideal.debug_assert_minimized();
        }
        let base_case = self.table.base_case;
        base_case(self, simplified, consumer)
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-slice(I={}, S={}, q={})",
            self.table.name, self.ideal, self.subtract, self.multiply
        )
    }
}

/// Splits `parent` on `pivot`, validating the split preconditions shared by
/// every strategy: the pivot must not be the unit and must not lie in the
/// ideal (either child would otherwise equal the parent and the recursion
/// would not terminate).
///
/// Returns `(inner, outer)`. The inner child reuses the parent's storage.
pub fn split_on(mut parent: Slice, pivot: &Term) -> Result<(Slice, Slice), SliceError> {
    parent.multiply().require_same_arity(pivot)?;
    if pivot.is_identity() {
        return Err(SliceError::PreconditionViolated("pivot is the unit monomial"));
    }
    if parent.ideal().contains(pivot) {
        return Err(SliceError::PreconditionViolated(
            "pivot is a multiple of a generator of the ideal",
        ));
    }
    let mut outer = parent.clone();
    outer.outer_slice(pivot)?;
    parent.inner_slice(pivot)?;
    Ok((parent, outer))
}
