//! `Ideal`: a multiset of monomial generators with in-place minimization
//!
//! An ideal holds its generators as owned [`Term`]s of one shared arity.
//! Mutating operations either preserve the "minimized" invariant (no
//! generator divides another) or document that they disturb it; callers that
//! need the invariant re-established call [`Ideal::minimize`].
//!
//! # Invariants
//!
//! - Every generator has exactly `var_count` variables.
//! - When the ideal is labeled minimized, no generator divides another and
//!   there are no duplicates.
//!
//! The minimality check is expensive and runs only in debug builds or under
//! the `check-invariants` feature.

use crate::algebra::term::{Exponent, Term};
use crate::slice_error::SliceError;
use std::fmt;

/// A multiset of monomial generators sharing a fixed arity.
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Ideal {
    var_count: usize,
    generators: Vec<Term>,
}

impl Ideal {
    /// Creates the zero ideal (no generators) in `var_count` variables.
    #[inline]
    pub fn new(var_count: usize) -> Self {
        Ideal {
            var_count,
            generators: Vec::new(),
        }
    }

    /// Builds an ideal from a list of generators, checking arities.
    ///
    /// The result is not minimized.
    pub fn from_terms(var_count: usize, terms: Vec<Term>) -> Result<Self, SliceError> {
        for term in &terms {
            if term.var_count() != var_count {
                return Err(SliceError::ArityMismatch {
                    expected: var_count,
                    actual: term.var_count(),
                });
            }
        }
        Ok(Ideal {
            var_count,
            generators: terms,
        })
    }

    /// Number of variables in the ambient ring.
    #[inline]
    pub fn var_count(&self) -> usize {
        self.var_count
    }

    /// Number of generators, duplicates included.
    #[inline]
    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }

    /// The generators in their current order.
    #[inline]
    pub fn generators(&self) -> &[Term] {
        &self.generators
    }

    /// Whether the ideal has no generators.
    #[inline]
    pub fn is_zero_ideal(&self) -> bool {
        self.generators.is_empty()
    }

    /// Whether the identity monomial is a generator, i.e. the ideal is the
    /// whole ring.
    pub fn contains_identity(&self) -> bool {
        self.generators.iter().any(Term::is_identity)
    }

    /// Whether `term` lies in the ideal, i.e. some generator divides it.
    pub fn contains(&self, term: &Term) -> bool {
        debug_assert_eq!(self.var_count, term.var_count(), "arity mismatch");
        self.generators.iter().any(|g| g.divides(term))
    }

    /// Inserts a generator after checking its arity. Does not re-minimize.
    pub fn insert(&mut self, term: Term) -> Result<(), SliceError> {
        if term.var_count() != self.var_count {
            return Err(SliceError::ArityMismatch {
                expected: self.var_count,
                actual: term.var_count(),
            });
        }
        self.generators.push(term);
        Ok(())
    }

    /// Inserts `term` and discards the generators it divides. Preserves
    /// minimality whenever `term` is not already in the ideal.
    pub fn add(&mut self, term: Term) -> Result<(), SliceError> {
        if term.var_count() != self.var_count {
            return Err(SliceError::ArityMismatch {
                expected: self.var_count,
                actual: term.var_count(),
            });
        }
        self.generators.retain(|g| !term.divides(g));
        self.generators.push(term);
        Ok(())
    }

    /// Removes the generator at `index`, preserving the order of the rest.
    pub(crate) fn remove_generator(&mut self, index: usize) -> Term {
        self.generators.remove(index)
    }

    /// Removes non-minimal generators. After return no remaining generator
    /// divides another; among equal generators the first occurrence wins, and
    /// the surviving generators keep their relative order.
    pub fn minimize(&mut self) {
        let gens = std::mem::take(&mut self.generators);
        let mut kept: Vec<Term> = Vec::with_capacity(gens.len());
        'outer: for (i, g) in gens.iter().enumerate() {
            for (j, other) in gens.iter().enumerate() {
                if i == j {
                    continue;
                }
                // A strict divisor anywhere, or an equal generator earlier,
                // makes g redundant.
                if other.divides(g) && (other != g || j < i) {
                    continue 'outer;
                }
            }
            kept.push(g.clone());
        }
        self.generators = kept;
        self.debug_assert_minimized();
    }

    /// Replaces every generator by its colon with `term` and re-minimizes.
    ///
    /// Returns true iff the colon changed the support of any generator,
    /// which is the "non-trivial" signal the slice split uses.
    pub fn colon_reminimize(&mut self, term: &Term) -> bool {
        debug_assert_eq!(self.var_count, term.var_count(), "arity mismatch");
        let mut support_changed = false;
        for g in &mut self.generators {
            for var in 0..term.var_count() {
                let e = g.exponent(var);
                if e > 0 && e <= term.exponent(var) {
                    support_changed = true;
                    break;
                }
            }
            g.colon_assign(term);
        }
        if support_changed {
            // Only a support change can introduce new divisibilities.
            self.minimize();
        }
        support_changed
    }

    /// Erases the generators strictly divisible by `term`. Returns true iff
    /// anything was erased.
    pub fn remove_strict_multiples(&mut self, term: &Term) -> bool {
        debug_assert_eq!(self.var_count, term.var_count(), "arity mismatch");
        let before = self.generators.len();
        self.generators.retain(|g| !term.strictly_divides(g));
        before != self.generators.len()
    }

    /// Componentwise lcm of all generators; the zero ideal has lcm 1.
    pub fn lcm(&self) -> Term {
        let mut lcm = Term::identity(self.var_count);
        for g in &self.generators {
            for var in 0..self.var_count {
                if g.exponent(var) > lcm.exponent(var) {
                    lcm.set_exponent(var, g.exponent(var));
                }
            }
        }
        lcm
    }

    /// Componentwise gcd of all generators; the zero ideal has gcd 1.
    pub fn gcd(&self) -> Term {
        let mut iter = self.generators.iter();
        let mut gcd = match iter.next() {
            Some(first) => first.clone(),
            None => return Term::identity(self.var_count),
        };
        for g in iter {
            gcd.gcd_assign(g);
        }
        gcd
    }

    /// For each variable, the number of generators with positive exponent on
    /// it. Strategies use this to pick split variables.
    pub fn support_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.var_count];
        for g in &self.generators {
            for (var, count) in counts.iter_mut().enumerate() {
                if g.exponent(var) > 0 {
                    *count += 1;
                }
            }
        }
        counts
    }

    /// Stable lexicographic sort of the generators.
    pub fn sort(&mut self) {
        self.generators.sort_by(|a, b| a.exponents().cmp(b.exponents()));
    }

    /// Stable sort ascending by the exponent on `var` alone.
    pub fn single_degree_sort(&mut self, var: usize) {
        debug_assert!(var < self.var_count, "variable out of range");
        self.generators.sort_by_key(|g| g.exponent(var));
    }

    /// Sorts the generators and removes duplicates.
    pub fn sort_unique(&mut self) {
        self.sort();
        self.generators.dedup();
    }

    /// Drops every generator without touching `var_count`.
    pub fn clear(&mut self) {
        self.generators.clear();
    }

    /// Whether no generator divides another. Quadratic; meant for invariant
    /// checking and tests.
    pub fn is_minimized(&self) -> bool {
        for (i, g) in self.generators.iter().enumerate() {
            for (j, other) in self.generators.iter().enumerate() {
                if i != j && other.divides(g) {
                    return false;
                }
            }
        }
        true
    }

    #[inline]
    pub(crate) fn debug_assert_minimized(&self) {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        debug_assert!(self.is_minimized(), "ideal is not minimized");
    }

    /// Iterates over the generators.
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.generators.iter()
    }

    /// Largest exponent appearing on `var` among the generators.
    pub fn max_exponent(&self, var: usize) -> Exponent {
        self.generators
            .iter()
            .map(|g| g.exponent(var))
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Debug for Ideal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ideal<{} vars>", self.var_count)?;
        f.debug_list().entries(&self.generators).finish()
    }
}

impl fmt::Display for Ideal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, g) in self.generators.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", g)?;
        }
        write!(f, ">")
    }
}
