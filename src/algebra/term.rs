//! `Term`: a fixed-arity exponent vector with monomial arithmetic
//!
//! A term is a monomial \(x_1^{e_1} \cdots x_n^{e_n}\) represented by its
//! exponent vector \((e_1, \dots, e_n)\) of non-negative machine-word
//! exponents. Exponents of arbitrary precision only appear at the I/O
//! boundary and are mapped to dense ids by
//! [`TermTranslator`](crate::algebra::translator::TermTranslator).
//!
//! All binary operations require both operands to share an arity; violating
//! this is a programming error. The fallible entry points of the crate
//! (ideal insertion, slice construction, the engine) reject mismatched
//! arities with [`SliceError::ArityMismatch`], so the per-operation checks
//! here are debug assertions.

use crate::slice_error::SliceError;
use std::fmt;

/// The exponent of a single variable in a term.
///
/// Overflow on exponent arithmetic is a fatal condition surfaced as
/// [`SliceError::ExponentOverflow`] by the checked operations; the unchecked
/// componentwise operations (min, max, saturating difference) cannot
/// overflow.
pub type Exponent = u64;

/// An exponent vector of fixed arity.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Term {
    exponents: Vec<Exponent>,
}

impl Term {
    /// Creates the identity monomial (all exponents zero) in `var_count`
    /// variables.
    #[inline]
    pub fn identity(var_count: usize) -> Self {
        Term {
            exponents: vec![0; var_count],
        }
    }

    /// Creates the pure power \(x_{var}^{exponent}\).
    pub fn pure_power(var_count: usize, var: usize, exponent: Exponent) -> Result<Self, SliceError> {
        if var >= var_count {
            return Err(SliceError::VariableOutOfRange { var, var_count });
        }
        let mut term = Term::identity(var_count);
        term.exponents[var] = exponent;
        Ok(term)
    }

    /// Wraps an exponent vector.
    #[inline]
    pub fn from_exponents(exponents: Vec<Exponent>) -> Self {
        Term { exponents }
    }

    /// Number of variables in the ambient ring.
    #[inline]
    pub fn var_count(&self) -> usize {
        self.exponents.len()
    }

    /// The exponent of variable `var`.
    #[inline]
    pub fn exponent(&self, var: usize) -> Exponent {
        self.exponents[var]
    }

    /// Sets the exponent of variable `var`.
    #[inline]
    pub fn set_exponent(&mut self, var: usize, exponent: Exponent) {
        self.exponents[var] = exponent;
    }

    /// The raw exponent vector.
    #[inline]
    pub fn exponents(&self) -> &[Exponent] {
        &self.exponents
    }

    /// Whether this is the identity monomial.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Returns whether `self` divides `other`, i.e. whether every exponent of
    /// `self` is bounded by the matching exponent of `other`.
    ///
    /// ```rust
    /// use monomial_slice::algebra::term::Term;
    /// let a = Term::from_exponents(vec![1, 0]);
    /// let b = Term::from_exponents(vec![2, 1]);
    /// assert!(a.divides(&b));
    /// assert!(!b.divides(&a));
    /// ```
    pub fn divides(&self, other: &Term) -> bool {
        debug_assert_eq!(self.var_count(), other.var_count(), "arity mismatch");
        self.exponents
            .iter()
            .zip(&other.exponents)
            .all(|(&a, &b)| a <= b)
    }

    /// Returns whether `self` strictly divides `other`: on every variable
    /// where `self` is positive, `other` must be strictly larger. The
    /// identity strictly divides every term, including itself.
    ///
    /// This is the asymmetric notion used to recognize generators that
    /// witness no part of a slice's content; it is stronger than
    /// [`divides`](Self::divides) followed by an inequality test.
    ///
    /// ```rust
    /// use monomial_slice::algebra::term::Term;
    /// let x = Term::from_exponents(vec![1, 0]);
    /// assert!(x.strictly_divides(&Term::from_exponents(vec![2, 0])));
    /// // x does not strictly divide xy: the x-exponents are equal.
    /// assert!(!x.strictly_divides(&Term::from_exponents(vec![1, 1])));
    /// ```
    pub fn strictly_divides(&self, other: &Term) -> bool {
        debug_assert_eq!(self.var_count(), other.var_count(), "arity mismatch");
        self.exponents
            .iter()
            .zip(&other.exponents)
            .all(|(&a, &b)| a == 0 || a < b)
    }

    /// Componentwise maximum.
    pub fn lcm(&self, other: &Term) -> Term {
        debug_assert_eq!(self.var_count(), other.var_count(), "arity mismatch");
        Term {
            exponents: self
                .exponents
                .iter()
                .zip(&other.exponents)
                .map(|(&a, &b)| a.max(b))
                .collect(),
        }
    }

    /// Componentwise minimum.
    pub fn gcd(&self, other: &Term) -> Term {
        debug_assert_eq!(self.var_count(), other.var_count(), "arity mismatch");
        Term {
            exponents: self
                .exponents
                .iter()
                .zip(&other.exponents)
                .map(|(&a, &b)| a.min(b))
                .collect(),
        }
    }

    /// Componentwise minimum, in place.
    pub fn gcd_assign(&mut self, other: &Term) {
        debug_assert_eq!(self.var_count(), other.var_count(), "arity mismatch");
        for (a, &b) in self.exponents.iter_mut().zip(&other.exponents) {
            *a = (*a).min(b);
        }
    }

    /// The colon \(self : other\), componentwise `max(a - b, 0)`.
    pub fn colon(&self, other: &Term) -> Term {
        debug_assert_eq!(self.var_count(), other.var_count(), "arity mismatch");
        Term {
            exponents: self
                .exponents
                .iter()
                .zip(&other.exponents)
                .map(|(&a, &b)| a.saturating_sub(b))
                .collect(),
        }
    }

    /// In-place colon by `other`.
    pub fn colon_assign(&mut self, other: &Term) {
        debug_assert_eq!(self.var_count(), other.var_count(), "arity mismatch");
        for (a, &b) in self.exponents.iter_mut().zip(&other.exponents) {
            *a = a.saturating_sub(b);
        }
    }

    /// Multiplies `other` onto this term, failing on exponent overflow.
    pub fn checked_mul_assign(&mut self, other: &Term) -> Result<(), SliceError> {
        debug_assert_eq!(self.var_count(), other.var_count(), "arity mismatch");
        for (var, (a, &b)) in self.exponents.iter_mut().zip(&other.exponents).enumerate() {
            *a = a
                .checked_add(b)
                .ok_or(SliceError::ExponentOverflow { var })?;
        }
        Ok(())
    }

    /// Adds one to every exponent, failing on overflow. This is
    /// multiplication by \(x_1 x_2 \cdots x_n\).
    pub fn checked_increment_all(&mut self) -> Result<(), SliceError> {
        for (var, a) in self.exponents.iter_mut().enumerate() {
            *a = a
                .checked_add(1)
                .ok_or(SliceError::ExponentOverflow { var })?;
        }
        Ok(())
    }

    /// Number of variables with positive exponent.
    pub fn support_size(&self) -> usize {
        self.exponents.iter().filter(|&&e| e > 0).count()
    }

    /// Whether exactly one variable has positive exponent.
    pub fn is_pure_power(&self) -> bool {
        self.support_size() == 1
    }

    /// Whether every exponent is zero or one.
    pub fn is_square_free(&self) -> bool {
        self.exponents.iter().all(|&e| e <= 1)
    }

    /// Index of the first variable with positive exponent, if any.
    pub fn first_nonzero_var(&self) -> Option<usize> {
        self.exponents.iter().position(|&e| e > 0)
    }

    /// Whether the supports of the two terms are disjoint.
    pub fn is_relatively_prime(&self, other: &Term) -> bool {
        debug_assert_eq!(self.var_count(), other.var_count(), "arity mismatch");
        self.exponents
            .iter()
            .zip(&other.exponents)
            .all(|(&a, &b)| a == 0 || b == 0)
    }

    /// Sum of all exponents, saturating at the word bound.
    pub fn total_degree(&self) -> Exponent {
        self.exponents
            .iter()
            .fold(0, |acc: Exponent, &e| acc.saturating_add(e))
    }

    /// Checks that `other` shares this term's arity, for use at fallible
    /// public boundaries.
    pub fn require_same_arity(&self, other: &Term) -> Result<(), SliceError> {
        if self.var_count() == other.var_count() {
            Ok(())
        } else {
            Err(SliceError::ArityMismatch {
                expected: self.var_count(),
                actual: other.var_count(),
            })
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Term").field(&self.exponents).finish()
    }
}

/// Prints a readable monomial such as `x1^2*x3`; the identity prints as `1`.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (var, &e) in self.exponents.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if !first {
                write!(f, "*")?;
            }
            first = false;
            if e == 1 {
                write!(f, "x{}", var + 1)?;
            } else {
                write!(f, "x{}^{}", var + 1, e)?;
            }
        }
        if first {
            write!(f, "1")?;
        }
        Ok(())
    }
}
