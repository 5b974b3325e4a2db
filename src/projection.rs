//! `Projection`: variable-subset restriction and rewriting
//!
//! A projection is an injection from a subset of the ambient variables into
//! a smaller ring, given by the ordered list of selected variable indices.
//! Independence splitting uses projections to restrict a slice to one
//! independent variable group and to lift the group's output back into the
//! ambient ring; variable elimination uses them to drop a variable.

use crate::algebra::ideal::Ideal;
use crate::algebra::term::Term;
use crate::slice_error::SliceError;

/// An injection of a smaller ring's variables into the ambient ring.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Projection {
    domain_var_count: usize,
    /// Range variable `r` corresponds to ambient variable `range_to_domain[r]`.
    range_to_domain: Vec<usize>,
    /// Inverse lookup: ambient variable to range variable, if selected.
    domain_to_range: Vec<Option<usize>>,
}

impl Projection {
    /// Builds the projection selecting `vars` (strictly increasing ambient
    /// indices) out of a ring of `domain_var_count` variables.
    pub fn new(domain_var_count: usize, vars: &[usize]) -> Result<Self, SliceError> {
        let mut domain_to_range = vec![None; domain_var_count];
        let mut previous: Option<usize> = None;
        for (range, &var) in vars.iter().enumerate() {
            if var >= domain_var_count {
                return Err(SliceError::VariableOutOfRange {
                    var,
                    var_count: domain_var_count,
                });
            }
            if previous.is_some_and(|p| p >= var) {
                return Err(SliceError::PreconditionViolated(
                    "projection variables must be strictly increasing",
                ));
            }
            previous = Some(var);
            domain_to_range[var] = Some(range);
        }
        Ok(Projection {
            domain_var_count,
            range_to_domain: vars.to_vec(),
            domain_to_range,
        })
    }

    /// Number of variables in the smaller ring.
    #[inline]
    pub fn range_var_count(&self) -> usize {
        self.range_to_domain.len()
    }

    /// Number of variables in the ambient ring.
    #[inline]
    pub fn domain_var_count(&self) -> usize {
        self.domain_var_count
    }

    /// Whether ambient variable `var` is selected by this projection.
    #[inline]
    pub fn is_range_of(&self, var: usize) -> bool {
        self.domain_to_range.get(var).copied().flatten().is_some()
    }

    /// The ambient variable behind range variable `range_var`.
    #[inline]
    pub fn domain_var(&self, range_var: usize) -> usize {
        self.range_to_domain[range_var]
    }

    /// Restricts a term to the selected variables.
    pub fn project(&self, term: &Term) -> Term {
        debug_assert_eq!(term.var_count(), self.domain_var_count, "arity mismatch");
        Term::from_exponents(
            self.range_to_domain
                .iter()
                .map(|&var| term.exponent(var))
                .collect(),
        )
    }

    /// Restricts every generator of an ideal to the selected variables.
    ///
    /// Exponents on unselected variables are dropped, which is substitution
    /// by one; the result may need re-minimization.
    pub fn project_ideal(&self, ideal: &Ideal) -> Ideal {
        debug_assert_eq!(ideal.var_count(), self.domain_var_count, "arity mismatch");
        let gens = ideal.iter().map(|g| self.project(g)).collect();
        Ideal::from_terms(self.range_var_count(), gens)
            .expect("projected generators share the range arity")
    }

    /// Writes a range-ring term back onto the selected ambient variables of
    /// `out`, leaving the other variables of `out` untouched.
    pub fn inverse_project(&self, term: &Term, out: &mut Term) {
        debug_assert_eq!(term.var_count(), self.range_var_count(), "arity mismatch");
        debug_assert_eq!(out.var_count(), self.domain_var_count, "arity mismatch");
        for (range_var, &var) in self.range_to_domain.iter().enumerate() {
            out.set_exponent(var, term.exponent(range_var));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_and_lift_roundtrip() {
        let p = Projection::new(4, &[1, 3]).unwrap();
        assert_eq!(p.range_var_count(), 2);
        assert!(p.is_range_of(3));
        assert!(!p.is_range_of(0));
        assert_eq!(p.domain_var(0), 1);

        let t = Term::from_exponents(vec![5, 2, 7, 3]);
        let projected = p.project(&t);
        assert_eq!(projected, Term::from_exponents(vec![2, 3]));

        let mut lifted = Term::identity(4);
        p.inverse_project(&projected, &mut lifted);
        assert_eq!(lifted, Term::from_exponents(vec![0, 2, 0, 3]));
    }

    #[test]
    fn project_ideal_substitutes_one() {
        let p = Projection::new(3, &[0, 2]).unwrap();
        let i = Ideal::from_terms(
            3,
            vec![
                Term::from_exponents(vec![1, 4, 0]),
                Term::from_exponents(vec![0, 1, 2]),
            ],
        )
        .unwrap();
        let projected = p.project_ideal(&i);
        assert_eq!(
            projected.generators(),
            &[
                Term::from_exponents(vec![1, 0]),
                Term::from_exponents(vec![0, 2]),
            ]
        );
    }

    #[test]
    fn rejects_bad_variable_lists() {
        assert!(matches!(
            Projection::new(2, &[0, 2]),
            Err(SliceError::VariableOutOfRange { var: 2, var_count: 2 })
        ));
        assert!(matches!(
            Projection::new(3, &[1, 1]),
            Err(SliceError::PreconditionViolated(_))
        ));
        assert!(matches!(
            Projection::new(3, &[2, 0]),
            Err(SliceError::PreconditionViolated(_))
        ));
    }
}
