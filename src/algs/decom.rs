//! Drivers: irreducible decomposition, Alexander duals, maximal standard
//! monomials
//!
//! The engine itself enumerates maximal standard monomials. Irreducible
//! decomposition rides on it through a frame: the input is closed up with
//! \(x_v^{l_v+1}\) (where \(x^l\) is its lcm), every emitted label then has
//! the form \(m + (1,\dots,1)\) for a maximal standard monomial \(m\) of
//! the closure, and an exponent reaching \(l_v + 1\) means the component
//! does not use \(x_v\) and is mapped back to zero. The label
//! \((b_1,\dots,b_n)\) with its zeros dropped is exactly the component
//! \(\langle x_v^{b_v} : b_v > 0\rangle\).

use crate::algebra::ideal::Ideal;
use crate::algebra::term::Term;
use crate::algs::transforms::add_pure_powers;
use crate::consume::TermConsumer;
use crate::slice::engine::{run, CancelFlag};
use crate::slice::msm;
use crate::slice::strategy::StrategyConfig;
use crate::slice_error::SliceError;

/// Computes the irreducible decomposition of `ideal`, emitting one label
/// per component: exponent \(b_v > 0\) stands for the generator
/// \(x_v^{b_v}\), exponent zero for an unused variable.
///
/// The unit ideal has no components; the zero ideal in the ring of no
/// variables emits nothing, while the unit ideal there emits the empty
/// monomial.
pub fn irreducible_decomposition(
    mut ideal: Ideal,
    config: &StrategyConfig,
    consumer: &mut dyn TermConsumer,
    cancel: Option<&CancelFlag>,
) -> Result<(), SliceError> {
    ideal.minimize();
    let mut top = ideal.lcm();
    top.checked_increment_all()?;
    add_pure_powers(&mut ideal)?;
    let mut frame = FrameConsumer { top, inner: consumer };
    let mut strategy = config.build();
    run(msm::new_slice(ideal), strategy.as_mut(), &mut frame, cancel)
}

/// Computes the Alexander dual of `ideal` with respect to `point`, which
/// must dominate the lcm of the generators and defaults to it. The dual's
/// generators are emitted one per irreducible component: component
/// exponent \(b_v > 0\) becomes \(point_v - b_v + 1\).
pub fn alexander_dual(
    ideal: Ideal,
    point: Option<&Term>,
    config: &StrategyConfig,
    consumer: &mut dyn TermConsumer,
    cancel: Option<&CancelFlag>,
) -> Result<(), SliceError> {
    let mut minimized = ideal;
    minimized.minimize();
    let lcm = minimized.lcm();
    let point = match point {
        Some(point) => {
            point.require_same_arity(&lcm)?;
            for var in 0..lcm.var_count() {
                if point.exponent(var) < lcm.exponent(var) {
                    return Err(SliceError::DualPointBelowLcm { var });
                }
            }
            point.clone()
        }
        None => lcm,
    };
    let mut dual = DualConsumer { point, inner: consumer };
    irreducible_decomposition(minimized, config, &mut dual, cancel)
}

/// Computes the maximal standard monomials of `ideal`: the monomials
/// outside the ideal that every variable bump pushes inside.
pub fn maximal_standard_monomials(
    mut ideal: Ideal,
    config: &StrategyConfig,
    consumer: &mut dyn TermConsumer,
    cancel: Option<&CancelFlag>,
) -> Result<(), SliceError> {
    ideal.minimize();
    let mut decrement = DecrementConsumer { inner: consumer };
    let mut strategy = config.build();
    run(msm::new_slice(ideal), strategy.as_mut(), &mut decrement, cancel)
}

/// Maps exponents that reached one past the input lcm back to zero.
struct FrameConsumer<'a> {
    top: Term,
    inner: &'a mut dyn TermConsumer,
}

impl TermConsumer for FrameConsumer<'_> {
    fn consume_ring(&mut self, var_names: &[String]) {
        self.inner.consume_ring(var_names);
    }

    fn begin_consuming(&mut self) {
        self.inner.begin_consuming();
    }

    fn consume(&mut self, term: &Term) {
        let mapped = Term::from_exponents(
            (0..term.var_count())
                .map(|var| {
                    let e = term.exponent(var);
                    debug_assert!(e <= self.top.exponent(var));
                    if e == self.top.exponent(var) { 0 } else { e }
                })
                .collect(),
        );
        self.inner.consume(&mapped);
    }

    fn done_consuming(&mut self) {
        self.inner.done_consuming();
    }
}

/// Dualizes component labels against a dominating point.
struct DualConsumer<'a> {
    point: Term,
    inner: &'a mut dyn TermConsumer,
}

impl TermConsumer for DualConsumer<'_> {
    fn consume_ring(&mut self, var_names: &[String]) {
        self.inner.consume_ring(var_names);
    }

    fn begin_consuming(&mut self) {
        self.inner.begin_consuming();
    }

    fn consume(&mut self, term: &Term) {
        let dual = Term::from_exponents(
            (0..term.var_count())
                .map(|var| {
                    let e = term.exponent(var);
                    if e > 0 {
                        self.point.exponent(var) - e + 1
                    } else {
                        0
                    }
                })
                .collect(),
        );
        self.inner.consume(&dual);
    }

    fn done_consuming(&mut self) {
        self.inner.done_consuming();
    }
}

/// Shifts labels \(m + (1,\dots,1)\) back to the standard monomial \(m\).
struct DecrementConsumer<'a> {
    inner: &'a mut dyn TermConsumer,
}

impl TermConsumer for DecrementConsumer<'_> {
    fn consume_ring(&mut self, var_names: &[String]) {
        self.inner.consume_ring(var_names);
    }

    fn begin_consuming(&mut self) {
        self.inner.begin_consuming();
    }

    fn consume(&mut self, term: &Term) {
        let shifted = Term::from_exponents(
            (0..term.var_count())
                .map(|var| {
                    let e = term.exponent(var);
                    debug_assert!(e >= 1, "labels are shifted by one on every variable");
                    e - 1
                })
                .collect(),
        );
        self.inner.consume(&shifted);
    }

    fn done_consuming(&mut self) {
        self.inner.done_consuming();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consume::TermRecorder;

    fn ideal(var_count: usize, gens: &[&[u64]]) -> Ideal {
        Ideal::from_terms(
            var_count,
            gens.iter().map(|g| Term::from_exponents(g.to_vec())).collect(),
        )
        .unwrap()
    }

    fn t(exps: &[u64]) -> Term {
        Term::from_exponents(exps.to_vec())
    }

    fn decompose(i: Ideal) -> Vec<Term> {
        let mut rec = TermRecorder::new(i.var_count());
        irreducible_decomposition(i, &StrategyConfig::new(), &mut rec, None).unwrap();
        rec.sorted_terms()
    }

    #[test]
    fn decomposes_a_fat_point() {
        assert_eq!(
            decompose(ideal(2, &[&[2, 0], &[1, 1], &[0, 2]])),
            vec![t(&[1, 2]), t(&[2, 1])]
        );
    }

    #[test]
    fn principal_power_keeps_unused_variable_at_zero() {
        assert_eq!(decompose(ideal(2, &[&[3, 0]])), vec![t(&[3, 0])]);
    }

    #[test]
    fn maximal_standard_monomials_of_a_fat_point() {
        let mut rec = TermRecorder::new(2);
        maximal_standard_monomials(
            ideal(2, &[&[2, 0], &[1, 1], &[0, 2]]),
            &StrategyConfig::new(),
            &mut rec,
            None,
        )
        .unwrap();
        assert_eq!(rec.sorted_terms(), vec![t(&[0, 1]), t(&[1, 0])]);
    }

    #[test]
    fn alexander_dual_against_the_lcm() {
        // I = <x^2, xy, y^2>, lcm (2,2); components (2,1), (1,2);
        // dual generators: (2-2+1, 2-1+1) = (1,2) and (2,1).
        let mut rec = TermRecorder::new(2);
        alexander_dual(
            ideal(2, &[&[2, 0], &[1, 1], &[0, 2]]),
            None,
            &StrategyConfig::new(),
            &mut rec,
            None,
        )
        .unwrap();
        assert_eq!(rec.sorted_terms(), vec![t(&[1, 2]), t(&[2, 1])]);
    }

    #[test]
    fn alexander_dual_rejects_small_points() {
        let mut rec = TermRecorder::new(2);
        let result = alexander_dual(
            ideal(2, &[&[2, 0], &[0, 2]]),
            Some(&t(&[1, 2])),
            &StrategyConfig::new(),
            &mut rec,
            None,
        );
        assert_eq!(result, Err(SliceError::DualPointBelowLcm { var: 0 }));
    }
}
