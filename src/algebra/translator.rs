//! `TermTranslator`: dense exponent ids for arbitrary-precision input
//!
//! The engine computes on machine-word exponents. Input whose exponents are
//! arbitrary-precision integers is compressed per variable into dense ids
//! `0, 1, 2, …` ordered by value, and the translator remembers the value
//! behind each id so output can be mapped back.
//!
//! For irreducible decomposition the translator additionally supports a
//! top id per variable that translates to zero
//! ([`TermTranslator::add_pure_powers_at_infinity`]): a base-case label that
//! reaches one past the largest input exponent on a variable means the
//! variable is absent from that irreducible component.

use crate::algebra::ideal::Ideal;
use crate::algebra::term::{Exponent, Term};
use crate::slice_error::SliceError;
use num_bigint::BigUint;

/// Bidirectional map between dense exponent ids and big exponent values.
#[derive(Clone, Debug)]
pub struct TermTranslator {
    /// Per variable, the value behind each id; `tables[v][0]` is always zero.
    tables: Vec<Vec<BigUint>>,
}

impl TermTranslator {
    /// Compresses big-exponent generators into id space.
    ///
    /// Returns the translator together with the id-space ideal. Ids are
    /// assigned per variable in increasing order of value, with id 0
    /// reserved for the value zero, so divisibility is preserved.
    pub fn compress(
        var_count: usize,
        big_generators: &[Vec<BigUint>],
    ) -> Result<(TermTranslator, Ideal), SliceError> {
        for gen in big_generators {
            if gen.len() != var_count {
                return Err(SliceError::ArityMismatch {
                    expected: var_count,
                    actual: gen.len(),
                });
            }
        }

        let mut tables: Vec<Vec<BigUint>> = vec![vec![BigUint::from(0u32)]; var_count];
        for (var, table) in tables.iter_mut().enumerate() {
            let mut values: Vec<&BigUint> = big_generators.iter().map(|g| &g[var]).collect();
            values.sort();
            values.dedup();
            for value in values {
                if !value.eq(&table[0]) {
                    table.push(value.clone());
                }
            }
        }

        let mut terms = Vec::with_capacity(big_generators.len());
        for gen in big_generators {
            let mut exponents = Vec::with_capacity(var_count);
            for (var, value) in gen.iter().enumerate() {
                let id = tables[var]
                    .binary_search(value)
                    .expect("every input exponent was tabulated");
                exponents.push(id as Exponent);
            }
            terms.push(Term::from_exponents(exponents));
        }

        let translator = TermTranslator { tables };
        let ideal = Ideal::from_terms(var_count, terms)?;
        Ok((translator, ideal))
    }

    /// Number of variables the translator covers.
    #[inline]
    pub fn var_count(&self) -> usize {
        self.tables.len()
    }

    /// Number of ids assigned on `var`.
    pub fn id_count(&self, var: usize) -> usize {
        self.tables[var].len()
    }

    /// The value behind `id` on `var`.
    pub fn value(&self, var: usize, id: Exponent) -> Result<&BigUint, SliceError> {
        self.tables
            .get(var)
            .and_then(|t| t.get(id as usize))
            .ok_or(SliceError::UnknownExponentId { var, id })
    }

    /// Maps an id-space term back to big exponent values.
    pub fn translate(&self, term: &Term) -> Result<Vec<BigUint>, SliceError> {
        if term.var_count() != self.var_count() {
            return Err(SliceError::ArityMismatch {
                expected: self.var_count(),
                actual: term.var_count(),
            });
        }
        (0..term.var_count())
            .map(|var| self.value(var, term.exponent(var)).cloned())
            .collect()
    }

    /// Appends, for each variable, a fresh top id translating to zero, and
    /// inserts the matching pure power into `ideal` wherever it is a minimal
    /// generator. This is the artinian closure used by the decomposition
    /// driver: components never using a variable surface that variable at
    /// the top id, which translates back to absence.
    pub fn add_pure_powers_at_infinity(&mut self, ideal: &mut Ideal) -> Result<(), SliceError> {
        if ideal.var_count() != self.var_count() {
            return Err(SliceError::ArityMismatch {
                expected: self.var_count(),
                actual: ideal.var_count(),
            });
        }
        for var in 0..self.var_count() {
            let top_id = self.tables[var].len() as Exponent;
            self.tables[var].push(BigUint::from(0u32));
            let power = Term::pure_power(ideal.var_count(), var, top_id)?;
            if !ideal.contains(&power) {
                ideal.insert(power)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn compress_preserves_divisibility() {
        // Exponents 0, 5, 1000000007 on one variable become ids 0, 1, 2.
        let gens = vec![
            vec![big(5), big(0)],
            vec![big(1_000_000_007), big(3)],
        ];
        let (translator, ideal) = TermTranslator::compress(2, &gens).unwrap();
        assert_eq!(
            ideal.generators(),
            &[
                Term::from_exponents(vec![1, 0]),
                Term::from_exponents(vec![2, 1]),
            ]
        );
        assert_eq!(
            translator.translate(&Term::from_exponents(vec![2, 1])).unwrap(),
            vec![big(1_000_000_007), big(3)]
        );
        assert_eq!(
            translator.translate(&Term::from_exponents(vec![0, 0])).unwrap(),
            vec![big(0), big(0)]
        );
    }

    #[test]
    fn compress_checks_arity() {
        let gens = vec![vec![big(1)]];
        assert!(matches!(
            TermTranslator::compress(2, &gens),
            Err(SliceError::ArityMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn infinity_ids_translate_to_zero() {
        let gens = vec![vec![big(2), big(1)]];
        let (mut translator, mut ideal) = TermTranslator::compress(2, &gens).unwrap();
        translator.add_pure_powers_at_infinity(&mut ideal).unwrap();
        // Each variable gained a top id one past its table.
        assert_eq!(
            translator.translate(&Term::from_exponents(vec![2, 2])).unwrap(),
            vec![big(0), big(0)]
        );
        // The closure inserted the pure powers x1^2 and x2^2 in id space.
        assert_eq!(ideal.generator_count(), 3);
        assert!(ideal.contains(&Term::from_exponents(vec![2, 0])));
        assert!(ideal.contains(&Term::from_exponents(vec![0, 2])));
    }

    #[test]
    fn infinity_skips_dominated_pure_powers() {
        // Both variables already carry pure-power generators, so the closure
        // inserts nothing; only the translation tables grow.
        let gens = vec![vec![big(1), big(0)], vec![big(0), big(4)]];
        let (mut translator, mut ideal) = TermTranslator::compress(2, &gens).unwrap();
        translator.add_pure_powers_at_infinity(&mut ideal).unwrap();
        assert_eq!(ideal.generator_count(), 2);
        assert_eq!(translator.value(0, 2).unwrap(), &big(0));
        assert_eq!(translator.value(1, 2).unwrap(), &big(0));
    }

    #[test]
    fn unknown_id_is_an_error() {
        let gens = vec![vec![big(1)]];
        let (translator, _) = TermTranslator::compress(1, &gens).unwrap();
        assert_eq!(
            translator.translate(&Term::from_exponents(vec![7])),
            Err(SliceError::UnknownExponentId { var: 0, id: 7 })
        );
    }
}
