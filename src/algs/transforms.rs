//! Ideal-level transformations shared by the drivers.

use crate::algebra::ideal::Ideal;
use crate::algebra::term::Term;
use crate::projection::Projection;
use crate::slice_error::SliceError;

/// Truncates every exponent to one, in place.
///
/// The radical of a minimized ideal need not be minimized (distinct
/// generators can collapse onto a common radical); this function does not
/// re-minimize.
pub fn radical(ideal: &mut Ideal) {
    let var_count = ideal.var_count();
    let gens: Vec<Term> = ideal
        .iter()
        .map(|g| {
            Term::from_exponents(
                (0..var_count)
                    .map(|var| if g.exponent(var) > 0 { 1 } else { 0 })
                    .collect(),
            )
        })
        .collect();
    *ideal = Ideal::from_terms(var_count, gens).expect("radical preserves arity");
}

/// Adds \(x_v^{l_v + 1}\) for each variable \(v\), where \(x^l\) is the lcm
/// of the generators, wherever that power is a minimal generator. The result
/// is artinian: every variable carries a pure-power generator.
pub fn add_pure_powers(ideal: &mut Ideal) -> Result<(), SliceError> {
    let lcm = ideal.lcm();
    for var in 0..ideal.var_count() {
        let exponent = lcm
            .exponent(var)
            .checked_add(1)
            .ok_or(SliceError::ExponentOverflow { var })?;
        let power = Term::pure_power(ideal.var_count(), var, exponent)?;
        if !ideal.contains(&power) {
            ideal.insert(power)?;
        }
    }
    Ok(())
}

/// Removes variable `var` from the ring by substituting one for it. The
/// result lives in one fewer variable and is re-minimized.
pub fn eliminate_var(ideal: &Ideal, var: usize) -> Result<Ideal, SliceError> {
    let var_count = ideal.var_count();
    if var >= var_count {
        return Err(SliceError::VariableOutOfRange { var, var_count });
    }
    let kept: Vec<usize> = (0..var_count).filter(|&v| v != var).collect();
    let projection = Projection::new(var_count, &kept)?;
    let mut projected = projection.project_ideal(ideal);
    projected.minimize();
    Ok(projected)
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn radical_truncates_without_minimizing() {
        let mut i = ideal(2, &[&[3, 0], &[2, 1]]);
        radical(&mut i);
        assert_eq!(i.generators(), &[t(&[1, 0]), t(&[1, 1])]);
        assert!(!i.is_minimized());
    }

    #[test]
    fn add_pure_powers_closes_every_variable() {
        let mut i = ideal(3, &[&[1, 1, 0], &[0, 2, 0]]);
        add_pure_powers(&mut i).unwrap();
        // lcm = (1,2,0): x^2 is minimal and z^1 closes the unused variable,
        // while y^3 is dominated by the generator y^2 and skipped.
        assert_eq!(i.generator_count(), 4);
        assert!(i.contains(&t(&[2, 0, 0])));
        assert!(i.contains(&t(&[0, 3, 0])));
        assert!(i.contains(&t(&[0, 0, 1])));
        assert!(i.is_minimized());
    }

    #[test]
    fn add_pure_powers_skips_existing_powers() {
        let mut i = ideal(2, &[&[2, 0], &[0, 1]]);
        add_pure_powers(&mut i).unwrap();
        assert_eq!(i.generator_count(), 2);
    }

    #[test]
    fn eliminate_var_substitutes_one() {
        // Substituting y = 1 in <x y, x^3, y^2 z> gives <x, z>.
        let i = ideal(3, &[&[1, 1, 0], &[3, 0, 0], &[0, 2, 1]]);
        let projected = eliminate_var(&i, 1).unwrap();
        assert_eq!(projected.var_count(), 2);
        assert_eq!(projected.generators(), &[t(&[1, 0]), t(&[0, 1])]);
    }
}
