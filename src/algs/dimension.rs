//! Krull dimension of a monomial quotient ring
//!
//! For a monomial ideal the Krull dimension of \(R/I\) is combinatorial:
//! it is \(n - c\) where \(c\) is the size of a smallest set of variables
//! hitting the support of every minimal generator. The search below is a
//! small branch-and-bound over generator supports, branching on the
//! variables of an uncovered support with the fewest choices.
//!
//! By convention the dimension is \(-1\) when the ideal contains the
//! identity (the quotient is the zero ring), and \(n\) for the zero ideal.

use crate::algebra::ideal::Ideal;

/// Krull dimension of \(R/I\); `-1` for the whole ring.
pub fn krull_dimension(ideal: &Ideal) -> i64 {
    if ideal.contains_identity() {
        return -1;
    }
    ideal.var_count() as i64 - min_cover(ideal) as i64
}

/// Size of a smallest variable set meeting every generator's support;
/// `var_count + 1` when no such set exists (the ideal is the whole ring).
pub fn codimension(ideal: &Ideal) -> i64 {
    if ideal.contains_identity() {
        return ideal.var_count() as i64 + 1;
    }
    min_cover(ideal) as i64
}

fn min_cover(ideal: &Ideal) -> usize {
    let mut supports: Vec<Vec<usize>> = ideal
        .iter()
        .map(|g| {
            (0..ideal.var_count())
                .filter(|&var| g.exponent(var) > 0)
                .collect()
        })
        .collect();
    // Smaller supports first: they constrain the branching the most.
    supports.sort_by_key(Vec::len);
    let mut chosen = vec![false; ideal.var_count()];
    let mut best = ideal.var_count();
    branch(&supports, &mut chosen, 0, &mut best);
    best
}

fn branch(supports: &[Vec<usize>], chosen: &mut Vec<bool>, size: usize, best: &mut usize) {
    if size >= *best {
        return;
    }
    // The first support not hit by the current choice drives the branching.
    let uncovered = supports
        .iter()
        .find(|support| !support.iter().any(|&var| chosen[var]));
    let Some(uncovered) = uncovered else {
        *best = size;
        return;
    };
    for &var in uncovered {
        chosen[var] = true;
        branch(supports, chosen, size + 1, best);
        chosen[var] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::term::Term;

    fn ideal(var_count: usize, gens: &[&[u64]]) -> Ideal {
        Ideal::from_terms(
            var_count,
            gens.iter().map(|g| Term::from_exponents(g.to_vec())).collect(),
        )
        .unwrap()
    }

    #[test]
    fn zero_ideal_has_full_dimension() {
        assert_eq!(krull_dimension(&Ideal::new(3)), 3);
        assert_eq!(codimension(&Ideal::new(3)), 0);
    }

    #[test]
    fn whole_ring_uses_the_convention() {
        let i = ideal(2, &[&[0, 0]]);
        assert_eq!(krull_dimension(&i), -1);
        assert_eq!(codimension(&i), 3);
    }

    #[test]
    fn principal_ideals_drop_one_dimension() {
        assert_eq!(krull_dimension(&ideal(3, &[&[2, 0, 0]])), 2);
        assert_eq!(krull_dimension(&ideal(3, &[&[1, 1, 0]])), 2);
    }

    #[test]
    fn edge_ideal_of_a_triangle() {
        // <xy, yz, xz>: two variables must be chosen; dimension 1.
        let i = ideal(3, &[&[1, 1, 0], &[0, 1, 1], &[1, 0, 1]]);
        assert_eq!(krull_dimension(&i), 1);
        assert_eq!(codimension(&i), 2);
    }

    #[test]
    fn maximal_ideal_has_dimension_zero() {
        let i = ideal(3, &[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]);
        assert_eq!(krull_dimension(&i), 0);
    }

    #[test]
    fn dimension_ignores_exponents() {
        let deep = ideal(4, &[&[5, 3, 0, 0], &[0, 2, 7, 0]]);
        let square_free = ideal(4, &[&[1, 1, 0, 0], &[0, 1, 1, 0]]);
        assert_eq!(krull_dimension(&deep), krull_dimension(&square_free));
        // One variable (y) hits both supports.
        assert_eq!(krull_dimension(&deep), 3);
    }
}
