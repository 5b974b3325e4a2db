//! Independence splitting
//!
//! When the variables of a slice fall into groups such that no generator
//! uses variables from two groups, the content factors: it is the cartesian
//! product of the contents of the projected slices, one per group. Solving
//! each group in its own smaller ring and recombining beats pivot splitting,
//! which would explore the product one element at a time.
//!
//! [`IndependenceStrategy`] is a decorator: it checks every slice for
//! independent groups and otherwise behaves exactly like the child strategy
//! it wraps.

use hashbrown::HashMap;

use crate::algebra::ideal::Ideal;
use crate::algebra::term::Term;
use crate::consume::{TermConsumer, TermRecorder};
use crate::projection::Projection;
use crate::slice_error::SliceError;

use super::engine::{run, CancelFlag};
use super::strategy::{SliceStrategy, SplitOutcome};
use super::Slice;

/// Wraps a child strategy with variable-independence factoring.
pub struct IndependenceStrategy {
    child: Box<dyn SliceStrategy>,
}

impl IndependenceStrategy {
    pub fn new(child: Box<dyn SliceStrategy>) -> Self {
        IndependenceStrategy { child }
    }
}

impl SliceStrategy for IndependenceStrategy {
    fn simplify(&mut self, slice: &mut Slice) -> Result<bool, SliceError> {
        self.child.simplify(slice)
    }

    fn get_pivot(&mut self, slice: &Slice) -> Result<Term, SliceError> {
        self.child.get_pivot(slice)
    }

    fn split(
        &mut self,
        slice: Slice,
        consumer: &mut dyn TermConsumer,
        cancel: Option<&CancelFlag>,
    ) -> Result<SplitOutcome, SliceError> {
        let Some(groups) = independent_groups(&slice) else {
            return self.child.split(slice, consumer, cancel);
        };

        // Solve each group in its projected ring. An empty group content
        // empties the whole product.
        let mut contents: Vec<(Projection, Vec<Term>)> = Vec::with_capacity(groups.len());
        for group in &groups {
            let projection = Projection::new(slice.var_count(), group)?;
            let sub = project_slice(&slice, &projection)?;
            let mut recorder = TermRecorder::new(projection.range_var_count());
            run(sub, self.child.as_mut(), &mut recorder, cancel)?;
            if recorder.terms().is_empty() {
                return Ok(SplitOutcome::Consumed);
            }
            contents.push((projection, recorder.terms().to_vec()));
        }

        // Emit the cartesian product, recombined through the inverse
        // projections. The groups partition the variables, so every
        // component of the multiply is carried by exactly one factor.
        let mut choice = vec![0usize; contents.len()];
        loop {
            let mut label = Term::identity(slice.var_count());
            for (position, (projection, terms)) in contents.iter().enumerate() {
                projection.inverse_project(&terms[choice[position]], &mut label);
            }
            consumer.consume(&label);
            if !advance(&mut choice, &contents) {
                return Ok(SplitOutcome::Consumed);
            }
        }
    }

    fn consumed(&mut self, slice: &Slice) {
        self.child.consumed(slice);
    }
}

/// Odometer increment over the factor lengths; false when exhausted.
fn advance(choice: &mut [usize], contents: &[(Projection, Vec<Term>)]) -> bool {
    for (digit, (_, terms)) in choice.iter_mut().zip(contents).rev() {
        *digit += 1;
        if *digit < terms.len() {
            return true;
        }
        *digit = 0;
    }
    false
}

/// Restricts a slice to the variables a projection selects. The caller
/// guarantees every generator of the ideal lies wholly inside or outside
/// the selected group; subtract generators spanning groups were rejected
/// during group discovery.
fn project_slice(slice: &Slice, projection: &Projection) -> Result<Slice, SliceError> {
    let in_group = |term: &&Term| {
        term.first_nonzero_var()
            .map(|var| projection.is_range_of(var))
            .unwrap_or(false)
    };
    let ideal_gens: Vec<Term> = slice
        .ideal()
        .iter()
        .filter(in_group)
        .map(|g| projection.project(g))
        .collect();
    let subtract_gens: Vec<Term> = slice
        .subtract()
        .iter()
        .filter(in_group)
        .map(|s| projection.project(s))
        .collect();
    let range = projection.range_var_count();
    Slice::from_parts(
        slice.table(),
        Ideal::from_terms(range, ideal_gens)?,
        Ideal::from_terms(range, subtract_gens)?,
        projection.project(slice.multiply()),
    )
}

/// Finds the independent variable groups of a slice, as sorted variable
/// lists sorted by first variable. Returns `None` when there are fewer than
/// two groups, or when a subtract generator spans groups (its exclusions
/// would not factor).
fn independent_groups(slice: &Slice) -> Option<Vec<Vec<usize>>> {
    let var_count = slice.var_count();
    let mut find = UnionFind::new(var_count);
    for g in slice.ideal().iter() {
        let mut anchor: Option<usize> = None;
        for var in 0..var_count {
            if g.exponent(var) > 0 {
                match anchor {
                    Some(a) => find.union(a, var),
                    None => anchor = Some(var),
                }
            }
        }
    }

    let mut groups: HashMap<usize, Vec<usize>> = HashMap::new();
    for var in 0..var_count {
        // Split is only called on slices whose lcm has full support, so
        // every variable belongs to some generator's group.
        groups.entry(find.find(var)).or_default().push(var);
    }
    if groups.len() < 2 {
        return None;
    }

    for s in slice.subtract().iter() {
        let mut root: Option<usize> = None;
        for var in 0..var_count {
            if s.exponent(var) > 0 {
                let r = find.find(var);
                if root.is_some_and(|prev| prev != r) {
                    return None;
                }
                root = Some(r);
            }
        }
    }

    let mut groups: Vec<Vec<usize>> = groups.into_values().collect();
    groups.sort_by_key(|group| group[0]);
    Some(groups)
}

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(len: usize) -> Self {
        UnionFind {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[ra.max(rb)] = ra.min(rb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::msm;
    use crate::slice::strategy::{PivotSelect, PivotStrategy, StrategyConfig};
    use crate::slice::simplify::Simplifier;

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
    fn groups_follow_generator_supports() {
        let slice = msm::new_slice(ideal(
            4,
            &[&[1, 1, 0, 0], &[0, 0, 1, 1], &[2, 0, 0, 0], &[0, 0, 0, 2]],
        ));
        let groups = independent_groups(&slice).unwrap();
        assert_eq!(groups, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn connected_supports_do_not_split() {
        let slice = msm::new_slice(ideal(3, &[&[1, 1, 0], &[0, 1, 1]]));
        assert!(independent_groups(&slice).is_none());
    }

    #[test]
    fn spanning_subtract_blocks_the_split() {
        let slice = msm::slice_from_parts(
            ideal(4, &[&[2, 1, 0, 0], &[0, 0, 1, 2]]),
            ideal(4, &[&[1, 0, 1, 0]]),
            Term::identity(4),
        )
        .unwrap();
        assert!(independent_groups(&slice).is_none());
    }

    #[test]
    fn product_recombination_matches_pivot_split() {
        // Artinian closure of <x1 x2, x3 x4>: both strategies must agree.
        let closed = ideal(
            4,
            &[
                &[1, 1, 0, 0],
                &[0, 0, 1, 1],
                &[2, 0, 0, 0],
                &[0, 2, 0, 0],
                &[0, 0, 2, 0],
                &[0, 0, 0, 2],
            ],
        );
        let mut with_independence = TermRecorder::new(4);
        let mut config = StrategyConfig::new();
        config.set("independence-split", "on").unwrap();
        run(
            msm::new_slice(closed.clone()),
            config.build().as_mut(),
            &mut with_independence,
            None,
        )
        .unwrap();

        let mut without = TermRecorder::new(4);
        let mut plain = PivotStrategy::new(PivotSelect::Median, Some(Simplifier::default()));
        run(msm::new_slice(closed), &mut plain, &mut without, None).unwrap();

        assert_eq!(with_independence.sorted_terms(), without.sorted_terms());
        assert_eq!(with_independence.terms().len(), 4);
        assert!(with_independence
            .sorted_terms()
            .contains(&t(&[1, 2, 1, 2])));
    }
}
