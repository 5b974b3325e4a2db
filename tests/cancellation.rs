//! Cooperative cancellation: the run ends cleanly, the consumer is closed,
//! and output emitted before the flag was observed stays valid.

mod util;

use monomial_slice::prelude::*;
use util::ideal;

/// Counts consumed slices and trips the cancellation flag after the first
/// emission.
struct CancelAfterFirst<'a> {
    inner: Box<dyn SliceStrategy>,
    flag: &'a CancelFlag,
    consumed: usize,
}

impl SliceStrategy for CancelAfterFirst<'_> {
    fn simplify(&mut self, slice: &mut Slice) -> Result<bool, SliceError> {
        self.inner.simplify(slice)
    }

    fn get_pivot(&mut self, slice: &Slice) -> Result<Term, SliceError> {
        self.inner.get_pivot(slice)
    }

    fn consumed(&mut self, slice: &Slice) {
        self.consumed += 1;
        // Trivial base cases also land here; only an emitting one counts as
        // "the first emission".
        if !slice.is_trivial_base() {
            self.flag.cancel();
        }
    }
}

struct CountingSink {
    terms: Vec<Term>,
    done_calls: usize,
}

impl TermConsumer for CountingSink {
    fn consume(&mut self, term: &Term) {
        self.terms.push(term.clone());
    }

    fn done_consuming(&mut self) {
        self.done_calls += 1;
    }
}

#[test]
fn cancel_after_first_emission() {
    // Plenty of components, but the strategy cancels after one.
    let input = ideal(2, &[&[4, 0], &[3, 1], &[2, 2], &[1, 3], &[0, 4]]);

    let flag = CancelFlag::new();
    let mut config = StrategyConfig::new();
    config.set("independence-split", "off").unwrap();
    let mut strategy = CancelAfterFirst {
        inner: config.build(),
        flag: &flag,
        consumed: 0,
    };
    let mut sink = CountingSink {
        terms: Vec::new(),
        done_calls: 0,
    };

    let result = run(
        msm::new_slice(input),
        &mut strategy,
        &mut sink,
        Some(&flag),
    );

    assert_eq!(result, Err(SliceError::Cancelled));
    assert_eq!(sink.done_calls, 1, "done_consuming runs exactly once");
    assert_eq!(sink.terms.len(), 1, "exactly one term before cancellation");
}

#[test]
fn uncancelled_flag_changes_nothing() {
    let input = ideal(2, &[&[2, 0], &[1, 1], &[0, 2]]);
    let flag = CancelFlag::new();
    let mut strategy = StrategyConfig::new().build();
    let mut rec = TermRecorder::new(2);
    run(msm::new_slice(input), strategy.as_mut(), &mut rec, Some(&flag)).unwrap();
    assert_eq!(rec.terms().len(), 2);
    assert!(!flag.is_cancelled());
}
