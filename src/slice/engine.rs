//! The work loop of the Slice Algorithm
//!
//! The engine owns the recursion frontier, a LIFO stack of slices. One step
//! pops a slice, lets the strategy simplify it, tests for a base case
//! (emitting through the consumer when one is hit), and otherwise pushes the
//! strategy's children so the first child is explored next.
//!
//! The engine is single-threaded and synchronous; the only externally
//! observable effects of a run are the consumer calls. A cooperative
//! cancellation flag is polled between pops: on cancellation the remaining
//! frontier is dropped, the consumer is closed, and
//! [`SliceError::Cancelled`] is surfaced; output emitted before that point
//! is valid.

use crate::consume::TermConsumer;
use crate::slice_error::SliceError;
use std::sync::atomic::{AtomicBool, Ordering};

use super::strategy::{SliceStrategy, SplitOutcome};
use super::Slice;

/// Cooperative cancellation for engine runs.
///
/// Share one flag (for example behind an `Arc`) between the caller and a
/// watchdog; the engine only ever reads it.
#[derive(Debug, Default)]
pub struct CancelFlag(AtomicBool);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Safe to call from another thread.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Runs the Slice Algorithm from `root` to completion.
///
/// The consumer is bracketed with `begin_consuming`/`done_consuming`;
/// `done_consuming` is also called when the run is cancelled, after which
/// [`SliceError::Cancelled`] is returned. Emission order is whatever the
/// strategy induces; correctness does not depend on it.
pub fn run(
    root: Slice,
    strategy: &mut dyn SliceStrategy,
    consumer: &mut dyn TermConsumer,
    cancel: Option<&CancelFlag>,
) -> Result<(), SliceError> {
    consumer.begin_consuming();
    match drive(root, strategy, consumer, cancel) {
        Ok(()) => {
            consumer.done_consuming();
            Ok(())
        }
        Err(SliceError::Cancelled) => {
            consumer.done_consuming();
            Err(SliceError::Cancelled)
        }
        Err(other) => Err(other),
    }
}

fn drive(
    root: Slice,
    strategy: &mut dyn SliceStrategy,
    consumer: &mut dyn TermConsumer,
    cancel: Option<&CancelFlag>,
) -> Result<(), SliceError> {
    let mut frontier = vec![root];
    while let Some(mut slice) = frontier.pop() {
        if cancel.is_some_and(CancelFlag::is_cancelled) {
            return Err(SliceError::Cancelled);
        }
        let simplified = strategy.simplify(&mut slice)?;
        if slice.base_case(simplified, consumer)? {
            strategy.consumed(&slice);
            continue;
        }
        match strategy.split(slice, consumer, cancel)? {
            SplitOutcome::Children { first, second } => {
                frontier.push(second);
                frontier.push(first);
            }
            SplitOutcome::Consumed => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::ideal::Ideal;
    use crate::algebra::term::Term;
    use crate::consume::TermRecorder;
    use crate::slice::msm;
    use crate::slice::strategy::StrategyConfig;

    fn ideal(var_count: usize, gens: &[&[u64]]) -> Ideal {
        Ideal::from_terms(
            var_count,
            gens.iter().map(|g| Term::from_exponents(g.to_vec())).collect(),
        )
        .unwrap()
    }

    #[test]
    fn run_brackets_even_when_empty() {
        struct Bracket {
            begun: bool,
            done: bool,
        }
        impl TermConsumer for Bracket {
            fn begin_consuming(&mut self) {
                self.begun = true;
            }
            fn consume(&mut self, _term: &Term) {
                panic!("the zero ideal emits nothing");
            }
            fn done_consuming(&mut self) {
                assert!(self.begun);
                self.done = true;
            }
        }
        let mut consumer = Bracket {
            begun: false,
            done: false,
        };
        let mut strategy = StrategyConfig::new().build();
        run(msm::new_slice(Ideal::new(2)), strategy.as_mut(), &mut consumer, None).unwrap();
        assert!(consumer.done);
    }

    #[test]
    fn pre_cancelled_run_emits_nothing_and_still_closes() {
        let flag = CancelFlag::new();
        flag.cancel();
        let mut rec = TermRecorder::new(2);
        let mut strategy = StrategyConfig::new().build();
        let result = run(
            msm::new_slice(ideal(2, &[&[2, 0], &[1, 1], &[0, 2]])),
            strategy.as_mut(),
            &mut rec,
            Some(&flag),
        );
        assert_eq!(result, Err(SliceError::Cancelled));
        assert!(rec.terms().is_empty());
    }

    #[test]
    fn small_decomposition_runs_to_completion() {
        // <x, y> is an immediate non-trivial base case.
        let mut rec = TermRecorder::new(2);
        let mut strategy = StrategyConfig::new().build();
        run(
            msm::new_slice(ideal(2, &[&[1, 0], &[0, 1]])),
            strategy.as_mut(),
            &mut rec,
            None,
        )
        .unwrap();
        assert_eq!(rec.terms(), &[Term::from_exponents(vec![1, 1])]);
    }
}
