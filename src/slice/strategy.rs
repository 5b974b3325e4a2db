//! Split strategies: which pivot, which order, how much simplification
//!
//! A strategy is the policy object of the Slice Algorithm. For a slice that
//! is not a base case it chooses the pivot, produces the two children, and
//! decides in which order the engine explores them; it also owns the
//! simplification policy, because some configurations (diagnostics) run
//! without simplification.
//!
//! The concrete strategies only ever produce pivots that are neither the
//! unit nor in the ideal, so both children are strictly smaller by the
//! measure \(\sum_i \operatorname{lcm}(I)_i\) and the recursion terminates.

use crate::algebra::term::{Exponent, Term};
use crate::consume::TermConsumer;
use crate::slice_error::SliceError;

use super::engine::CancelFlag;
use super::independence::IndependenceStrategy;
use super::simplify::{MinType, Simplifier};
use super::{split_on, Slice};

/// What a strategy did with a slice that was not a base case.
pub enum SplitOutcome {
    /// Two freshly owned children; the engine explores `first` before
    /// `second`.
    Children { first: Slice, second: Slice },
    /// The strategy disposed of the whole subtree itself (independence
    /// splitting does), emitting its content to the consumer.
    Consumed,
}

/// The capability set of a split strategy.
pub trait SliceStrategy {
    /// Runs this strategy's simplification policy on `slice`. Returns
    /// whether the slice is fully simplified afterwards (the no-simplify
    /// configuration returns false).
    fn simplify(&mut self, slice: &mut Slice) -> Result<bool, SliceError>;

    /// Chooses a pivot for `slice`. Preconditions: the slice has been given
    /// to [`simplify`](Self::simplify) and is not a base case. The pivot is
    /// never the unit nor a multiple of a generator of the ideal.
    fn get_pivot(&mut self, slice: &Slice) -> Result<Term, SliceError>;

    /// Produces the children of `slice`, in exploration order. The default
    /// asks [`get_pivot`](Self::get_pivot) and splits inner-first; the
    /// shared plumbing validates the pivot.
    fn split(
        &mut self,
        slice: Slice,
        consumer: &mut dyn TermConsumer,
        cancel: Option<&CancelFlag>,
    ) -> Result<SplitOutcome, SliceError> {
        let _ = (consumer, cancel);
        let pivot = self.get_pivot(&slice)?;
        let (inner, outer) = split_on(slice, &pivot)?;
        Ok(SplitOutcome::Children {
            first: inner,
            second: outer,
        })
    }

    /// Hook called after a base case emitted; strategies may keep running
    /// statistics here.
    fn consumed(&mut self, slice: &Slice) {
        let _ = slice;
    }
}

/// Label splitting: the pivot is the first variable, scanned inside the
/// generators in order of ascending support size, on which the lcm exceeds
/// one. Deterministic and cheap.
#[derive(Clone, Debug)]
pub struct LabelStrategy {
    simplifier: Option<Simplifier>,
}

impl LabelStrategy {
    pub fn new(simplifier: Option<Simplifier>) -> Self {
        LabelStrategy { simplifier }
    }
}

impl SliceStrategy for LabelStrategy {
    fn simplify(&mut self, slice: &mut Slice) -> Result<bool, SliceError> {
        run_simplifier(&self.simplifier, slice)
    }

    fn get_pivot(&mut self, slice: &Slice) -> Result<Term, SliceError> {
        let lcm = slice.lcm();
        let mut order: Vec<usize> = (0..slice.ideal().generator_count()).collect();
        order.sort_by_key(|&i| slice.ideal().generators()[i].support_size());
        for i in order {
            let g = &slice.ideal().generators()[i];
            for var in 0..slice.var_count() {
                if g.exponent(var) > 0 && lcm.exponent(var) >= 2 {
                    return Term::pure_power(slice.var_count(), var, 1);
                }
            }
        }
        Err(SliceError::PreconditionViolated(
            "pivot requested on a base case slice",
        ))
    }
}

/// Which pure-power pivot the pivot strategy selects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PivotSelect {
    /// Variable with the largest lcm exponent; the median of the nonzero
    /// exponents on it.
    #[default]
    Median,
    /// Lowest-index eligible variable; the smallest nonzero exponent on it.
    Min,
    /// Variable used by the most generators; half its lcm exponent.
    MaxSupport,
}

/// Pivot splitting on pure powers \(x_v^e\).
#[derive(Clone, Debug)]
pub struct PivotStrategy {
    select: PivotSelect,
    simplifier: Option<Simplifier>,
}

impl PivotStrategy {
    pub fn new(select: PivotSelect, simplifier: Option<Simplifier>) -> Self {
        PivotStrategy { select, simplifier }
    }
}

impl SliceStrategy for PivotStrategy {
    fn simplify(&mut self, slice: &mut Slice) -> Result<bool, SliceError> {
        run_simplifier(&self.simplifier, slice)
    }

    fn get_pivot(&mut self, slice: &Slice) -> Result<Term, SliceError> {
        let lcm = slice.lcm();
        let eligible = |var: &usize| lcm.exponent(*var) >= 2;
        // Ties between variables go to the lowest index.
        let var = match self.select {
            PivotSelect::Min => (0..slice.var_count()).find(eligible),
            PivotSelect::Median => (0..slice.var_count())
                .filter(eligible)
                .max_by_key(|&var| (lcm.exponent(var), std::cmp::Reverse(var))),
            PivotSelect::MaxSupport => {
                let counts = slice.ideal().support_counts();
                (0..slice.var_count())
                    .filter(eligible)
                    .max_by_key(|&var| (counts[var], std::cmp::Reverse(var)))
            }
        };
        let var = var.ok_or(SliceError::PreconditionViolated(
            "pivot requested on a base case slice",
        ))?;
        let top = lcm.exponent(var);
        let exponent = match self.select {
            PivotSelect::Min => nonzero_exponents(slice, var).min().unwrap_or(1),
            PivotSelect::Median => {
                let mut exponents: Vec<Exponent> = nonzero_exponents(slice, var).collect();
                exponents.sort_unstable();
                exponents[exponents.len() / 2]
            }
            PivotSelect::MaxSupport => top / 2,
        };
        // A minimized ideal attains the lcm with any pure power it holds, so
        // exponents strictly below the lcm keep the pivot out of the ideal.
        Term::pure_power(slice.var_count(), var, exponent.clamp(1, top - 1))
    }
}

fn nonzero_exponents<'a>(slice: &'a Slice, var: usize) -> impl Iterator<Item = Exponent> + 'a {
    slice
        .ideal()
        .iter()
        .map(move |g| g.exponent(var))
        .filter(|&e| e > 0)
}

fn run_simplifier(
    simplifier: &Option<Simplifier>,
    slice: &mut Slice,
) -> Result<bool, SliceError> {
    match simplifier {
        Some(simplifier) => {
            slice.normalize();
            simplifier.simplify(slice)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Which algorithm family splits slices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SplitKind {
    Label,
    #[default]
    Pivot,
}

/// Configuration understood by the strategy factory.
///
/// The recognized option names and values are
/// `split = label | pivot`, `pivot-select = median | min | max-support`,
/// `independence-split = on | off`, `simplify = on | off`, and
/// `min-type = tight | loose`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StrategyConfig {
    pub split: SplitKind,
    pub pivot_select: PivotSelect,
    pub independence_split: bool,
    pub simplify: bool,
    pub min_type: MinType,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig {
            split: SplitKind::Pivot,
            pivot_select: PivotSelect::Median,
            independence_split: true,
            simplify: true,
            min_type: MinType::Tight,
        }
    }
}

impl StrategyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one named option.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), SliceError> {
        let invalid = || SliceError::InvalidOptionValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        match name {
            "split" => {
                self.split = match value {
                    "label" => SplitKind::Label,
                    "pivot" => SplitKind::Pivot,
                    _ => return Err(invalid()),
                }
            }
            "pivot-select" => {
                self.pivot_select = match value {
                    "median" => PivotSelect::Median,
                    "min" => PivotSelect::Min,
                    "max-support" => PivotSelect::MaxSupport,
                    _ => return Err(invalid()),
                }
            }
            "independence-split" => self.independence_split = parse_switch(value).ok_or_else(invalid)?,
            "simplify" => self.simplify = parse_switch(value).ok_or_else(invalid)?,
            "min-type" => {
                self.min_type = match value {
                    "tight" => MinType::Tight,
                    "loose" => MinType::Loose,
                    _ => return Err(invalid()),
                }
            }
            _ => return Err(SliceError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Builds the configured strategy.
    pub fn build(&self) -> Box<dyn SliceStrategy> {
        let simplifier = self.simplify.then(|| Simplifier {
            min_type: self.min_type,
            remove_double_lcm: true,
        });
        let base: Box<dyn SliceStrategy> = match self.split {
            SplitKind::Label => Box::new(LabelStrategy::new(simplifier)),
            SplitKind::Pivot => Box::new(PivotStrategy::new(self.pivot_select, simplifier)),
        };
        if self.independence_split {
            Box::new(IndependenceStrategy::new(base))
        } else {
            base
        }
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}
