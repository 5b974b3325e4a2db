//! # monomial-slice
//!
//! monomial-slice computes structural invariants of monomial ideals with
//! the Slice Algorithm: irreducible decomposition, Alexander duals, maximal
//! standard monomials, and Krull dimension. The engine is a recursive
//! divide-and-conquer solver over slices, the triples \((I, S, q)\) of two
//! monomial ideals and a monomial, with aggressive simplification,
//! pluggable pivot-selection strategies, and consumer-driven output
//! streaming.
//!
//! ## Usage
//!
//! ```rust
//! use monomial_slice::prelude::*;
//!
//! # fn main() -> Result<(), monomial_slice::slice_error::SliceError> {
//! // I = <x^2, xy, y^2>
//! let ideal = Ideal::from_terms(2, vec![
//!     Term::from_exponents(vec![2, 0]),
//!     Term::from_exponents(vec![1, 1]),
//!     Term::from_exponents(vec![0, 2]),
//! ])?;
//!
//! let mut components = TermRecorder::new(2);
//! irreducible_decomposition(ideal, &StrategyConfig::new(), &mut components, None)?;
//!
//! // I = <x^2, y> ∩ <x, y^2>, labeled (2,1) and (1,2).
//! assert_eq!(components.sorted_terms(), vec![
//!     Term::from_exponents(vec![1, 2]),
//!     Term::from_exponents(vec![2, 1]),
//! ]);
//! # Ok(())
//! # }
//! ```
//!
//! The strategy configuration recognizes the options `split`
//! (`label`/`pivot`), `pivot-select` (`median`/`min`/`max-support`),
//! `independence-split` (`on`/`off`), `simplify` (`on`/`off`), and
//! `min-type` (`tight`/`loose`); the emitted *set* of terms is the same
//! under every configuration, only the order changes.
//!
//! ## Exponents
//!
//! The engine computes on machine-word exponents. Arbitrary-precision input
//! goes through [`algebra::translator::TermTranslator`], which compresses
//! exponents to dense ids and maps the output back.

pub mod algebra;
pub mod algs;
pub mod consume;
pub mod projection;
pub mod slice;
pub mod slice_error;

/// A convenient prelude importing the most-used types.
pub mod prelude {
    pub use crate::algebra::ideal::Ideal;
    pub use crate::algebra::term::{Exponent, Term};
    pub use crate::algebra::translator::TermTranslator;
    pub use crate::algs::{
        alexander_dual, codimension, irreducible_decomposition, krull_dimension,
        maximal_standard_monomials,
    };
    pub use crate::consume::{
        BigTermConsumer, BigTermRecorder, IrreducibleIdealSplitter, TermConsumer, TermRecorder,
        TranslatingTermConsumer,
    };
    pub use crate::projection::Projection;
    pub use crate::slice::engine::{run, CancelFlag};
    pub use crate::slice::msm;
    pub use crate::slice::simplify::{MinType, Simplifier};
    pub use crate::slice::strategy::{
        PivotSelect, SliceStrategy, SplitKind, SplitOutcome, StrategyConfig,
    };
    pub use crate::slice::Slice;
    pub use crate::slice_error::SliceError;
}
