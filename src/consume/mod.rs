//! Consumers: sinks for the terms the engine emits
//!
//! The engine delivers base-case output through a [`TermConsumer`] in a
//! strictly bracketed `begin / consume* / done` pattern. Consumers may
//! transform on the fly; the adapters in this module translate exponents
//! back to arbitrary precision, split a term stream into single-generator
//! ideals, or simply record into memory.
//!
//! The engine promises nothing about emission order beyond what the chosen
//! strategy induces, performs no de-duplication, and may legally emit zero
//! terms. `done_consuming` must be safe after partial output: the engine
//! calls it when a run is cancelled midway.

pub mod recorder;
pub mod splitter;
pub mod translating;

pub use recorder::{BigTermRecorder, TermRecorder};
pub use splitter::IrreducibleIdealSplitter;
pub use translating::TranslatingTermConsumer;

use crate::algebra::ideal::Ideal;
use crate::algebra::term::Term;
use num_bigint::BigUint;

/// A sink for monomials in the ambient ring.
pub trait TermConsumer {
    /// Announces the ambient ring. Called at most once, before
    /// [`begin_consuming`](Self::begin_consuming).
    fn consume_ring(&mut self, _var_names: &[String]) {}

    /// Starts one bracketed output stream.
    fn begin_consuming(&mut self) {}

    /// Receives one term. Ownership stays with the caller.
    fn consume(&mut self, term: &Term);

    /// Ends the stream. Must tolerate having seen no terms at all, and must
    /// be safe after a cancelled, partial stream.
    fn done_consuming(&mut self) {}
}

/// A sink for monomials with arbitrary-precision exponents.
pub trait BigTermConsumer {
    fn consume_ring(&mut self, _var_names: &[String]) {}
    fn begin_consuming(&mut self) {}
    fn consume(&mut self, term: &[BigUint]);
    fn done_consuming(&mut self) {}
}

/// A sink for whole ideals, used when every output term is to be packaged
/// as its own single-generator ideal.
pub trait IdealConsumer {
    fn consume_ideal(&mut self, ideal: Ideal);
}

impl<F: FnMut(Ideal)> IdealConsumer for F {
    fn consume_ideal(&mut self, ideal: Ideal) {
        self(ideal)
    }
}
