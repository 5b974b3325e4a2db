//! Data model: exponent vectors, monomial ideals, and the id translator.

pub mod ideal;
pub mod term;
pub mod translator;

pub use ideal::Ideal;
pub use term::{Exponent, Term};
pub use translator::TermTranslator;
