//! Translation from id space to big exponents on the fly.

use super::{BigTermConsumer, TermConsumer};
use crate::algebra::term::Term;
use crate::algebra::translator::TermTranslator;

/// Forwards each consumed term to a big-term consumer after mapping its
/// exponent ids back to values through a [`TermTranslator`].
///
/// Terms the engine emits always carry ids the translator assigned (the
/// decomposition driver extends the tables before running), so translation
/// failures indicate a mismatched translator; they panic rather than being
/// silently dropped.
pub struct TranslatingTermConsumer<'a, C: BigTermConsumer> {
    translator: &'a TermTranslator,
    inner: &'a mut C,
}

impl<'a, C: BigTermConsumer> TranslatingTermConsumer<'a, C> {
    pub fn new(translator: &'a TermTranslator, inner: &'a mut C) -> Self {
        TranslatingTermConsumer { translator, inner }
    }
}

impl<C: BigTermConsumer> TermConsumer for TranslatingTermConsumer<'_, C> {
    fn consume_ring(&mut self, var_names: &[String]) {
        self.inner.consume_ring(var_names);
    }

    fn begin_consuming(&mut self) {
        self.inner.begin_consuming();
    }

    fn consume(&mut self, term: &Term) {
        let translated = self
            .translator
            .translate(term)
            .expect("emitted term carries ids the translator assigned");
        self.inner.consume(&translated);
    }

    fn done_consuming(&mut self) {
        self.inner.done_consuming();
    }
}
