use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::{corpus::CorpusStore, translator::Translator};

#[derive(Clone)]
pub struct AppState {
    pub translator: Translator,
    pub requests_processed: Arc<AtomicUsize>,
}

impl AppState {
    pub fn new(corpus: Arc<CorpusStore>) -> Self {
        Self {
            translator: Translator::new(corpus),
            requests_processed: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn record_request(&self) {
        self.requests_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests_processed(&self) -> usize {
        self.requests_processed.load(Ordering::Relaxed)
    }
}
