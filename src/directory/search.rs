//! Debounced search box state.
//!
//! Keystrokes go in through [`SearchBox::input`]; suggestions come out on a
//! [`tokio::sync::watch`] channel once typing pauses.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::constants::search_debounce_delay;
use crate::models::BusinessRecord;

use super::debounce::Debouncer;
use super::suggestions::{Suggestion, suggestions};

/// The term a set of suggestions was computed for.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchUpdate {
    pub term: String,
    pub suggestions: Vec<Suggestion>,
}

/// Search input that recomputes suggestions after a quiet period.
pub struct SearchBox {
    businesses: Arc<Vec<BusinessRecord>>,
    debouncer: Debouncer,
    tx: Arc<watch::Sender<SearchUpdate>>,
}

impl SearchBox {
    /// Search box with the standard 300 ms delay.
    pub fn new(businesses: Arc<Vec<BusinessRecord>>) -> Self {
        Self::with_delay(businesses, search_debounce_delay())
    }

    pub fn with_delay(businesses: Arc<Vec<BusinessRecord>>, delay: Duration) -> Self {
        let (tx, _) = watch::channel(SearchUpdate::default());
        Self {
            businesses,
            debouncer: Debouncer::new(delay),
            tx: Arc::new(tx),
        }
    }

    /// Receiver that sees every published update.
    pub fn subscribe(&self) -> watch::Receiver<SearchUpdate> {
        self.tx.subscribe()
    }

    /// Record a keystroke. Suggestions for `term` are published after the
    /// delay unless another keystroke arrives first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn input(&mut self, term: impl Into<String>) {
        let term = term.into();
        let businesses = Arc::clone(&self.businesses);
        let tx = Arc::clone(&self.tx);
        self.debouncer.schedule(move || {
            let found = suggestions(&businesses, &term);
            tracing::debug!("{} suggestions for {:?}", found.len(), term);
            tx.send_replace(SearchUpdate {
                term,
                suggestions: found,
            });
        });
    }

    /// Drop any pending recompute and publish an empty update.
    pub fn clear(&mut self) {
        self.debouncer.cancel();
        self.tx.send_replace(SearchUpdate::default());
    }

    /// Latest published update.
    pub fn current(&self) -> SearchUpdate {
        self.tx.borrow().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Wait for a pending recompute to publish.
    pub async fn settle(&mut self) {
        self.debouncer.wait().await;
    }
}
