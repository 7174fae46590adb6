//! In-memory lookup implementations for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Result};

use crate::dns::{DnssecAnswer, DnssecLookup, TxtLookup};

/// Tracks how many lookups are running at once.
#[derive(Default)]
pub(crate) struct InFlight {
    current: AtomicUsize,
    max: AtomicUsize,
}

impl InFlight {
    async fn enter_and_yield(&self) {
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.max.fetch_max(now, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.current.fetch_sub(1, Ordering::SeqCst);
    }

    pub(crate) fn max(&self) -> usize {
        self.max.load(Ordering::SeqCst)
    }
}

/// DNSSEC lookup answering from a table; unknown domains fail.
#[derive(Default)]
pub(crate) struct FakeDnssec {
    replies: HashMap<String, Result<DnssecAnswer, String>>,
    pub(crate) in_flight: InFlight,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl FakeDnssec {
    pub(crate) fn answer(mut self, domain: &str, answer: DnssecAnswer) -> Self {
        self.replies.insert(domain.to_string(), Ok(answer));
        self
    }

    pub(crate) fn fail(mut self, domain: &str, error: &str) -> Self {
        self.replies.insert(domain.to_string(), Err(error.to_string()));
        self
    }
}

impl DnssecLookup for FakeDnssec {
    async fn lookup_a(&self, domain: &str) -> Result<DnssecAnswer> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(domain.to_string());
        self.in_flight.enter_and_yield().await;
        match self.replies.get(domain) {
            Some(Ok(answer)) => Ok(answer.clone()),
            Some(Err(message)) => Err(anyhow!(message.clone())),
            None => Err(anyhow!("request timed out")),
        }
    }
}

/// TXT lookup answering from a table; unknown domains have no entries.
#[derive(Default)]
pub(crate) struct FakeTxt {
    replies: HashMap<String, Result<Vec<String>, String>>,
}

impl FakeTxt {
    pub(crate) fn entries(mut self, domain: &str, entries: &[&str]) -> Self {
        self.replies.insert(
            domain.to_string(),
            Ok(entries.iter().map(|e| e.to_string()).collect()),
        );
        self
    }

    pub(crate) fn fail(mut self, domain: &str, error: &str) -> Self {
        self.replies.insert(domain.to_string(), Err(error.to_string()));
        self
    }
}

impl TxtLookup for FakeTxt {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>> {
        tokio::task::yield_now().await;
        match self.replies.get(domain) {
            Some(Ok(entries)) => Ok(entries.clone()),
            Some(Err(message)) => Err(anyhow!(message.clone())),
            None => Ok(Vec::new()),
        }
    }
}
