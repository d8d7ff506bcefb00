//! In-memory settings backend and token source for form tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tokio::sync::Barrier;

use crate::api::SettingsApi;
use crate::auth::TokenSource;
use crate::error::{Error, Result};
use crate::models::SettingRecord;

#[derive(Default)]
pub struct FakeSettingsApi {
    records: Option<Vec<SettingRecord>>,
    rejected_keys: Mutex<HashSet<String>>,
    write_barrier: Option<Barrier>,
    fetches: Mutex<Vec<(String, String)>>,
    writes: Mutex<Vec<(String, SettingRecord)>>,
    applied: Mutex<Vec<SettingRecord>>,
}

impl FakeSettingsApi {
    pub fn with_records(records: Vec<SettingRecord>) -> Self {
        Self {
            records: Some(records),
            ..Self::default()
        }
    }

    /// Every fetch answers with an API error.
    pub fn failing_fetch() -> Self {
        Self::default()
    }

    /// Writes of `key` are rejected.
    pub fn rejecting(self, key: &str) -> Self {
        self.rejected_keys.lock().unwrap().insert(key.to_string());
        self
    }

    /// Stops rejecting writes from now on.
    pub fn accept_all(&self) {
        self.rejected_keys.lock().unwrap().clear();
    }

    /// Writes block until `count` of them are in flight.
    pub fn with_write_barrier(mut self, count: usize) -> Self {
        self.write_barrier = Some(Barrier::new(count));
        self
    }

    pub fn fetches(&self) -> Vec<(String, String)> {
        self.fetches.lock().unwrap().clone()
    }

    /// Every attempted write with the bearer token it carried.
    pub fn writes(&self) -> Vec<(String, SettingRecord)> {
        self.writes.lock().unwrap().clone()
    }

    /// Writes the backend accepted.
    pub fn applied(&self) -> Vec<SettingRecord> {
        self.applied.lock().unwrap().clone()
    }
}

impl SettingsApi for FakeSettingsApi {
    async fn fetch_group(&self, token: &str, group: &str) -> Result<Vec<SettingRecord>> {
        self.fetches
            .lock()
            .unwrap()
            .push((token.to_string(), group.to_string()));
        self.records.clone().ok_or_else(|| Error::Api {
            status: 500,
            body: "boom".to_string(),
        })
    }

    async fn upsert(&self, token: &str, record: &SettingRecord) -> Result<()> {
        self.writes
            .lock()
            .unwrap()
            .push((token.to_string(), record.clone()));
        if let Some(barrier) = &self.write_barrier {
            barrier.wait().await;
        }
        let rejected = self.rejected_keys.lock().unwrap().contains(&record.key);
        if rejected {
            return Err(Error::Api {
                status: 422,
                body: format!("invalid {}", record.key),
            });
        }
        self.applied.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Token source that counts how often it is read.
pub struct CountingToken {
    token: Option<String>,
    broken: bool,
    reads: AtomicUsize,
}

impl CountingToken {
    pub fn new(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            broken: false,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn missing() -> Self {
        Self {
            token: None,
            broken: false,
            reads: AtomicUsize::new(0),
        }
    }

    /// Every read fails like an unavailable keyring.
    pub fn broken() -> Self {
        Self {
            token: None,
            broken: true,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl TokenSource for CountingToken {
    fn token(&self) -> Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(Error::SecureStorage("keyring locked".to_string()));
        }
        Ok(self.token.clone())
    }
}
