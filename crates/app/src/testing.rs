//! Test double for the progress API.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use gymhealth_api::{ApiError, ProgressApi, Result};
use gymhealth_core::{RawProgressRecord, RecordId};

/// Canned API. `records == None` makes every fetch fail with a 500.
pub(crate) struct MockApi {
    records: Mutex<Option<Vec<RawProgressRecord>>>,
    list_calls: AtomicUsize,
    fail_list: AtomicBool,
    fail_delete: AtomicBool,
    deleted: Mutex<Vec<RecordId>>,
}

impl MockApi {
    pub(crate) fn raw(json: &[&str]) -> Vec<RawProgressRecord> {
        json.iter().map(|j| serde_json::from_str(j).unwrap()).collect()
    }

    pub(crate) fn with_records(records: Vec<RawProgressRecord>) -> Self {
        Self {
            records: Mutex::new(Some(records)),
            list_calls: AtomicUsize::new(0),
            fail_list: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing() -> Self {
        let api = Self::with_records(Vec::new());
        *api.records.lock().unwrap() = None;
        api
    }

    pub(crate) fn set_records(&self, records: Vec<RawProgressRecord>) {
        *self.records.lock().unwrap() = Some(records);
    }

    /// Only the list endpoint fails; single-record fetches still work.
    pub(crate) fn fail_lists(&self) {
        self.fail_list.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_deletes(&self) {
        self.fail_delete.store(true, Ordering::SeqCst);
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn deleted(&self) -> Vec<RecordId> {
        self.deleted.lock().unwrap().clone()
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        }
    }
}

#[async_trait]
impl ProgressApi for MockApi {
    async fn my_progress(&self) -> Result<Vec<RawProgressRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        self.records.lock().unwrap().clone().ok_or_else(Self::server_error)
    }

    async fn progress(&self, id: RecordId) -> Result<RawProgressRecord> {
        let records = self.records.lock().unwrap().clone().ok_or_else(Self::server_error)?;
        records
            .into_iter()
            .find(|r| r.id == Some(id.get()))
            .ok_or(ApiError::NotFound(id))
    }

    async fn delete_progress(&self, id: RecordId) -> Result<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        self.deleted.lock().unwrap().push(id);
        if let Some(records) = self.records.lock().unwrap().as_mut() {
            records.retain(|r| r.id != Some(id.get()));
        }
        Ok(())
    }
}
