//! Persistence layer: the `Store` trait is the only surface the core
//! components see; `DbPool` is its SQLite implementation.

pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;

use chrono::NaiveDate;

use crate::errors::AppResult;
use crate::models::{AuthorizationLink, TrackingEntry, UserProfile};

/// Read/write capabilities the computation core needs. All calls are
/// single-attempt and synchronous; failures surface as `AppError::Db` and
/// retries, if any, belong to the caller.
pub trait Store {
    fn entry(&self, user_id: i64, date: NaiveDate) -> AppResult<Option<TrackingEntry>>;
    fn entries_between(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TrackingEntry>>;
    fn entries_for_user(&self, user_id: i64) -> AppResult<Vec<TrackingEntry>>;
    fn upsert_entry(&self, entry: &TrackingEntry) -> AppResult<()>;
    /// Returns true when an entry existed and was removed.
    fn delete_entry(&self, user_id: i64, date: NaiveDate) -> AppResult<bool>;
    fn profile(&self, user_id: i64) -> AppResult<Option<UserProfile>>;
    fn auth_link(&self, admin_id: i64) -> AppResult<Option<AuthorizationLink>>;
}

impl Store for pool::DbPool {
    fn entry(&self, user_id: i64, date: NaiveDate) -> AppResult<Option<TrackingEntry>> {
        queries::load_entry(self, user_id, date)
    }

    fn entries_between(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TrackingEntry>> {
        queries::load_entries_between(self, user_id, start, end)
    }

    fn entries_for_user(&self, user_id: i64) -> AppResult<Vec<TrackingEntry>> {
        queries::load_entries_for_user(self, user_id)
    }

    fn upsert_entry(&self, entry: &TrackingEntry) -> AppResult<()> {
        queries::upsert_entry(self, entry)
    }

    fn delete_entry(&self, user_id: i64, date: NaiveDate) -> AppResult<bool> {
        queries::delete_entry(self, user_id, date)
    }

    fn profile(&self, user_id: i64) -> AppResult<Option<UserProfile>> {
        queries::load_profile(self, user_id)
    }

    fn auth_link(&self, admin_id: i64) -> AppResult<Option<AuthorizationLink>> {
        queries::load_auth_link(self, admin_id)
    }
}
