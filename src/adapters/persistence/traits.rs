//! Persistence gateway trait
//!
//! The record store never talks to storage directly; callers capture a
//! snapshot and hand it to a `StateStore`. Loading with no prior saved
//! state is a normal outcome (`Ok(None)`) that signals the caller to seed
//! demonstration data.

use crate::adapters::persistence::snapshot::StateSnapshot;
use crate::domain::Result;
use async_trait::async_trait;

/// Whole-state persistence backend
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Persists a snapshot, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    async fn save(&self, snapshot: &StateSnapshot) -> Result<()>;

    /// Loads the last saved snapshot
    ///
    /// # Returns
    ///
    /// `Ok(Some(snapshot))` when saved state exists, `Ok(None)` when no
    /// state was ever saved.
    ///
    /// # Errors
    ///
    /// Returns an error only for unreadable or malformed saved state, not
    /// for absence.
    async fn load(&self) -> Result<Option<StateSnapshot>>;
}
