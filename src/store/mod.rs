//! Persistence for movie records.
//!
//! Two backings implement [`MovieStore`]: [`MemoryStore`] keeps everything in
//! a process-local vector, [`DatabaseStore`] maps records onto the `movies`
//! table through sea-orm.

mod database;
mod memory;

use async_trait::async_trait;

pub use self::{database::DatabaseStore, memory::MemoryStore};
use crate::{error::AppResult, models::Movie};

#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn list_all(&self) -> AppResult<Vec<Movie>>;

    /// Exact, case-sensitive match on `category`.
    async fn list_by_category(&self, category: &str) -> AppResult<Vec<Movie>>;

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Movie>>;

    /// Stores `movie` and returns it with the id it was stored under.
    async fn insert(&self, movie: Movie) -> AppResult<Movie>;

    /// Overwrites every field of the record at `id`. The id in `movie` is
    /// ignored. Returns `None` when there is no such record.
    async fn replace(&self, id: i32, movie: Movie) -> AppResult<Option<Movie>>;

    /// Returns `false` when there is no such record.
    async fn remove(&self, id: i32) -> AppResult<bool>;
}
