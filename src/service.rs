use std::sync::Arc;

use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::Movie,
    store::MovieStore,
};

/// Sits between the handlers and whichever store is configured, turning
/// missing records into [`AppError::NotFound`].
#[derive(Clone)]
pub struct MovieService {
    store: Arc<dyn MovieStore>,
}

impl MovieService {
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Movie>> {
        self.store.list_all().await
    }

    pub async fn list_by_category(&self, category: &str) -> AppResult<Vec<Movie>> {
        self.store.list_by_category(category).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Movie> {
        self.store.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, movie: Movie) -> AppResult<Movie> {
        let stored = self.store.insert(movie).await?;
        debug!(id = ?stored.id, title = %stored.title, "movie created");
        Ok(stored)
    }

    pub async fn update(&self, id: i32, movie: Movie) -> AppResult<Movie> {
        let updated = self.store.replace(id, movie).await?.ok_or_else(|| not_found(id))?;
        debug!(id = id, "movie replaced");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.store.remove(id).await? {
            return Err(not_found(id));
        }
        debug!(id = id, "movie deleted");
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Movie {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service() -> MovieService {
        MovieService::new(Arc::new(MemoryStore::new()))
    }

    fn movie() -> Movie {
        Movie {
            id: None,
            title: "Inception movie".into(),
            overview: "A thief who steals secrets".into(),
            year: 2010,
            rating: 9,
            category: "SciFi".into(),
        }
    }

    #[tokio::test]
    async fn missing_ids_become_not_found() {
        let movies = service();

        assert!(matches!(movies.get(1).await, Err(AppError::NotFound(_))));
        assert!(matches!(movies.update(1, movie()).await, Err(AppError::NotFound(_))));
        assert!(matches!(movies.delete(1).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_is_observable_once() {
        let movies = service();
        let id = movies.create(movie()).await.unwrap().id.unwrap();

        movies.delete(id).await.unwrap();
        assert!(matches!(movies.delete(id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn unmatched_category_is_empty_not_an_error() {
        let movies = service();
        movies.create(movie()).await.unwrap();

        assert!(movies.list_by_category("Horror").await.unwrap().is_empty());
    }
}
