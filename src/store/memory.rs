use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::MovieStore;
use crate::{
    error::{AppError, AppResult},
    models::Movie,
};

/// Transient store kept in insertion order.
///
/// Caller-supplied ids are kept as-is but must be unique; movies posted
/// without an id get one past the current maximum.
#[derive(Clone, Default)]
pub struct MemoryStore {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieStore for MemoryStore {
    async fn list_all(&self) -> AppResult<Vec<Movie>> {
        Ok(self.movies.read().await.clone())
    }

    async fn list_by_category(&self, category: &str) -> AppResult<Vec<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies.iter().filter(|m| m.category == category).cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|m| m.id == Some(id)).cloned())
    }

    async fn insert(&self, movie: Movie) -> AppResult<Movie> {
        let mut movies = self.movies.write().await;

        let id = match movie.id {
            Some(id) => {
                if movies.iter().any(|m| m.id == Some(id)) {
                    return Err(AppError::Conflict(format!("movie {id} already exists")));
                }
                id
            },
            None => movies
                .iter()
                .filter_map(|m| m.id)
                .max()
                .unwrap_or(0)
                .checked_add(1)
                .ok_or_else(|| AppError::Conflict("no movie ids left to assign".to_string()))?,
        };

        let stored = movie.with_id(id);
        movies.push(stored.clone());
        Ok(stored)
    }

    async fn replace(&self, id: i32, movie: Movie) -> AppResult<Option<Movie>> {
        let mut movies = self.movies.write().await;
        let Some(slot) = movies.iter_mut().find(|m| m.id == Some(id)) else {
            return Ok(None);
        };

        *slot = movie.with_id(id);
        Ok(Some(slot.clone()))
    }

    async fn remove(&self, id: i32) -> AppResult<bool> {
        let mut movies = self.movies.write().await;
        let before = movies.len();
        movies.retain(|m| m.id != Some(id));
        Ok(movies.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, category: &str) -> Movie {
        Movie {
            id: None,
            title: title.into(),
            overview: "An overview long enough".into(),
            year: 2001,
            rating: 7,
            category: category.into(),
        }
    }

    #[tokio::test]
    async fn assigns_ids_past_the_current_maximum() {
        let store = MemoryStore::new();

        let first = store.insert(movie("First movie", "Drama")).await.unwrap();
        let explicit = store.insert(movie("Second movie", "Drama").with_id(40)).await.unwrap();
        let third = store.insert(movie("Third movie", "Drama")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(explicit.id, Some(40));
        assert_eq!(third.id, Some(41));
    }

    #[tokio::test]
    async fn exhausted_id_space_is_a_conflict() {
        let store = MemoryStore::new();
        store.insert(movie("Last movie", "Drama").with_id(i32::MAX)).await.unwrap();

        let err = store.insert(movie("Overflow movie", "Drama")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.list_all().await.unwrap().len(), 1);

        // explicit ids still fit
        let low = store.insert(movie("Low movie", "Drama").with_id(1)).await.unwrap();
        assert_eq!(low.id, Some(1));
    }

    #[tokio::test]
    async fn rejects_duplicate_caller_ids() {
        let store = MemoryStore::new();
        store.insert(movie("First movie", "Drama").with_id(3)).await.unwrap();

        let err = store.insert(movie("Other movie", "Drama").with_id(3)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn lists_in_insertion_order() {
        let store = MemoryStore::new();
        store.insert(movie("Zulu movie", "Drama").with_id(9)).await.unwrap();
        store.insert(movie("Alpha movie", "Drama").with_id(2)).await.unwrap();

        let titles: Vec<_> =
            store.list_all().await.unwrap().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, ["Zulu movie", "Alpha movie"]);
    }

    #[tokio::test]
    async fn filters_by_exact_category() {
        let store = MemoryStore::new();
        store.insert(movie("Space movie", "SciFi")).await.unwrap();
        store.insert(movie("Quiet movie", "Drama")).await.unwrap();
        store.insert(movie("Robot movie", "SciFi")).await.unwrap();

        let scifi = store.list_by_category("SciFi").await.unwrap();
        assert_eq!(scifi.len(), 2);
        assert!(scifi.iter().all(|m| m.category == "SciFi"));

        assert!(store.list_by_category("scifi").await.unwrap().is_empty());
        assert!(store.list_by_category("Comedy").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn replace_overwrites_all_fields_but_keeps_id() {
        let store = MemoryStore::new();
        let stored = store.insert(movie("Old title", "Drama")).await.unwrap();
        let id = stored.id.unwrap();

        let update = Movie {
            id: Some(999),
            title: "New title".into(),
            overview: "A completely different overview".into(),
            year: 1999,
            rating: 2,
            category: "Comedy".into(),
        };
        let replaced = store.replace(id, update.clone()).await.unwrap().unwrap();

        assert_eq!(replaced, update.with_id(id));
        assert_eq!(store.get_by_id(id).await.unwrap(), Some(replaced));
        assert_eq!(store.get_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn replace_and_remove_report_missing_ids() {
        let store = MemoryStore::new();

        assert!(store.replace(5, movie("Ghost movie", "Drama")).await.unwrap().is_none());
        assert!(!store.remove(5).await.unwrap());
    }

    #[tokio::test]
    async fn remove_succeeds_once() {
        let store = MemoryStore::new();
        let id = store.insert(movie("Short lived", "Drama")).await.unwrap().id.unwrap();

        assert!(store.remove(id).await.unwrap());
        assert!(!store.remove(id).await.unwrap());
        assert!(store.get_by_id(id).await.unwrap().is_none());
    }
}
