use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    NotSet, QueryFilter, QueryOrder, Set,
};

use super::MovieStore;
use crate::{entities::movie, error::AppResult, models::Movie};

/// Store backed by the `movies` table. Ids are always generated by the
/// database; ids supplied on insert are ignored.
#[derive(Clone)]
pub struct DatabaseStore {
    db: DatabaseConnection,
}

impl DatabaseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<movie::Model> for Movie {
    fn from(row: movie::Model) -> Self {
        Movie {
            id: Some(row.id),
            title: row.title,
            overview: row.overview,
            year: row.year,
            rating: row.rating,
            category: row.category,
        }
    }
}

fn active_model(id: sea_orm::ActiveValue<i32>, movie: Movie) -> movie::ActiveModel {
    movie::ActiveModel {
        id,
        title: Set(movie.title),
        overview: Set(movie.overview),
        year: Set(movie.year),
        rating: Set(movie.rating),
        category: Set(movie.category),
    }
}

#[async_trait]
impl MovieStore for DatabaseStore {
    async fn list_all(&self) -> AppResult<Vec<Movie>> {
        let rows = movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn list_by_category(&self, category: &str) -> AppResult<Vec<Movie>> {
        let rows = movie::Entity::find()
            .filter(movie::Column::Category.eq(category))
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Movie>> {
        let row = movie::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Movie::from))
    }

    async fn insert(&self, movie: Movie) -> AppResult<Movie> {
        let row = active_model(NotSet, movie).insert(&self.db).await?;
        Ok(row.into())
    }

    async fn replace(&self, id: i32, movie: Movie) -> AppResult<Option<Movie>> {
        match active_model(Unchanged(id), movie).update(&self.db).await {
            Ok(row) => Ok(Some(row.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn remove(&self, id: i32) -> AppResult<bool> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
