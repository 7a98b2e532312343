use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Html,
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{
    AppState, auth,
    error::{AppError, AppResult, panic_response},
    extract::{MovieId, ValidJson, ValidQuery},
    models::{
        CategoryQuery, Credentials, MAX_LOOKUP_ID, MIN_LOOKUP_ID, Message, Movie, MovieListQuery,
    },
    openapi, templates,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/openapi.json", get(openapi::document))
        .route("/login", post(login))
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/", get(movies_by_category))
        .route("/movies/{id}", get(get_movie).put(update_movie).delete(delete_movie))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
}

/// Landing page
#[utoipa::path(
    get,
    path = "/",
    tag = "Home",
    responses((status = 200, description = "HTML banner", content_type = "text/html", body = String))
)]
pub async fn index() -> Html<String> {
    Html(templates::index_page())
}

/// Exchange the admin credentials for a bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = Credentials,
    responses(
        (status = 200, description = "Signed token", body = String),
        (status = 401, description = "Credentials do not match", body = Message),
        (status = 422, description = "Empty email or password", body = Message),
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidJson(creds): ValidJson<Credentials>,
) -> AppResult<Json<String>> {
    if let Err(err) = auth::check_login(&state.config.admin, &creds) {
        tracing::warn!(email = %creds.email, "rejected login");
        return Err(err);
    }

    let token = state.tokens.issue(&creds).map_err(anyhow::Error::from)?;
    tracing::info!(email = %creds.email, "issued token");
    Ok(Json(token))
}

/// List movies
///
/// Without `category` this lists every movie and needs an admin token; with
/// `category` it is a public search on exact category.
#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    params(("category" = Option<String>, Query, description = "Exact category, 5 to 20 characters")),
    security((), ("bearer" = [])),
    responses(
        (status = 200, description = "Matching movies", body = [Movie]),
        (status = 401, description = "Missing or invalid token", body = Message),
        (status = 403, description = "Token not issued to the admin", body = Message),
        (status = 404, description = "No movie in the category", body = Message),
    )
)]
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ValidQuery(query): ValidQuery<MovieListQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    if let Some(category) = query.category {
        return search_category(&state, &category).await;
    }

    auth::authorize(&state.tokens, &state.config.admin, &headers)?;
    Ok(Json(state.movies.list().await?))
}

/// Search movies by category
#[utoipa::path(
    get,
    path = "/movies/",
    tag = "Movies",
    params(("category" = String, Query, description = "Exact category, 5 to 20 characters")),
    responses(
        (status = 200, description = "Matching movies", body = [Movie]),
        (status = 404, description = "No movie in the category", body = Message),
        (status = 422, description = "Category length out of bounds", body = Message),
    )
)]
pub async fn movies_by_category(
    State(state): State<Arc<AppState>>,
    ValidQuery(query): ValidQuery<CategoryQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    search_category(&state, &query.category).await
}

async fn search_category(state: &AppState, category: &str) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.movies.list_by_category(category).await?;
    if movies.is_empty() {
        return Err(AppError::NotFound(format!("No movies in category {category}")));
    }
    Ok(Json(movies))
}

/// Fetch one movie
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "Movies",
    params(("id" = i32, Path, description = "Movie id, 1 to 10000")),
    responses(
        (status = 200, description = "The movie", body = Movie),
        (status = 404, description = "No such movie", body = Message),
        (status = 422, description = "Id out of range", body = Message),
    )
)]
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    MovieId(id): MovieId,
) -> AppResult<Json<Movie>> {
    if !(MIN_LOOKUP_ID..=MAX_LOOKUP_ID).contains(&id) {
        return Err(AppError::Validation(format!(
            "id: must be between {MIN_LOOKUP_ID} and {MAX_LOOKUP_ID}"
        )));
    }
    Ok(Json(state.movies.get(id).await?))
}

/// Register a movie
#[utoipa::path(
    post,
    path = "/movies",
    tag = "Movies",
    request_body = Movie,
    responses(
        (status = 201, description = "Stored, with its id", body = Message),
        (status = 409, description = "Id already taken", body = Message),
        (status = 422, description = "Field out of bounds", body = Message),
    )
)]
pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    ValidJson(movie): ValidJson<Movie>,
) -> AppResult<(StatusCode, Json<Message>)> {
    let stored = state.movies.create(movie).await?;
    let id = stored.id.ok_or_else(|| anyhow::anyhow!("store returned a movie without an id"))?;
    Ok((StatusCode::CREATED, Json(Message::with_id("Movie registered", id))))
}

/// Replace every field of a movie
#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "Movies",
    params(("id" = i32, Path, description = "Movie id")),
    request_body = Movie,
    responses(
        (status = 200, description = "Replaced", body = Message),
        (status = 404, description = "No such movie", body = Message),
        (status = 422, description = "Field out of bounds", body = Message),
    )
)]
pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    MovieId(id): MovieId,
    ValidJson(movie): ValidJson<Movie>,
) -> AppResult<Json<Message>> {
    state.movies.update(id, movie).await?;
    Ok(Json(Message::new("Movie updated")))
}

/// Delete a movie
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "Movies",
    params(("id" = i32, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Deleted", body = Message),
        (status = 404, description = "No such movie", body = Message),
    )
)]
pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    MovieId(id): MovieId,
) -> AppResult<Json<Message>> {
    state.movies.delete(id).await?;
    Ok(Json(Message::new("Movie deleted")))
}
