use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Bounds for the `{id}` path segment on `GET /movies/{id}`.
pub const MIN_LOOKUP_ID: i32 = 1;
pub const MAX_LOOKUP_ID: i32 = 10_000;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "title": "Inception movie",
    "overview": "A thief who steals secrets",
    "year": 2010,
    "rating": 9,
    "category": "SciFi"
}))]
pub struct Movie {
    /// Assigned by the store when omitted.
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 5, max = 30, message = "must be 5 to 30 characters"))]
    #[schema(min_length = 5, max_length = 30)]
    pub title: String,
    #[validate(length(min = 15, max = 50, message = "must be 15 to 50 characters"))]
    #[schema(min_length = 15, max_length = 50)]
    pub overview: String,
    #[validate(range(max = 2023, message = "must not be later than 2023"))]
    #[schema(maximum = 2023)]
    pub year: i32,
    #[validate(range(min = 1, max = 10, message = "must be between 1 and 10"))]
    #[schema(minimum = 1, maximum = 10)]
    pub rating: i32,
    #[validate(length(min = 5, max = 15, message = "must be 5 to 15 characters"))]
    #[schema(min_length = 5, max_length = 15)]
    pub category: String,
}

impl Movie {
    pub fn with_id(self, id: i32) -> Self {
        Self { id: Some(id), ..self }
    }
}

/// Login payload, and the claims embedded in issued tokens.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "email": "admin@example.com",
    "password": "change-me"
}))]
pub struct Credentials {
    #[validate(length(min = 1, message = "is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct MovieListQuery {
    #[validate(length(min = 5, max = 20, message = "must be 5 to 20 characters"))]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CategoryQuery {
    #[validate(length(min = 5, max = 20, message = "must be 5 to 20 characters"))]
    pub category: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), id: None }
    }

    pub fn with_id(message: impl Into<String>, id: i32) -> Self {
        Self { message: message.into(), id: Some(id) }
    }
}
