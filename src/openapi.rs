use axum::Json;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::{
    models::{Credentials, Message, Movie},
    routes,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Reelbox", description = "Movie catalogue with an admin login"),
    paths(
        routes::index,
        routes::login,
        routes::list_movies,
        routes::movies_by_category,
        routes::get_movie,
        routes::create_movie,
        routes::update_movie,
        routes::delete_movie,
    ),
    components(schemas(Movie, Credentials, Message)),
    modifiers(&BearerAuth),
    tags(
        (name = "Home", description = "Landing page"),
        (name = "Auth", description = "Token issuance"),
        (name = "Movies", description = "Movie records"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build(),
            ),
        );
    }
}

pub async fn document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
