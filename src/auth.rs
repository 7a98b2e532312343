use axum::http::HeaderMap;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};

use crate::{
    config::AdminAccount,
    error::{AppError, AppResult},
    models::Credentials,
    token::TokenService,
};

/// Checks a login payload against the configured admin account.
pub fn check_login(admin: &AdminAccount, creds: &Credentials) -> AppResult<()> {
    if creds.email == admin.email && creds.password == admin.password {
        Ok(())
    } else {
        Err(AppError::Unauthorized("Invalid credentials".to_string()))
    }
}

/// Admits requests carrying a bearer token issued for the admin email.
///
/// A missing or undecodable token is `Unauthorized`; a valid token for any
/// other email is `Forbidden`. The password claim is not checked again.
pub fn authorize(
    tokens: &TokenService,
    admin: &AdminAccount,
    headers: &HeaderMap,
) -> AppResult<Credentials> {
    let Authorization(bearer) = headers
        .typed_get::<Authorization<Bearer>>()
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))?;

    let claims: Credentials = tokens.verify(bearer.token())?;
    if claims.email != admin.email {
        return Err(AppError::Forbidden("Credentials invalid".to_string()));
    }

    Ok(claims)
}
