use crate::{abstract_trait::DynJwtService, errors::ErrorResponse};
use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;

fn unauthorized(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            status: "fail".to_string(),
            message: message.to_string(),
        }),
    )
}

fn extract_token(cookie_jar: &CookieJar, req: &Request<Body>) -> Option<String> {
    if let Some(cookie) = cookie_jar.get("token") {
        return Some(cookie.value().to_string());
    }

    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_owned)
}

/// Resolves the authenticated user from a cookie or bearer token and makes
/// the user id available to handlers as an `Extension<i32>`. Handlers never
/// trust a client-supplied user id.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = extract_token(&cookie_jar, &req)
        .ok_or_else(|| unauthorized("You are not logged in, please provide token"))?;

    let user_id = jwt
        .verify_token(&token)
        .map_err(|_| unauthorized("Invalid token"))? as i32;

    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}
