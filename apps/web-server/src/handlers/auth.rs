//! Account handlers: register, login, logout.

use actix_session::Session;
use actix_web::{HttpResponse, http::header::ContentType, web};

use quill_core::domain::User;
use quill_shared::dto::{LoginForm, RegisterForm};

use crate::middleware::auth::{sign_in, sign_out};
use crate::middleware::error::{AppError, AppResult};
use crate::render;
use crate::state::AppState;

use super::redirect_to;

/// Both bad-credential cases answer with this exact page so an attacker
/// cannot probe which emails exist.
const BAD_CREDENTIALS: &str = "Email or password was not recognized.";

const BAD_REGISTRATION: &str = "That registration could not be completed.";

fn html_page(status: actix_web::http::StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

fn validate_registration(form: &RegisterForm) -> Result<(), String> {
    if form.name.trim().is_empty() || form.name.chars().count() > 100 {
        return Err("Name must be between 1 and 100 characters.".to_string());
    }
    if !form.email.contains('@') || form.email.len() > 254 {
        return Err("Email address looks invalid.".to_string());
    }
    if form.password.len() < 8 {
        return Err("Password must be at least 8 characters.".to_string());
    }
    Ok(())
}

/// GET /register
pub async fn register_form() -> HttpResponse {
    html_page(
        actix_web::http::StatusCode::OK,
        render::register_page(None),
    )
}

/// POST /register - create an account and sign it in.
pub async fn register(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<RegisterForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    if let Err(notice) = validate_registration(&form) {
        return Ok(html_page(
            actix_web::http::StatusCode::BAD_REQUEST,
            render::register_page(Some(&notice)),
        ));
    }

    // The page copy stays generic either way; no email enumeration.
    if state.users.find_by_email(&form.email).await?.is_some() {
        return Ok(html_page(
            actix_web::http::StatusCode::BAD_REQUEST,
            render::register_page(Some(BAD_REGISTRATION)),
        ));
    }

    let password_hash = state
        .passwords
        .hash(&form.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = User::new(form.name.trim().to_string(), form.email, password_hash);
    let user = state.users.insert(user).await?;

    sign_in(&session, user.id).map_err(|e| AppError::Internal(e.to_string()))?;
    tracing::info!(user_id = %user.id, "New user registered");

    Ok(redirect_to("/"))
}

/// GET /login
pub async fn login_form() -> HttpResponse {
    html_page(actix_web::http::StatusCode::OK, render::login_page(None))
}

/// POST /login - start an authenticated session.
pub async fn login(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<LoginForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let user = state.users.find_by_email(&form.email).await?;

    let verified = match &user {
        Some(user) => state
            .passwords
            .verify(&form.password, &user.password_hash)
            .map_err(|e| AppError::Internal(e.to_string()))?,
        None => false,
    };

    match (user, verified) {
        (Some(user), true) => {
            sign_in(&session, user.id).map_err(|e| AppError::Internal(e.to_string()))?;
            Ok(redirect_to("/"))
        }
        _ => Ok(html_page(
            actix_web::http::StatusCode::BAD_REQUEST,
            render::login_page(Some(BAD_CREDENTIALS)),
        )),
    }
}

/// GET /logout - drop the session.
pub async fn logout(session: Session) -> HttpResponse {
    sign_out(&session);
    redirect_to("/")
}
