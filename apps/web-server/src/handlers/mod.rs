//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;

use actix_web::{HttpResponse, http::header, web};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::list))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/post")
                .route("/add", web::get().to(posts::add_form))
                .route("/add", web::post().to(posts::add))
                .route("/{id}/edit", web::get().to(posts::edit_form))
                .route("/{id}/edit", web::post().to(posts::edit))
                .route("/{id}/delete", web::post().to(posts::delete)),
        )
        .route("/register", web::get().to(auth::register_form))
        .route("/register", web::post().to(auth::register))
        .route("/login", web::get().to(auth::login_form))
        .route("/login", web::post().to(auth::login))
        .route("/logout", web::get().to(auth::logout));
}

/// 302 redirect to `path`.
pub(crate) fn redirect_to(path: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, path.to_string()))
        .finish()
}

#[cfg(test)]
pub(crate) mod test_support {
    use actix_session::SessionMiddleware;
    use actix_session::storage::CookieSessionStore;
    use actix_web::cookie::{Cookie, Key};
    use actix_web::dev::ServiceResponse;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};

    use quill_core::domain::User;
    use quill_shared::dto::LoginForm;

    use crate::state::AppState;

    pub const TEST_PASSWORD: &str = "test-password";

    /// Session middleware wired the way the tests need it: plain-HTTP
    /// cookies so the test client can send them back.
    pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
        SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
            .cookie_secure(false)
            .build()
    }

    /// Seed a user with [`TEST_PASSWORD`] as their password.
    pub async fn seed_user(state: &AppState, name: &str, email: &str) -> User {
        let hash = state.passwords.hash(TEST_PASSWORD).unwrap();
        state
            .users
            .insert(User::new(name.into(), email.into(), hash))
            .await
            .unwrap()
    }

    /// Log in through the real endpoint and hand back the session cookie.
    pub async fn sign_in_as<S>(app: &S, email: &str) -> Cookie<'static>
    where
        S: actix_web::dev::Service<
                actix_http::Request,
                Response = ServiceResponse,
                Error = actix_web::Error,
            >,
    {
        let req = test::TestRequest::post()
            .uri("/login")
            .set_form(LoginForm {
                email: email.into(),
                password: TEST_PASSWORD.into(),
            })
            .to_request();
        let resp = test::call_service(app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);

        resp.response()
            .cookies()
            .next()
            .expect("login should set a session cookie")
            .into_owned()
    }

    /// An app over fresh in-memory state, plus the state for inspection.
    pub async fn test_app() -> (
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
        AppState,
    ) {
        let state = AppState::in_memory();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .wrap(session_middleware())
                .configure(super::configure_routes),
        )
        .await;

        (app, state)
    }
}
