//! Session-backed identity extraction.

use std::future::{Ready, ready};

use actix_session::{Session, SessionExt};
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, http::header};
use uuid::Uuid;

/// Session key holding the signed-in user's id.
pub const USER_ID_KEY: &str = "user_id";
/// Session key holding the freshness flag.
pub const FRESH_KEY: &str = "_fresh";

/// Authenticated user identity extractor.
///
/// A session counts as authenticated only when it carries a user id AND the
/// freshness flag. Anything else redirects to the login page:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, user {}!", identity.user_id)
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: Uuid,
}

fn identity_from_session(session: &Session) -> Option<Identity> {
    let user_id = session.get::<Uuid>(USER_ID_KEY).ok().flatten()?;
    let fresh = session.get::<bool>(FRESH_KEY).ok().flatten().unwrap_or(false);

    fresh.then_some(Identity { user_id })
}

/// Start an authenticated session for `user_id`.
///
/// The session is renewed first so a login never reuses a pre-login cookie.
pub fn sign_in(session: &Session, user_id: Uuid) -> Result<(), actix_session::SessionInsertError> {
    session.renew();
    session.insert(USER_ID_KEY, user_id)?;
    session.insert(FRESH_KEY, true)?;
    Ok(())
}

/// Destroy the session entirely.
pub fn sign_out(session: &Session) {
    session.purge();
}

/// Error type for requests that need a signed-in user and have none.
///
/// Responds with a redirect to the login page, never an error page.
#[derive(Debug)]
pub struct NotSignedIn;

impl std::fmt::Display for NotSignedIn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "not signed in")
    }
}

impl actix_web::ResponseError for NotSignedIn {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::FOUND
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((header::LOCATION, "/login"))
            .finish()
    }
}

impl FromRequest for Identity {
    type Error = NotSignedIn;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req.get_session();

        match identity_from_session(&session) {
            Some(identity) => ready(Ok(identity)),
            None => ready(Err(NotSignedIn)),
        }
    }
}

/// Optional identity extractor - doesn't fail if not authenticated.
pub struct OptionalIdentity(pub Option<Identity>);

impl FromRequest for OptionalIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req.get_session();

        ready(Ok(OptionalIdentity(identity_from_session(&session))))
    }
}
