//! Account API handlers.
//!
//! ```text
//! POST /api/login {"username":"ada","password":"s3cret"}
//! POST /api/register {"username":"ada","password":"s3cret"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Credentials, Error};
use crate::domain::ports::{LoginOutcome, RegistrationOutcome};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{
    Envelope, LOGIN_REJECTED, LOGIN_SUCCEEDED, REGISTERED, USERNAME_TAKEN,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{PASSWORD, USERNAME, map_credentials_error, require};

/// Credentials body shared by `POST /api/login` and `POST /api/register`.
///
/// Example JSON:
/// `{"username":"ada","password":"s3cret"}`
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl CredentialsRequest {
    fn required_parts(self) -> ApiResult<(String, String)> {
        let username = require(self.username, USERNAME)?;
        let password = require(self.password, PASSWORD)?;
        Ok((username, password))
    }

    fn into_credentials(self) -> ApiResult<Credentials> {
        let (username, password) = self.required_parts()?;
        Credentials::try_from_parts(&username, &password).map_err(map_credentials_error)
    }
}

/// Check a username and password against the credential store.
///
/// Unknown users, wrong passwords and malformed usernames produce the same
/// `code: 0` envelope. Only absent fields are reported as a 400.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Login outcome", body = Envelope),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Credential store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<web::Json<Envelope>> {
    let (username, password) = payload.into_inner().required_parts()?;
    let Ok(credentials) = Credentials::try_from_parts(&username, &password) else {
        return Ok(web::Json(Envelope::rejected(LOGIN_REJECTED)));
    };
    let envelope = match state.accounts.login(credentials).await? {
        LoginOutcome::Authenticated { username } => {
            Envelope::success(LOGIN_SUCCEEDED).with_username(username.as_ref())
        }
        LoginOutcome::Rejected => Envelope::rejected(LOGIN_REJECTED),
    };
    Ok(web::Json(envelope))
}

/// Create a user unless the username is already registered.
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Registration outcome", body = Envelope),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Credential store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<web::Json<Envelope>> {
    let credentials = payload.into_inner().into_credentials()?;
    let envelope = match state.accounts.register(credentials).await? {
        RegistrationOutcome::Registered => Envelope::success(REGISTERED),
        RegistrationOutcome::UsernameTaken => Envelope::rejected(USERNAME_TAKEN),
    };
    Ok(web::Json(envelope))
}
