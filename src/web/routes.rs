use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use crate::clients::RosterClient;
use crate::roster_actor::{ActivityCatalog, Confirmation};
use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// Pulls a non-empty email out of the query string.
///
/// Malformed query strings (repeated `email`, bad encoding) are caller input
/// errors too, so they are reported as `ApiError::InvalidInput`.
fn email_from(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))?;
    query.into_email()
}

impl EmailQuery {
    fn into_email(self) -> Result<String, ApiError> {
        match self.email {
            Some(email) if !email.is_empty() => Ok(email),
            Some(_) => Err(ApiError::InvalidInput("email must not be empty".to_string())),
            None => Err(ApiError::InvalidInput("missing query parameter: email".to_string())),
        }
    }
}

pub async fn list_activities_handler(
    State(roster): State<RosterClient>,
) -> Result<Json<ActivityCatalog>, ApiError> {
    Ok(Json(roster.list_activities().await?))
}

pub async fn signup_handler(
    State(roster): State<RosterClient>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Confirmation>, ApiError> {
    let email = email_from(query)?;
    Ok(Json(roster.signup(activity_name, email).await?))
}

pub async fn unregister_handler(
    State(roster): State<RosterClient>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Confirmation>, ApiError> {
    let email = email_from(query)?;
    Ok(Json(roster.unregister(activity_name, email).await?))
}
