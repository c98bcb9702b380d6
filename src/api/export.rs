//! CSV export of the user list
//! Mission: Turn the sanitized user records into a downloadable attachment

use crate::api::AppState;
use crate::auth::{api::ApiError, models::PublicUser};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::borrow::Cow;
use std::fmt::Write;

/// Render the sanitized user list as CSV with a header row.
pub fn users_to_csv(users: &[PublicUser]) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "id,name,username,role")?;

    for user in users {
        writeln!(
            out,
            "{},{},{},{}",
            user.id,
            csv_field(&user.name),
            csv_field(&user.username),
            csv_field(user.role.as_str()),
        )?;
    }

    Ok(out)
}

/// Quote a field when it contains a delimiter, quote, or line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Export the user list - GET /users/export (Admin only).
///
/// Served as a `users.csv` attachment; password hashes are excluded at the
/// store boundary, not here.
pub async fn export_users(State(state): State<AppState>) -> Result<Response, ApiError> {
    let users = state.store.list(None);
    let csv = users_to_csv(&users).map_err(|_| ApiError::ExportFailed)?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"users.csv\"",
        ),
    ];

    Ok((headers, csv).into_response())
}
