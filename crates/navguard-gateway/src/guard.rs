//! Navigation guard (HTTP host for the decision engine).
//!
//! - `navigation_guard`: middleware; answers 307 to the verdict's target or
//!   lets the request through.
//! - `decide`: `GET /v1/decide?path=...` for client-side hosts that only need
//!   the verdict.
//!
//! Only `GET` and `HEAD` are navigations. Everything else passes untouched.

use std::time::SystemTime;

use axum::{
    extract::{Query, Request, State},
    http::{HeaderMap, Method},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use navguard_core::error::NavGuardError;
use navguard_core::Verdict;

use crate::app_state::AppState;
use crate::error::ApiError;

/// Load the stored credential and run the engine against `path`.
pub async fn verdict_for(app: &AppState, headers: &HeaderMap, path: &str) -> Verdict {
    let credential = app.store().load(headers).await;
    app.policy().decide(credential.as_deref(), path, SystemTime::now())
}

pub async fn navigation_guard(State(app): State<AppState>, req: Request, next: Next) -> Response {
    if !matches!(*req.method(), Method::GET | Method::HEAD) {
        return next.run(req).await;
    }

    let path = req.uri().path().to_owned();
    match verdict_for(&app, req.headers(), &path).await {
        Verdict::Proceed => next.run(req).await,
        Verdict::Redirect(target) => {
            tracing::info!(%path, %target, "navigation redirected");
            Redirect::temporary(&target).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DecideQuery {
    pub path: Option<String>,
}

/// JSON body of `/v1/decide`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum VerdictBody {
    Proceed,
    Redirect { target: String },
}

impl From<Verdict> for VerdictBody {
    fn from(v: Verdict) -> Self {
        match v {
            Verdict::Proceed => VerdictBody::Proceed,
            Verdict::Redirect(target) => VerdictBody::Redirect { target },
        }
    }
}

pub async fn decide(
    State(app): State<AppState>,
    headers: HeaderMap,
    Query(q): Query<DecideQuery>,
) -> Result<Json<VerdictBody>, ApiError> {
    let path = q
        .path
        .filter(|p| !p.is_empty())
        .ok_or_else(|| NavGuardError::BadRequest("missing query parameter: path".into()))?;

    let verdict = verdict_for(&app, &headers, &path).await;
    Ok(Json(verdict.into()))
}
