//! Skill webhook endpoint
//!
//! This module implements the POST /skill endpoint the voice platform
//! delivers intent requests to. It dispatches on the request type and
//! intent name, runs the comic-list flow, and answers with a speech
//! response envelope. Upstream failures answer as canned speech with
//! HTTP 200; the platform reads any non-200 as a skill crash.

use axum::{extract::State, Json};
use chrono::Local;

use crate::error::ApiError;
use crate::release_week::resolve_release_date;
use crate::schemas::shortboxed::ComicQuery;
use crate::schemas::skill::{Intent, Request, SkillRequest, SkillResponse};
use crate::server::state::AppState;
use crate::speech::{
    self, spoken_titles, HELP_MESSAGE, HELP_REPROMPT, INVALID_DATE_MESSAGE, NOT_FOUND_MESSAGE,
    SORRY_MESSAGE, STOP_MESSAGE,
};

/// POST /skill - Handle a voice platform request
///
/// Launch requests run the comic-list flow with no slots: opening the
/// skill speaks this week's releases.
pub async fn handle_skill(
    State(state): State<AppState>,
    Json(envelope): Json<SkillRequest>,
) -> Result<Json<SkillResponse>, ApiError> {
    verify_application(&state, &envelope)?;

    let response = match &envelope.request {
        Request::LaunchRequest => comic_list(&state, None).await,
        Request::IntentRequest { intent } => dispatch_intent(&state, intent).await,
        Request::SessionEndedRequest => {
            tracing::debug!("Session ended");
            SkillResponse::empty()
        }
        Request::Unknown => {
            tracing::debug!("Ignoring unrecognized request type");
            SkillResponse::empty()
        }
    };

    Ok(Json(response))
}

/// Reject envelopes addressed to a different skill, when an application id
/// is configured.
fn verify_application(state: &AppState, envelope: &SkillRequest) -> Result<(), ApiError> {
    let Some(expected) = state.settings.skill_application_id.as_deref() else {
        return Ok(());
    };

    match envelope.application_id() {
        Some(id) if id == expected => Ok(()),
        Some(id) => {
            tracing::warn!(application_id = %id, "Envelope for a different application");
            Err(ApiError::Forbidden("Unknown application".to_string()))
        }
        None => Err(ApiError::Forbidden("Missing application id".to_string())),
    }
}

async fn dispatch_intent(state: &AppState, intent: &Intent) -> SkillResponse {
    tracing::info!(intent = %intent.name, "Dispatching intent");

    match intent.name.as_str() {
        "GetComicList" => comic_list(state, Some(intent)).await,
        "AMAZON.HelpIntent" => SkillResponse::ask(HELP_MESSAGE, HELP_REPROMPT),
        "AMAZON.CancelIntent" | "AMAZON.StopIntent" => SkillResponse::tell(STOP_MESSAGE),
        other => {
            tracing::debug!(intent = %other, "Unhandled intent, answering with help");
            SkillResponse::ask(HELP_MESSAGE, HELP_REPROMPT)
        }
    }
}

/// The main flow: resolve the release date, query the catalog, speak the
/// filtered title list.
async fn comic_list(state: &AppState, intent: Option<&Intent>) -> SkillResponse {
    let date_slot = intent.and_then(|i| i.slot_value("date"));
    let today = Local::now().date_naive();

    let release_date = match resolve_release_date(date_slot, today) {
        Ok(date) => date,
        Err(err) => {
            tracing::debug!(slot = ?date_slot, error = %err, "Unsearchable date slot");
            return SkillResponse::tell(INVALID_DATE_MESSAGE);
        }
    };

    let query = ComicQuery {
        publisher: intent
            .and_then(|i| i.slot_value("publisher"))
            .map(speech::spoken_to_catalog),
        title: intent
            .and_then(|i| i.slot_value("title"))
            .map(speech::spoken_to_catalog),
        release_date: Some(release_date),
    };

    match state.shortboxed.query(&query).await {
        Ok(comics) => {
            let titles = spoken_titles(&comics);
            if titles.is_empty() {
                return SkillResponse::tell(NOT_FOUND_MESSAGE);
            }

            tracing::info!(
                release_date = %release_date,
                title_count = titles.len(),
                "Speaking comic list"
            );
            SkillResponse::tell(&speech::comic_list(release_date, &titles))
        }
        Err(err) if err.is_api_rejection() => {
            tracing::info!(error = %err, "Catalog rejected the query");
            SkillResponse::tell(NOT_FOUND_MESSAGE)
        }
        Err(err) => {
            tracing::error!(error = %err, "Catalog query failed");
            SkillResponse::tell(SORRY_MESSAGE)
        }
    }
}
