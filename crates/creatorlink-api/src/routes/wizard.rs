//! Routes for the Campaign Wizard bounded context.
//!
//! The server holds one wizard per storage scope. Every route answers with
//! the wizard's full state so a client can render the current step without
//! a second request. Creators are always chosen by directory id; the
//! summary cached in the draft comes from the directory, never the client.

use std::sync::Arc;

use axum::extract::State;
use axum::{
    Json, Router,
    routing::{get, post},
};
use creatorlink_campaigns::domain::campaign::CampaignId;
use creatorlink_core::command::Command;
use creatorlink_core::error::DomainError;
use creatorlink_wizard::application::controller::CampaignWizard;
use creatorlink_wizard::domain::commands::DraftCommand;
use creatorlink_wizard::domain::draft::{CreatorRef, DraftRecord};
use creatorlink_wizard::domain::review::ReviewSummary;
use creatorlink_wizard::domain::steps::WizardStep;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /start.
#[derive(Debug, Default, Deserialize)]
pub struct StartRequest {
    /// Directory id of a creator to pre-select, from a deep link.
    #[serde(default)]
    pub creator_id: Option<String>,
}

/// Request body for POST /select-creator.
#[derive(Debug, Deserialize)]
pub struct SelectCreatorRequest {
    /// Directory id of the creator to book.
    pub creator_id: String,
}

/// Gate status of one step.
#[derive(Debug, Serialize)]
pub struct StepStatus {
    /// The step.
    pub step: WizardStep,
    /// 1-based position.
    pub number: usize,
    /// Display title.
    pub title: &'static str,
    /// Whether the step's gate holds.
    pub valid: bool,
    /// What the step needs before it holds.
    pub requirement: String,
}

/// The wizard as a client renders it.
#[derive(Debug, Serialize)]
pub struct WizardResponse {
    /// The step on screen.
    pub current_step: WizardStep,
    /// Whether POST /advance would move forward.
    pub can_advance: bool,
    /// Earliest step whose gate does not hold.
    pub first_invalid_step: Option<WizardStep>,
    /// Every step in order.
    pub steps: Vec<StepStatus>,
    /// The draft as stored.
    pub draft: DraftRecord,
    /// Review read-back, once the draft is complete.
    pub review: Option<ReviewSummary>,
}

impl From<&CampaignWizard> for WizardResponse {
    fn from(wizard: &CampaignWizard) -> Self {
        let steps = WizardStep::ALL
            .into_iter()
            .map(|step| StepStatus {
                step,
                number: step.number(),
                title: step.title(),
                valid: wizard.is_step_valid(step),
                requirement: step.requirement(),
            })
            .collect();
        Self {
            current_step: wizard.current_step(),
            can_advance: wizard.can_advance(),
            first_invalid_step: wizard.first_invalid_step(),
            steps,
            draft: wizard.draft().to_record(),
            review: wizard.review_summary(),
        }
    }
}

/// Response body for POST /finalize.
#[derive(Debug, Serialize)]
pub struct FinalizeResponse {
    /// Id of the new campaign.
    pub campaign_id: CampaignId,
}

/// GET /
#[instrument(skip(state))]
async fn show(State(state): State<AppState>) -> Json<WizardResponse> {
    let wizard = state.wizard();
    Json(WizardResponse::from(&*wizard))
}

/// POST /start
///
/// The body is optional; without one the wizard mounts unseeded.
#[instrument(skip(state, request))]
async fn start(
    State(state): State<AppState>,
    request: Option<Json<StartRequest>>,
) -> Result<Json<WizardResponse>, ApiError> {
    let request = request.map(|Json(request)| request).unwrap_or_default();
    let seed = request
        .creator_id
        .as_deref()
        .map(|id| state.directory.get(id).map(CreatorRef::from))
        .transpose()?;

    let mut wizard = state.wizard();
    *wizard = CampaignWizard::initialize(Arc::clone(&state.store), state.resume_policy, seed);
    Ok(Json(WizardResponse::from(&*wizard)))
}

/// POST /select-creator
#[instrument(skip(state, request), fields(creator_id = %request.creator_id))]
async fn select_creator(
    State(state): State<AppState>,
    Json(request): Json<SelectCreatorRequest>,
) -> Result<Json<WizardResponse>, ApiError> {
    let creator = CreatorRef::from(state.directory.get(&request.creator_id)?);

    let mut wizard = state.wizard();
    wizard.apply(DraftCommand::SelectCreator { creator })?;
    Ok(Json(WizardResponse::from(&*wizard)))
}

/// POST /commands
///
/// Every draft command except creator selection, which goes through
/// POST /select-creator.
#[instrument(skip(state, command), fields(command = command.command_type()))]
async fn apply_command(
    State(state): State<AppState>,
    Json(command): Json<DraftCommand>,
) -> Result<Json<WizardResponse>, ApiError> {
    if matches!(command, DraftCommand::SelectCreator { .. }) {
        return Err(ApiError(DomainError::Validation(
            "choose a creator by id through /select-creator".into(),
        )));
    }

    let mut wizard = state.wizard();
    wizard.apply(command)?;
    Ok(Json(WizardResponse::from(&*wizard)))
}

/// POST /advance
#[instrument(skip(state))]
async fn advance(State(state): State<AppState>) -> Result<Json<WizardResponse>, ApiError> {
    let mut wizard = state.wizard();
    wizard.advance()?;
    Ok(Json(WizardResponse::from(&*wizard)))
}

/// POST /retreat
#[instrument(skip(state))]
async fn retreat(State(state): State<AppState>) -> Result<Json<WizardResponse>, ApiError> {
    let mut wizard = state.wizard();
    wizard.retreat()?;
    Ok(Json(WizardResponse::from(&*wizard)))
}

/// POST /reset
#[instrument(skip(state))]
async fn reset(State(state): State<AppState>) -> Result<Json<WizardResponse>, ApiError> {
    let mut wizard = state.wizard();
    wizard.reset()?;
    Ok(Json(WizardResponse::from(&*wizard)))
}

/// POST /finalize
#[instrument(skip(state))]
async fn finalize(State(state): State<AppState>) -> Result<Json<FinalizeResponse>, ApiError> {
    let mut wizard = state.wizard();
    let mut campaigns = state.campaigns();
    let campaign_id = wizard.finalize(&mut campaigns)?;

    info!(%campaign_id, "campaign created from wizard");

    Ok(Json(FinalizeResponse { campaign_id }))
}

/// Returns the router for the wizard context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(show))
        .route("/start", post(start))
        .route("/select-creator", post(select_creator))
        .route("/commands", post(apply_command))
        .route("/advance", post(advance))
        .route("/retreat", post(retreat))
        .route("/reset", post(reset))
        .route("/finalize", post(finalize))
}
