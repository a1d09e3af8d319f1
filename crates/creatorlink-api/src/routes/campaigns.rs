//! Routes for the Campaigns bounded context.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use creatorlink_campaigns::application::query_handlers::{
    self, CampaignDetail, CampaignSummary,
};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /
#[instrument(skip(state))]
async fn list_campaigns(State(state): State<AppState>) -> Json<Vec<CampaignSummary>> {
    let campaigns = state.campaigns();
    Json(query_handlers::list_campaigns(&campaigns))
}

/// GET /{id}
#[instrument(skip(state))]
async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CampaignDetail>, ApiError> {
    let campaigns = state.campaigns();
    let detail = query_handlers::get_campaign_by_id(&campaigns, &id)?;
    Ok(Json(detail))
}

/// Returns the router for the campaigns context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_campaigns))
        .route("/{id}", get(get_campaign))
}
