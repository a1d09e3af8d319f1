//! Routes for the creator directory.

use axum::extract::{Path, Query, State};
use axum::{Json, Router, routing::get};
use creatorlink_directory::Creator;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for GET /.
#[derive(Debug, Default, Deserialize)]
pub struct ListCreatorsQuery {
    /// Only list creators in this category.
    pub category: Option<String>,
}

/// A directory entry with its display labels.
#[derive(Debug, Serialize)]
pub struct CreatorResponse {
    /// The directory entry.
    #[serde(flatten)]
    pub creator: Creator,
    /// Compact follower count, e.g. `980K`.
    pub followers_label: String,
}

impl From<&Creator> for CreatorResponse {
    fn from(creator: &Creator) -> Self {
        Self {
            creator: creator.clone(),
            followers_label: creator.followers_label(),
        }
    }
}

/// GET /
#[instrument(skip(state))]
async fn list_creators(
    State(state): State<AppState>,
    Query(query): Query<ListCreatorsQuery>,
) -> Json<Vec<CreatorResponse>> {
    let creators = match query.category.as_deref() {
        Some(category) => state
            .directory
            .in_category(category)
            .map(CreatorResponse::from)
            .collect(),
        None => state
            .directory
            .list()
            .iter()
            .map(CreatorResponse::from)
            .collect(),
    };
    Json(creators)
}

/// GET /{id}
#[instrument(skip(state))]
async fn get_creator(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CreatorResponse>, ApiError> {
    let creator = state.directory.get(&id)?;
    Ok(Json(CreatorResponse::from(creator)))
}

/// Returns the router for the creator directory.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_creators))
        .route("/{id}", get(get_creator))
}
