//! Route modules organized by bounded context.

use axum::Router;

use crate::state::AppState;

pub mod campaigns;
pub mod creators;
pub mod health;
pub mod wizard;

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api/v1/creators", creators::router())
        .nest("/api/v1/wizard", wizard::router())
        .nest("/api/v1/campaigns", campaigns::router())
        .with_state(state)
}
