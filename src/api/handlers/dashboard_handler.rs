//! Dashboard handler.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::DashboardView;
use crate::errors::AppResult;

/// Create dashboard routes (session required)
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

/// The current user's dashboard: enrolled courses with progress,
/// account-wide stats, and recent activity
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard view", body = DashboardView),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn dashboard(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardView>> {
    let view = state.dashboard_service.dashboard(current_user.id).await?;
    Ok(Json(view))
}
