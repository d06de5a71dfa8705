use std::sync::Arc;

use axum::{routing::{get, post}, Router};

use shared_database::AppState;

use crate::handlers::*;

pub fn admin_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(create_admin).get(list_admins))
        .route(
            "/{id}",
            get(get_admin)
                .put(update_admin)
                .patch(patch_admin)
                .delete(delete_admin),
        )
        .with_state(state)
}
