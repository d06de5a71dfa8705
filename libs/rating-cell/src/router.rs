use std::sync::Arc;

use axum::{routing::{get, post}, Router};

use shared_database::AppState;

use crate::handlers::*;

pub fn rating_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(create_rating).get(list_ratings))
        .route(
            "/{id}",
            get(get_rating)
                .put(update_rating)
                .patch(patch_rating)
                .delete(delete_rating),
        )
        .with_state(state)
}
