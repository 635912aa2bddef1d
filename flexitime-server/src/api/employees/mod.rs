//! Employee API Module
//!
//! | Path | Method | Success |
//! |------|--------|---------|
//! | /employees | GET | 200 `{employees: [...]}` |
//! | /employees | POST | 200 created employee |
//! | /employees/{id} | GET | 200 employee |
//! | /employees/{id} | PUT | 204 |
//! | /employees/{id} | DELETE | 204 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/employees",
            get(handler::list)
                .post(handler::create)
                .fallback(handler::method_not_found),
        )
        .route(
            "/employees/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete)
                .fallback(handler::method_not_found),
        )
}
