pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, ErrorResponse, Result as ApiResult},
    persons::{
        id_query::IdQuery,
        page_query::PageQuery,
        person_delete_response::PersonDeleteResponse,
        person_query::PersonQuery,
        person_request::PersonRequest,
        person_response::PersonResponse,
        persons::{
            create_person, delete_person, delete_person_by_path, get_person, get_person_by_path,
            list_persons, update_person,
        },
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};
pub use middleware::{
    bearer_gate::{build_gate, require_bearer},
    recovery::{handle_panic, handle_timeout},
    request_logger::{REQUEST_ID_HEADER, log_requests},
};
pub use routes::{build_router, with_service_layers};
