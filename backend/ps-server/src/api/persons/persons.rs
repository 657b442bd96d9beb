//! Person REST API handlers

use crate::{
    ApiError, ApiResult, AppState, IdQuery, PageQuery, PersonDeleteResponse, PersonQuery,
    PersonRequest, PersonResponse,
};

use ps_core::{Person, parse_identity};

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use log::info;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/person/create
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> ApiResult<Json<PersonResponse>> {
    let Json(request) = payload?;
    let person = Person::from(request);

    let saved = state.persons.save(&person).await?;
    info!("Created person {}", saved.id);

    Ok(Json(saved.into()))
}

/// PUT /api/v1/person/update
///
/// A payload without an id creates a new person.
pub async fn update_person(
    State(state): State<AppState>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> ApiResult<Json<PersonResponse>> {
    let Json(request) = payload?;
    let person = Person::from(request);

    let updated = state.persons.update(&person).await?;
    info!("Updated person {}", updated.id);

    Ok(Json(updated.into()))
}

/// DELETE /api/v1/person/delete?id=<uuid>
pub async fn delete_person(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> ApiResult<Json<PersonDeleteResponse>> {
    let id = required_id(query.id.as_deref())?;
    remove(&state, id).await
}

/// DELETE /api/v1/person/delete/{id}
pub async fn delete_person_by_path(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PersonDeleteResponse>> {
    let id = parse_identity(&id)?;
    remove(&state, id).await
}

/// GET /api/v1/person/get?id=<uuid> or ?login=<login>
pub async fn get_person(
    State(state): State<AppState>,
    Query(query): Query<PersonQuery>,
) -> ApiResult<Json<PersonResponse>> {
    let id = query.id.as_deref().filter(|id| !id.is_empty());
    let login = query.login.as_deref().filter(|login| !login.is_empty());

    let person = match (id, login) {
        (Some(id), _) => state.persons.find_by_id(parse_identity(id)?).await?,
        (None, Some(login)) => state.persons.find_by_login(login).await?,
        (None, None) => {
            return Err(ApiError::validation(
                "Either 'id' or 'login' query parameter is required",
                None,
            ));
        }
    };

    Ok(Json(person.into()))
}

/// GET /api/v1/person/get/{id}
pub async fn get_person_by_path(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PersonResponse>> {
    let person = state.persons.find_by_id(parse_identity(&id)?).await?;

    Ok(Json(person.into()))
}

/// GET /api/v1/persons?page=<n>
///
/// At most 50 persons per page; missing or bad page values mean page 1.
pub async fn list_persons(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Vec<PersonResponse>>> {
    let persons = state.persons.list(&query.page).await?;

    Ok(Json(persons.into_iter().map(PersonResponse::from).collect()))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn required_id(raw: Option<&str>) -> ApiResult<Uuid> {
    match raw {
        Some(raw) if !raw.is_empty() => Ok(parse_identity(raw)?),
        _ => Err(ApiError::validation(
            "Missing required query parameter 'id'",
            Some("id"),
        )),
    }
}

async fn remove(state: &AppState, id: Uuid) -> ApiResult<Json<PersonDeleteResponse>> {
    let deleted = state.persons.delete(id).await?;
    info!("Person with id {} was successfully deleted", deleted);

    Ok(Json(PersonDeleteResponse::deleted(&deleted)))
}
