use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::database::ActivityStore;
use crate::error::ActivityError;
use crate::models::{Catalog, MessageResponse, SignupRequest, UnregisterQuery};
use crate::services::activities_service;

pub async fn list_activities_handler(State(store): State<ActivityStore>) -> Json<Catalog> {
    Json(activities_service::list_activities(&store))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    State(store): State<ActivityStore>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ActivityError> {
    let Json(body) = payload?;
    let message = activities_service::sign_up(&store, &activity_name, body)?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<UnregisterQuery>, QueryRejection>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageResponse>, ActivityError> {
    let Query(query) = query?;
    let message = activities_service::unregister(&store, &activity_name, &query.email)?;
    Ok(Json(MessageResponse { message }))
}
