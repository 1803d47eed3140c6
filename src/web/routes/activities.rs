use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::database::activities_repo::ActivityDirectory;
use crate::error::SignupError;
use crate::services::signup_service::{self, SignupReceipt};

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn activities_handler(State(directory): State<ActivityDirectory>) -> Json<Value> {
    let mut body = Map::new();
    for activity in directory.list().await {
        match serde_json::to_value(&activity) {
            Ok(record) => {
                body.insert(activity.name, record);
            }
            Err(e) => warn!("Activity {} could not be serialized: {}", activity.name, e),
        }
    }
    Json(Value::Object(body))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<SignupReceipt>, SignupError> {
    signup_service::sign_up(&directory, &activity_name, &query.email)
        .await
        .map(Json)
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        let status = match self {
            SignupError::ActivityNotFound => StatusCode::NOT_FOUND,
            SignupError::AlreadySignedUp | SignupError::ScheduleConflict { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        (
            status,
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
