use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct FunctionList {
    functions: Vec<&'static str>,
}

// GET /functions
pub async fn list_functions(State(state): State<Arc<AppState>>) -> Json<FunctionList> {
    Json(FunctionList {
        functions: state.functions.names().to_vec(),
    })
}

// POST /functions/:name
// Body is the keyword-argument object; an empty body means no arguments.
pub async fn call_function(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let args = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::Validation(format!("{name}: invalid JSON arguments: {e}")))?
    };

    let result = state.functions.call(&name, args)?;
    Ok(Json(result))
}
