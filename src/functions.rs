//! Name-addressed functions the voice agent runtime calls with keyword arguments.
//!
//! Each entry decodes its JSON arguments into a typed struct, runs the matching
//! service, and encodes a typed result. The table is checked once at startup.

use std::collections::{HashMap, HashSet};

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::{BookingRequest, Recommendation};
use crate::services::{booking, budget, faq, recommend};

pub type Handler = fn(Value) -> Result<Value, AppError>;

pub struct FunctionEntry {
    pub name: &'static str,
    pub handler: Handler,
}

pub const FUNCTIONS: &[FunctionEntry] = &[
    FunctionEntry {
        name: "recommend_by_budget",
        handler: recommend_by_budget,
    },
    FunctionEntry {
        name: "answer_faq",
        handler: answer_faq,
    },
    FunctionEntry {
        name: "normalize_budget",
        handler: normalize_budget,
    },
    FunctionEntry {
        name: "book_appointment",
        handler: book_appointment,
    },
];

/// Accepts `900000` and `900000.0` alike; fractions are truncated toward zero.
fn whole_dollars<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(value) = number.as_i64() {
        return Ok(Some(value));
    }
    number
        .as_f64()
        .and_then(budget::truncate)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("{number} is out of range for a budget")))
}

#[derive(Debug, Deserialize)]
pub struct RecommendArgs {
    #[serde(default, deserialize_with = "whole_dollars")]
    pub budget: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct FaqArgs {
    #[serde(default)]
    pub user_text: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct FaqResult {
    pub answer: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct NormalizeArgs {
    #[serde(default)]
    pub budget_band: Option<String>,
    #[serde(default, deserialize_with = "whole_dollars")]
    pub numeric_budget: Option<i64>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct NormalizeResult {
    pub normalized_budget: Option<i64>,
}

fn decode<T: DeserializeOwned>(name: &str, args: Value) -> Result<T, AppError> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        Value::Object(_) => args,
        other => {
            return Err(AppError::Validation(format!(
                "{name}: arguments must be a JSON object, got {other}"
            )))
        }
    };
    serde_json::from_value(args).map_err(|e| AppError::Validation(format!("{name}: {e}")))
}

fn encode<T: Serialize>(result: &T) -> Result<Value, AppError> {
    serde_json::to_value(result).map_err(|e| AppError::Internal(e.to_string()))
}

fn recommend_by_budget(args: Value) -> Result<Value, AppError> {
    let args: RecommendArgs = decode("recommend_by_budget", args)?;
    let recommendation: Recommendation = recommend::recommend_by_budget(args.budget);
    encode(&recommendation)
}

fn answer_faq(args: Value) -> Result<Value, AppError> {
    let args: FaqArgs = decode("answer_faq", args)?;
    encode(&FaqResult {
        answer: faq::answer_faq(args.user_text.as_deref()),
    })
}

fn normalize_budget(args: Value) -> Result<Value, AppError> {
    let args: NormalizeArgs = decode("normalize_budget", args)?;
    encode(&NormalizeResult {
        normalized_budget: budget::normalize_budget(
            args.budget_band.as_deref(),
            args.numeric_budget,
        ),
    })
}

fn book_appointment(args: Value) -> Result<Value, AppError> {
    let request: BookingRequest = decode("book_appointment", args)?;
    request.validate()?;
    encode(&booking::book_appointment(&request)?)
}

pub struct FunctionRegistry {
    names: Vec<&'static str>,
    handlers: HashMap<&'static str, Handler>,
}

impl FunctionRegistry {
    pub fn new() -> Result<Self, AppError> {
        Self::from_entries(FUNCTIONS)
    }

    pub fn from_entries(entries: &[FunctionEntry]) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for entry in entries {
            if entry.name.trim().is_empty() {
                return Err(AppError::Config("function with empty name".to_string()));
            }
            if !seen.insert(entry.name) {
                return Err(AppError::Config(format!(
                    "function '{}' registered twice",
                    entry.name
                )));
            }
        }

        Ok(Self {
            names: entries.iter().map(|e| e.name).collect(),
            handlers: entries.iter().map(|e| (e.name, e.handler)).collect(),
        })
    }

    /// Registered names in table order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn call(&self, name: &str, args: Value) -> Result<Value, AppError> {
        let Some(handler) = self.handlers.get(name) else {
            tracing::warn!(function = name, "call to unregistered function");
            return Err(AppError::UnknownFunction(name.to_string()));
        };
        tracing::debug!(function = name, "dispatching function call");
        handler(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use serde_json::json;

    fn registry() -> FunctionRegistry {
        FunctionRegistry::new().unwrap()
    }

    #[test]
    fn test_table_order() {
        assert_eq!(
            registry().names(),
            &["recommend_by_budget", "answer_faq", "normalize_budget", "book_appointment"]
        );
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let entries = [
            FunctionEntry {
                name: "answer_faq",
                handler: answer_faq,
            },
            FunctionEntry {
                name: "answer_faq",
                handler: answer_faq,
            },
        ];
        let err = FunctionRegistry::from_entries(&entries).err().unwrap();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_empty_name_rejected() {
        let entries = [FunctionEntry {
            name: " ",
            handler: answer_faq,
        }];
        assert!(FunctionRegistry::from_entries(&entries).is_err());
    }

    #[test]
    fn test_recommend_by_budget() {
        let result = registry()
            .call("recommend_by_budget", json!({"budget": 1_200_000}))
            .unwrap();
        assert_eq!(
            result,
            json!({
                "recommended_types": ["2-bed", "3-bed"],
                "note": "Confirm two car spaces are required for 3-bed options."
            })
        );

        let result = registry()
            .call("recommend_by_budget", json!({"budget": null}))
            .unwrap();
        assert_eq!(result, json!({"recommended_types": [], "note": "No budget provided."}));
    }

    #[test]
    fn test_answer_faq() {
        let result = registry()
            .call("answer_faq", json!({"user_text": "Is FIRB needed?"}))
            .unwrap();
        assert_eq!(
            result,
            json!({"answer": "Foreign buyers may face extra approval/taxes; we can refer, but do not advise."})
        );

        let result = registry()
            .call("answer_faq", json!({"user_text": "what's the weather"}))
            .unwrap();
        assert_eq!(result, json!({"answer": null}));
    }

    #[test]
    fn test_normalize_budget() {
        let r = registry();
        assert_eq!(
            r.call("normalize_budget", json!({"budget_band": "850–950k"})).unwrap(),
            json!({"normalized_budget": 900_000})
        );
        assert_eq!(
            r.call(
                "normalize_budget",
                json!({"budget_band": "850-950k", "numeric_budget": 700_000})
            )
            .unwrap(),
            json!({"normalized_budget": 700_000})
        );
        assert_eq!(
            r.call("normalize_budget", Value::Null).unwrap(),
            json!({"normalized_budget": null})
        );
    }

    #[test]
    fn test_book_appointment() {
        let result = registry()
            .call(
                "book_appointment",
                json!({
                    "name": "Ali",
                    "phone": "0400 000 000",
                    "email": "ali@example.com",
                    "slot_iso": "2025-09-26T10:00:00+10:00",
                    "mode": "video"
                }),
            )
            .unwrap();
        assert_eq!(
            result,
            json!({"ok": true, "booking_id": "RS-20250926-1000", "message": "Booked Fri 26 Sep 10:00 AEST"})
        );
    }

    #[test]
    fn test_float_budgets_truncate() {
        let r = registry();
        assert_eq!(
            r.call("recommend_by_budget", json!({"budget": 900000.0})).unwrap(),
            json!({"recommended_types": ["1-bed", "2-bed"], "note": ""})
        );
        assert_eq!(
            r.call("normalize_budget", json!({"numeric_budget": 700000.9})).unwrap(),
            json!({"normalized_budget": 700000})
        );
        let err = r.call("recommend_by_budget", json!({"budget": 1e30})).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_encode_failure_is_internal() {
        let mut map = HashMap::new();
        map.insert(vec![1u8], 1);
        let err = encode(&map).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(
            err.into_response().status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_arguments() {
        let r = registry();
        let err = r.call("recommend_by_budget", json!({"budget": "lots"})).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let err = r.call("answer_faq", json!(["hi"])).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unknown_function() {
        let err = registry().call("summarize_lead", json!({})).unwrap_err();
        assert!(matches!(err, AppError::UnknownFunction(name) if name == "summarize_lead"));
    }
}
