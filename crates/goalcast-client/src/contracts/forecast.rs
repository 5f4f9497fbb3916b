//! Wire shapes shared with the forecasting service.
//!
//! The service takes a multipart POST with the uploaded transactions in a
//! `file` part and the raw goal sentence in a `goal` part. It parses the
//! sentence itself, so the `goal` part carries the text, not a parsed intent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

pub const FILE_FIELD: &str = "file";
pub const GOAL_FIELD: &str = "goal";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastGoalField {
    pub goal_text: String,
}

impl ForecastGoalField {
    pub fn new(goal_text: &str) -> Self {
        Self {
            goal_text: goal_text.to_string(),
        }
    }

    /// JSON body of the `goal` multipart part.
    pub fn to_form_value(&self) -> ClientResult<String> {
        serde_json::to_string(self)
            .map_err(|err| ClientError::internal_serialization(&err.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_gap: Option<Decimal>,
    #[serde(default)]
    pub suggestions: Vec<ForecastSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSuggestion {
    pub title: String,
    pub impact_per_month: Decimal,
    pub action: String,
    pub rationale: String,
    pub lever_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_months_to_deadline: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_required_monthly: Option<Decimal>,
}
