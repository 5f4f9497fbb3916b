use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GoalPreviewData {
    pub goal_text: String,
    pub today: String,
    pub amount: Decimal,
    pub amount_notation: String,
    pub months: u32,
    pub deadline_kind: String,
    pub deadline: String,
    pub required_monthly: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct AmountData {
    pub goal_text: String,
    pub amount: Decimal,
    pub notation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeadlineData {
    pub goal_text: String,
    pub today: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationData>,
    pub months: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DurationData {
    pub count: u32,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpanData {
    pub start: String,
    pub end: String,
    pub months: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PayloadData {
    pub file_field: String,
    pub goal_field: String,
    pub goal_value: String,
}
