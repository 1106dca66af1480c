use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One job posting extracted from a board page. Every field is always
/// present in serialized output; the extraction prompt tells the model to
/// leave unknown fields empty rather than omit them, and `from_value`
/// enforces that on anything the model sends back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub job_url: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date_posted: String,
    #[serde(default)]
    pub description: String,
}

impl JobRecord {
    /// Build a record from loosely shaped model output. Missing, null, or
    /// non-string fields become empty strings.
    pub fn from_value(raw: &Value) -> JobRecord {
        let field = |key: &str| {
            raw.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        JobRecord {
            job_title: field("job_title"),
            company_name: field("company_name"),
            job_url: field("job_url"),
            location: field("location"),
            date_posted: field("date_posted"),
            description: field("description"),
        }
    }
}
