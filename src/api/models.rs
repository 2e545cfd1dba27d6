use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::error::PipelineError;

/// Fields submitted from the insights form.
///
/// The form's product overview upload is deliberately not part of this type;
/// it is accepted by the web layer and dropped unread.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InsightRequest {
    pub product_name: String,
    pub company_url: String,
    pub product_category: String,
    #[serde(alias = "competitors_url")]
    pub competitor_url: String,
    pub value_proposition: String,
    pub target_customer: String,
}

impl InsightRequest {
    /// Product name and company URL must hold something other than whitespace.
    pub fn validate(&self) -> Result<(), PipelineError> {
        let mut missing = Vec::new();
        if self.product_name.trim().is_empty() {
            missing.push("product_name");
        }
        if self.company_url.trim().is_empty() {
            missing.push("company_url");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PipelineError::Validation { missing })
        }
    }
}

#[derive(Serialize)]
pub struct InsightResponse {
    pub product_name: String,
    pub company_url: String,
    pub insights: String,
    pub generated_at: DateTime<Utc>,
}
