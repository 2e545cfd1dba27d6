use askama::Template;

use crate::error::PipelineError;

/// The single Sales Agent page: form plus the outcome of the last submission.
#[derive(Template, Default)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub insights: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

impl IndexTemplate {
    pub fn from_outcome(outcome: Result<String, PipelineError>) -> Self {
        match outcome {
            Ok(insights) => IndexTemplate {
                insights: Some(insights),
                ..Default::default()
            },
            Err(err) if err.is_warning() => IndexTemplate {
                warning: Some(err.user_message()),
                ..Default::default()
            },
            Err(err) => IndexTemplate {
                error: Some(err.user_message()),
                ..Default::default()
            },
        }
    }
}
