//! The insight pipeline: validate, search, render the prompt, generate.
//!
//! Every call is independent. Nothing is cached between invocations and a
//! failed external call is never retried here; resubmitting the form simply
//! runs the pipeline again.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::api::models::InsightRequest;
use crate::config::Config;
use crate::error::{PipelineError, Provider};
use crate::llm::{GenerationClient, GroqClient, INSIGHT_MODEL};
use crate::prompt::{build_prompt, format_company_information};
use crate::search::{SearchClient, TavilySearch};

/// Number of search snippets requested for the company URL.
pub const MAX_SEARCH_RESULTS: usize = 2;

pub async fn generate_insights(
    request: &InsightRequest,
    search: &dyn SearchClient,
    generator: &dyn GenerationClient,
) -> Result<String, PipelineError> {
    request.validate()?;

    let start = Instant::now();
    info!(company_url = %request.company_url, "searching for company information");

    let mut results = search
        .search(&request.company_url, MAX_SEARCH_RESULTS)
        .await
        .map_err(|source| {
            warn!(error = %source, "search provider failed");
            PipelineError::Upstream {
                provider: Provider::Search,
                source,
            }
        })?;
    results.truncate(MAX_SEARCH_RESULTS);

    let company_information = format_company_information(&results);
    if company_information.is_empty() {
        warn!(company_url = %request.company_url, "search returned no usable results");
        return Err(PipelineError::NoData {
            query: request.company_url.clone(),
        });
    }

    let prompt = build_prompt(&company_information, request);
    debug!(prompt_len = prompt.len(), snippets = results.len(), "rendered prompt");

    let insights = generator
        .generate(INSIGHT_MODEL, &prompt)
        .await
        .map_err(|source| {
            warn!(error = %source, "generation provider failed");
            PipelineError::Upstream {
                provider: Provider::Generation,
                source,
            }
        })?;

    info!(elapsed = ?start.elapsed(), insights_len = insights.len(), "insights generated");
    Ok(insights)
}

/// Search and generation collaborators bundled for the web layer.
#[derive(Clone)]
pub struct InsightPipeline {
    search: Arc<dyn SearchClient>,
    generator: Arc<dyn GenerationClient>,
}

impl InsightPipeline {
    pub fn new(search: Arc<dyn SearchClient>, generator: Arc<dyn GenerationClient>) -> Self {
        InsightPipeline { search, generator }
    }

    pub fn from_config(config: &Config) -> Self {
        InsightPipeline::new(
            Arc::new(TavilySearch::new(&config.tavily_api_key, &config.tavily_base_url)),
            Arc::new(GroqClient::new(&config.groq_api_key, &config.groq_base_url)),
        )
    }

    pub async fn run(&self, request: &InsightRequest) -> Result<String, PipelineError> {
        generate_insights(request, self.search.as_ref(), self.generator.as_ref()).await
    }
}
