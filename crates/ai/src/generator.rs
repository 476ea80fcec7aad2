use std::sync::Arc;

use async_trait::async_trait;
use schoolhub_core::trail::{build_prompt, parse_trail, StudentProfile, TrailPlan, TrailRequest};

use crate::client::{AiError, CompletionClient};
use crate::config::AiConfig;

/// A parsed trail and the model that wrote it.
#[derive(Debug, Clone)]
pub struct GeneratedTrail {
    pub plan: TrailPlan,
    pub model: String,
}

#[async_trait]
pub trait TrailGenerator: Send + Sync {
    async fn generate(
        &self,
        profile: &StudentProfile,
        request: &TrailRequest,
    ) -> Result<GeneratedTrail, AiError>;
}

/// Generator backed by the completion API.
pub struct OpenAiTrailGenerator {
    client: CompletionClient,
}

impl OpenAiTrailGenerator {
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TrailGenerator for OpenAiTrailGenerator {
    async fn generate(
        &self,
        profile: &StudentProfile,
        request: &TrailRequest,
    ) -> Result<GeneratedTrail, AiError> {
        let prompt = build_prompt(profile, request);
        tracing::debug!(model = self.client.model(), topic = %request.topic, "Requesting trail");

        let completion = self.client.complete(&prompt).await?;
        let plan = parse_trail(&completion.content, &request.topic);
        tracing::info!(
            model = %completion.model,
            activities = plan.activities.len(),
            "Trail generated",
        );
        Ok(GeneratedTrail {
            plan,
            model: completion.model,
        })
    }
}

/// Stand-in used when no API key is configured.
pub struct DisabledTrailGenerator;

#[async_trait]
impl TrailGenerator for DisabledTrailGenerator {
    async fn generate(
        &self,
        _profile: &StudentProfile,
        _request: &TrailRequest,
    ) -> Result<GeneratedTrail, AiError> {
        Err(AiError::NotConfigured)
    }
}

/// Pick the generator for `config`: the completion API when a key is set,
/// otherwise [`DisabledTrailGenerator`].
pub fn build_trail_generator(config: &AiConfig) -> Result<Arc<dyn TrailGenerator>, AiError> {
    if !config.is_enabled() {
        tracing::warn!("AI_API_KEY not set, trail generation disabled");
        return Ok(Arc::new(DisabledTrailGenerator));
    }
    let client = CompletionClient::from_config(config)?;
    Ok(Arc::new(OpenAiTrailGenerator::new(client)))
}
