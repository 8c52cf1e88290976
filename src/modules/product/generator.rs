use thiserror::Error;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::services::llm::{ChatCompletion, ChatMessage, GenerationParams, LlmError};

use super::prompts::{self, AdKey, AD_TARGETS, SAFETY_WARNING_NAME_INDEX};
use super::schema::{GenerationRequest, GenerationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ProductNames,
    AdTranscript(AdKey),
    SafetyWarning,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::ProductNames => f.write_str("product names"),
            Stage::AdTranscript(key) => write!(f, "ad transcript {}", key.as_str()),
            Stage::SafetyWarning => f.write_str("safety warning"),
        }
    }
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Failed to generate {stage}: {source}")]
    Upstream {
        stage: Stage,
        #[source]
        source: LlmError,
    },
    #[error("Model returned {returned} product name(s), {required} required")]
    InsufficientNames { returned: usize, required: usize },
}

/// Number of names the ad and safety-warning stages index into.
pub fn required_names() -> usize {
    AD_TARGETS
        .iter()
        .map(|t| t.name_index)
        .chain(std::iter::once(SAFETY_WARNING_NAME_INDEX))
        .max()
        .map_or(0, |i| i + 1)
}

/// Splits the name reply on newlines, keeping every line as-is.
pub fn split_product_names(reply: &str) -> Vec<String> {
    reply.split('\n').map(str::to_string).collect()
}

#[derive(Debug, Default)]
struct AdTranscripts {
    tv_young_adults: String,
    facebook_parents: String,
    radio_parents: String,
}

impl AdTranscripts {
    fn insert(&mut self, key: AdKey, transcript: String) {
        match key {
            AdKey::TvYoungAdults => self.tv_young_adults = transcript,
            AdKey::FacebookParents => self.facebook_parents = transcript,
            AdKey::RadioParents => self.radio_parents = transcript,
        }
    }
}

/// Runs the name, ad and safety-warning prompts for one request.
///
/// Calls are made one at a time; the first failure ends the run and nothing
/// generated so far is returned.
pub struct ProductGenerator<'a> {
    chat: &'a dyn ChatCompletion,
    params: &'a GenerationParams,
}

impl<'a> ProductGenerator<'a> {
    pub fn new(chat: &'a dyn ChatCompletion, params: &'a GenerationParams) -> Self {
        Self { chat, params }
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, GenerationError> {
        let span = info_span!("generate_product", request_id = %Uuid::new_v4());
        self.run(request).instrument(span).await
    }

    async fn run(&self, request: &GenerationRequest) -> Result<GenerationResult, GenerationError> {
        let product_names = self.generate_product_names(request).await?;

        let required = required_names();
        if product_names.len() < required {
            return Err(GenerationError::InsufficientNames {
                returned: product_names.len(),
                required,
            });
        }

        let ads = self.generate_ad_transcripts(&product_names).await?;
        let safety_warning = self
            .generate_safety_warning(&product_names[SAFETY_WARNING_NAME_INDEX])
            .await?;

        Ok(GenerationResult {
            product_names,
            tv_ad_young_adults: ads.tv_young_adults,
            facebook_ad_parents: ads.facebook_parents,
            radio_ad_parents: ads.radio_parents,
            safety_warning,
        })
    }

    async fn generate_product_names(&self, request: &GenerationRequest) -> Result<Vec<String>, GenerationError> {
        let reply = self
            .call(Stage::ProductNames, &prompts::product_names(request))
            .await?;
        let names = split_product_names(&reply);
        info!(count = names.len(), "generated product names");
        Ok(names)
    }

    async fn generate_ad_transcripts(&self, product_names: &[String]) -> Result<AdTranscripts, GenerationError> {
        let mut ads = AdTranscripts::default();

        for target in AD_TARGETS.iter() {
            let messages = prompts::ad_transcript(target, &product_names[target.name_index]);
            let transcript = self.call(Stage::AdTranscript(target.key), &messages).await?;
            info!(key = target.key.as_str(), "generated ad transcript");
            ads.insert(target.key, transcript);
        }

        Ok(ads)
    }

    async fn generate_safety_warning(&self, product_name: &str) -> Result<String, GenerationError> {
        let warning = self
            .call(Stage::SafetyWarning, &prompts::safety_warning(product_name))
            .await?;
        info!("generated safety warning");
        Ok(warning)
    }

    async fn call(&self, stage: Stage, messages: &[ChatMessage]) -> Result<String, GenerationError> {
        self.chat
            .generate(messages, self.params)
            .await
            .map_err(|source| GenerationError::Upstream { stage, source })
    }
}
