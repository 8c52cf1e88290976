use crate::services::llm::ChatMessage;

use super::schema::GenerationRequest;

/// Which slot of the response an ad transcript fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdKey {
    TvYoungAdults,
    FacebookParents,
    RadioParents,
}

impl AdKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdKey::TvYoungAdults => "tv_ad_young_adults",
            AdKey::FacebookParents => "facebook_ad_parents",
            AdKey::RadioParents => "radio_ad_parents",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdTarget {
    pub key: AdKey,
    pub channel: &'static str,
    pub audience: &'static str,
    pub name_index: usize,
}

/// Ad transcripts are generated in this order.
pub const AD_TARGETS: [AdTarget; 3] = [
    AdTarget {
        key: AdKey::TvYoungAdults,
        channel: "TV",
        audience: "young adults",
        name_index: 0,
    },
    AdTarget {
        key: AdKey::FacebookParents,
        channel: "Facebook",
        audience: "parents",
        name_index: 1,
    },
    AdTarget {
        key: AdKey::RadioParents,
        channel: "Radio",
        audience: "parents",
        name_index: 2,
    },
];

/// Index of the name the safety warning is written for.
pub const SAFETY_WARNING_NAME_INDEX: usize = 0;

pub fn product_names(request: &GenerationRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(
            "You will be provided with a product description and seed words, and your task is to generate top 3 product names.",
        ),
        ChatMessage::user(format!(
            "Product description: {}\nSeed words: {}.",
            request.product_description, request.vibe_words
        )),
    ]
}

pub fn ad_transcript(target: &AdTarget, product_name: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(format!(
            "You are a marketing team preparing a {} ad for a new product. Target audience: {}.",
            target.channel, target.audience
        )),
        ChatMessage::user(format!(
            "Generate a {} ad transcript for the product: {}.",
            target.channel, product_name
        )),
    ]
}

pub fn safety_warning(product_name: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("Write a safety warning for this product"),
        ChatMessage::user(format!("Product: {}.", product_name)),
    ]
}
