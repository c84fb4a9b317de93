//! Gemini `generateContent` payload types for the assessment call.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Text content part. The assessment call never carries inline media.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Request envelope for `generateContent`.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Schema,
}

/// Subset of Gemini's OpenAPI-style schema language used by this crate.
#[derive(Debug, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    String,
    Array,
}

impl Schema {
    fn string() -> Self {
        Self {
            schema_type: SchemaType::String,
            properties: None,
            items: None,
            required: None,
        }
    }

    fn array_of(items: Schema) -> Self {
        Self {
            schema_type: SchemaType::Array,
            properties: None,
            items: Some(Box::new(items)),
            required: None,
        }
    }
}

/// The fixed output shape the model is held to: an object with a string
/// `assessment` and a string-array `suggestedPathways`, both required.
pub fn assessment_schema() -> Schema {
    let mut properties = BTreeMap::new();
    properties.insert("assessment".to_string(), Schema::string());
    properties.insert(
        "suggestedPathways".to_string(),
        Schema::array_of(Schema::string()),
    );

    Schema {
        schema_type: SchemaType::Object,
        properties: Some(properties),
        items: None,
        required: Some(vec![
            "assessment".to_string(),
            "suggestedPathways".to_string(),
        ]),
    }
}

/// Top-level `generateContent` response envelope.
///
/// `candidates` defaults to empty so an envelope without the field decodes
/// and is reported as an empty response instead of a decode failure.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by Gemini.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}
