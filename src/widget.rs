//! Configuration for the embedded support-chat widget.
//!
//! The widget itself is a third-party bundle mounted by the page; this module
//! only produces the camelCase JSON its loader consumes. No data flows from
//! the widget into the assessment pipeline.

use crate::Result;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatWidgetConfig {
    pub webhook_url: String,
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
    pub initial_messages: Vec<InitialMessage>,
    pub theme: WidgetTheme,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitialMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub text: String,
    pub from: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetTheme {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub bot_message_color: String,
    pub user_message_color: String,
    pub border_radius: String,
    pub font_family: String,
}

impl ChatWidgetConfig {
    /// Site defaults: Spanish copy and the firm's brand theme.
    pub fn for_site(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            title: "Asistente Migratorio".to_string(),
            subtitle: "¿En qué podemos ayudarte hoy?".to_string(),
            placeholder: "Escribe tu mensaje...".to_string(),
            initial_messages: vec![InitialMessage {
                message_type: "text".to_string(),
                text: "¡Hola! Soy tu asistente virtual de Fernández Méndez & Asociados. \
                       ¿Cómo podemos ayudarte con tu proceso migratorio?"
                    .to_string(),
                from: "bot".to_string(),
            }],
            theme: WidgetTheme {
                primary_color: "#1E40AF".to_string(),
                secondary_color: "#BFDBFE".to_string(),
                accent_color: "#059669".to_string(),
                text_color: "#374151".to_string(),
                bot_message_color: "#FFFFFF".to_string(),
                user_message_color: "#BFDBFE".to_string(),
                border_radius: "12px".to_string(),
                font_family: "Inter, sans-serif".to_string(),
            },
        }
    }

    /// Render the config as the JSON blob passed to the widget's `createChat`.
    pub fn to_init_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_config_serializes_camel_case() {
        let config = ChatWidgetConfig::for_site("https://example.test/webhook/chat");
        let json: serde_json::Value =
            serde_json::from_str(&config.to_init_json().unwrap()).unwrap();

        assert_eq!(json["webhookUrl"], "https://example.test/webhook/chat");
        assert_eq!(json["title"], "Asistente Migratorio");
        assert_eq!(json["initialMessages"][0]["type"], "text");
        assert_eq!(json["initialMessages"][0]["from"], "bot");
        assert_eq!(json["theme"]["primaryColor"], "#1E40AF");
        assert_eq!(json["theme"]["borderRadius"], "12px");
    }
}
