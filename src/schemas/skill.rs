//! Voice platform envelope schema definitions
//!
//! Rust equivalents of the custom-skill JSON interface: the intent request
//! the platform POSTs to the webhook, and the speech response it expects
//! back. Output speech is SSML, so response text must never contain a bare
//! ampersand.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Inbound request envelope
// ============================================================================

/// Top-level request envelope delivered by the voice platform.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillRequest {
    pub version: String,
    #[serde(default)]
    pub session: Option<Session>,
    pub request: Request,
}

impl SkillRequest {
    /// Application id the envelope was addressed to, if present.
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.application.as_ref())
            .map(|a| a.application_id.as_str())
    }
}

/// Session data accompanying a request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// The request body, tagged by platform request type.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    LaunchRequest,
    IntentRequest { intent: Intent },
    SessionEndedRequest,
    #[serde(other)]
    Unknown,
}

/// A resolved intent with its slots.
#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// Non-empty value of a named slot, trimmed.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(|s| s.value.as_deref())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// A named slot; the platform sends the slot even when nothing was captured.
#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

// ============================================================================
// Outbound response envelope
// ============================================================================

/// Top-level response envelope returned to the voice platform.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillResponse {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// SSML output speech.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String, // Always "SSML"
    pub ssml: String,
}

impl OutputSpeech {
    /// Wrap plain speech text in an SSML envelope.
    pub fn ssml(text: &str) -> Self {
        Self {
            speech_type: "SSML".to_string(),
            ssml: format!("<speak>{}</speak>", text),
        }
    }
}

impl SkillResponse {
    /// Speak `text` and end the session.
    pub fn tell(text: &str) -> Self {
        Self {
            version: "1.0".to_string(),
            response: ResponseBody {
                output_speech: Some(OutputSpeech::ssml(text)),
                reprompt: None,
                should_end_session: true,
            },
        }
    }

    /// Speak `text`, keep the session open, and reprompt on silence.
    pub fn ask(text: &str, reprompt: &str) -> Self {
        Self {
            version: "1.0".to_string(),
            response: ResponseBody {
                output_speech: Some(OutputSpeech::ssml(text)),
                reprompt: Some(Reprompt {
                    output_speech: OutputSpeech::ssml(reprompt),
                }),
                should_end_session: false,
            },
        }
    }

    /// Acknowledge without speaking (session-ended notifications).
    pub fn empty() -> Self {
        Self {
            version: "1.0".to_string(),
            response: ResponseBody {
                output_speech: None,
                reprompt: None,
                should_end_session: true,
            },
        }
    }
}
