//! Tone analysis data models
//!
//! This module defines the inbound parameter set, the outbound request
//! shapes, and the normalized upstream response used by the proxy.

use crate::core::constants::tone;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tone category filter recognized by the upstream API
///
/// Restricts the analysis response to a single upstream-defined category.
/// Values outside the recognized set are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneCategory {
    Emotion,
    Language,
    Social,
}

impl ToneCategory {
    /// Parse a category name, case-insensitively
    ///
    /// Returns `None` for anything outside the recognized set.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            tone::EMOTION => Some(ToneCategory::Emotion),
            tone::LANGUAGE => Some(ToneCategory::Language),
            tone::SOCIAL => Some(ToneCategory::Social),
            _ => None,
        }
    }

    /// The wire name of this category
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneCategory::Emotion => tone::EMOTION,
            ToneCategory::Language => tone::LANGUAGE,
            ToneCategory::Social => tone::SOCIAL,
        }
    }
}

/// Inbound parameters, from either a GET query string or a POST JSON body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeParams {
    pub text: Option<String>,
    pub sentences: Option<String>,
    pub tones: Option<String>,
}

/// A validated analysis request handed to the analyzer
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub text: String,
    pub sentences: bool,
    pub tones: Option<ToneCategory>,
}

/// JSON body used when the text is too long for a query parameter
#[derive(Debug, Clone, Serialize)]
pub struct ToneRequestBody {
    pub text: String,
}

/// Normalized upstream response
///
/// Constructed once per call and never mutated. A non-2xx upstream status
/// is a normal value here, not an error.
#[derive(Debug, Clone)]
pub struct ToneResponse {
    pub status_code: u16,
    pub headers: HashMap<String, Vec<String>>,
    pub body: String,
}

/// Typed view of an upstream analysis body
///
/// The proxy relays bodies verbatim; this view exists for the places that
/// look inside one, such as the connectivity probe.
#[derive(Debug, Clone, Deserialize)]
pub struct ToneAnalysis {
    pub document_tone: DocumentTone,
    #[serde(default)]
    pub sentences_tone: Vec<SentenceTone>,
}

/// Document-level tone breakdown
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentTone {
    pub tone_categories: Vec<ToneCategoryScores>,
}

/// Scores for one tone category
#[derive(Debug, Clone, Deserialize)]
pub struct ToneCategoryScores {
    pub category_id: String,
    pub category_name: String,
    pub tones: Vec<ToneScore>,
}

/// A single scored tone
#[derive(Debug, Clone, Deserialize)]
pub struct ToneScore {
    pub score: f64,
    pub tone_id: String,
    pub tone_name: String,
}

/// Per-sentence tone breakdown
#[derive(Debug, Clone, Deserialize)]
pub struct SentenceTone {
    pub sentence_id: u32,
    pub text: String,
    pub tone_categories: Vec<ToneCategoryScores>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_categories() {
        assert_eq!(ToneCategory::parse("emotion"), Some(ToneCategory::Emotion));
        assert_eq!(ToneCategory::parse("language"), Some(ToneCategory::Language));
        assert_eq!(ToneCategory::parse("social"), Some(ToneCategory::Social));
    }

    #[test]
    fn test_parse_is_case_tolerant() {
        assert_eq!(ToneCategory::parse("Emotion"), Some(ToneCategory::Emotion));
        assert_eq!(ToneCategory::parse("SOCIAL"), Some(ToneCategory::Social));
    }

    #[test]
    fn test_parse_rejects_unrecognized_values() {
        assert_eq!(ToneCategory::parse("invalid"), None);
        assert_eq!(ToneCategory::parse(""), None);
        assert_eq!(ToneCategory::parse("emotions"), None);
    }

    #[test]
    fn test_category_wire_names_round_trip() {
        for category in [
            ToneCategory::Emotion,
            ToneCategory::Language,
            ToneCategory::Social,
        ] {
            assert_eq!(ToneCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_params_deserialize_from_json() {
        let params: AnalyzeParams =
            serde_json::from_str(r#"{"text": "hello", "sentences": "false", "tones": "emotion"}"#)
                .unwrap();
        assert_eq!(params.text.as_deref(), Some("hello"));
        assert_eq!(params.sentences.as_deref(), Some("false"));
        assert_eq!(params.tones.as_deref(), Some("emotion"));
    }

    #[test]
    fn test_params_fields_are_optional() {
        let params: AnalyzeParams = serde_json::from_str("{}").unwrap();
        assert!(params.text.is_none());
        assert!(params.sentences.is_none());
        assert!(params.tones.is_none());
    }

    #[test]
    fn test_analysis_body_deserializes() {
        let body = r#"{
            "document_tone": {
                "tone_categories": [{
                    "category_id": "emotion_tone",
                    "category_name": "Emotion Tone",
                    "tones": [
                        {"score": 0.25482, "tone_id": "anger", "tone_name": "Anger"},
                        {"score": 0.62165, "tone_id": "joy", "tone_name": "Joy"}
                    ]
                }]
            },
            "sentences_tone": [{
                "sentence_id": 0,
                "text": "Hello there.",
                "tone_categories": []
            }]
        }"#;

        let analysis: ToneAnalysis = serde_json::from_str(body).unwrap();
        assert_eq!(analysis.document_tone.tone_categories.len(), 1);
        assert_eq!(
            analysis.document_tone.tone_categories[0].category_name,
            "Emotion Tone"
        );
        assert_eq!(analysis.document_tone.tone_categories[0].tones[1].tone_id, "joy");
        assert_eq!(analysis.sentences_tone.len(), 1);
        assert_eq!(analysis.sentences_tone[0].sentence_id, 0);
        assert_eq!(analysis.sentences_tone[0].text, "Hello there.");
    }
}
