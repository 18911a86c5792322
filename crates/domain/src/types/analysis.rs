//! Classification results as returned by `POST /api/process`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;

/// Email category assigned by the classification service.
///
/// The service speaks Portuguese on the wire (`"Produtivo"` /
/// `"Improdutivo"`); the client displays the English label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum Category {
    /// The email asks for an action or a reply
    #[serde(rename = "Produtivo")]
    Productive,
    /// Informational or dismissible email
    #[serde(rename = "Improdutivo")]
    Unproductive,
}

impl Category {
    /// Value used by the classification service
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Productive => "Produtivo",
            Self::Unproductive => "Improdutivo",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Productive => write!(f, "Productive"),
            Self::Unproductive => write!(f, "Unproductive"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts the English label or the wire name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "productive" | "produtivo" => Ok(Self::Productive),
            "unproductive" | "improdutivo" => Ok(Self::Unproductive),
            _ => Err(format!("Invalid Category: {}", s)),
        }
    }
}

/// A single analysis produced by the classification service.
///
/// Immutable once received. Local edits of the suggested reply live in the
/// feedback draft, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AnalysisResult {
    /// Opaque analysis identifier (a UUID on the current backend)
    pub id: String,
    pub category: Category,
    /// Classification confidence in `[0, 1]`
    pub confidence: f64,
    pub suggested_reply: String,
    pub summary: String,
    /// Model that produced the classification (e.g. "gpt-4o-mini")
    pub model_used: String,
    /// ISO-8601 timestamp, kept verbatim as sent by the service
    pub timestamp: String,
    /// Justification of the classification, when the model gave one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AnalysisResult {
    /// Confidence as a whole percentage, rounded like the web client
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    /// First eight characters of the id, for compact display
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }
}

/// Server-side lifecycle of an analysis (`GET /api/status/{id}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum AnalysisStatus {
    Completed,
    Processing,
    Failed,
    NotFound,
}

impl_domain_status_conversions!(AnalysisStatus {
    Completed => "completed",
    Processing => "processing",
    Failed => "failed",
    NotFound => "not_found",
});

/// Status lookup response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct StatusReport {
    pub id: String,
    pub status: AnalysisStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "3f2c9a8e-5b1d-4c7e-9f00-1a2b3c4d5e6f",
            "category": "Produtivo",
            "confidence": 0.92,
            "suggested_reply": "Olá, segue o relatório.",
            "summary": "Pedido do relatório do 3º trimestre",
            "model_used": "gpt-4o-mini",
            "timestamp": "2025-03-14T12:30:00"
        }"#
    }

    #[test]
    fn deserializes_service_payload_without_reason() {
        let result: AnalysisResult = serde_json::from_str(sample_json()).expect("should parse");

        assert_eq!(result.category, Category::Productive);
        assert_eq!(result.confidence_percent(), 92);
        assert_eq!(result.short_id(), "3f2c9a8e");
        assert!(result.reason.is_none());
    }

    #[test]
    fn absent_reason_is_not_serialized_as_null() {
        let result: AnalysisResult = serde_json::from_str(sample_json()).expect("should parse");
        let value = serde_json::to_value(&result).expect("should serialize");

        assert!(value.get("reason").is_none());
        assert_eq!(value["category"], "Produtivo");
    }

    #[test]
    fn category_parses_english_and_wire_names() {
        assert_eq!("Improdutivo".parse::<Category>().unwrap(), Category::Unproductive);
        assert_eq!("productive".parse::<Category>().unwrap(), Category::Productive);
        assert!("spam".parse::<Category>().is_err());
        assert_eq!(Category::Unproductive.to_string(), "Unproductive");
    }

    #[test]
    fn status_report_accepts_not_found_without_details() {
        let report: StatusReport =
            serde_json::from_str(r#"{ "id": "abc", "status": "not_found" }"#).expect("parse");

        assert_eq!(report.status, AnalysisStatus::NotFound);
        assert_eq!(report.status.to_string(), "not_found");
        assert!(report.category.is_none());
    }
}
