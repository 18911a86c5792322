//! Plain-text rendering of command results

use std::fmt::Write as _;

use mailtriage_core::{AnalysisState, FeedbackDraft, FormInput};
use mailtriage_domain::{
    AnalysisResult, HealthSnapshot, HealthState, HistoryRecord, StatusReport,
};

pub fn analysis(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Category:    {} ({}%)", result.category, result.confidence_percent());
    let _ = writeln!(out, "Summary:     {}", result.summary);
    if let Some(reason) = result.reason.as_deref().filter(|r| !r.trim().is_empty()) {
        let _ = writeln!(out, "Reason:      {reason}");
    }
    let _ = writeln!(out, "Model:       {}", result.model_used);
    let _ = writeln!(out, "Analysis ID: {}", result.id);
    let _ = writeln!(out);
    let _ = writeln!(out, "Suggested reply:");
    let _ = write!(out, "{}", result.suggested_reply);
    out
}

/// Reply and rating of the feedback being drafted
pub fn draft(draft: &FeedbackDraft) -> String {
    let edited = if draft.is_edited() { " (edited)" } else { "" };
    let rating = draft.rating().map_or_else(|| "not rated".to_string(), |r| format!("{r}/5"));
    format!("Reply{edited}:\n{}\nRating: {rating}", draft.reply())
}

pub fn history(records: &[HistoryRecord]) -> String {
    if records.is_empty() {
        return "No analyses yet.".to_string();
    }

    records
        .iter()
        .map(|record| {
            let percent = (record.confidence.clamp(0.0, 1.0) * 100.0).round() as u8;
            format!(
                "{}  {:<12} {:>3}%  {}  [{}]",
                record.display_timestamp(),
                record.category.to_string(),
                percent,
                record.summary,
                record.id
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn health(snapshot: Option<&HealthSnapshot>) -> String {
    let Some(snapshot) = snapshot else {
        return "Service: unreachable".to_string();
    };

    let model =
        if snapshot.openai_configured { "model configured" } else { "model NOT configured" };
    match snapshot.status {
        HealthState::Healthy => format!("Service: healthy ({model})"),
        HealthState::Degraded => format!("Service: degraded ({model})"),
        HealthState::Unknown => format!("Service: status unknown ({model})"),
    }
}

pub fn status(report: &StatusReport) -> String {
    let mut out = format!("Analysis {}: {}", report.id, report.status);
    if let Some(category) = report.category {
        let _ = write!(out, "\nCategory:   {category}");
    }
    if let Some(confidence) = report.confidence {
        let _ = write!(out, "\nConfidence: {}%", (confidence.clamp(0.0, 1.0) * 100.0).round());
    }
    if let Some(created_at) = report.created_at.as_deref() {
        let _ = write!(out, "\nCreated:    {created_at}");
    }
    out
}

/// One-line description of what the form currently holds
pub fn form(input: &FormInput) -> String {
    match input {
        FormInput::Empty => "Form: empty".to_string(),
        FormInput::File(file) => format!("Form: file {} ({} bytes)", file.name, file.size),
        FormInput::Text(text) => format!("Form: text ({} characters)", text.chars().count()),
    }
}

pub fn state(state: &AnalysisState) -> String {
    match state {
        AnalysisState::Idle => "Ready".to_string(),
        AnalysisState::Submitting { mode } => format!("Analysing {mode}..."),
        AnalysisState::Success(outcome) => {
            format!("{}\n\n{}", analysis(&outcome.result), draft(&outcome.draft))
        }
        AnalysisState::Failure { message } => format!("Error: {message}"),
    }
}
