//! Analytics Events
//!
//! One event per successful submission. Delivery is best-effort: a sink
//! that is not available is skipped and nothing it does can fail a submit.

use serde::Serialize;

use crate::models::SubmissionDraft;

pub const EVENT_CATEGORY: &str = "contribution";
pub const EVENT_LABEL: &str = "price_form";

/// Parameters sent with the submission event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionEvent {
    pub event_category: &'static str,
    pub event_label: &'static str,
    pub items_count: usize,
    pub total_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl SubmissionEvent {
    pub fn from_draft(draft: &SubmissionDraft) -> Self {
        Self {
            event_category: EVENT_CATEGORY,
            event_label: EVENT_LABEL,
            items_count: draft.items.len(),
            total_value: draft.total_value,
            zip: non_empty(&draft.zip),
            currency: non_empty(&draft.currency),
            store: draft.store.as_deref().and_then(non_empty),
        }
    }
}

/// Destination for analytics events
pub trait AnalyticsSink {
    /// Whether the hosting environment provides the sink at all
    fn is_available(&self) -> bool;

    fn emit(&self, event_name: &str, event: &SubmissionEvent);
}

/// Emit through `sink` only if it is available. Returns whether it was called.
pub fn track_submission(sink: &dyn AnalyticsSink, event_name: &str, draft: &SubmissionDraft) -> bool {
    if !sink.is_available() {
        return false;
    }
    sink.emit(event_name, &SubmissionEvent::from_draft(draft));
    true
}
