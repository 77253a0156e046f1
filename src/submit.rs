//! Submit Controller
//!
//! One submit cycle over the form state: validate, aggregate, report, reset.

use leptos::logging::log;

use crate::analytics::{track_submission, AnalyticsSink};
use crate::error::FormError;
use crate::models::{FocusTarget, FormMessage, SubmissionDraft};
use crate::store::FormState;
use crate::validation::is_valid_zip;

pub const SUCCESS_MESSAGE: &str =
    "Thank you! In this demo, your entry is not stored yet – but the submission flow is working.";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted {
        draft: SubmissionDraft,
        /// Whether the analytics sink was called
        tracked: bool,
    },
    Rejected {
        error: FormError,
        focus: Option<FocusTarget>,
    },
}

/// Build the submission from current state without touching it
pub fn build_draft(state: &FormState) -> Result<SubmissionDraft, FormError> {
    if !is_valid_zip(&state.zip) {
        return Err(FormError::InvalidZip);
    }

    let items = state.editor.extract()?;
    if items.is_empty() {
        return Err(FormError::NoItems);
    }

    let total_value: f64 = items.iter().map(|item| item.price).sum();
    let store = state.store_name.trim();

    Ok(SubmissionDraft {
        zip: state.zip.trim().to_string(),
        currency: state.currency.trim().to_string(),
        store: (!store.is_empty()).then(|| store.to_string()),
        items,
        total_value,
    })
}

/// Run a full submit cycle. On success the form is reset; on failure every
/// entered value is left as it was.
pub fn handle_submit(state: &mut FormState, sink: &dyn AnalyticsSink, event_name: &str) -> SubmitOutcome {
    match build_draft(state) {
        Ok(draft) => {
            let tracked = track_submission(sink, event_name, &draft);
            log!(
                "[Submit] Accepted {} items, total {:.2}, analytics={}",
                draft.items.len(),
                draft.total_value,
                tracked
            );

            state.message = Some(FormMessage::success(SUCCESS_MESSAGE));
            state.clear_fields();
            state.editor.initialize();

            SubmitOutcome::Accepted { draft, tracked }
        }
        Err(error) => {
            let focus = error.focus().or_else(|| {
                state.editor.rows().first().map(|row| FocusTarget::Description(row.id))
            });
            state.message = Some(FormMessage::error(error.to_string()));
            SubmitOutcome::Rejected { error, focus }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testing::RecordingSink;
    use crate::editor::RowEdit;
    use crate::models::{ItemRow, MessageKind, SaleStatus};

    const EVENT: &str = "price_submission";

    fn state_with(zip: &str, rows: &[(&str, &str)]) -> FormState {
        let mut state = FormState::new();
        state.zip = zip.to_string();
        state.currency = "USD".to_string();
        for (i, (description, price)) in rows.iter().enumerate() {
            let id = if i == 0 { 1 } else { state.editor.add_row() };
            state.editor.update_row(id, RowEdit::Description(description.to_string()));
            state.editor.update_row(id, RowEdit::Price(price.to_string()));
        }
        state
    }

    #[test]
    fn test_single_item_success() {
        let mut state = state_with("94103", &[("eggs", "4.99")]);
        state.editor.update_row(1, RowEdit::SaleStatus(SaleStatus::Sale));
        let sink = RecordingSink::new();

        let outcome = handle_submit(&mut state, &sink, EVENT);

        let (draft, tracked) = match outcome {
            SubmitOutcome::Accepted { draft, tracked } => (draft, tracked),
            other => panic!("expected success, got {:?}", other),
        };
        assert!(tracked);
        assert_eq!(draft.items[0].sale_status, SaleStatus::Sale);
        assert_eq!(state.message.as_ref().unwrap().kind, MessageKind::Success);
        assert_eq!(state.message.as_ref().unwrap().text, SUCCESS_MESSAGE);

        let events = sink.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1.items_count, 1);
        assert_eq!(events[0].1.total_value, 4.99);
        assert_eq!(events[0].1.zip.as_deref(), Some("94103"));
        assert_eq!(events[0].1.currency.as_deref(), Some("USD"));
        assert_eq!(events[0].1.store, None);
    }

    #[test]
    fn test_total_is_sum_of_prices() {
        let state = state_with("94103", &[("eggs", "4.99"), ("milk", "2.50")]);
        let draft = build_draft(&state).unwrap();
        assert_eq!(draft.total_value, 7.49);
    }

    #[test]
    fn test_total_keeps_sub_cent_prices() {
        let state = state_with("94103", &[("bolts", "1.005"), ("washers", "2.001")]);
        let draft = build_draft(&state).unwrap();
        let sum: f64 = draft.items.iter().map(|item| item.price).sum();
        assert_eq!(draft.total_value, sum);
        assert_eq!(draft.total_value, 1.005 + 2.001);
        assert_ne!(draft.total_value, 3.01);
    }

    #[test]
    fn test_success_resets_form() {
        let mut state = state_with("94103", &[("eggs", "4.99"), ("milk", "2.50")]);
        state.store_name = "Corner Market".to_string();

        handle_submit(&mut state, &RecordingSink::new(), EVENT);

        assert_eq!(state.zip, "");
        assert_eq!(state.currency, "");
        assert_eq!(state.store_name, "");
        assert_eq!(state.editor.rows(), &[ItemRow::empty(1)]);
    }

    #[test]
    fn test_bad_zip_rejected_without_side_effects() {
        let mut state = state_with("941", &[("eggs", "4.99")]);
        let sink = RecordingSink::new();

        let outcome = handle_submit(&mut state, &sink, EVENT);

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected { error: FormError::InvalidZip, focus: Some(FocusTarget::Zip) }
        );
        let message = state.message.clone().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert!(message.text.contains("5-digit ZIP"));
        assert!(sink.events.borrow().is_empty());
        assert_eq!(state.zip, "941");
        assert_eq!(state.editor.rows()[0].description, "eggs");
    }

    #[test]
    fn test_all_blank_rows_rejected() {
        let mut state = state_with("94103", &[("", ""), ("", "")]);
        let sink = RecordingSink::new();

        let outcome = handle_submit(&mut state, &sink, EVENT);

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected { error: FormError::NoItems, focus: Some(FocusTarget::Description(1)) }
        );
        assert_eq!(state.message.unwrap().text, "Please enter at least one purchased item.");
        assert!(sink.events.borrow().is_empty());
        assert_eq!(state.editor.rows().len(), 2);
    }

    #[test]
    fn test_row_error_focuses_offending_field() {
        let mut state = state_with("94103", &[("eggs", "4.99"), ("milk", "")]);
        let outcome = handle_submit(&mut state, &RecordingSink::new(), EVENT);
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                error: FormError::MissingPrice { row_id: 2 },
                focus: Some(FocusTarget::Price(2)),
            }
        );
        assert_eq!(state.editor.rows()[1].description, "milk");
    }

    #[test]
    fn test_missing_analytics_does_not_block_submit() {
        let mut state = state_with("94103", &[("eggs", "4.99")]);
        let outcome = handle_submit(&mut state, &RecordingSink::unavailable(), EVENT);
        assert!(matches!(outcome, SubmitOutcome::Accepted { tracked: false, .. }));
        assert_eq!(state.message.unwrap().kind, MessageKind::Success);
    }

    #[test]
    fn test_store_name_trimmed_and_optional() {
        let mut state = state_with(" 94103 ", &[("eggs", "4.99")]);
        state.store_name = "  Corner Market ".to_string();
        let draft = build_draft(&state).unwrap();
        assert_eq!(draft.zip, "94103");
        assert_eq!(draft.store.as_deref(), Some("Corner Market"));

        state.store_name = "   ".to_string();
        assert_eq!(build_draft(&state).unwrap().store, None);
    }
}
