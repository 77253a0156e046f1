//! Form Models
//!
//! Data structures shared by the editor, the submit controller and the view.

use serde::{Deserialize, Serialize};

/// Sale status selected for an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    #[default]
    Unspecified,
    Sale,
    Regular,
}

impl SaleStatus {
    /// Value used in the `<select>` element
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Unspecified => "",
            SaleStatus::Sale => "sale",
            SaleStatus::Regular => "regular",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "sale" => SaleStatus::Sale,
            "regular" => SaleStatus::Regular,
            _ => SaleStatus::Unspecified,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SaleStatus::Unspecified => "Sale status",
            SaleStatus::Sale => "On sale",
            SaleStatus::Regular => "Regular price",
        }
    }
}

/// Sale status options in display order
pub const SALE_STATUSES: &[SaleStatus] = &[
    SaleStatus::Unspecified,
    SaleStatus::Sale,
    SaleStatus::Regular,
];

/// One editable line in the item editor.
///
/// `price` keeps the raw field text so that a blank field can be told apart
/// from an explicit zero at extraction time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemRow {
    pub id: u32,
    pub description: String,
    pub price: String,
    pub sale_status: SaleStatus,
    pub note: String,
}

impl ItemRow {
    pub fn empty(id: u32) -> Self {
        Self { id, ..Default::default() }
    }

    /// Reset every field to its default, keeping the id
    pub fn clear(&mut self) {
        *self = Self::empty(self.id);
    }
}

/// A row that passed extraction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedItem {
    pub description: String,
    pub price: f64,
    pub sale_status: SaleStatus,
    pub note: String,
}

/// Payload assembled for one successful submit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionDraft {
    pub zip: String,
    pub currency: String,
    pub store: Option<String>,
    pub items: Vec<ValidatedItem>,
    pub total_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// The single status line shown under the form
#[derive(Debug, Clone, PartialEq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, text: text.into() }
    }
}

/// Field that should receive focus after a failed action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Zip,
    Description(u32),
    Price(u32),
}

impl FocusTarget {
    /// DOM id of the rendered input
    pub fn element_id(&self) -> String {
        match self {
            FocusTarget::Zip => "zip".to_string(),
            FocusTarget::Description(id) => description_input_id(*id),
            FocusTarget::Price(id) => price_input_id(*id),
        }
    }
}

pub fn description_input_id(row_id: u32) -> String {
    format!("item-{}-description", row_id)
}

pub fn price_input_id(row_id: u32) -> String {
    format!("item-{}-price", row_id)
}
