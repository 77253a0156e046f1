//! Item Editor
//!
//! Ordered list of item rows with a floor of one row, plus the pure
//! extraction that turns row state into validated items.

use crate::error::FormError;
use crate::models::{ItemRow, SaleStatus, ValidatedItem};
use crate::validation::{parse_price, ParsedPrice};

/// A single field edit coming from the view
#[derive(Debug, Clone, PartialEq)]
pub enum RowEdit {
    Description(String),
    Price(String),
    SaleStatus(SaleStatus),
    Note(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemEditor {
    rows: Vec<ItemRow>,
    next_id: u32,
}

impl Default for ItemEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemEditor {
    pub fn new() -> Self {
        let mut editor = Self { rows: Vec::new(), next_id: 1 };
        editor.initialize();
        editor
    }

    /// Drop all rows and start over with a single empty row (id 1)
    pub fn initialize(&mut self) {
        self.rows.clear();
        self.rows.push(ItemRow::empty(1));
        self.next_id = 2;
    }

    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    pub fn row(&self, id: u32) -> Option<&ItemRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Append an empty row and return its id
    pub fn add_row(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(ItemRow::empty(id));
        id
    }

    /// Remove a row, or clear it if it is the only one left
    pub fn remove_row(&mut self, id: u32) {
        if self.rows.len() > 1 {
            self.rows.retain(|row| row.id != id);
        } else if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.clear();
        }
    }

    pub fn update_row(&mut self, id: u32, edit: RowEdit) {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            return;
        };
        match edit {
            RowEdit::Description(text) => row.description = text,
            RowEdit::Price(text) => row.price = text,
            RowEdit::SaleStatus(status) => row.sale_status = status,
            RowEdit::Note(text) => row.note = text,
        }
    }

    /// Validate rows in order.
    ///
    /// Rows with no description and a blank or zero price are skipped. The
    /// first invalid row aborts extraction. An empty `Ok` is left to the
    /// caller to reject.
    pub fn extract(&self) -> Result<Vec<ValidatedItem>, FormError> {
        let mut items = Vec::with_capacity(self.rows.len());

        for row in &self.rows {
            let description = row.description.trim();
            let note = row.note.trim();
            let price = parse_price(&row.price);

            if description.is_empty() && price.is_empty_or_zero() {
                continue;
            }

            if description.is_empty() {
                return Err(FormError::MissingDescription { row_id: row.id });
            }

            let ParsedPrice::Value(price) = price else {
                return Err(FormError::MissingPrice { row_id: row.id });
            };

            items.push(ValidatedItem {
                description: description.to_string(),
                price,
                sale_status: row.sale_status,
                note: note.to_string(),
            });
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(rows: &[(&str, &str)]) -> ItemEditor {
        let mut editor = ItemEditor::new();
        for (i, (description, price)) in rows.iter().enumerate() {
            let id = if i == 0 { 1 } else { editor.add_row() };
            editor.update_row(id, RowEdit::Description(description.to_string()));
            editor.update_row(id, RowEdit::Price(price.to_string()));
        }
        editor
    }

    #[test]
    fn test_starts_with_one_empty_row() {
        let editor = ItemEditor::new();
        assert_eq!(editor.rows(), &[ItemRow::empty(1)]);
    }

    #[test]
    fn test_add_row_appends() {
        let mut editor = ItemEditor::new();
        let second = editor.add_row();
        let third = editor.add_row();
        assert_eq!(second, 2);
        assert_eq!(third, 3);
        let ids: Vec<u32> = editor.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_ids_stay_unique_after_removal() {
        let mut editor = ItemEditor::new();
        editor.add_row();
        editor.add_row();
        editor.remove_row(2);
        let added = editor.add_row();
        assert_eq!(added, 4);
        let ids: Vec<u32> = editor.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_remove_last_row_clears_it() {
        let mut editor = editor_with(&[("eggs", "4.99")]);
        editor.update_row(1, RowEdit::SaleStatus(SaleStatus::Sale));
        editor.update_row(1, RowEdit::Note("dozen".to_string()));

        editor.remove_row(1);

        assert_eq!(editor.rows().len(), 1);
        assert_eq!(editor.rows()[0], ItemRow::empty(1));
    }

    #[test]
    fn test_remove_never_reaches_zero_rows() {
        let mut editor = ItemEditor::new();
        let id = editor.add_row();
        editor.remove_row(1);
        editor.remove_row(id);
        editor.remove_row(id);
        assert_eq!(editor.rows().len(), 1);
        assert_eq!(editor.rows()[0].id, id);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut editor = editor_with(&[("eggs", "4.99"), ("milk", "2.50")]);
        let before = editor.clone();
        editor.remove_row(42);
        assert_eq!(editor, before);
    }

    #[test]
    fn test_initialize_resets_to_single_row() {
        let mut editor = editor_with(&[("eggs", "4.99"), ("milk", "2.50"), ("bread", "3")]);
        editor.initialize();
        assert_eq!(editor.rows(), &[ItemRow::empty(1)]);
        assert_eq!(editor.add_row(), 2);
    }

    #[test]
    fn test_extract_trims_and_keeps_order() {
        let mut editor = editor_with(&[("  eggs ", "4.99"), ("milk", " 2.50 ")]);
        editor.update_row(1, RowEdit::SaleStatus(SaleStatus::Sale));
        editor.update_row(2, RowEdit::Note("  2% ".to_string()));

        let items = editor.extract().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "eggs");
        assert_eq!(items[0].price, 4.99);
        assert_eq!(items[0].sale_status, SaleStatus::Sale);
        assert_eq!(items[1].description, "milk");
        assert_eq!(items[1].price, 2.50);
        assert_eq!(items[1].note, "2%");
    }

    #[test]
    fn test_extract_skips_blank_and_zero_rows() {
        let editor = editor_with(&[("", ""), ("eggs", "4.99"), ("   ", "0"), ("", "0.00")]);
        let items = editor.extract().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "eggs");
    }

    #[test]
    fn test_extract_all_blank_is_empty() {
        let editor = editor_with(&[("", ""), ("", "")]);
        assert_eq!(editor.extract().unwrap(), vec![]);
    }

    #[test]
    fn test_described_row_without_price_is_error() {
        let editor = editor_with(&[("eggs", "4.99"), ("milk", "")]);
        assert_eq!(editor.extract(), Err(FormError::MissingPrice { row_id: 2 }));
    }

    #[test]
    fn test_described_row_with_invalid_price_is_error() {
        for bad in ["abc", "-3", "NaN"] {
            let editor = editor_with(&[("milk", bad)]);
            assert_eq!(editor.extract(), Err(FormError::MissingPrice { row_id: 1 }));
        }
    }

    #[test]
    fn test_price_without_description_is_error() {
        let editor = editor_with(&[("", "3.25")]);
        assert_eq!(editor.extract(), Err(FormError::MissingDescription { row_id: 1 }));
    }

    #[test]
    fn test_first_error_wins() {
        let editor = editor_with(&[("", "1"), ("milk", "")]);
        assert_eq!(editor.extract(), Err(FormError::MissingDescription { row_id: 1 }));
    }

    #[test]
    fn test_described_free_item_is_kept() {
        let editor = editor_with(&[("sample", "0")]);
        let items = editor.extract().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price, 0.0);
    }

    #[test]
    fn test_extract_does_not_modify_rows() {
        let editor = editor_with(&[(" eggs ", " 4.99 "), ("", "")]);
        let before = editor.clone();
        let _ = editor.extract();
        assert_eq!(editor, before);
    }
}
