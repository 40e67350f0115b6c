use contracts::domain::a001_category::aggregate::{Category, CategoryDto, CategoryId};
use leptos::prelude::*;
use std::collections::HashMap;

use crate::domain::a001_category::api::SubmitRequest;
use crate::domain::a001_category::error::CategoryError;

/// Editable fields of the form draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Hidden,
    Create,
    Edit(CategoryId),
}

/// Whole UI state of the Category page.
///
/// The list is only ever replaced wholesale; `index` maps each id to the
/// position of its first occurrence in `items` and is rebuilt together with it.
/// While `submitting` is set the draft, edit target and form visibility are
/// frozen.
#[derive(Clone, Debug, Default)]
pub struct CategoryPageState {
    items: Vec<Category>,
    index: HashMap<CategoryId, usize>,
    pub form_visible: bool,
    pub draft: CategoryDto,
    pub edit_target: Option<CategoryId>,
    pub error: Option<String>,
    pub is_loaded: bool,
    pub submitting: bool,
    load_generation: u64,
}

impl CategoryPageState {
    /// Rows as displayed: 1-based index paired with the record
    pub fn rows(&self) -> impl Iterator<Item = (usize, &Category)> + '_ {
        self.items.iter().enumerate().map(|(i, c)| (i + 1, c))
    }

    pub fn find(&self, id: &CategoryId) -> Option<&Category> {
        self.index.get(id).and_then(|&pos| self.items.get(pos))
    }

    fn replace_items(&mut self, items: Vec<Category>) {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, c) in items.iter().enumerate() {
            index.entry(c.id.clone()).or_insert(pos);
        }
        self.index = index;
        self.items = items;
    }

    // ------------------------------------------------------------------
    // List loading
    // ------------------------------------------------------------------

    /// Start a list load; returns the generation the result must carry
    pub fn begin_load(&mut self) -> u64 {
        self.error = None;
        self.load_generation += 1;
        self.load_generation
    }

    /// Apply a successful load. Results of superseded loads are dropped.
    pub fn apply_loaded(&mut self, generation: u64, items: Vec<Category>) -> bool {
        if generation != self.load_generation {
            return false;
        }
        self.replace_items(items);
        self.is_loaded = true;
        true
    }

    /// Record a failed load; the cached list is left untouched
    pub fn fail_load(&mut self, generation: u64, err: &CategoryError) -> bool {
        if generation != self.load_generation {
            return false;
        }
        self.set_error(err);
        true
    }

    // ------------------------------------------------------------------
    // Form
    // ------------------------------------------------------------------

    pub fn form_mode(&self) -> FormMode {
        match (&self.edit_target, self.form_visible) {
            (_, false) => FormMode::Hidden,
            (None, true) => FormMode::Create,
            (Some(id), true) => FormMode::Edit(id.clone()),
        }
    }

    /// Flip form visibility. Hiding discards the draft and the edit target.
    pub fn toggle_form(&mut self) {
        if self.submitting {
            return;
        }
        self.form_visible = !self.form_visible;
        if !self.form_visible {
            self.reset_form();
        }
    }

    pub fn reset_form(&mut self) {
        self.draft = CategoryDto::default();
        self.edit_target = None;
    }

    pub fn update_draft_field(&mut self, field: DraftField, value: String) {
        if self.submitting {
            return;
        }
        match field {
            DraftField::Name => self.draft.name = value,
            DraftField::Description => self.draft.description = value,
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.draft.is_complete()
    }

    /// Open the form for an existing row. Unknown ids are ignored, as is any
    /// edit while a submit is pending.
    pub fn begin_edit(&mut self, id: &CategoryId) -> bool {
        if self.submitting {
            return false;
        }
        let Some(category) = self.find(id) else {
            return false;
        };
        self.draft = CategoryDto::from(category);
        self.edit_target = Some(id.clone());
        self.form_visible = true;
        true
    }

    /// Build the write request for the current draft and mark it in flight.
    ///
    /// Returns `None` for an incomplete draft or while another submit is
    /// pending.
    pub fn submit_request(&mut self) -> Option<SubmitRequest> {
        if self.submitting || !self.is_form_valid() {
            return None;
        }
        self.error = None;
        self.submitting = true;

        let dto = self.draft.clone();
        Some(match &self.edit_target {
            Some(id) => SubmitRequest::Update(id.clone(), dto),
            None => SubmitRequest::Create(dto),
        })
    }

    /// The write succeeded: start the list reload. The form stays open and
    /// frozen until [`finish_submit_ok`](Self::finish_submit_ok).
    pub fn submit_succeeded(&mut self) -> u64 {
        self.begin_load()
    }

    /// Close the form once the post-write reload has settled
    pub fn finish_submit_ok(&mut self) {
        self.submitting = false;
        self.form_visible = false;
        self.reset_form();
    }

    /// Keep the form open with the draft intact
    pub fn fail_submit(&mut self, err: &CategoryError) {
        self.submitting = false;
        self.set_error(err);
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Gate a delete on the user's answer to the confirmation dialog.
    /// A declined delete changes nothing.
    pub fn begin_delete(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        self.error = None;
        true
    }

    /// The delete succeeded: start the list reload
    pub fn delete_succeeded(&mut self) -> u64 {
        self.begin_load()
    }

    /// The cached list is left untouched
    pub fn fail_delete(&mut self, err: &CategoryError) {
        self.set_error(err);
    }

    // ------------------------------------------------------------------
    // Errors and labels
    // ------------------------------------------------------------------

    pub fn set_error(&mut self, err: &CategoryError) {
        self.error = Some(err.to_string());
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.form_mode() {
            FormMode::Hidden => "Add Category",
            FormMode::Create | FormMode::Edit(_) => "Cancel",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.form_mode() {
            FormMode::Edit(_) => "Update",
            FormMode::Hidden | FormMode::Create => "Submit",
        }
    }
}

pub fn create_state() -> RwSignal<CategoryPageState> {
    RwSignal::new(CategoryPageState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::error::ApiFailure;

    fn category(id: i64, name: &str, description: &str) -> Category {
        Category {
            id: CategoryId::from(id),
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn loaded(items: Vec<Category>) -> CategoryPageState {
        let mut state = CategoryPageState::default();
        let generation = state.begin_load();
        assert!(state.apply_loaded(generation, items));
        state
    }

    fn fill_draft(state: &mut CategoryPageState, name: &str, description: &str) {
        state.update_draft_field(DraftField::Name, name.to_string());
        state.update_draft_field(DraftField::Description, description.to_string());
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        let state = loaded(vec![
            category(10, "Books", "Paper"),
            category(20, "Games", "Boards"),
            category(30, "Music", "Vinyl"),
        ]);

        let rows: Vec<(usize, String)> = state
            .rows()
            .map(|(n, c)| (n, c.name.clone()))
            .collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], (1, "Books".to_string()));
        assert_eq!(rows[2], (3, "Music".to_string()));
        assert!(state.is_loaded);
    }

    #[test]
    fn test_failed_load_keeps_previous_list() {
        let mut state = loaded(vec![category(1, "Books", "Paper")]);

        let generation = state.begin_load();
        let err = CategoryError::Fetch(ApiFailure::Status(503));
        assert!(state.fail_load(generation, &err));

        assert_eq!(state.rows().count(), 1);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch categories."));
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut state = CategoryPageState::default();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.apply_loaded(second, vec![category(2, "New", "Fresh")]));
        assert!(!state.apply_loaded(first, vec![category(1, "Old", "Stale")]));
        assert!(!state.fail_load(first, &CategoryError::Fetch(ApiFailure::Status(500))));

        assert_eq!(state.rows().next().map(|(_, c)| c.name.as_str()), Some("New"));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_submit_without_edit_target_creates() {
        let mut state = loaded(vec![]);
        state.toggle_form();
        assert_eq!(state.form_mode(), FormMode::Create);
        fill_draft(&mut state, "Books", "Paper");

        let request = state.submit_request();
        assert_eq!(
            request,
            Some(SubmitRequest::Create(CategoryDto {
                name: "Books".to_string(),
                description: "Paper".to_string(),
            }))
        );
        assert!(state.submitting);
    }

    #[test]
    fn test_submit_with_edit_target_updates_that_id() {
        let mut state = loaded(vec![category(1, "Books", "Paper"), category(7, "Games", "Boards")]);
        assert!(state.begin_edit(&CategoryId::from(7)));
        state.update_draft_field(DraftField::Description, "Cards".to_string());

        match state.submit_request() {
            Some(SubmitRequest::Update(id, dto)) => {
                assert_eq!(id, CategoryId::from(7));
                assert_eq!(dto.name, "Games");
                assert_eq!(dto.description, "Cards");
            }
            other => panic!("expected update request, got {:?}", other),
        }
    }

    #[test]
    fn test_incomplete_draft_is_not_submitted() {
        let mut state = loaded(vec![]);
        state.toggle_form();
        fill_draft(&mut state, "Books", "");

        assert!(!state.is_form_valid());
        assert_eq!(state.submit_request(), None);
        assert!(!state.submitting);
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let mut state = loaded(vec![]);
        state.toggle_form();
        fill_draft(&mut state, "Books", "Paper");

        assert!(state.submit_request().is_some());
        assert_eq!(state.submit_request(), None);
    }

    #[test]
    fn test_successful_submit_closes_and_resets_form() {
        let mut state = loaded(vec![category(1, "Books", "Paper")]);
        state.begin_edit(&CategoryId::from(1));
        state.submit_request();

        let generation = state.submit_succeeded();
        assert_eq!(state.form_mode(), FormMode::Edit(CategoryId::from(1)));
        state.apply_loaded(generation, vec![category(1, "Books", "Print")]);
        state.finish_submit_ok();

        assert_eq!(state.form_mode(), FormMode::Hidden);
        assert_eq!(state.draft, CategoryDto::default());
        assert_eq!(state.edit_target, None);
        assert!(!state.submitting);
    }

    #[test]
    fn test_failed_submit_keeps_form_and_draft() {
        let mut state = loaded(vec![]);
        state.toggle_form();
        fill_draft(&mut state, "Books", "Paper");
        state.submit_request();

        state.fail_submit(&CategoryError::Create(ApiFailure::Status(400)));

        assert_eq!(state.form_mode(), FormMode::Create);
        assert_eq!(state.draft.name, "Books");
        assert_eq!(state.draft.description, "Paper");
        assert_eq!(state.error.as_deref(), Some("Failed to create category."));
        assert!(!state.submitting);
    }

    #[test]
    fn test_cancel_clears_draft_and_edit_target() {
        let mut state = loaded(vec![category(4, "Books", "Paper")]);
        state.begin_edit(&CategoryId::from(4));
        assert_eq!(state.toggle_label(), "Cancel");

        state.toggle_form();
        assert_eq!(state.form_mode(), FormMode::Hidden);
        assert_eq!(state.edit_target, None);
        assert_eq!(state.toggle_label(), "Add Category");

        state.toggle_form();
        assert_eq!(state.form_mode(), FormMode::Create);
        assert_eq!(state.draft, CategoryDto::default());
        assert_eq!(state.submit_label(), "Submit");
    }

    #[test]
    fn test_begin_edit_copies_row_fields() {
        let mut state = loaded(vec![category(5, "Books", "Paper & ink")]);

        assert!(state.begin_edit(&CategoryId::from(5)));
        assert_eq!(state.form_mode(), FormMode::Edit(CategoryId::from(5)));
        assert_eq!(state.draft.name, "Books");
        assert_eq!(state.draft.description, "Paper & ink");
        assert_eq!(state.submit_label(), "Update");
    }

    #[test]
    fn test_begin_edit_unknown_id_is_noop() {
        let mut state = loaded(vec![category(5, "Books", "Paper")]);

        assert!(!state.begin_edit(&CategoryId::from(99)));
        assert_eq!(state.form_mode(), FormMode::Hidden);
        assert_eq!(state.draft, CategoryDto::default());
    }

    #[test]
    fn test_update_draft_field_leaves_other_field() {
        let mut state = CategoryPageState::default();
        fill_draft(&mut state, "Books", "Paper");
        state.update_draft_field(DraftField::Name, "Comics".to_string());

        assert_eq!(state.draft.name, "Comics");
        assert_eq!(state.draft.description, "Paper");
    }

    #[test]
    fn test_reload_after_delete_drops_row() {
        let mut state = loaded(vec![
            category(1, "A", "a"),
            category(3, "C", "c"),
            category(5, "E", "e"),
        ]);
        assert!(state.find(&CategoryId::from(3)).is_some());

        let generation = state.begin_load();
        state.apply_loaded(generation, vec![category(1, "A", "a"), category(5, "E", "e")]);

        assert!(state.find(&CategoryId::from(3)).is_none());
        assert!(state.rows().all(|(_, c)| c.id != CategoryId::from(3)));
        assert_eq!(state.find(&CategoryId::from(5)).map(|c| c.name.as_str()), Some("E"));
    }

    #[test]
    fn test_new_attempt_clears_previous_error() {
        let mut state = loaded(vec![]);
        state.set_error(&CategoryError::Delete(ApiFailure::Status(404)));
        assert!(state.error.is_some());

        state.begin_load();
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_edit_and_cancel_are_ignored_while_submitting() {
        let mut state = loaded(vec![category(1, "A", "a")]);
        state.toggle_form();
        fill_draft(&mut state, "New", "Desc");
        let request = state.submit_request();
        assert!(matches!(request, Some(SubmitRequest::Create(_))));

        assert!(!state.begin_edit(&CategoryId::from(1)));
        state.toggle_form();
        state.update_draft_field(DraftField::Name, "Other".to_string());
        state.fail_submit(&CategoryError::Create(ApiFailure::Status(500)));

        assert_eq!(state.form_mode(), FormMode::Create);
        assert_eq!(state.draft.name, "New");
        assert_eq!(state.draft.description, "Desc");
        assert_eq!(state.error.as_deref(), Some("Failed to create category."));
        assert!(matches!(state.submit_request(), Some(SubmitRequest::Create(_))));
    }

    #[test]
    fn test_successful_create_reloads_list() {
        let mut state = loaded(vec![category(1, "A", "a")]);
        state.toggle_form();
        fill_draft(&mut state, "B", "b");
        state.submit_request();

        let generation = state.submit_succeeded();
        assert!(state.apply_loaded(generation, vec![category(1, "A", "a"), category(2, "B", "b")]));
        state.finish_submit_ok();

        assert_eq!(state.rows().count(), 2);
        assert_eq!(state.form_mode(), FormMode::Hidden);
    }

    #[test]
    fn test_declined_delete_is_noop() {
        let mut state = loaded(vec![category(3, "C", "c")]);
        state.set_error(&CategoryError::Update(ApiFailure::Status(409)));

        assert!(!state.begin_delete(false));
        assert_eq!(state.error.as_deref(), Some("Failed to update category."));
        assert_eq!(state.rows().count(), 1);
    }

    #[test]
    fn test_confirmed_delete_clears_error_and_reloads() {
        let mut state = loaded(vec![category(1, "A", "a"), category(3, "C", "c")]);
        state.set_error(&CategoryError::Fetch(ApiFailure::Status(500)));

        assert!(state.begin_delete(true));
        assert_eq!(state.error, None);

        let generation = state.delete_succeeded();
        assert!(state.apply_loaded(generation, vec![category(1, "A", "a")]));
        assert!(state.find(&CategoryId::from(3)).is_none());
    }

    #[test]
    fn test_failed_delete_keeps_list() {
        let mut state = loaded(vec![category(1, "A", "a"), category(3, "C", "c")]);

        assert!(state.begin_delete(true));
        state.fail_delete(&CategoryError::Delete(ApiFailure::Status(500)));

        assert_eq!(state.error.as_deref(), Some("Failed to delete category."));
        assert_eq!(state.rows().count(), 2);
        assert!(state.find(&CategoryId::from(3)).is_some());
    }

    #[test]
    fn test_duplicate_id_edits_first_row() {
        let mut state = loaded(vec![category(1, "first", "x"), category(1, "second", "y")]);

        assert!(state.begin_edit(&CategoryId::from(1)));
        assert_eq!(state.draft.name, "first");
        assert_eq!(state.rows().count(), 2);
    }
}
