//! State of one user-management screen: the list, the draft being edited,
//! and which modal is open.

use super::directory::{validate_draft, UserDirectory};
use super::types::{UserDraft, UserField, UserRecord, ValidationErrors};

/// Which dialog is showing. Edit and delete carry the staged record's id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Add,
    Edit(String),
    Delete(String),
}

/// Result of submitting a modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    Added(String),
    Updated(String),
    Deleted(UserRecord),
    /// Validation failed; the modal stays open with messages.
    Invalid,
    /// The staged record no longer exists, or no matching modal was open.
    Stale,
}

#[derive(Debug, Clone)]
pub struct UserScreen {
    directory: UserDirectory,
    draft: UserDraft,
    errors: ValidationErrors,
    modal: Modal,
}

impl Default for UserScreen {
    fn default() -> Self {
        Self::new(UserDirectory::seeded())
    }
}

impl UserScreen {
    pub fn new(directory: UserDirectory) -> Self {
        Self {
            directory,
            draft: UserDraft::default(),
            errors: ValidationErrors::default(),
            modal: Modal::Closed,
        }
    }

    pub fn users(&self) -> &[UserRecord] {
        self.directory.users()
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// The record staged for deletion, if the delete modal is open.
    pub fn staged_for_delete(&self) -> Option<&UserRecord> {
        match &self.modal {
            Modal::Delete(id) => self.directory.find(id),
            _ => None,
        }
    }

    pub fn open_add(&mut self) {
        self.draft = UserDraft::default();
        self.errors.clear();
        self.modal = Modal::Add;
    }

    /// Write a draft field and drop that field's message.
    pub fn set_field(&mut self, field: UserField, value: &str) {
        self.draft.set(field, value);
        self.errors.clear_field(field);
    }

    /// Validate the draft and append it under a fresh id.
    pub fn add(&mut self) -> Commit {
        if self.modal != Modal::Add {
            return Commit::Stale;
        }
        self.errors = validate_draft(&self.draft);
        if !self.errors.is_empty() {
            return Commit::Invalid;
        }
        let draft = std::mem::take(&mut self.draft);
        let id = self.directory.insert(draft);
        self.modal = Modal::Closed;
        Commit::Added(id)
    }

    /// Copy a record into the draft and open the edit modal. Returns false for an unknown id.
    pub fn prepare_edit(&mut self, id: &str) -> bool {
        let Some(record) = self.directory.find(id) else {
            return false;
        };
        self.draft = UserDraft::from_record(record);
        self.errors.clear();
        self.modal = Modal::Edit(record.id.clone());
        true
    }

    /// Validate the draft and write it over the staged record.
    pub fn edit(&mut self) -> Commit {
        let Modal::Edit(staged) = &self.modal else {
            return Commit::Stale;
        };
        // The draft id is set by prepare_edit; the staged id wins if they differ.
        if self.draft.id != *staged {
            self.draft.id = staged.clone();
        }
        self.errors = validate_draft(&self.draft);
        if !self.errors.is_empty() {
            return Commit::Invalid;
        }
        let draft = std::mem::take(&mut self.draft);
        let id = draft.id.clone();
        self.modal = Modal::Closed;
        if self.directory.replace(draft) {
            Commit::Updated(id)
        } else {
            Commit::Stale
        }
    }

    /// Stage a record and open the delete confirmation. Returns false for an unknown id.
    pub fn prepare_delete(&mut self, id: &str) -> bool {
        if self.directory.find(id).is_none() {
            return false;
        }
        self.modal = Modal::Delete(id.to_string());
        true
    }

    pub fn delete(&mut self) -> Commit {
        let Modal::Delete(staged) = &self.modal else {
            return Commit::Stale;
        };
        let removed = self.directory.remove(staged);
        self.modal = Modal::Closed;
        match removed {
            Some(record) => Commit::Deleted(record),
            None => Commit::Stale,
        }
    }

    /// Close whatever is open and throw away the draft.
    pub fn cancel(&mut self) {
        self.modal = Modal::Closed;
        self.draft = UserDraft::default();
        self.errors.clear();
    }
}
