use crate::auth::validate;
use super::types::{UserDraft, UserField, UserRecord, UserStatus, ValidationErrors};

/// Check every rule independently and collect all failures.
pub fn validate_draft(draft: &UserDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if let Some(msg) = validate::validate_required(&draft.name, "Name") {
        errors.insert(UserField::Name, msg);
    }
    if let Some(msg) = validate::validate_required(&draft.role, "Role") {
        errors.insert(UserField::Role, msg);
    }
    if let Some(msg) = validate::validate_email(&draft.email) {
        errors.insert(UserField::Email, msg);
    }
    if let Some(msg) = validate::validate_password(&draft.password) {
        errors.insert(UserField::Password, msg);
    }
    errors
}

/// Ordered in-memory user list with sequential string ids.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<UserRecord>,
    last_id: u64,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four demo users every workspace starts with.
    pub fn seeded() -> Self {
        let seed = [
            ("Tony Reichert", "CEO", "tony@example.com", "pass1234", UserStatus::Active),
            ("Zoey Lang", "Technical Lead", "zoey@example.com", "securePass!1", UserStatus::Paused),
            ("Jane Fisher", "Senior Developer", "jane@example.com", "dev123", UserStatus::Active),
            ("William Howard", "Community Manager", "william@example.com", "vacay2023", UserStatus::Vacation),
        ];
        let mut dir = Self::new();
        for (name, role, email, password, status) in seed {
            dir.insert(UserDraft {
                id: String::new(),
                name: name.to_string(),
                role: role.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                status,
            });
        }
        dir
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Append a draft under the next id. Ids are never reused, even after deletes.
    pub fn insert(&mut self, draft: UserDraft) -> String {
        self.last_id += 1;
        let id = self.last_id.to_string();
        self.users.push(draft.into_record(id.clone()));
        id
    }

    /// Overwrite the record with the draft's id in place. Returns false if absent.
    pub fn replace(&mut self, draft: UserDraft) -> bool {
        match self.users.iter_mut().find(|u| u.id == draft.id) {
            Some(slot) => {
                let id = std::mem::take(&mut slot.id);
                *slot = draft.into_record(id);
                true
            }
            None => false,
        }
    }

    /// Remove by id, keeping the order of the rest. Returns the removed record.
    pub fn remove(&mut self, id: &str) -> Option<UserRecord> {
        let pos = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(pos))
    }
}
