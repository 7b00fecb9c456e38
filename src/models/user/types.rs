use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Availability shown in the status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserStatus {
    #[default]
    Active,
    Paused,
    Vacation,
}

impl UserStatus {
    pub const ALL: [UserStatus; 3] = [UserStatus::Active, UserStatus::Paused, UserStatus::Vacation];

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Paused => "Paused",
            UserStatus::Vacation => "Vacation",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(UserStatus::Active),
            "Paused" => Ok(UserStatus::Paused),
            "Vacation" => Ok(UserStatus::Vacation),
            other => Err(format!("Unknown status '{other}'")),
        }
    }
}

/// A row in the user table. The password is demo data and shown as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub password: String,
    pub status: UserStatus,
}

/// Editable fields of a draft, used to key validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserField {
    Name,
    Role,
    Email,
    Password,
    Status,
}

impl UserField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Role => "role",
            UserField::Email => "email",
            UserField::Password => "password",
            UserField::Status => "status",
        }
    }
}

/// Staging copy of a record for the add/edit modals.
/// `id` is empty until the draft is committed by an add.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub password: String,
    pub status: UserStatus,
}

impl UserDraft {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            role: record.role.clone(),
            email: record.email.clone(),
            password: record.password.clone(),
            status: record.status,
        }
    }

    pub fn into_record(self, id: String) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            role: self.role,
            email: self.email,
            password: self.password,
            status: self.status,
        }
    }

    pub fn value(&self, field: UserField) -> String {
        match field {
            UserField::Name => self.name.clone(),
            UserField::Role => self.role.clone(),
            UserField::Email => self.email.clone(),
            UserField::Password => self.password.clone(),
            UserField::Status => self.status.label().to_string(),
        }
    }

    /// Write one field. An unknown status string leaves the status unchanged.
    pub fn set(&mut self, field: UserField, value: &str) {
        match field {
            UserField::Name => self.name = value.to_string(),
            UserField::Role => self.role = value.to_string(),
            UserField::Email => self.email = value.to_string(),
            UserField::Password => self.password = value.to_string(),
            UserField::Status => {
                if let Ok(status) = value.parse() {
                    self.status = status;
                }
            }
        }
    }
}

/// Per-field messages from the last validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(BTreeMap<UserField, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, field: UserField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: UserField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn clear_field(&mut self, field: UserField) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = UserField> + '_ {
        self.0.keys().copied()
    }
}

/// Form data posted by the add/edit modals.
#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub role: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub status: Option<String>,
    pub csrf_token: String,
}

impl UserForm {
    /// Field/value pairs in form order. Status is skipped when not posted.
    pub fn fields(&self) -> Vec<(UserField, &str)> {
        let mut out = vec![
            (UserField::Name, self.name.as_str()),
            (UserField::Role, self.role.as_str()),
            (UserField::Email, self.email.as_str()),
            (UserField::Password, self.password.as_str()),
        ];
        if let Some(status) = self.status.as_deref() {
            out.push((UserField::Status, status));
        }
        out
    }
}
