use askama::Template;

use crate::models::user::{Modal, UserField, UserRecord, UserScreen, UserStatus};
use super::PageContext;

/// One input row in the add/edit modal.
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub error: Option<String>,
}

pub struct StatusOption {
    pub label: &'static str,
    pub selected: bool,
}

/// Flattened modal state for the template. `kind` is "none", "add", "edit" or "delete".
pub struct ModalView {
    pub kind: &'static str,
    pub title: &'static str,
    pub submit_action: &'static str,
    pub submit_label: &'static str,
    pub fields: Vec<FieldView>,
    pub status_options: Vec<StatusOption>,
    pub delete_name: String,
}

impl ModalView {
    pub fn from_screen(screen: &UserScreen) -> Self {
        let (kind, title, submit_action, submit_label) = match screen.modal() {
            Modal::Closed => ("none", "", "", ""),
            Modal::Add => ("add", "Add New User", "/home/add", "Add User"),
            Modal::Edit(_) => ("edit", "Edit User", "/home/edit", "Save Changes"),
            Modal::Delete(_) => ("delete", "Confirm Delete", "/home/delete", "Delete"),
        };

        let password_placeholder = if kind == "edit" { "Enter new password" } else { "Enter password" };
        let fields = match kind {
            "add" | "edit" => {
                let draft = screen.draft();
                let errors = screen.errors();
                [
                    (UserField::Name, "Name", "text", "Enter full name"),
                    (UserField::Role, "Role", "text", "Enter user role"),
                    (UserField::Email, "Email", "email", "Enter email address"),
                    (UserField::Password, "Password", "text", password_placeholder),
                ]
                .into_iter()
                .map(|(field, label, input_type, placeholder)| FieldView {
                    name: field.as_str(),
                    label,
                    input_type,
                    placeholder,
                    value: draft.value(field),
                    error: errors.get(field).map(String::from),
                })
                .collect()
            }
            _ => Vec::new(),
        };

        let status_options = UserStatus::ALL
            .iter()
            .map(|s| StatusOption { label: s.label(), selected: *s == screen.draft().status })
            .collect();

        let delete_name = screen
            .staged_for_delete()
            .map(|u| u.name.clone())
            .unwrap_or_default();

        Self { kind, title, submit_action, submit_label, fields, status_options, delete_name }
    }
}

#[derive(Template)]
#[template(path = "users/list.html")]
pub struct UserListTemplate {
    pub ctx: PageContext,
    pub users: Vec<UserRecord>,
    pub modal: ModalView,
}
