/// Whether a password input renders as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordVisibility {
    #[default]
    Hidden,
    Visible,
}

impl PasswordVisibility {
    pub fn toggled(self) -> Self {
        match self {
            PasswordVisibility::Hidden => PasswordVisibility::Visible,
            PasswordVisibility::Visible => PasswordVisibility::Hidden,
        }
    }

    /// Value for the input's `type` attribute.
    pub fn input_type(&self) -> &'static str {
        match self {
            PasswordVisibility::Hidden => "password",
            PasswordVisibility::Visible => "text",
        }
    }

    pub fn is_visible(&self) -> bool {
        *self == PasswordVisibility::Visible
    }

    /// Read the hidden `*_visible` form field the templates echo back.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("1" | "true" | "on") => PasswordVisibility::Visible,
            _ => PasswordVisibility::Hidden,
        }
    }

    pub fn as_flag(&self) -> &'static str {
        if self.is_visible() { "1" } else { "0" }
    }
}
