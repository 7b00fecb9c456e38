pub mod directory;
pub mod screen;
pub mod types;

pub use directory::{validate_draft, UserDirectory};
pub use screen::{Commit, Modal, UserScreen};
pub use types::{UserDraft, UserField, UserForm, UserRecord, UserStatus, ValidationErrors};
