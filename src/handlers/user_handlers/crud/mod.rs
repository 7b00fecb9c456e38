pub mod helpers;
pub mod create;
pub mod read;
pub mod update;
pub mod delete;
pub mod list;

pub use self::create::{open_add, create};
pub use self::read::prepare_edit;
pub use self::update::update;
pub use self::delete::{prepare_delete, delete};
pub use self::list::{list, cancel};
