pub mod crud;

pub use self::crud::*;
