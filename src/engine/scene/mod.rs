pub mod cursor;
pub mod lighting;
