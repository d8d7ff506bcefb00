pub mod common;
pub mod fields;
pub mod save;
pub mod show;
pub mod token_cmd;
