mod bank;
mod builtin;
mod loader;

pub use bank::QuestionBank;
pub use loader::{load_bank_from_json, LoadError};
