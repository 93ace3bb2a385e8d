// Adapters layer: concrete implementations of the domain ports.

pub mod airtable;
pub mod storage;

pub use airtable::AirtableSource;
pub use storage::LocalStorage;
