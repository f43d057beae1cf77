pub mod inverted;
pub mod document_store;
