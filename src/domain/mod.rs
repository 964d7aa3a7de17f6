pub mod data_type;
pub mod header;
pub mod query_processor;
