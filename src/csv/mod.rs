pub mod csv_column_summary;
pub mod csv_query_processor;
pub mod csv_reader;
