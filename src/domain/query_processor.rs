use super::{data_type::ColumnTypes, header::Header};
use anyhow::Result;

pub trait QueryProcessor {
    fn get_header(&self) -> Result<Option<Header>>;
    fn get_column_types(&self) -> Result<Option<ColumnTypes>>;
    fn get_data_row(&self) -> Result<Vec<String>>;
}
