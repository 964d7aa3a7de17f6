use std::path::{Path, PathBuf};

use anyhow::{Error, Result};
use tracing::debug;

use super::csv_reader::read_leading_lines;
use crate::domain::{data_type::ColumnTypes, header::Header, query_processor::QueryProcessor};

#[derive(Debug)]
pub struct CsvQueryProcessor {
    pub path: PathBuf,
}

impl CsvQueryProcessor {
    pub fn new(path: impl Into<PathBuf>) -> Result<CsvQueryProcessor> {
        let path = path.into();
        if !path.exists() {
            return Err(Error::msg(format!(
                "CSV file not found at path {}",
                path.display()
            )));
        }
        Ok(CsvQueryProcessor { path })
    }
}

impl QueryProcessor for CsvQueryProcessor {
    fn get_header(&self) -> Result<Option<Header>> {
        read_header(&self.path)
    }
    fn get_column_types(&self) -> Result<Option<ColumnTypes>> {
        read_column_types(&self.path)
    }
    fn get_data_row(&self) -> Result<Vec<String>> {
        Err(Error::msg("Reading data rows is not yet supported"))
    }
}

pub fn read_header(path: &Path) -> Result<Option<Header>> {
    if path.as_os_str().is_empty() {
        return Ok(None);
    }

    let lines = read_leading_lines(path, 1).map_err(|err| {
        Error::msg(format!(
            "Failed to read header from CSV at path {}: {}",
            path.display(),
            err
        ))
    })?;

    let header = lines.first().map(|line| Header::from_line(line));
    if let Some(header) = &header {
        debug!("Found {} columns in header of {}", header.len(), path.display());
    }
    Ok(header)
}

pub fn read_column_types(path: &Path) -> Result<Option<ColumnTypes>> {
    if path.as_os_str().is_empty() {
        return Ok(None);
    }

    let lines = read_leading_lines(path, 2).map_err(|err| {
        Error::msg(format!(
            "Failed to read column types from CSV at path {}: {}",
            path.display(),
            err
        ))
    })?;

    let column_types = lines
        .get(1)
        .map(|line| ColumnTypes::from_sample_line(line));
    if let Some(column_types) = &column_types {
        debug!(
            "Sampled {} column types from {}",
            column_types.len(),
            path.display()
        );
    }
    Ok(column_types)
}
