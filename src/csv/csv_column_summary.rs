use std::io::Write;

use anyhow::Result;
use csv::Writer;
use serde::Serialize;

use crate::domain::{
    data_type::{ColumnTypes, DataType},
    header::Header,
};

#[derive(Debug, PartialEq, Serialize)]
pub struct CsvColumnSummary {
    pub column: Option<String>,

    #[serde(rename(serialize = "type"))]
    pub data_type: Option<DataType>,
}

impl CsvColumnSummary {
    pub fn from_parts(
        header: Option<&Header>,
        column_types: Option<&ColumnTypes>,
    ) -> Vec<CsvColumnSummary> {
        let names = header
            .map(|header| header.names.as_slice())
            .unwrap_or_default();
        let types = column_types
            .map(|column_types| column_types.types.as_slice())
            .unwrap_or_default();

        (0..names.len().max(types.len()))
            .map(|index| CsvColumnSummary {
                column: names.get(index).cloned(),
                data_type: types.get(index).copied(),
            })
            .collect()
    }
}

pub fn write_summaries<W: Write>(output: W, summaries: Vec<CsvColumnSummary>) -> Result<()> {
    let mut writer = Writer::from_writer(output);

    // Headers are only written with the first serialized row
    if summaries.is_empty() {
        writer.write_record(["column", "type"])?;
    }
    for summary in summaries {
        writer.serialize(summary)?;
    }
    writer.flush()?;
    Ok(())
}
