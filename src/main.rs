#[cfg(test)]
mod assert_err;
mod csv;
mod domain;
#[cfg(test)]
mod test_csv;

use crate::csv::csv_column_summary::{write_summaries, CsvColumnSummary};
use crate::csv::csv_query_processor::CsvQueryProcessor;
use anyhow::{Error, Result};
use domain::query_processor::QueryProcessor;
use std::{env, io::stdout};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    run().map_err(|err| {
        error!("{}", err);
        err
    })
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let csv_path = args.get(1).ok_or(Error::msg(
        "Missing CSV path argument. Example: cargo run -- data.csv",
    ))?;

    let processor = CsvQueryProcessor::new(csv_path)?;
    info!("Describing columns of {}", csv_path);

    let header = processor.get_header()?;
    let column_types = processor.get_column_types()?;

    match (&header, &column_types) {
        (None, _) => info!("{} is empty, no columns to describe", csv_path),
        (Some(_), None) => info!("{} has no data line to sample types from", csv_path),
        (Some(header), Some(column_types)) if header.len() != column_types.len() => warn!(
            "Header has {} columns but the sampled line has {} fields",
            header.len(),
            column_types.len()
        ),
        _ => (),
    }

    let summaries = CsvColumnSummary::from_parts(header.as_ref(), column_types.as_ref());
    write_summaries(stdout(), summaries)
}
