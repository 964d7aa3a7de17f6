use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use anyhow::{Error, Result};
use tracing::debug;

pub fn open_csv_reader(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .map_err(|err| Error::msg(format!("Failed to open CSV: {}", err)))?;
    Ok(BufReader::new(file))
}

pub fn read_leading_lines(path: &Path, count: usize) -> Result<Vec<String>> {
    let mut reader = open_csv_reader(path)?;

    let mut lines = Vec::with_capacity(count);
    while lines.len() < count {
        match read_line(&mut reader)? {
            Some(line) => lines.push(line),
            None => break,
        }
    }

    debug!(
        "Read {} of {} leading lines from {}",
        lines.len(),
        count,
        path.display()
    );
    Ok(lines)
}

// A line ends at "\n", "\r\n" or a lone "\r". The terminator is not returned.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    let mut terminated = false;

    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            break;
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(index) => {
                let ended_on_carriage_return = available[index] == b'\r';
                bytes.extend_from_slice(&available[..index]);
                reader.consume(index + 1);
                if ended_on_carriage_return && reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                terminated = true;
                break;
            }
            None => {
                let consumed = available.len();
                bytes.extend_from_slice(available);
                reader.consume(consumed);
            }
        }
    }

    if bytes.is_empty() && !terminated {
        return Ok(None);
    }
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
