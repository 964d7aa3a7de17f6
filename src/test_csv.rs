use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

pub fn write_csv(contents: impl AsRef<[u8]>) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_ref())?;
    file.flush()?;
    Ok(file)
}
