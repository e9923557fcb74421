use super::record::{ContactRecord, ContactTable};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Default input file name, resolved against the working directory
pub const DEFAULT_INPUT_FILE: &str = "data.csv";

/// Default output file name, written next to the input file
pub const DEFAULT_OUTPUT_FILE: &str = "contact_plan.csv";

/// Output path used when none is given: `contact_plan.csv` beside the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    match input.parent() {
        Some(dir) => dir.join(DEFAULT_OUTPUT_FILE),
        None => PathBuf::from(DEFAULT_OUTPUT_FILE),
    }
}

/// Read a contact CSV file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The file is empty (no header row)
/// - A row has a different number of cells than the header
/// - The content is not valid UTF-8
pub fn read_contacts(path: &Path) -> Result<ContactTable> {
    if !path.exists() {
        anyhow::bail!("Contact file not found at {}", path.display());
    }

    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open contact file at {}", path.display()))?;

    read_contacts_from(file)
        .with_context(|| format!("Failed to parse contact file at {}", path.display()))
}

/// Read contacts from any CSV source with a header row.
pub fn read_contacts_from<R: Read>(reader: R) -> Result<ContactTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read header row")?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        anyhow::bail!("No columns to parse: the file is empty");
    }

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let row = row.with_context(|| format!("Failed to read row {}", index + 2))?;
        records.push(ContactRecord::from_pairs(
            headers.iter().cloned().zip(row.iter().map(str::to_string)),
        ));
    }

    Ok(ContactTable::new(headers, records))
}

/// Write a contact table to `path` atomically.
///
/// The file is either fully written or not touched at all.
pub fn write_contacts(path: &Path, table: &ContactTable) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    write_contacts_to(&mut file, table)?;

    file.commit()
        .with_context(|| format!("Failed to save contact file at {}", path.display()))?;

    Ok(())
}

/// Serialize a contact table as CSV with its original header.
pub fn write_contacts_to<W: Write>(writer: W, table: &ContactTable) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer
        .write_record(&table.headers)
        .context("Failed to write header row")?;

    for record in &table.records {
        writer
            .write_record(table.row_values(record))
            .context("Failed to write contact row")?;
    }

    writer.flush().context("Failed to flush contact rows")?;
    Ok(())
}
