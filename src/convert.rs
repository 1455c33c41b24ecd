use std::{fs::OpenOptions, io::Write, path::Path};

use {
    anyhow::{Context, Result},
    serde::Serialize,
    serde_json::ser::PrettyFormatter,
    tracing::{debug, info, warn},
};

use crate::record::{CourseDocument, CourseRecord};

/// Reads every row of the CSV at `path` into a document, in file order.
///
/// Every row is treated as data; there is no header line to skip. The first
/// unreadable or unparsable row aborts the whole conversion.
pub fn read_courses(path: &Path) -> Result<CourseDocument> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("cannot open {}", path.display()))?;

    let mut courses = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let line = index as u64 + 1;
        let row = row.with_context(|| format!("cannot read row {line} of {}", path.display()))?;
        courses.push(CourseRecord::from_row(&row, line)?);
    }

    debug!("read {} courses from {}", courses.len(), path.display());
    Ok(CourseDocument { courses })
}

/// Serializes the document with 4-space indentation. Non-ASCII text stays
/// literal and no trailing newline is added.
pub fn to_json(document: &CourseDocument) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}

/// Writes the serialized document to `path` in a single write.
///
/// The default is append mode: a second run leaves two concatenated JSON
/// texts in the file, which is no longer one valid document. `truncate`
/// switches to overwrite semantics.
pub fn write_document(document: &CourseDocument, path: &Path, truncate: bool) -> Result<()> {
    let text = to_json(document)?;

    if !truncate {
        let existing = std::fs::metadata(path).map(|meta| meta.len()).unwrap_or(0);
        if existing > 0 {
            warn!(
                "appending to non-empty {} ({existing} bytes); the file will hold more than one JSON document",
                path.display()
            );
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(!truncate)
        .truncate(truncate)
        .open(path)
        .with_context(|| format!("cannot open {}", path.display()))?;

    file.write_all(text.as_bytes())
        .with_context(|| format!("cannot write {}", path.display()))?;

    info!(
        "wrote {} courses to {}",
        document.courses.len(),
        path.display()
    );
    Ok(())
}
