use crate::domain::FileRecord;
use crate::error::{Result, SipError};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::path::Path;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::warn;

#[derive(Clone, Copy)]
enum Field {
    Size,
    Mtime,
    Atime,
    Ctime,
    Crtime,
    NameType,
}

/// Parse a package's DFXML file inventory into file records.
///
/// Only regular-file objects are kept: entries whose `name_type` is
/// present and not "r" (directories and the like) are skipped.
/// Timestamps that fail to parse degrade to absent; a document that
/// cannot be read at all is a hard error naming the package.
pub fn read_inventory(path: &Path, package: &str) -> Result<Vec<FileRecord>> {
    let mut reader = Reader::from_file(path).map_err(|e| SipError::Inventory {
        package: package.to_string(),
        detail: format!("{}: {}", path.display(), e),
    })?;
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut buf = Vec::new();

    let mut in_fileobject = false;
    let mut current = FileRecord::default();
    let mut name_type: Option<String> = None;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"fileobject" => {
                    in_fileobject = true;
                    current = FileRecord::default();
                    name_type = None;
                    field = None;
                }
                b"filesize" if in_fileobject => field = Some(Field::Size),
                b"mtime" if in_fileobject => field = Some(Field::Mtime),
                b"atime" if in_fileobject => field = Some(Field::Atime),
                b"ctime" if in_fileobject => field = Some(Field::Ctime),
                b"crtime" if in_fileobject => field = Some(Field::Crtime),
                b"name_type" if in_fileobject => field = Some(Field::NameType),
                _ => field = None,
            },
            Ok(Event::Text(t)) => {
                if let Some(f) = field {
                    let text = t.unescape().map_err(|e| SipError::Inventory {
                        package: package.to_string(),
                        detail: format!("{}: {}", path.display(), e),
                    })?;
                    apply_field(&mut current, &mut name_type, f, text.trim(), path);
                }
            }
            Ok(Event::End(e)) => {
                field = None;
                if e.name().as_ref() == b"fileobject" {
                    in_fileobject = false;
                    // Entries without a name_type count as files.
                    if name_type.as_deref().is_none_or(|t| t == "r") {
                        records.push(current.clone());
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(SipError::Inventory {
                    package: package.to_string(),
                    detail: format!(
                        "{} at offset {}: {}",
                        path.display(),
                        reader.buffer_position(),
                        e
                    ),
                });
            }
        }
        buf.clear();
    }
    Ok(records)
}

fn apply_field(
    record: &mut FileRecord,
    name_type: &mut Option<String>,
    field: Field,
    text: &str,
    path: &Path,
) {
    match field {
        Field::Size => match text.parse() {
            Ok(n) => record.size_bytes = n,
            Err(_) => {
                warn!(
                    "unparsable filesize \"{}\" in {}; counting as 0 bytes",
                    text,
                    path.display()
                );
            }
        },
        Field::Mtime => record.modified = parse_timestamp(text, path),
        Field::Atime => record.accessed = parse_timestamp(text, path),
        Field::Ctime => record.changed = parse_timestamp(text, path),
        Field::Crtime => record.created = parse_timestamp(text, path),
        Field::NameType => *name_type = Some(text.to_string()),
    }
}

/// Accepts RFC 3339 timestamps or the offset-less form some walkers
/// emit; anything else degrades to absent.
fn parse_timestamp(text: &str, path: &Path) -> Option<OffsetDateTime> {
    if text.is_empty() {
        return None;
    }
    if let Ok(t) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(t);
    }
    let naive = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    if let Ok(t) = PrimitiveDateTime::parse(text, &naive) {
        return Some(t.assume_utc());
    }
    warn!(
        "unparsable timestamp \"{}\" in {}; treating as absent",
        text,
        path.display()
    );
    None
}
