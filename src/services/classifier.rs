use crate::domain::constants::ID_DELIMITER;
use crate::domain::record::CardRecord;
use crate::services::table::ClassTable;
use regex::Regex;
use std::sync::LazyLock;

static GRADE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bgrade\s+([0-9]+)").expect("valid grade regex"));

/// Which precedence step produced the class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassSource {
    Description,
    Stored,
    Table,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub class: Option<u32>,
    /// Whether `class` differs from what the record stored when read.
    pub changed: bool,
    pub source: ClassSource,
}

/// Everything before the last delimiter; empty when there is no delimiter.
pub fn base_slug(identifier: &str) -> &str {
    identifier
        .rsplit_once(ID_DELIMITER)
        .map(|(base, _)| base)
        .unwrap_or("")
}

/// First "Grade N" marker in free text.
pub fn grade_from_text(text: &str) -> Option<u32> {
    GRADE_MARKER
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

pub fn lookup(identifier: &str, table: &ClassTable) -> Option<u32> {
    let slug = base_slug(identifier);
    if slug.is_empty() {
        return None;
    }
    table.get(slug)
}

pub fn classify(record: &CardRecord, identifier: &str, table: &ClassTable) -> Classification {
    let stored = record.class();

    let mut class = stored.value();
    let mut source = if class.is_some() {
        ClassSource::Stored
    } else {
        ClassSource::None
    };

    if let Some(grade) = record.skill_description().and_then(grade_from_text) {
        class = Some(grade);
        source = ClassSource::Description;
    }

    if class.is_none() {
        if let Some(found) = lookup(identifier, table) {
            class = Some(found);
            source = ClassSource::Table;
        }
    }

    Classification {
        class,
        changed: !stored.matches(class),
        source,
    }
}
