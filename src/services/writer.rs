use crate::domain::errors::CardError;
use crate::domain::models::{CardFile, CardType, Outcome, OutcomeStatus};
use crate::services::classifier::classify;
use crate::services::storage::{read_record, write_record};
use crate::services::table::ClassTable;

/// Runs the writer variant for the file's card type. Never fails: any
/// read/parse/write error becomes an `errored` outcome and the file is left as is.
pub fn process(file: &CardFile, table: &ClassTable, dry_run: bool) -> Outcome {
    let result = match file.card_type {
        CardType::Character => write_character(file, table, dry_run),
        CardType::Action => strip_action(file, dry_run),
    };
    match result {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!(file = %file.display, path = ?e.path(), error = %e, "card failed");
            Outcome {
                file: file.display.clone(),
                status: OutcomeStatus::Errored,
                class: None,
                name: None,
                message: Some(e.to_string()),
            }
        }
    }
}

fn write_character(
    file: &CardFile,
    table: &ClassTable,
    dry_run: bool,
) -> Result<Outcome, CardError> {
    let mut record = read_record(&file.path)?;
    let c = classify(&record, &file.identifier, table);
    record.set_class(c.class);
    // Rewritten even when unchanged so every file ends up in canonical form.
    if !dry_run {
        write_record(&file.path, &record)?;
    }
    tracing::debug!(file = %file.display, class = ?c.class, source = ?c.source, changed = c.changed, "classified");

    let (status, message) = if c.changed {
        (OutcomeStatus::Updated, None)
    } else {
        (OutcomeStatus::Skipped, Some("unchanged".to_string()))
    };
    Ok(Outcome {
        file: file.display.clone(),
        status,
        class: c.class,
        name: record.name().map(str::to_string),
        message,
    })
}

fn strip_action(file: &CardFile, dry_run: bool) -> Result<Outcome, CardError> {
    let mut record = read_record(&file.path)?;
    let name = record.name().map(str::to_string);
    if !record.remove_class() {
        return Ok(Outcome {
            file: file.display.clone(),
            status: OutcomeStatus::Skipped,
            class: None,
            name,
            message: Some("nothing to remove".to_string()),
        });
    }
    if !dry_run {
        write_record(&file.path, &record)?;
    }
    tracing::debug!(file = %file.display, "class removed");
    Ok(Outcome {
        file: file.display.clone(),
        status: OutcomeStatus::Removed,
        class: None,
        name,
        message: None,
    })
}
