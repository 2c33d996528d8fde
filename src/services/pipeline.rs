use crate::domain::errors::CardError;
use crate::domain::models::{CardType, Layout, RunSummary};
use crate::services::reporter::Reporter;
use crate::services::table::ClassTable;
use crate::services::walker::walk;
use crate::services::writer::process;
use std::path::Path;

/// Walks `root` once per card type, in the given order, feeding every file
/// through the writer into one report.
pub fn run(
    root: &Path,
    layout: &Layout,
    table: &ClassTable,
    card_types: &[CardType],
    dry_run: bool,
) -> Result<RunSummary, CardError> {
    let mut reporter = Reporter::default();
    for &card_type in card_types {
        for file in walk(root, layout, card_type)? {
            reporter.record(process(&file, table, dry_run));
        }
    }
    let summary = reporter.finish(dry_run);
    tracing::info!(
        root = %root.display(),
        updated = summary.tally.updated,
        removed = summary.tally.removed,
        skipped = summary.tally.skipped,
        errored = summary.tally.errored,
        dry_run,
        "run complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::domain::models::{CardType, Layout};
    use crate::services::table::ClassTable;
    use serde_json::Value;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const BOTH: &[CardType] = &[CardType::Character, CardType::Action];

    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("nekoma/characters")).unwrap();
        fs::create_dir_all(root.join("nekoma/actions")).unwrap();
        fs::write(
            root.join("nekoma/characters/kuroo-tetsuro-1.json"),
            r#"{"name":"Kuroo Tetsuro"}"#,
        )
        .unwrap();
        fs::write(
            root.join("nekoma/characters/kozume-kenma-1.json"),
            r#"{"name":"Kenma","class":12,"skill":{"description":"Setter. Grade 11."}}"#,
        )
        .unwrap();
        fs::write(root.join("nekoma/characters/broken-1.json"), "{").unwrap();
        fs::write(
            root.join("nekoma/actions/kuroo-tetsuro-1.json"),
            r#"{"name":"Read Block","class":12}"#,
        )
        .unwrap();
        fs::write(root.join("nekoma/actions/receive-1.json"), r#"{"name":"Receive"}"#).unwrap();
        tmp
    }

    fn read(p: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(p).unwrap()).unwrap()
    }

    #[test]
    fn every_file_lands_in_exactly_one_bucket() {
        let tmp = fixture();
        let table = ClassTable::builtin().unwrap();
        let s = run(tmp.path(), &Layout::default(), &table, BOTH, false).unwrap();
        assert_eq!(s.tally.total, 5);
        assert_eq!(s.tally.updated, 2);
        assert_eq!(s.tally.removed, 1);
        assert_eq!(s.tally.skipped, 1);
        assert_eq!(s.tally.errored, 1);
        assert_eq!(
            s.updated,
            vec![
                "nekoma/characters/kozume-kenma-1.json: Kenma → 11",
                "nekoma/characters/kuroo-tetsuro-1.json: Kuroo Tetsuro → 12",
            ]
        );
        assert_eq!(s.removed, vec!["nekoma/actions/kuroo-tetsuro-1.json"]);
        assert!(s.errors[0].starts_with("nekoma/characters/broken-1.json: "));

        let action = read(&tmp.path().join("nekoma/actions/kuroo-tetsuro-1.json"));
        assert!(action.get("class").is_none());
        let character = read(&tmp.path().join("nekoma/characters/kuroo-tetsuro-1.json"));
        assert_eq!(character["class"], 12);
    }

    #[test]
    fn second_run_is_a_no_op() {
        let tmp = fixture();
        let table = ClassTable::builtin().unwrap();
        run(tmp.path(), &Layout::default(), &table, BOTH, false).unwrap();
        let kuroo = tmp.path().join("nekoma/characters/kuroo-tetsuro-1.json");
        let before = fs::read(&kuroo).unwrap();

        let s = run(tmp.path(), &Layout::default(), &table, BOTH, false).unwrap();
        assert!(s.updated.is_empty());
        assert!(s.removed.is_empty());
        assert!(!s.has_changes());
        assert_eq!(fs::read(&kuroo).unwrap(), before);
    }

    #[test]
    fn character_only_run_leaves_actions_alone() {
        let tmp = fixture();
        let table = ClassTable::builtin().unwrap();
        let s = run(
            tmp.path(),
            &Layout::default(),
            &table,
            &[CardType::Character],
            false,
        )
        .unwrap();
        assert_eq!(s.tally.removed, 0);
        let action = read(&tmp.path().join("nekoma/actions/kuroo-tetsuro-1.json"));
        assert_eq!(action["class"], 12);
    }
}
