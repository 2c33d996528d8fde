use crate::domain::constants::MAX_LISTED_REMOVALS;
use crate::domain::models::{Outcome, OutcomeStatus, RunSummary, Tally};

/// Append-only accumulator of per-file outcomes.
#[derive(Debug, Default)]
pub struct Reporter {
    updated: Vec<Outcome>,
    removed: Vec<Outcome>,
    skipped: Vec<Outcome>,
    errored: Vec<Outcome>,
}

impl Reporter {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome.status {
            OutcomeStatus::Updated => self.updated.push(outcome),
            OutcomeStatus::Removed => self.removed.push(outcome),
            OutcomeStatus::Skipped => self.skipped.push(outcome),
            OutcomeStatus::Errored => self.errored.push(outcome),
        }
    }

    pub fn finish(self, dry_run: bool) -> RunSummary {
        let tally = Tally {
            updated: self.updated.len(),
            removed: self.removed.len(),
            skipped: self.skipped.len(),
            errored: self.errored.len(),
            total: self.updated.len()
                + self.removed.len()
                + self.skipped.len()
                + self.errored.len(),
        };

        let updated = self
            .updated
            .iter()
            .map(|o| {
                format!(
                    "{}: {} → {}",
                    o.file,
                    o.name.as_deref().unwrap_or("?"),
                    o.class
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "null".to_string())
                )
            })
            .collect();

        let mut removed: Vec<String> = self
            .removed
            .iter()
            .take(MAX_LISTED_REMOVALS)
            .map(|o| o.file.clone())
            .collect();
        if self.removed.len() > MAX_LISTED_REMOVALS {
            removed.push(format!(
                "... and {} more",
                self.removed.len() - MAX_LISTED_REMOVALS
            ));
        }

        let errors = self
            .errored
            .iter()
            .map(|o| format!("{}: {}", o.file, o.message.as_deref().unwrap_or("unknown error")))
            .collect();

        RunSummary {
            dry_run,
            tally,
            updated,
            removed,
            errors,
        }
    }
}

impl RunSummary {
    pub fn has_changes(&self) -> bool {
        self.tally.updated > 0 || self.tally.removed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::Reporter;
    use crate::domain::models::{Outcome, OutcomeStatus};

    fn outcome(file: &str, status: OutcomeStatus, class: Option<u32>) -> Outcome {
        Outcome {
            file: file.to_string(),
            status,
            class,
            name: Some("Kuroo".to_string()),
            message: match status {
                OutcomeStatus::Errored => Some("invalid JSON: eof".to_string()),
                _ => None,
            },
        }
    }

    #[test]
    fn buckets_and_formats_entries() {
        let mut r = Reporter::default();
        r.record(outcome("a.json", OutcomeStatus::Updated, Some(12)));
        r.record(outcome("b.json", OutcomeStatus::Updated, None));
        r.record(outcome("c.json", OutcomeStatus::Skipped, Some(11)));
        r.record(outcome("d.json", OutcomeStatus::Errored, None));
        let s = r.finish(false);
        assert_eq!(s.tally.updated, 2);
        assert_eq!(s.tally.skipped, 1);
        assert_eq!(s.tally.errored, 1);
        assert_eq!(s.tally.total, 4);
        assert_eq!(s.updated, vec!["a.json: Kuroo → 12", "b.json: Kuroo → null"]);
        assert_eq!(s.errors, vec!["d.json: invalid JSON: eof"]);
        assert!(s.has_changes());
    }

    #[test]
    fn removed_listing_is_truncated_after_twenty() {
        let mut r = Reporter::default();
        for i in 0..23 {
            r.record(outcome(&format!("act-{}.json", i), OutcomeStatus::Removed, None));
        }
        let s = r.finish(false);
        assert_eq!(s.tally.removed, 23);
        assert_eq!(s.removed.len(), 21);
        assert_eq!(s.removed[19], "act-19.json");
        assert_eq!(s.removed[20], "... and 3 more");
    }

    #[test]
    fn empty_run_has_no_changes() {
        let s = Reporter::default().finish(true);
        assert!(!s.has_changes());
        assert!(s.dry_run);
        assert_eq!(s.tally.total, 0);
    }
}
