use crate::domain::models::{JsonOut, RunSummary};
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub fn print_summary(json: bool, summary: &RunSummary) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: summary.tally.errored == 0,
                data: summary
            })?
        );
        return Ok(());
    }

    let t = &summary.tally;
    println!(
        "{}updated={} removed={} skipped={} errored={} total={}",
        if summary.dry_run { "[dry run] " } else { "" },
        t.updated,
        t.removed,
        t.skipped,
        t.errored,
        t.total
    );
    print_section("Updated", &summary.updated);
    print_section("Removed", &summary.removed);
    print_section("Errors", &summary.errors);
    Ok(())
}

fn print_section(title: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    println!("\n{}:", title);
    for e in entries {
        println!("  {}", e);
    }
}
