use crate::*;

const BOTH: &[CardType] = &[CardType::Character, CardType::Action];
const CHARACTERS: &[CardType] = &[CardType::Character];
const ACTIONS: &[CardType] = &[CardType::Action];

pub fn handle_normalize_commands(
    cli: &Cli,
    layout: &Layout,
    table: &ClassTable,
) -> anyhow::Result<bool> {
    let (root, card_types, dry_run) = match &cli.command {
        Commands::Fix { root } => (root, BOTH, false),
        Commands::Classes { root } => (root, CHARACTERS, false),
        Commands::Strip { root } => (root, ACTIONS, false),
        Commands::Check { root } => (root, BOTH, true),
        _ => return Ok(false),
    };

    let summary = match pipeline::run(root, layout, table, card_types, dry_run) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "aborting run");
            return Err(e.into());
        }
    };
    print_summary(cli.json, &summary)?;

    if dry_run && (summary.has_changes() || summary.tally.errored > 0) {
        std::process::exit(1);
    }
    Ok(true)
}
