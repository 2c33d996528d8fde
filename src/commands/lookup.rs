use crate::*;

pub fn handle_lookup_commands(cli: &Cli, table: &ClassTable) -> anyhow::Result<bool> {
    let Commands::Lookup { identifier } = &cli.command else {
        return Ok(false);
    };

    let report = LookupReport {
        identifier: identifier.clone(),
        base_slug: classifier::base_slug(identifier).to_string(),
        class: classifier::lookup(identifier, table),
    };
    print_one(cli.json, report, |r| {
        format!(
            "{}\t{}\t{}",
            r.identifier,
            r.base_slug,
            r.class
                .map(|c| c.to_string())
                .unwrap_or_else(|| "null".to_string())
        )
    })?;
    Ok(true)
}
