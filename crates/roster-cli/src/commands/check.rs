//! Check command implementation
//!
//! Runs a full registration pass with no compiled constructors, so only
//! manifests declaring their command inline can register. Manifests that
//! name an export are reported as load failures.

use crate::console::CliConsole;
use roster_core::{
    CommandRegistry, ModuleTable, RegistrationReport, RegistryConfig, RosterError, RosterResult,
    register_commands,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct CheckOutput<'a> {
    report: &'a RegistrationReport,
    commands: Vec<&'a str>,
    aliases: Vec<(&'a str, &'a str)>,
    slash_commands: Vec<&'a str>,
    context_commands: Vec<&'a str>,
}

impl<'a> CheckOutput<'a> {
    fn new(registry: &'a CommandRegistry, report: &'a RegistrationReport) -> Self {
        Self {
            report,
            commands: registry.commands().map(|c| c.name.as_str()).collect(),
            aliases: registry.aliases().collect(),
            slash_commands: registry.slash_commands().map(|c| c.name.as_str()).collect(),
            context_commands: registry
                .context_commands()
                .map(|c| c.name.as_str())
                .collect(),
        }
    }
}

/// Register declared commands and print the resulting tables
pub async fn check(config: RegistryConfig, strict: bool, json: bool) -> RosterResult<()> {
    let base_dir = config.base_dir.clone();
    let (registry, report) =
        register_commands(config, Arc::new(()), Arc::new(ModuleTable::new())).await;

    if json {
        let output = CheckOutput::new(&registry, &report);
        let rendered = serde_json::to_string_pretty(&output)
            .map_err(|e| RosterError::io(format!("Failed to render JSON: {}", e)))?;
        println!("{}", rendered);
    } else {
        print_tables(&registry, &report);
    }

    if strict && report.has_problems() {
        return Err(RosterError::validation(
            base_dir,
            format!(
                "{} rejected, {} failed to load, {} unreadable",
                report.rejected, report.load_failures, report.discovery_failures
            ),
        ));
    }

    Ok(())
}

fn print_tables(registry: &CommandRegistry, report: &RegistrationReport) {
    let console = CliConsole::new(true);

    console.print_header("Commands");
    console.print_table_header(&["Name", "Aliases", "Source"]);
    for command in registry.commands() {
        let aliases = registry.aliases_of(&command.name).join(", ");
        let source = command.source_path.display().to_string();
        console.print_table_row(&[command.name.as_str(), aliases.as_str(), source.as_str()]);
    }

    let dangling: Vec<_> = registry
        .aliases()
        .filter(|(_, name)| registry.command(name).is_none())
        .collect();
    for (alias, name) in dangling {
        console.warn(&format!(
            "Alias '{}' points at '{}', which is not registered",
            alias, name
        ));
    }

    console.print_header("Slash commands");
    for command in registry.slash_commands() {
        let source = command.source_path.display().to_string();
        console.print_table_row(&[command.name.as_str(), source.as_str()]);
    }

    console.print_header("Context commands");
    for command in registry.context_commands() {
        let target = format!("{:?}", command.target);
        let source = command.source_path.display().to_string();
        console.print_table_row(&[command.name.as_str(), target.as_str(), source.as_str()]);
    }

    println!();
    console.info(&format!(
        "{} discovered, {} registered, {} disabled, {} ignored",
        report.discovered, report.registered, report.disabled, report.ignored
    ));

    if report.has_problems() {
        console.error(&format!(
            "{} rejected, {} failed to load, {} unreadable (see log for details)",
            report.rejected, report.load_failures, report.discovery_failures
        ));
    } else {
        console.success("No problems found");
    }
}
