//! Scan command implementation

use crate::console::CliConsole;
use roster_core::{Discoverer, RegistryConfig, RosterResult};

/// List module candidates under every configured root
pub async fn scan(config: &RegistryConfig, verbose: bool) -> RosterResult<()> {
    let console = CliConsole::new(verbose);
    let discoverer = Discoverer::from_config(config);
    let roots = config.resolved_roots();

    let walked = tokio::task::spawn_blocking(move || {
        roots
            .into_iter()
            .map(|root| {
                let (candidates, errors) = discoverer.discover(&root);
                (root, candidates, errors)
            })
            .collect::<Vec<_>>()
    })
    .await?;

    let mut total = 0;
    for (root, candidates, errors) in walked {
        console.print_header(&root.display().to_string());

        if candidates.is_empty() && errors.is_empty() {
            console.warn("No command modules found");
            continue;
        }

        console.print_table_header(&["Module", "Path"]);
        for candidate in &candidates {
            let path = candidate.path.display().to_string();
            console.print_table_row(&[candidate.module_id.as_str(), path.as_str()]);
        }

        for err in &errors {
            console.error(&err.to_string());
        }

        total += candidates.len();
    }

    println!();
    console.success(&format!("{} module candidate(s) found", total));
    console.info(&format!(
        "Loadable extensions: {}; ignore marker: '{}'",
        config.extensions.join(", "),
        config.ignore_marker
    ));

    Ok(())
}
