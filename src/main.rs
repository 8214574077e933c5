mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use compendium_browser::logging;
use settings::ResolvedConfig;
use workflow::{BrowseRequest, BrowseWorkflow};

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose)?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_browse(cli.output, resolved, BrowseRequest::from(&cli))
}

/// Execute the browse workflow and print output in the chosen format.
fn run_browse(format: OutputFormat, settings: ResolvedConfig, request: BrowseRequest) -> Result<()> {
	let workflow = BrowseWorkflow::from_config(settings, request)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
