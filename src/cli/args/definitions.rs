use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{DropdownArg, OutputFormat, PackToggle, RangeArg, SortArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `compendium-browser` binary.
#[derive(Parser, Debug)]
#[command(
	name = "compendium-browser",
	version,
	long_version = long_version(),
	about = "Search, filter and sort indexed compendium packs",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "CATEGORY",
		help = "Category to browse: action, bestiary, equipment, feat, hazard or spell"
	)]
	pub(crate) category: Option<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "COMPENDIUM_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "packs-dir",
		value_name = "PATH",
		help = "Directory to scan for pack files (default: <data dir>/packs)"
	)]
	pub(crate) packs_dir: Option<PathBuf>,
	#[arg(
		long = "settings-file",
		value_name = "FILE",
		help = "Where pack settings are persisted (default: <data dir>/packs.json)"
	)]
	pub(crate) settings_file: Option<PathBuf>,
	#[arg(
		long = "page-size",
		value_name = "NUM",
		help = "Entries shown before scrolling (default: 100)"
	)]
	pub(crate) page_size: Option<usize>,
	#[arg(
		long = "scroll-step",
		value_name = "NUM",
		help = "Entries added per page scrolled (default: 100)"
	)]
	pub(crate) scroll_step: Option<usize>,
	#[arg(
		short = 's',
		long,
		value_name = "TEXT",
		help = "Case-insensitive name search (default: empty)"
	)]
	pub(crate) search: Option<String>,
	#[arg(
		short = 'f',
		long = "filter",
		value_name = "GROUP-OPTION",
		action = ArgAction::Append,
		help = "Select a checkbox option, e.g. rarity-common (default: none)"
	)]
	pub(crate) filters: Vec<String>,
	#[arg(
		long = "max-level",
		value_name = "LEVEL",
		allow_negative_numbers = true,
		help = "Upper bound of the level range (default: unbounded)"
	)]
	pub(crate) max_level: Option<f64>,
	#[arg(
		short = 'r',
		long = "range",
		value_name = "KEY=MIN..MAX",
		action = ArgAction::Append,
		help = "Bound a numeric range, either side optional, e.g. price=..5 (default: none)"
	)]
	pub(crate) ranges: Vec<RangeArg>,
	#[arg(
		long = "dropdown",
		value_name = "KEY=CHOICE",
		action = ArgAction::Append,
		help = "Pick a dropdown choice, e.g. timefilter=reaction (default: any)"
	)]
	pub(crate) dropdowns: Vec<DropdownArg>,
	#[arg(
		long,
		value_name = "FIELD",
		allow_hyphen_values = true,
		help = "Sort field such as level or -price for descending (default: name)"
	)]
	pub(crate) sort: Option<SortArg>,
	#[arg(long, help = "Sort in descending order (default: disabled)")]
	pub(crate) descending: bool,
	#[arg(
		long,
		value_name = "NUM",
		default_value_t = 0,
		help = "Additional pages to scroll through"
	)]
	pub(crate) pages: usize,
	#[arg(
		short = 'l',
		long = "list-packs",
		help = "List packs per category and whether they load, then exit (default: disabled)"
	)]
	pub(crate) list_packs: bool,
	#[arg(
		long,
		value_name = "CATEGORY:PACK",
		action = ArgAction::Append,
		help = "Enable a pack for a category and save the settings (default: none)"
	)]
	pub(crate) enable: Vec<PackToggle>,
	#[arg(
		long,
		value_name = "CATEGORY:PACK",
		action = ArgAction::Append,
		help = "Disable a pack for a category and save the settings (default: none)"
	)]
	pub(crate) disable: Vec<PackToggle>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Log more; repeat for debug and trace output (default: warnings only)"
	)]
	pub(crate) verbose: u8,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
