use clap::{CommandFactory, Parser};
use compendium_browser::Category;

use super::{CliArgs, DropdownArg, OutputFormat, PackToggle, RangeArg, SortArg};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = CliArgs::parse_from(["compendium-browser"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.category.is_none());
	assert_eq!(parsed.pages, 0);
}

#[test]
fn query_options_parse() {
	let parsed = CliArgs::parse_from([
		"compendium-browser",
		"equipment",
		"-f",
		"rarity-common",
		"--filter",
		"traits-two-hand",
		"--range",
		"price=..5",
		"--max-level",
		"-1",
		"--dropdown",
		"timefilter=reaction",
		"--sort",
		"-price",
		"-vv",
	]);
	assert_eq!(parsed.category.as_deref(), Some("equipment"));
	assert_eq!(parsed.filters, vec!["rarity-common", "traits-two-hand"]);
	assert_eq!(
		parsed.ranges,
		vec![RangeArg {
			key: "price".into(),
			min: None,
			max: Some(5.0)
		}]
	);
	assert_eq!(parsed.max_level, Some(-1.0));
	assert_eq!(
		parsed.dropdowns,
		vec![DropdownArg {
			key: "timefilter".into(),
			choice: "reaction".into()
		}]
	);
	assert_eq!(
		parsed.sort,
		Some(SortArg {
			field: "price".into(),
			descending: true
		})
	);
	assert_eq!(parsed.verbose, 2);
}

#[test]
fn malformed_values_are_rejected() {
	assert!("price".parse::<RangeArg>().is_err());
	assert!("price=cheap..".parse::<RangeArg>().is_err());
	assert!("=1..2".parse::<RangeArg>().is_err());
	assert!("timefilter=".parse::<DropdownArg>().is_err());
	assert!("vehicle:pf2e.x".parse::<PackToggle>().is_err());
	assert_eq!(
		"feat:world.homebrew".parse::<PackToggle>().unwrap(),
		PackToggle {
			category: Category::Feat,
			pack: "world.homebrew".into()
		}
	);
}
