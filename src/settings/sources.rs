use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use compendium_browser::app_dirs;
use config::{Config, Environment, File};

use crate::cli::CliArgs;

/// Keys read from the environment as comma-separated lists.
const LIST_KEYS: &[&str] = &["packs.default_enabled"];

/// Layer the config sources, lowest precedence first: discovered files, files
/// named with `--config`, then `COMPENDIUM__SECTION__KEY` variables. CLI
/// flags are applied on top by the caller.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let discovered = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	let optional = discovered.into_iter().map(|path| File::from(path).required(false));
	let explicit = cli.config.iter().map(|path| File::from(path.clone()).required(true));

	optional
		.chain(explicit)
		.fold(Config::builder(), |builder, file| builder.add_source(file))
		.add_source(environment())
		.build()
		.context("failed to assemble the compendium-browser configuration")
}

fn environment() -> Environment {
	LIST_KEYS.iter().fold(
		Environment::with_prefix("compendium")
			.prefix_separator("__")
			.separator("__")
			.try_parsing(true)
			.list_separator(","),
		|env, key| env.with_list_parse_key(key),
	)
}

/// `config.toml` in the config directory, then `.compendium.toml` and
/// `compendium.toml` in the working directory.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let home = app_dirs::config_dir().ok().map(|dir| dir.join("config.toml"));
	let local = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|cwd| [cwd.join(".compendium.toml"), cwd.join("compendium.toml")]);
	home.into_iter().chain(local).collect()
}

#[cfg(test)]
mod tests {
	use config::Map;

	use super::*;

	#[test]
	fn working_directory_files_follow_the_config_dir() {
		let files = default_config_files();
		let names: Vec<_> = files
			.iter()
			.filter_map(|path| path.file_name()?.to_str())
			.collect();
		assert!(names.ends_with(&[".compendium.toml", "compendium.toml"]), "{names:?}");
	}

	#[test]
	fn environment_splits_pack_lists_and_nests_sections() {
		let vars = Map::from([
			(
				"COMPENDIUM__PACKS__DEFAULT_ENABLED".to_string(),
				"pf2e.feats-srd,world.homebrew".to_string(),
			),
			("COMPENDIUM__BROWSER__PAGE_SIZE".to_string(), "25".to_string()),
			("OTHER__BROWSER__PAGE_SIZE".to_string(), "1".to_string()),
		]);
		let config = Config::builder()
			.add_source(environment().source(Some(vars)))
			.build()
			.unwrap();

		assert_eq!(
			config.get::<Vec<String>>("packs.default_enabled").unwrap(),
			vec!["pf2e.feats-srd", "world.homebrew"]
		);
		assert_eq!(config.get::<usize>("browser.page_size").unwrap(), 25);
	}
}
