use std::fmt::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use compendium_browser::app_dirs;

/// `--version` output: the version followed by every location the browser
/// reads from or writes to.
pub(super) fn long_version() -> &'static str {
	static BANNER: OnceLock<String> = OnceLock::new();
	BANNER.get_or_init(|| {
		let locations: [(&str, anyhow::Result<PathBuf>); 3] = [
			("config", app_dirs::config_dir()),
			("packs", app_dirs::default_packs_dir()),
			("settings", app_dirs::default_settings_file()),
		];
		let mut banner = format!("{}\n", env!("CARGO_PKG_VERSION"));
		for (label, location) in locations {
			let shown = location.map_or_else(|err| format!("unavailable ({err})"), |path| path.display().to_string());
			let _ = write!(banner, "\n{label:<9}{shown}");
		}
		banner
	})
}

pub(super) fn cli_styles() -> Styles {
	let heading = AnsiColor::Green.on_default().effects(Effects::BOLD);
	Styles::styled()
		.header(heading)
		.usage(heading)
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
		.invalid(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
