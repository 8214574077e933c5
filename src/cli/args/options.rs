use std::str::FromStr;

use anyhow::{Context, Error, Result, anyhow, bail};
use clap::ValueEnum;
use compendium_browser::Category;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// `key=min..max` with either bound optional.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RangeArg {
	pub(crate) key: String,
	pub(crate) min: Option<f64>,
	pub(crate) max: Option<f64>,
}

impl FromStr for RangeArg {
	type Err = Error;

	fn from_str(value: &str) -> Result<Self> {
		let (key, bounds) = split_pair(value, '=')?;
		let (min, max) = bounds
			.split_once("..")
			.ok_or_else(|| anyhow!("expected MIN..MAX after '=' in '{value}'"))?;
		Ok(Self {
			key,
			min: parse_bound(min)?,
			max: parse_bound(max)?,
		})
	}
}

/// `key=choice`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DropdownArg {
	pub(crate) key: String,
	pub(crate) choice: String,
}

impl FromStr for DropdownArg {
	type Err = Error;

	fn from_str(value: &str) -> Result<Self> {
		let (key, choice) = split_pair(value, '=')?;
		if choice.trim().is_empty() {
			bail!("missing choice in '{value}'");
		}
		Ok(Self {
			key,
			choice: choice.trim().to_string(),
		})
	}
}

/// Sort field, with `-field` as shorthand for descending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SortArg {
	pub(crate) field: String,
	pub(crate) descending: bool,
}

impl FromStr for SortArg {
	type Err = Error;

	fn from_str(value: &str) -> Result<Self> {
		let value = value.trim();
		let (field, descending) = match value.strip_prefix('-') {
			Some(field) => (field, true),
			None => (value, false),
		};
		if field.is_empty() {
			bail!("sort field must not be empty");
		}
		Ok(Self {
			field: field.to_string(),
			descending,
		})
	}
}

/// `category:pack`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PackToggle {
	pub(crate) category: Category,
	pub(crate) pack: String,
}

impl FromStr for PackToggle {
	type Err = Error;

	fn from_str(value: &str) -> Result<Self> {
		let (category, pack) = split_pair(value, ':')?;
		let category = category
			.parse::<Category>()
			.with_context(|| format!("invalid category in '{value}'"))?;
		Ok(Self {
			category,
			pack: pack.trim().to_string(),
		})
	}
}

fn split_pair(value: &str, separator: char) -> Result<(String, &str)> {
	let (key, rest) = value
		.split_once(separator)
		.ok_or_else(|| anyhow!("expected '{separator}' in '{value}'"))?;
	let key = key.trim();
	if key.is_empty() {
		bail!("missing name before '{separator}' in '{value}'");
	}
	Ok((key.to_string(), rest))
}

fn parse_bound(text: &str) -> Result<Option<f64>> {
	let text = text.trim();
	if text.is_empty() {
		return Ok(None);
	}
	text.parse()
		.map(Some)
		.with_context(|| format!("'{text}' is not a number"))
}
