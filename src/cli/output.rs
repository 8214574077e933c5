use std::fmt::Write;

use anyhow::Result;
use compendium_browser::{Category, IndexEntry, PackSettings};
use unicode_width::UnicodeWidthStr;

use crate::workflow::{BrowseOutcome, EntryListing};

const HEADERS: [&str; 4] = ["NAME", "TYPE", "LEVEL", "PACK"];

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
	match outcome {
		BrowseOutcome::Packs(settings) => print!("{}", format_packs(settings)),
		BrowseOutcome::Entries(listing) => print!("{}", format_listing(listing)),
	}
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
	Ok(match outcome {
		BrowseOutcome::Packs(settings) => serde_json::to_string_pretty(settings)?,
		BrowseOutcome::Entries(listing) => serde_json::to_string_pretty(listing)?,
	})
}

/// Every category with its packs, `[x]` marking the ones that load.
pub(crate) fn format_packs(settings: &PackSettings) -> String {
	let mut out = String::new();
	for category in Category::ALL {
		let mut packs = settings.packs(category).peekable();
		if packs.peek().is_none() {
			continue;
		}
		let _ = writeln!(out, "{category}:");
		for (id, info) in packs {
			let mark = if info.load { 'x' } else { ' ' };
			let _ = writeln!(out, "  [{mark}] {} ({id})", info.name);
		}
	}
	if out.is_empty() {
		out.push_str("No packs found\n");
	}
	out
}

/// Entries as an aligned table followed by a count line.
pub(crate) fn format_listing(listing: &EntryListing) -> String {
	let rows: Vec<[String; 4]> = listing.entries.iter().map(row).collect();
	let mut widths = HEADERS.map(UnicodeWidthStr::width);
	for row in &rows {
		for (width, cell) in widths.iter_mut().zip(row) {
			*width = (*width).max(cell.width());
		}
	}

	let mut out = String::new();
	push_row(&mut out, &HEADERS.map(String::from), &widths);
	for row in &rows {
		push_row(&mut out, row, &widths);
	}
	let _ = writeln!(
		out,
		"Showing {} of {} {} entries",
		listing.entries.len(),
		listing.total,
		listing.category
	);
	out
}

fn row(entry: &IndexEntry) -> [String; 4] {
	let level = entry
		.number("level")
		.map_or_else(|| "-".to_string(), format_number);
	[
		entry.name.clone(),
		entry.kind.clone(),
		level,
		entry.key.pack.clone(),
	]
}

fn format_number(value: f64) -> String {
	if value.fract() == 0.0 {
		format!("{value:.0}")
	} else {
		value.to_string()
	}
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
	let mut line = String::new();
	for (cell, width) in cells.iter().zip(widths) {
		line.push_str(cell);
		line.extend(std::iter::repeat_n(' ', width - cell.width() + 2));
	}
	out.push_str(line.trim_end());
	out.push('\n');
}
