use std::fmt;

/// Counts attempted packs against the number requested.
///
/// Produces the numbered messages handed to a
/// [`ProgressSink`](compendium_pack_api::ProgressSink).
#[derive(Debug, Clone)]
pub struct LoadProgress {
	total: usize,
	attempted: usize,
	complete: bool,
}

pub const LOADING_COMPLETE: &str = "Loading complete";

impl LoadProgress {
	#[must_use]
	pub const fn new(total: usize) -> Self {
		Self {
			total,
			attempted: 0,
			complete: total == 0,
		}
	}

	/// Record one more attempted pack and describe it.
	///
	/// Attempts past the total keep the counter pinned at the total so the
	/// label never reads `6/5`.
	pub fn advance(&mut self, label: &str) -> String {
		self.attempted = (self.attempted + 1).min(self.total);
		let step = StepDisplay {
			attempted: self.attempted,
			total: self.total,
		};
		if label.is_empty() {
			format!("{step}")
		} else {
			format!("{step} Loading pack {label}")
		}
	}

	pub fn close(&mut self) -> &'static str {
		self.complete = true;
		LOADING_COMPLETE
	}

	#[must_use]
	pub const fn attempted(&self) -> usize {
		self.attempted
	}

	#[must_use]
	pub const fn is_complete(&self) -> bool {
		self.complete
	}
}

struct StepDisplay {
	attempted: usize,
	total: usize,
}

impl fmt::Display for StepDisplay {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}/{}]", self.attempted, self.total)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn numbers_each_attempt() {
		let mut progress = LoadProgress::new(3);
		assert_eq!(progress.advance("Equipment"), "[1/3] Loading pack Equipment");
		assert_eq!(progress.advance(""), "[2/3]");
		assert!(!progress.is_complete());
		assert_eq!(progress.close(), LOADING_COMPLETE);
		assert!(progress.is_complete());
	}

	#[test]
	fn never_counts_past_the_total() {
		let mut progress = LoadProgress::new(1);
		progress.advance("A");
		assert_eq!(progress.advance("B"), "[1/1] Loading pack B");
		assert_eq!(progress.attempted(), 1);
	}

	#[test]
	fn empty_load_is_complete_immediately() {
		assert!(LoadProgress::new(0).is_complete());
	}
}
