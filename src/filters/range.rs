use serde::Serialize;

/// Inclusive numeric bounds. An unset bound does not constrain its side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeFilter {
	pub label: &'static str,
	pub is_expanded: bool,
	pub min: Option<f64>,
	pub max: Option<f64>,
}

impl RangeFilter {
	#[must_use]
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			is_expanded: false,
			min: None,
			max: None,
		}
	}

	#[must_use]
	pub fn is_active(&self) -> bool {
		self.min.is_some() || self.max.is_some()
	}

	/// Replace both bounds. A minimum above the maximum is clamped down to it.
	pub fn set_bounds(&mut self, min: Option<f64>, max: Option<f64>) {
		self.max = max;
		self.min = match (min, max) {
			(Some(min), Some(max)) if min > max => Some(max),
			_ => min,
		};
	}

	/// Replace the upper bound only, clamped to the current minimum.
	pub fn set_max(&mut self, max: Option<f64>) {
		self.max = match (self.min, max) {
			(Some(min), Some(max)) if max < min => Some(min),
			_ => max,
		};
	}

	/// An entry without the attribute fails as soon as any bound is set.
	#[must_use]
	pub fn matches(&self, value: Option<f64>) -> bool {
		if !self.is_active() {
			return true;
		}
		let Some(value) = value else {
			return false;
		};
		self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
	}
}
