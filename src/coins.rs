//! Coin price normalization.
//!
//! Equipment prices arrive as plain gold numbers, coin strings such as
//! `"1 gp, 5 sp"`, or denomination objects like `{"gp": 1, "sp": 5}`. They
//! are all reduced to copper so that range filters and sorting compare a
//! single number.

use std::iter;

use serde_json::Value;

const DENOMINATIONS: [(&str, u64); 4] = [("pp", 1000), ("gp", 100), ("sp", 10), ("cp", 1)];

/// A price expressed in copper pieces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coins {
	copper: u64,
}

impl Coins {
	#[must_use]
	pub const fn from_copper(copper: u64) -> Self {
		Self { copper }
	}

	#[must_use]
	pub const fn copper(self) -> u64 {
		self.copper
	}

	/// Value in gold pieces, the unit price ranges are expressed in.
	#[must_use]
	pub fn gold(self) -> f64 {
		self.copper as f64 / 100.0
	}

	/// Parse a price from any of the supported shapes.
	#[must_use]
	pub fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Number(number) => {
				let gold = number.as_f64()?;
				(gold >= 0.0).then(|| Self::from_copper((gold * 100.0).round() as u64))
			}
			Value::String(text) => Self::parse(text),
			Value::Object(map) => {
				let mut copper: u64 = 0;
				let mut seen = false;
				for (name, factor) in DENOMINATIONS {
					if let Some(amount) = map.get(name).and_then(Value::as_u64) {
						copper = amount.checked_mul(factor)?.checked_add(copper)?;
						seen = true;
					}
				}
				seen.then_some(Self::from_copper(copper))
			}
			_ => None,
		}
	}

	/// Parse a coin string such as `"2 gp"` or `"1,000 gp, 5 sp"`.
	///
	/// A bare number without a unit counts as gold.
	#[must_use]
	pub fn parse(text: &str) -> Option<Self> {
		let mut chars = text.chars().peekable();
		let mut copper: u64 = 0;
		let mut seen = false;
		loop {
			while chars.next_if(|c| !c.is_ascii_digit()).is_some() {}

			let mut amount: u64 = 0;
			let mut digits = false;
			while let Some(c) = chars.next_if(|c| c.is_ascii_digit() || *c == ',') {
				if let Some(digit) = c.to_digit(10) {
					amount = amount.checked_mul(10)?.checked_add(u64::from(digit))?;
					digits = true;
				}
			}
			if !digits {
				break;
			}

			while chars.next_if(|c| c.is_whitespace()).is_some() {}
			let unit: String = iter::from_fn(|| chars.next_if(char::is_ascii_alphabetic)).collect();
			let factor = denomination(if unit.is_empty() { "gp" } else { &unit })?;
			copper = amount.checked_mul(factor)?.checked_add(copper)?;
			seen = true;
		}
		seen.then_some(Self::from_copper(copper))
	}
}

fn denomination(unit: &str) -> Option<u64> {
	DENOMINATIONS
		.iter()
		.find(|(name, _)| unit.eq_ignore_ascii_case(name))
		.map(|(_, factor)| *factor)
}
