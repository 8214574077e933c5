/// Observer for pack loading progress.
///
/// Notifications are purely informational; a sink cannot slow down or cancel
/// a load.
pub trait ProgressSink {
	/// One pack was attempted, whether or not it produced entries.
	fn advance(&mut self, message: &str);

	/// The load finished; no further notifications follow.
	fn close(&mut self, message: &str);
}

/// A sink that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
	fn advance(&mut self, _message: &str) {}

	fn close(&mut self, _message: &str) {}
}
