use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

/// Settings for the browser console logger.
#[derive(Clone, Debug)]
pub struct Config {
	level: LevelFilter,
	/// Prefix each line with the record's target instead of its module path.
	prefer_target: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			level: LevelFilter::Info,
			prefer_target: false,
		}
	}
}

impl Config {
	pub fn with_level(mut self, level: LevelFilter) -> Self {
		self.level = level;
		self
	}

	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}
}

struct ConsoleLogger(Config);

impl ConsoleLogger {
	fn origin<'a>(&self, record: &'a Record<'_>) -> &'a str {
		match (self.0.prefer_target, record.module_path()) {
			(false, Some(module)) => module,
			_ => record.target(),
		}
	}
}

impl Log for ConsoleLogger {
	fn enabled(&self, metadata: &Metadata<'_>) -> bool {
		metadata.level() <= self.0.level
	}

	fn log(&self, record: &Record<'_>) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let line = JsValue::from_str(&format!(
			"[{:>5}] {}: {}",
			record.level(),
			self.origin(record),
			record.args()
		));
		match record.level() {
			Level::Error => web_sys::console::error_1(&line),
			Level::Warn => web_sys::console::warn_1(&line),
			Level::Info => web_sys::console::info_1(&line),
			Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
		}
	}

	fn flush(&self) {}
}

/// Routes the `log` macros to the browser's devtools console.
/// Calling this more than once keeps the first logger.
pub fn init(config: Config) {
	let level = config.level;
	if log::set_boxed_logger(Box::new(ConsoleLogger(config))).is_ok() {
		log::set_max_level(level);
	}
}
