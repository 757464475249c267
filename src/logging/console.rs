use anyhow::Result;

/// Terminal logger for the native resource checker.
pub fn init(level: log::LevelFilter, ignore: &[&'static str]) -> Result<()> {
	use simplelog::*;
	let cfg = {
		let mut builder = ConfigBuilder::new();
		builder
			.set_max_level(LevelFilter::Error)
			.set_time_format_custom(format_description!("[hour]:[minute]:[second]"))
			// [ERROR]
			// [ WARN]
			// [ INFO]
			.set_level_padding(LevelPadding::Left)
			// target is always logged so readers know which part of the dialog spoke
			.set_target_level(LevelFilter::Error)
			.set_location_level(LevelFilter::Off);
		for str in ignore.iter() {
			builder.add_filter_ignore_str(str);
		}
		builder.build()
	};
	TermLogger::init(level, cfg, TerminalMode::Mixed, ColorChoice::Auto)?;
	Ok(())
}
