use colored::Colorize;
use log::LevelFilter;

/// Route `log` output to stdout, coloured by level.
///
/// `verbosity` is the number of `-v` flags; `ONTONIM_LOG` wins when set.
pub fn init_logging(verbosity: u8) -> Result<(), fern::InitError> {
    let level = std::env::var("ONTONIM_LOG")
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or_else(|| level_for_verbosity(verbosity));

    fern::Dispatch::new()
        .format(|out, message, record| {
            let line = message.to_string();
            match record.level() {
                log::Level::Error => out.finish(format_args!("{}", line.red())),
                log::Level::Warn => out.finish(format_args!("{}", line.yellow())),
                log::Level::Info => out.finish(format_args!("{}", line.green())),
                level => out.finish(format_args!(
                    "{}",
                    format!("[{} {}] {}", level, record.target(), line).dimmed()
                )),
            }
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}

fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}
