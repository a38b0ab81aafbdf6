use std::io::Write;

use log::{Level, LevelFilter};

/// Install the global logger.
///
/// Normal output goes through `log::info!`, so the default level is `Info`
/// and info lines are printed bare. `RUST_LOG` is applied on top.
pub(crate) fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .parse_default_env()
        .format(move |buf, record| {
            if verbose {
                writeln!(
                    buf,
                    "{} {:<5} [{}] {}",
                    buf.timestamp_millis(),
                    record.level(),
                    record.target(),
                    record.args()
                )
            } else if record.level() == Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(
                    buf,
                    "{}: {}",
                    record.level().as_str().to_lowercase(),
                    record.args()
                )
            }
        });

    let _ = builder.try_init();
}
