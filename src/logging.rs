//! Debug logging
//!
//! Log output would corrupt the terminal UI, so logs go to a file instead
//! of stderr. Only active in debug builds via `#[cfg(debug_assertions)]`;
//! release builds compile this to a no-op.

/// Log file written next to the working directory in debug builds
#[cfg(debug_assertions)]
const LOG_FILE: &str = "lunchspin-debug.log";

pub fn init() {
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let Ok(file) = std::fs::File::create(LOG_FILE) else {
            return;
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("debug"),
        )
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
    }
}
