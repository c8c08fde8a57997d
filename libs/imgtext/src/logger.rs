use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

type ErrorSink = Mutex<Box<dyn Write + Send>>;

/// Installs the console logger and, when `error_log` is set, appends every
/// `error` record to that file.
///
/// `RUST_LOG` directives take precedence over the built-in `Trace` levels.
pub fn init_logger(name: impl Into<String>, error_log: Option<&Path>) -> Result<()> {
    let filters = std::env::var("RUST_LOG").ok();
    let console = console_builder(name, filters.as_deref()).build();

    let error_file = match error_log {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open error log {}", path.display()))?;
            Some(Mutex::new(Box::new(file) as Box<dyn Write + Send>))
        }
        None => None,
    };

    let max_level = console.filter().max(LevelFilter::Error);
    log::set_boxed_logger(Box::new(ExtractorLogger::new(console, error_file)))?;
    log::set_max_level(max_level);
    Ok(())
}

fn console_builder(name: impl Into<String>, filters: Option<&str>) -> env_logger::Builder {
    let crate_name = name.into().replace('-', "_");

    let mut builder = env_logger::Builder::new();
    builder
        .filter(Some(&crate_name), LevelFilter::Trace)
        .filter(Some("imgtext"), LevelFilter::Trace)
        .format(move |f, rec| {
            let now = humantime::format_rfc3339_millis(std::time::SystemTime::now());
            let module = rec.module_path().unwrap_or("<unknown>");
            let line = rec.line().unwrap_or(u32::MIN);
            let level = rec.level();

            writeln!(
                f,
                "[{} {} {} {}:{}] {}",
                level,
                crate_name,
                now,
                module,
                line,
                rec.args()
            )
        });
    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }
    builder
}

pub fn init_logger_exe(error_log: Option<&Path>) -> Result<()> {
    let exe = std::env::current_exe()?;
    let name = exe
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("imgtext")
        .to_string();
    init_logger(name, error_log)
}

struct ExtractorLogger {
    console: env_logger::Logger,
    error_file: Option<ErrorSink>,
    write_failed: AtomicBool,
}

impl ExtractorLogger {
    fn new(console: env_logger::Logger, error_file: Option<ErrorSink>) -> Self {
        Self {
            console,
            error_file,
            write_failed: AtomicBool::new(false),
        }
    }

    /// Reports the first failed write to stderr, later ones stay quiet.
    fn report_write_failure(&self, err: &std::io::Error) {
        if !self.write_failed.swap(true, Ordering::SeqCst) {
            eprintln!("Failed to write to error log: {}", err);
        }
    }
}

impl Log for ExtractorLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.console.enabled(metadata)
            || (self.error_file.is_some() && metadata.level() == log::Level::Error)
    }

    fn log(&self, record: &Record) {
        if self.console.enabled(record.metadata()) {
            self.console.log(record);
        }

        if record.level() != log::Level::Error {
            return;
        }
        if let Some(file) = &self.error_file {
            if let Ok(mut file) = file.lock() {
                if let Err(e) = write_error_line(&mut *file, record) {
                    self.report_write_failure(&e);
                }
            }
        }
    }

    fn flush(&self) {
        self.console.flush();
        if let Some(file) = &self.error_file {
            if let Ok(mut file) = file.lock() {
                if let Err(e) = file.flush() {
                    self.report_write_failure(&e);
                }
            }
        }
    }
}

fn write_error_line(out: &mut impl Write, record: &Record) -> std::io::Result<()> {
    let now = humantime::format_rfc3339_millis(std::time::SystemTime::now());
    writeln!(out, "{} - {}: {}", now, record.level(), record.args())
}
