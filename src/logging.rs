use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::Local;

use crate::error::TeamResult;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
    static ref ECHO_STDERR: AtomicBool = AtomicBool::new(false);
}

/// Start logging to `<cache dir>/team-console/logs`.
pub fn init_logging() -> TeamResult<PathBuf> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("team-console")
        .join("logs");

    init_logging_in(&log_dir)
}

pub fn init_logging_in(log_dir: &Path) -> TeamResult<PathBuf> {
    create_dir_all(log_dir)?;

    let log_file = log_dir.join(format!(
        "team-console-{}.log",
        Local::now().format("%Y%m%d-%H%M%S")
    ));

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(log_file.clone());
    }

    log_info(&format!("Logging initialized to: {}", log_file.display()));

    Ok(log_file)
}

/// Mirror every log line to stderr. Off while the terminal UI owns the screen.
pub fn set_echo_stderr(enabled: bool) {
    ECHO_STDERR.store(enabled, Ordering::Relaxed);
}

pub fn log_error(message: &str) {
    log_with_level("ERROR", message);
}

pub fn log_info(message: &str) {
    log_with_level("INFO", message);
}

pub fn log_debug(message: &str) {
    log_with_level("DEBUG", message);
}

pub fn log_panic_info(info: &std::panic::PanicHookInfo) {
    let mut message = String::from("PANIC: ");

    if let Some(location) = info.location() {
        message.push_str(&format!(
            "at {}:{}:{} - ",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    if let Some(s) = info.payload().downcast_ref::<&str>() {
        message.push_str(s);
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        message.push_str(s);
    } else {
        message.push_str("Unknown panic payload");
    }

    log_error(&message);

    let backtrace = std::backtrace::Backtrace::capture();
    log_debug(&format!("Backtrace:\n{}", backtrace));
}

fn log_with_level(level: &str, message: &str) {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

    if let Some(log_file) = get_log_file_path() {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
        {
            let _ = writeln!(file, "[{}] {} - {}", timestamp, level, message);
        }
    }

    if ECHO_STDERR.load(Ordering::Relaxed) {
        eprintln!("[{}] {}", level, message);
    }
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|guard| guard.clone())
}
