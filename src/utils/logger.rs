use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::Once;
use std::sync::OnceLock;

// 전역 로그 파일 핸들 (init 전에는 콘솔에만 출력)
static LOGGER: OnceLock<Mutex<Option<File>>> = OnceLock::new();
static INIT: Once = Once::new();

/// Console logger that optionally mirrors every message into a file.
///
/// `log!` goes to stdout and is reserved for the result a tool reports.
/// `log_info!` and `log_error!` go to stderr so they never mix with it.
pub struct Logger;

impl Logger {
    pub fn init<P: AsRef<Path>>(log_path: P) {
        let log_path = log_path.as_ref();
        INIT.call_once(|| {
            // 디렉토리가 없으면 생성
            if let Some(log_dir) = log_path.parent() {
                if !log_dir.as_os_str().is_empty() && !log_dir.exists() {
                    if let Err(e) = fs::create_dir_all(log_dir) {
                        eprintln!("Cannot create log directory: {e}");
                        LOGGER.get_or_init(|| Mutex::new(None));
                        return;
                    }
                }
            }

            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(log_path);

            match file {
                Ok(file) => {
                    eprintln!("Writing log to '{}'", log_path.display());
                    LOGGER.get_or_init(|| Mutex::new(Some(file)));
                }
                Err(e) => {
                    eprintln!("Cannot open log file: {e}");
                    LOGGER.get_or_init(|| Mutex::new(None));
                }
            }
        });
    }

    pub fn log(message: &str) {
        println!("{message}");
        Self::write_to_file(message);
    }

    pub fn log_info(message: &str) {
        eprintln!("{message}");
        Self::write_to_file(message);
    }

    pub fn log_error(message: &str) {
        eprintln!("{message}");
        Self::write_to_file(&format!("ERROR: {message}"));
    }

    pub fn flush() -> std::io::Result<()> {
        if let Some(logger) = LOGGER.get() {
            if let Ok(mut file_guard) = logger.lock() {
                if let Some(file) = file_guard.as_mut() {
                    file.flush()?;
                }
            }
        }
        Ok(())
    }

    fn write_to_file(message: &str) {
        if let Some(logger) = LOGGER.get() {
            if let Ok(mut file_guard) = logger.lock() {
                if let Some(file) = file_guard.as_mut() {
                    if let Err(e) = writeln!(file, "{message}") {
                        eprintln!("Failed to write log file: {e}");
                    }
                }
            }
        }
    }
}

// 매크로 정의
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::utils::Logger::log(&message);
    }};
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::utils::Logger::log_info(&message);
    }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::utils::Logger::log_error(&message);
    }};
}
