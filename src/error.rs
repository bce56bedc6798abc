pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create dataset parse error, optionally pointing at a line
pub fn dataset_parse_error(
    source: &str,
    line: Option<usize>,
    message: impl Into<String>
) -> AppError {
    let msg = message.into();
    match line {
        Some(line) => AppError::bad_request(format!(
            "Dataset parse error in '{}' at line {}:\n  {}",
            source, line, msg
        )),
        None => AppError::bad_request(format!("Dataset parse error in '{}':\n  {}", source, msg))
    }
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create invalid input error
pub fn input_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}
