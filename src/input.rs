//! Reading command input from files or standard input.

use std::{
    fs::read_to_string,
    io::{self, Read}
};

use crate::error::{AppResult, file_read_error};

/// Path that selects standard input.
pub const STDIN: &str = "-";

/// Reads a file, or standard input when the path is "-".
///
/// # Errors
///
/// Returns an error if the file cannot be read or stdin fails.
pub fn read_input(path: &str) -> AppResult<String> {
    if path == STDIN {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        Ok(buffer)
    } else {
        read_to_string(path).map_err(|e| file_read_error(path, e))
    }
}
