use crate::error::AppError;

/// Validates a configured base URL.
///
/// # Validation Rules
/// - cannot be empty
/// - must start with `http://` or `https://`
/// - must end with `/`, since endpoint suffixes are appended verbatim
pub fn validate_base_url(name: &str, url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{name} must start with http:// or https:// (got '{url}')"
        )));
    }

    if !url.ends_with('/') {
        return Err(AppError::config_error(format!(
            "{name} must end with '/' (got '{url}')"
        )));
    }

    Ok(())
}

/// Validates the HTTP timeout and optional log file path.
pub fn validate_runtime(
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(log_path) = log_file_path
        && log_path.is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}
