use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API key cannot be empty
/// - API base URL must start with http:// or https://
/// - If a timeout is configured it must be greater than zero
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_key: &str,
    api_base_url: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: Option<u64>,
) -> Result<(), AppError> {
    if api_key.trim().is_empty() {
        return Err(AppError::config_error("API key cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "API base URL must start with http:// or https://, got '{api_base_url}'"
        )));
    }

    if http_timeout_seconds == Some(0) {
        return Err(AppError::config_error(
            "HTTP timeout must be greater than zero seconds",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
