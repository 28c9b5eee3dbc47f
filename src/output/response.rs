//! CLI response formatting and output.
//!
//! Provides the JSON envelope and exit code mapping.

use serde::Serialize;
use sitepipe::Error;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code().to_string(),
                message: err.to_string(),
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) {
    match serde_json::to_string_pretty(response) {
        Ok(payload) => println!("{}", payload),
        Err(e) => eprintln!("Error: failed to serialize response: {}", e),
    }
}

/// Print the envelope and return the process exit code.
pub fn print_result<T: Serialize>(result: sitepipe::Result<T>) -> i32 {
    match result {
        Ok(data) => {
            print_response(&CliResponse::success(data));
            0
        }
        Err(err) => {
            print_response(&CliResponse::<()>::from_error(&err));
            err.exit_code()
        }
    }
}
