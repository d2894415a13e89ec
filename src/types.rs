use crate::error::StabilityError;
use serde::Serialize;
use std::path::Path;

/// The outcome of one generation run, in the shape consumed by callers.
///
/// Exactly one of these is produced per invocation and printed as a single
/// JSON line, e.g.
/// `{"success": true, "message": "3D model generated successfully", "output_path": "out/photo_3d.glb"}`
/// or `{"success": false, "error": "API Error: 503", "details": "server overloaded"}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum InvocationResult {
    Success {
        success: bool,
        message: String,
        output_path: String,
    },
    Failure {
        success: bool,
        error: String,
        /// Raw response text, present only for non-200 API answers.
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

impl InvocationResult {
    /// Builds the success arm for a model written to `output_path`.
    pub fn success<P: AsRef<Path>>(output_path: P) -> Self {
        InvocationResult::Success {
            success: true,
            message: "3D model generated successfully".to_string(),
            output_path: output_path.as_ref().display().to_string(),
        }
    }

    /// Builds the failure arm from any error of the generation flow.
    ///
    /// A non-200 API answer keeps its raw body in `details`; every other
    /// error is reported by its display text alone.
    pub fn failure(err: StabilityError) -> Self {
        let details = match &err {
            StabilityError::ApiError { body, .. } => Some(body.clone()),
            _ => None,
        };
        InvocationResult::Failure {
            success: false,
            error: err.to_string(),
            details,
        }
    }

    /// The failure emitted when the process is called with the wrong number
    /// of arguments.
    pub fn invalid_arguments() -> Self {
        InvocationResult::Failure {
            success: false,
            error: "Invalid arguments. Required: input_path output_path api_key".to_string(),
            details: None,
        }
    }

    /// Serializes the result as the single output line.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(r#"{{"success": false, "error": "failed to encode result: {}"}}"#, e)
        })
    }
}
