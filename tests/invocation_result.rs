use stablefast3d::{InvocationResult, StabilityError};
use std::path::PathBuf;

#[test]
fn test_success_line_shape() {
    let result = InvocationResult::success("out/photo_3d.glb");
    assert_eq!(
        result.to_json_line(),
        r#"{"success":true,"message":"3D model generated successfully","output_path":"out/photo_3d.glb"}"#
    );
}

#[test]
fn test_api_error_carries_details() {
    let result = InvocationResult::failure(StabilityError::ApiError {
        status: 503,
        body: "server overloaded".to_string(),
    });
    assert_eq!(
        result.to_json_line(),
        r#"{"success":false,"error":"API Error: 503","details":"server overloaded"}"#
    );
}

#[test]
fn test_missing_input_has_no_details_field() {
    let result =
        InvocationResult::failure(StabilityError::InputNotFound(PathBuf::from("ballon.jpg")));
    assert_eq!(
        result.to_json_line(),
        r#"{"success":false,"error":"Input file not found: ballon.jpg"}"#
    );
}

#[test]
fn test_invalid_arguments_line() {
    assert_eq!(
        InvocationResult::invalid_arguments().to_json_line(),
        r#"{"success":false,"error":"Invalid arguments. Required: input_path output_path api_key"}"#
    );
}
