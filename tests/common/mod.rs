use std::path::{Path, PathBuf};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GENERATE_PATH: &str = "/v2beta/3d/stable-fast-3d";

#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Mounts a 200 answer whose body is the binary model artifact.
#[allow(dead_code)]
pub async fn mock_generation_success(server: &MockServer, body: &[u8]) {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .mount(server)
        .await;
}

/// Mounts a non-200 answer with a plain-text body.
#[allow(dead_code)]
pub async fn mock_generation_failure(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Mounts a mock that must never be hit; verified when the server drops.
#[allow(dead_code)]
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

/// Writes a dummy image file under `dir` and returns its path.
#[allow(dead_code)]
pub fn write_test_image(dir: &Path, name: &str) -> PathBuf {
    let file_path = dir.join(name);
    std::fs::write(&file_path, b"dummy image data").unwrap();
    file_path
}
