/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for foxyproxy-reseller-adapter tests

use foxyproxy_reseller_adapter::{ClientConfig, Credentials, ResellerClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials used by every test tenant
pub fn test_credentials() -> Credentials {
    Credentials {
        username: "admin".to_string(),
        password: "12345".to_string(),
        domain: "example-inc".to_string(),
    }
}

/// Client pointed at the given mock server
pub fn test_client(server: &MockServer) -> ResellerClient {
    ResellerClient::with_config(ClientConfig::default(), test_credentials(), &server.uri())
        .expect("client init")
}
