use vibegen::config::llm::{LlmConfig, DEFAULT_BASE_URL};
use vibegen::config::server::ServerConfig;
use vibegen::services::llm::GenerationParams;

#[test]
fn test_llm_config_defaults() {
    let config = LlmConfig::new("key");

    assert_eq!(config.base_url, DEFAULT_BASE_URL);

    let params = GenerationParams::from(&config);
    assert_eq!(params.model, "gpt-3.5-turbo");
    assert_eq!(params.temperature, 0.8);
    assert_eq!(params.max_tokens, 256);
}

#[tokio::test]
async fn test_server_binds_ip_address() {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    let listener = config.bind().await.unwrap();

    assert!(listener.local_addr().unwrap().ip().is_loopback());
}

#[tokio::test]
async fn test_server_binds_hostname() {
    let config = ServerConfig {
        host: "localhost".to_string(),
        port: 0,
    };

    let listener = config.bind().await.unwrap();

    assert!(listener.local_addr().unwrap().ip().is_loopback());
}
