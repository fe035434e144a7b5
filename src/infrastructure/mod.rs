pub mod brasil_api;
pub mod config;
pub mod http_transport;
pub mod mock_client;
