pub mod clock;
pub mod http_client;
pub mod output;
