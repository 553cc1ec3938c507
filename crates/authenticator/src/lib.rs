mod client;
pub mod error;
mod token;

pub use client::config::Config;
pub use client::config::Endpoint;
pub use client::ro::Authentication;
pub use client::ro::Credentials;
pub use client::ro::RoClient;
pub use token::Token;

pub use authenticator_http::BaseHttpClient;
pub use authenticator_http::HttpClient;
