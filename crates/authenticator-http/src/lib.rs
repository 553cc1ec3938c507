mod core;
mod error;
mod reqwest;

pub use crate::core::BaseHttpClient;
pub use crate::core::HttpRequest;
pub use crate::core::HttpResponse;
pub use crate::error::Error;
pub use crate::reqwest::ReqwestHttpClient as HttpClient;
