use async_trait::async_trait;

pub type HttpRequest = http::request::Request<Vec<u8>>;

pub type HttpResponse<T> = http::response::Response<T>;

/// Transport used by the authentication client.
///
/// Implementations hand back the response as-is, whatever its status code, with the body fully
/// buffered.
#[async_trait]
pub trait BaseHttpClient: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn request_bytes(&self, request: HttpRequest) -> Result<HttpResponse<Vec<u8>>, Self::Error>;
}
