use async_trait::async_trait;
use reqwest::{Request, Response};

use crate::core::{BaseHttpClient, HttpRequest, HttpResponse};
use crate::error::Error;

/// [`BaseHttpClient`] backed by a default-configured [`reqwest::Client`].
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::ClientBuilder::new().build()?;

        Ok(Self { client })
    }

    fn build_request(request: HttpRequest) -> Result<Request, Error> {
        Request::try_from(request).map_err(Into::into)
    }

    async fn into_http_response(response: Response) -> Result<HttpResponse<Vec<u8>>, Error> {
        let status_code = response.status();
        let headers = response.headers().clone();
        let chunks = response.bytes().await?;

        let mut http_response = http::response::Response::builder().status(status_code);
        if let Some(header_map) = http_response.headers_mut() {
            header_map.extend(headers);
        }
        http_response.body(chunks.to_vec()).map_err(Into::into)
    }
}

#[async_trait]
impl BaseHttpClient for ReqwestHttpClient {
    type Error = Error;

    async fn request_bytes(&self, request: HttpRequest) -> Result<HttpResponse<Vec<u8>>, Self::Error> {
        let request = Self::build_request(request)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "Sending request");

        let response = self.client.execute(request).await?;
        tracing::debug!(status = %response.status(), "Received response");

        Self::into_http_response(response).await
    }
}
