//! Response classification

use crate::error::{ApiErrors, Error, RateLimitError, Result};
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};

/// The classified result of one API call.
///
/// Exactly one variant carries data. Transport failures and undecodable error
/// bodies are not outcomes; they come back as `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 2xx/3xx response with its body read to completion
    Success(Bytes),
    /// Error status with a decodable error body
    Api(ApiErrors),
    /// 429 response
    RateLimited(RateLimitError),
}

impl Outcome {
    /// Classify a received response.
    ///
    /// A 429 is classified from its headers alone; the body is dropped
    /// unread. Every other response is read to completion so the
    /// connection goes back to the pool.
    pub async fn read(response: Response) -> Result<Self> {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Self::from_parts(status, response.headers(), Bytes::new());
        }

        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Self::from_parts(status, &headers, body)
    }

    /// Classify a status, headers and body
    pub fn from_parts(status: StatusCode, headers: &HeaderMap, body: Bytes) -> Result<Self> {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Ok(Self::RateLimited(RateLimitError::from_headers(headers)));
        }

        if !(200..400).contains(&status.as_u16()) {
            return match serde_json::from_slice::<ApiErrors>(&body) {
                Ok(err) => Ok(Self::Api(err)),
                Err(_) => Err(Error::http_status(
                    status.as_u16(),
                    String::from_utf8_lossy(&body),
                )),
            };
        }

        Ok(Self::Success(body))
    }

    /// The success body, or the outcome as an error
    pub fn into_body(self) -> Result<Bytes> {
        match self {
            Self::Success(body) => Ok(body),
            Self::Api(err) => Err(Error::Api(err)),
            Self::RateLimited(err) => Err(Error::RateLimited(err)),
        }
    }
}
