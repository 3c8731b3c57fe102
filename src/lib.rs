#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod error;
pub mod game_data;

use reqwest::Request;
use serde_json::Value;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request(client: &reqwest::Client, request: Request) -> Result<Value> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, message));
    }

    let body = response.bytes().await?;
    let value = serde_json::from_slice::<Value>(&body).inspect_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::warn!(method = %method, path = %path, error = %e, "undecodable API response");
        #[cfg(not(feature = "tracing"))]
        let _: &serde_json::Error = e;
    })?;

    Ok(value)
}
