use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, LocationClientError> {
    let mut headers = header::HeaderMap::new();
    let user_agent = HeaderValue::from_str(&format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))?;
    headers.insert(header::USER_AGENT, user_agent);
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder().default_headers(headers).timeout(config.location().timeout()).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum LocationClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("location client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;

    #[tokio::test]
    async fn new_client_identifies_itself() -> Result<(), LocationClientError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("user-agent", format!("wayfinder/{}", env!("CARGO_PKG_VERSION")).as_str())
            .match_header("accept", "application/json")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().location_url(server.url()).build();
        let client = new_client(&config)?;

        client.get(format!("{}{}", server.url(), "/")).send().await?;

        // Verify that the call came in with the expected headers
        mock.assert_async().await;

        Ok(())
    }
}
