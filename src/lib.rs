mod caption;
pub use caption::{choose_caption, random_caption, CAPTIONS};
mod config;
pub use config::{Config, Credentials};
mod display_next_event;
pub use display_next_event::{render_html, Outcome};
mod element;
pub use element::{Element, MemoryElement, GROUP_ATTRIBUTE};
mod error;
pub use error::Error;
mod event;
pub use event::{EventId, EventSummary};
mod get_next_event;
mod jsonp;
use std::time::Duration;

pub struct Gateway {
    client: reqwest::Client,
    config: Config,
}

impl Gateway {
    pub async fn new(timeout: Option<Duration>) -> Result<Gateway, Error> {
        let mut config = Config::default();
        if let Some(t) = timeout {
            config.timeout = t;
        }

        Gateway::with_config(config).await
    }

    pub async fn with_config(config: Config) -> Result<Gateway, Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Accept",
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = match reqwest::ClientBuilder::new()
            .default_headers(headers)
            .https_only(config.https_only)
            .timeout(config.timeout)
            .build()
        {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::Unspecified(format!(
                    "Could not create reqwest client ({}).",
                    err
                )))
            }
        };

        let c = Gateway { client, config };
        Ok(c)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // NOTE: Requests are never retried; a failed lookup simply leaves the page as it was.
    async fn get_without_retry(&self, url: &str) -> Result<String, Error> {
        let res = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::NetworkError(format!(
                    "Could not send request ({}).",
                    err
                )))
            }
        };

        let status = res.status().as_u16();
        let text = res
            .text()
            .await
            .unwrap_or_else(|_| String::from("Could not retrieve body text."));

        if !(200..=299).contains(&status) {
            if status == 429 {
                return Err(Error::Throttling);
            }

            return Err(Error::ApiError(status, text));
        }

        Ok(text)
    }
}
