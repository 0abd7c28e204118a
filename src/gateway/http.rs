use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::app::Result;
use crate::config::GatewayConfig;
use crate::gateway::Gateway;

pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.clone())
            .build()?;

        let base_url = Url::parse(&config.base_url)?;

        Ok(Self { client, base_url })
    }

    fn topic_url(&self, topic: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| crate::app::EddyError::Other("base URL cannot be a base".into()))?
            .pop_if_empty()
            .push("r")
            .push(&format!("{topic}.json"));
        Ok(url)
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn fetch(&self, topic: &str) -> Result<Value> {
        let url = self.topic_url(topic)?;
        let response = self.client.get(url).send().await?;

        response.error_for_status_ref()?;

        let payload = response.json::<Value>().await?;
        Ok(payload)
    }
}
