use crate::core::{ConfigProvider, CropQuery, RecommendationApi};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "/api/recommend-crops";

/// 以 reqwest 呼叫推薦端點；不重試、不設逾時
#[derive(Debug, Clone)]
pub struct HttpRecommendationClient {
    client: Client,
    endpoint: Url,
}

impl HttpRecommendationClient {
    pub fn new(base_url: &str, endpoint_path: &str) -> Result<Self> {
        let endpoint = Url::parse(base_url)?.join(endpoint_path)?;
        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.base_url(), config.endpoint_path())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RecommendationApi for HttpRecommendationClient {
    async fn recommend(&self, query: &CropQuery) -> Result<Value> {
        tracing::debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(query)
            .send()
            .await?;

        // 狀態碼不檢查，任何狀態都嘗試解析內容
        tracing::debug!("Recommendation response status: {}", response.status());
        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }
}
