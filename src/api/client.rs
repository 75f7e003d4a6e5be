use super::types::{PromptConfig, WorkflowRequest};
use crate::config::ConsoleConfig;
use crate::error::ConsoleError;
use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The three calls the controller makes against the backend.
///
/// Futures are not `Send`: the controller lives on a single-threaded runtime.
#[async_trait(?Send)]
pub trait WorkflowBackend {
    async fn fetch_prompts(&self) -> Result<PromptConfig, ConsoleError>;

    /// The response body is an acknowledgement and is ignored.
    async fn update_prompts(&self, prompts: &PromptConfig) -> Result<(), ConsoleError>;

    async fn run_workflow(&self, request: &WorkflowRequest) -> Result<Value, ConsoleError>;
}

pub struct HttpBackend {
    client: reqwest::Client,
    prompts_url: Url,
    run_url: Url,
}

impl HttpBackend {
    pub fn new(config: &ConsoleConfig) -> Result<Self, ConsoleError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            prompts_url: config.endpoint("prompts")?,
            run_url: config.endpoint("run_workflow")?,
        })
    }
}

#[async_trait(?Send)]
impl WorkflowBackend for HttpBackend {
    async fn fetch_prompts(&self) -> Result<PromptConfig, ConsoleError> {
        log::debug!("GET {}", self.prompts_url);
        let res = self.client.get(self.prompts_url.clone()).send().await?;
        decode_json(res).await
    }

    async fn update_prompts(&self, prompts: &PromptConfig) -> Result<(), ConsoleError> {
        log::debug!("POST {}", self.prompts_url);
        let res = self
            .client
            .post(self.prompts_url.clone())
            .json(prompts)
            .send()
            .await?;
        warn_on_status(&res);
        Ok(())
    }

    async fn run_workflow(&self, request: &WorkflowRequest) -> Result<Value, ConsoleError> {
        log::debug!("POST {}", self.run_url);
        let res = self
            .client
            .post(self.run_url.clone())
            .json(request)
            .send()
            .await?;
        decode_json(res).await
    }
}

// Status codes are not classified; only an undecodable body is a failure.
async fn decode_json<T: DeserializeOwned>(res: Response) -> Result<T, ConsoleError> {
    warn_on_status(&res);
    let url = res.url().clone();
    let body = res.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| {
        ConsoleError::MalformedResponse(format!("{url}: {e} (body: {})", truncate(&body)))
    })
}

fn warn_on_status(res: &Response) {
    if !res.status().is_success() {
        log::warn!("{} answered with status {}", res.url(), res.status());
    }
}

fn truncate(body: &[u8]) -> String {
    let s = String::from_utf8_lossy(body);
    if s.len() > 200 {
        let mut end = 200;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (len: {})", &s[..end], s.len())
    } else {
        s.into_owned()
    }
}
