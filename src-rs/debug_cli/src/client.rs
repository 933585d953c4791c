use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    ClassifyRequest, ClassifyResponse, RecipeRequest, RecipeResponse, ReplyResponse, TasksResponse,
    TextRequest,
};

pub struct HTTPClient {
    pub base_url: String,
    pub token: Option<String>,
    client: Client,
}

impl HTTPClient {
    pub fn new(base_url: &str, token: Option<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.to_string(),
            token,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    pub fn extract(&self, text: &str) -> Result<TasksResponse, String> {
        self.post("/tasks/extract", &TextRequest { text: text.to_string() })
    }

    pub fn plan(&self, text: &str) -> Result<TasksResponse, String> {
        self.post("/tasks/plan", &TextRequest { text: text.to_string() })
    }

    pub fn classify(&self, task: &str) -> Result<ClassifyResponse, String> {
        self.post("/tasks/classify", &ClassifyRequest { task: task.to_string() })
    }

    pub fn recipes(&self, items: &str, conversation: Option<String>) -> Result<RecipeResponse, String> {
        self.post(
            "/recipes",
            &RecipeRequest {
                items: items.to_string(),
                conversation,
            },
        )
    }

    pub fn reply(&self, text: &str) -> Result<ReplyResponse, String> {
        self.post("/reply", &TextRequest { text: text.to_string() })
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, String> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            let value = format!("Bearer {}", token);
            if let Ok(header) = HeaderValue::from_str(&value) {
                headers.insert(AUTHORIZATION, header);
            }
        }

        let resp = self
            .client
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .map_err(|err| err.to_string())?;

        if resp.status().is_success() {
            resp.json::<T>().map_err(|err| err.to_string())
        } else {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            Err(format!("http {}: {}", status.as_u16(), body))
        }
    }
}
