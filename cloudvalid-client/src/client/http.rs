//! CloudValid HTTP request methods

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{CloudValidError, Result};
use crate::http_client::HttpUtils;
use crate::types::Operation;
use crate::utils::log_sanitizer::redact_api_key;

use super::CloudValidClient;

const APPLICATION_JSON: &str = "application/json";

impl CloudValidClient {
    /// Execute a GET request
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        operation: Operation,
        id: Option<&str>,
    ) -> Result<T> {
        self.execute(Method::GET, operation, id, None).await
    }

    /// Execute a POST request, with a JSON body when `body` is given
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        operation: Operation,
        id: Option<&str>,
        body: Option<&B>,
    ) -> Result<T> {
        let body = body.map(|b| encode_body(b, operation)).transpose()?;
        self.execute(Method::POST, operation, id, body).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        operation: Operation,
        id: Option<&str>,
        body: Option<String>,
    ) -> Result<T> {
        let url = self.request_url(operation, id)?;
        let safe_url = redact_api_key(&url);

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, APPLICATION_JSON);
        if let Some(body) = body {
            log::debug!("[{operation}] Request Body: {body}");
            request = request.body(body);
        }

        let response_text =
            HttpUtils::execute_request(request, operation, method.as_str(), &safe_url).await?;

        HttpUtils::parse_json(&response_text, operation)
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B, operation: Operation) -> Result<String> {
    serde_json::to_string(body).map_err(|e| {
        log::error!("[{operation}] Failed to encode request body: {e}");
        CloudValidError::SerializationError {
            operation,
            detail: e.to_string(),
        }
    })
}
