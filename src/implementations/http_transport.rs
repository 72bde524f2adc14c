use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;
use reqwest::header::{ HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE };
use reqwest::Client;

use crate::config::RunnerConfig;
use crate::errors::{ RunnerError, RunnerResult };
use crate::implementations::archive;
use crate::traits::transport::{ ExecutionResponse, RecipeTransport };

/// Request timeout for engine submissions. A hung engine hangs the run;
/// there is deliberately no separate cancellation mechanism.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

/// Authenticated HTTP session shared across one run.
///
/// Basic credentials are encoded once at construction and attached
/// preemptively to every request as a default header; the engine never
/// issues a 401 challenge, so waiting for one would fail every submission.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    query: Vec<(&'static str, String)>,
}

impl HttpTransport {
    pub fn new(config: &RunnerConfig) -> RunnerResult<HttpTransport> {
        let base_url = config.endpoint.trim_end_matches('/').to_string();
        reqwest::Url
            ::parse(&base_url)
            .map_err(|e|
                RunnerError::Config(format!("invalid endpoint {}: {}", config.endpoint, e))
            )?;

        let credentials = STANDARD.encode(format!("{}:{}", config.username, config.password));
        let mut auth = HeaderValue::from_str(&format!("Basic {}", credentials)).map_err(|e|
            RunnerError::Config(format!("invalid credentials: {}", e))
        )?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder().default_headers(headers).timeout(REQUEST_TIMEOUT).build()?;

        let mut query = Vec::new();
        if let Some(run_async) = config.run_async {
            query.push(("async", run_async.to_string()));
        }
        if let Some(environment) = &config.environment {
            query.push(("environment", environment.clone()));
        }
        if let Some(host_and_port) = &config.host_and_port {
            query.push(("hostAndPort", host_and_port.clone()));
        }
        if let Some(callback) = &config.callback {
            query.push(("callback", callback.clone()));
        }

        Ok(HttpTransport {
            client,
            base_url,
            query,
        })
    }

    async fn post(
        &self,
        path: &str,
        content_type: &'static str,
        body: Vec<u8>
    ) -> RunnerResult<ExecutionResponse> {
        let url = format!("{}/api/v1{}", self.base_url, path);
        debug!("POST {} ({}, {} bytes)", url, content_type, body.len());

        let response = self.client
            .post(&url)
            .header(CONTENT_TYPE, content_type)
            .query(&self.query)
            .body(body)
            .send().await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Response status: {}", status);
        debug!("Response body: {}", body);

        if !status.is_success() {
            return Err(RunnerError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ExecutionResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl RecipeTransport for HttpTransport {
    async fn submit_recipe(&self, body: Vec<u8>) -> RunnerResult<ExecutionResponse> {
        self.post("/testjobs/recipe", "application/json", body).await
    }

    async fn submit_xml_project(&self, body: Vec<u8>) -> RunnerResult<ExecutionResponse> {
        self.post("/testjobs", "application/xml", body).await
    }

    async fn submit_composite_project(&self, dir: &Path) -> RunnerResult<ExecutionResponse> {
        let payload = archive::zip_directory(dir)?;
        self.post("/testjobs/composite", "application/zip", payload).await
    }
}
