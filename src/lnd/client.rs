use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::{Serialize, de::DeserializeOwned};

use crate::{AddInvoiceRequest, AddInvoiceResponse, Api, Error, NodeInfo, lnd::Config};

pub const MACAROON_HEADER: &str = "Grpc-Metadata-macaroon";

#[derive(Debug)]
pub struct Client {
    config: Config,
    client: reqwest::Client,
}

impl TryFrom<Config> for Client {
    type Error = Error;

    fn try_from(value: Config) -> crate::Result<Self> {
        let cert = value.tls_certificate.to_reqwest()?;
        let client = reqwest::Client::builder()
            .add_root_certificate(cert)
            .build()
            .map_err(|e| Error::Init(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            config: value,
            client,
        })
    }
}

impl Client {
    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> crate::Result<T> {
        let response = builder
            .header(MACAROON_HEADER, self.config.macaroon.to_hex())
            .send()
            .await
            .inspect_err(|e| log::warn!("Error connecting to LND: {}", e))?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            log::warn!("LND responded with {}: {}", status, body_text);
            return Err(Error::ApiError {
                status: status.as_u16(),
                message: body_text,
            });
        }

        serde_json::from_str::<T>(&body_text).map_err(|e| {
            let context = get_error_context(&body_text, e.line(), e.column());
            log::warn!("Unexpected response body: {}", body_text);
            Error::Parse(format!("{}{}", e, context))
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", &self.config.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> crate::Result<T> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        self.execute(self.client.get(&url)).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> crate::Result<T> {
        let url = self.url(path);
        log::debug!("POST {}", url);
        self.execute(self.client.post(&url).json(&body)).await
    }

    pub async fn v1_getinfo(&self) -> crate::Result<NodeInfo> {
        self.get("v1/getinfo").await
    }

    pub async fn v1_invoices(
        &self,
        body: &AddInvoiceRequest,
    ) -> crate::Result<AddInvoiceResponse> {
        self.post("v1/invoices", body).await
    }
}

#[async_trait]
impl Api for Client {
    async fn get_info(&self) -> crate::Result<NodeInfo> {
        self.v1_getinfo().await
    }

    async fn add_invoice(&self, req: AddInvoiceRequest) -> crate::Result<AddInvoiceResponse> {
        self.v1_invoices(&req).await
    }
}

/// Point at the spot in `text` where decoding stopped.
fn get_error_context(text: &str, line: usize, col: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    if line == 0 || line > lines.len() {
        return format!(" (line {} out of bounds or empty)", line);
    }

    let target_line = lines[line - 1];
    let end = (col + 40).min(target_line.len());
    let start = col.saturating_sub(40).min(end);
    let snippet = target_line.get(start..end).unwrap_or(target_line);

    format!(
        "\nLine {}, Col {}: ... {} ...\n{: >width$}^",
        line,
        col,
        snippet,
        "",
        width = (col - start) + 11
    )
}
