use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::api::Api;
use crate::{AddInvoiceRequest, AddInvoiceResponse, Error, NodeInfo};

/// In-memory stand-in for a node. Records every call it receives.
#[derive(Debug, Clone)]
pub struct Client {
    info: NodeInfo,
    /// Fixed invoice to return. When unset, a fresh one is minted per call.
    invoice: Option<AddInvoiceResponse>,
    /// Answer every call with this status and body instead.
    failure: Option<(u16, String)>,
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    calls: usize,
    invoice_requests: Vec<AddInvoiceRequest>,
}

impl Default for Client {
    fn default() -> Self {
        Self {
            info: NodeInfo::new("mock", "0.0.0-mock"),
            invoice: None,
            failure: None,
            state: Arc::default(),
        }
    }
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_info(mut self, info: NodeInfo) -> Self {
        self.info = info;
        self
    }

    pub fn with_invoice(mut self, invoice: AddInvoiceResponse) -> Self {
        self.invoice = Some(invoice);
        self
    }

    /// Make every call fail as if the node returned `status` with `message`.
    pub fn failing(mut self, status: u16, message: impl Into<String>) -> Self {
        self.failure = Some((status, message.into()));
        self
    }

    /// Number of API calls made so far, successful or not.
    pub fn calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").calls
    }

    pub fn invoice_requests(&self) -> Vec<AddInvoiceRequest> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .invoice_requests
            .clone()
    }

    fn check_failure(&self) -> crate::Result<()> {
        match &self.failure {
            Some((status, message)) => Err(Error::ApiError {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Api for Client {
    async fn get_info(&self) -> crate::Result<NodeInfo> {
        self.state.lock().expect("mutex poisoned").calls += 1;
        self.check_failure()?;
        Ok(self.info.clone())
    }

    async fn add_invoice(&self, req: AddInvoiceRequest) -> crate::Result<AddInvoiceResponse> {
        let add_index = {
            let mut state = self.state.lock().expect("mutex poisoned");
            state.calls += 1;
            state.invoice_requests.push(req.clone());
            state.invoice_requests.len() as u64
        };
        self.check_failure()?;

        if let Some(invoice) = &self.invoice {
            return Ok(invoice.clone());
        }

        let mut r_hash = vec![0u8; 32];
        r_hash[24..].copy_from_slice(&add_index.to_be_bytes());
        Ok(AddInvoiceResponse {
            r_hash,
            payment_request: format!("lnbcrt{}n1mock{}", req.value, add_index),
            add_index: Some(add_index),
            payment_addr: None,
        })
    }
}
