use async_trait::async_trait;

use crate::{AddInvoiceRequest, AddInvoiceResponse, NodeInfo};

#[async_trait]
pub trait Api: Send + Sync {
    /// Get the node's identity, version and sync status.
    async fn get_info(&self) -> crate::Result<NodeInfo>;

    /// Create an invoice. No idempotency key is sent: repeating a request
    /// creates another invoice.
    async fn add_invoice(&self, req: AddInvoiceRequest) -> crate::Result<AddInvoiceResponse>;
}
