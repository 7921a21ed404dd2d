use {
    crate::config::GatewayConfig,
    crate::domain::erp::ErpApi,
    crate::domain::error::GatewayError,
    crate::domain::event::{EventKind, SourceCustomer, SourceInvoice, WebhookEvent},
    crate::services::{customer_resolver, idempotency, order_builder},
};

#[derive(Debug)]
pub enum ReconcileOutcome {
    /// Customer record created in the ERP; carries the ERP's response body.
    CustomerCreated(serde_json::Value),
    /// Order created in the ERP; carries the ERP's response body.
    OrderCreated(serde_json::Value),
    /// An order for this invoice id already exists — redelivery, no calls made.
    DuplicateIgnored,
    /// Event kind this gateway does not handle; acknowledged without side
    /// effects. Unknown kinds are expected as the upstream evolves.
    Unsupported(String),
}

/// Top-level dispatcher: routes a typed event to customer or invoice
/// handling. Performs no I/O itself.
pub async fn reconcile(
    erp: &dyn ErpApi,
    config: &GatewayConfig,
    event: &WebhookEvent,
) -> Result<ReconcileOutcome, GatewayError> {
    let kind = event.kind();
    tracing::debug!(%kind, event_id = %event.id, "dispatching event");
    match kind {
        EventKind::CustomerCreated => {
            handle_customer_created(erp, config, &event.customer()?).await
        }
        EventKind::InvoiceCreated => {
            handle_invoice_created(erp, config, &event.invoice()?).await
        }
        EventKind::Other(kind) => Ok(ReconcileOutcome::Unsupported(kind)),
    }
}

/// Create the ERP customer for a source customer. No duplicate check at
/// this layer: the ERP rejects colliding customer numbers itself.
pub async fn handle_customer_created(
    erp: &dyn ErpApi,
    config: &GatewayConfig,
    customer: &SourceCustomer,
) -> Result<ReconcileOutcome, GatewayError> {
    let payload = order_builder::build_customer(customer, config);
    tracing::info!(
        customer_id = %customer.id,
        vat_type = ?payload.vat_type,
        customer_type = ?payload.customer_type,
        "creating erp customer"
    );
    let response = erp.create_customer(&payload).await?;
    Ok(ReconcileOutcome::CustomerCreated(response))
}

/// Create the ERP order for a source invoice. The duplicate check runs
/// strictly before any mutating call — that ordering is the correctness
/// mechanism under at-least-once delivery and must never be reordered.
pub async fn handle_invoice_created(
    erp: &dyn ErpApi,
    config: &GatewayConfig,
    invoice: &SourceInvoice,
) -> Result<ReconcileOutcome, GatewayError> {
    tracing::info!(invoice_id = %invoice.id, billing = ?invoice.billing, "invoice received");

    if idempotency::order_exists(erp, &invoice.id).await? {
        tracing::info!(invoice_id = %invoice.id, "order already exists, ignoring redelivery");
        return Ok(ReconcileOutcome::DuplicateIgnored);
    }

    let customer_number = match invoice.metadata_value("FortnoxCustomerId") {
        Some(override_id) => override_id.to_string(),
        None => customer_resolver::resolve(erp, &invoice.customer).await?,
    };

    let order = order_builder::build_order(invoice, &customer_number, config);
    let response = erp.create_order(&order).await?;
    tracing::info!(invoice_id = %invoice.id, customer_number = %customer_number, "erp order created");
    Ok(ReconcileOutcome::OrderCreated(response))
}
