use crate::domain::{erp::ErpApi, error::GatewayError};

/// Whether an order already exists for this source invoice id, by searching
/// the ERP's external-reference field. Zero matches means new; one means
/// already processed; more than one is treated the same as one (no dedup
/// repair here).
///
/// This is a read-before-write check, not a transaction: two concurrent
/// deliveries of the same invoice can both observe zero and both create.
/// See DESIGN.md for why that window is accepted.
pub async fn order_exists(erp: &dyn ErpApi, source_invoice_id: &str) -> Result<bool, GatewayError> {
    let total = erp.count_orders_by_external_reference(source_invoice_id).await?;
    Ok(total > 0)
}
