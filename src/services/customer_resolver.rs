use crate::domain::{erp::ErpApi, error::GatewayError};

/// Find the ERP customer number for a source customer id.
///
/// The common case is a direct hit: customer numbers are assigned equal to
/// the source id at creation. When the number has diverged (manual
/// renumbering, migration), the phone field carries the source id as the
/// only searchable cross-reference Fortnox offers on customers, so a phone
/// search is the fallback. Zero or ambiguous matches fail the invocation.
pub async fn resolve(
    erp: &dyn ErpApi,
    source_customer_id: &str,
) -> Result<String, GatewayError> {
    if let Some(customer) = erp.customer_by_number(source_customer_id).await? {
        return Ok(customer.customer_number);
    }

    let matches = erp.customers_by_phone(source_customer_id).await?;
    match matches.as_slice() {
        [single] => {
            tracing::info!(
                source_id = %source_customer_id,
                customer_number = %single.customer_number,
                "customer number diverged, resolved via phone channel"
            );
            Ok(single.customer_number.clone())
        }
        [] => Err(GatewayError::CustomerNotFound(source_customer_id.to_string())),
        _ => {
            tracing::warn!(
                source_id = %source_customer_id,
                matches = matches.len(),
                "ambiguous phone channel matches"
            );
            Err(GatewayError::CustomerNotFound(source_customer_id.to_string()))
        }
    }
}
