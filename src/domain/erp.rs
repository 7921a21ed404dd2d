use {
    super::error::GatewayError,
    rust_decimal::Decimal,
    serde::{Deserialize, Serialize},
    std::{future::Future, pin::Pin},
};

/// VAT classification on the Fortnox customer record. Domestic sales are
/// `SEVAT`, everything else is `EXPORT`. Intra-EU is intentionally not a
/// category here — see DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VatType {
    #[serde(rename = "SEVAT")]
    Sevat,
    #[serde(rename = "EXPORT")]
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerType {
    #[serde(rename = "PRIVATE")]
    Private,
    #[serde(rename = "COMPANY")]
    Company,
}

/// Customer payload for `POST /3/customers`. Field names follow Fortnox's
/// PascalCase JSON schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErpCustomer {
    pub customer_number: String,
    pub name: String,
    #[serde(rename = "Type")]
    pub customer_type: CustomerType,
    #[serde(rename = "VATType")]
    pub vat_type: VatType,
    #[serde(rename = "VATNumber")]
    pub vat_number: Option<String>,
    pub address1: String,
    pub city: String,
    pub country_code: String,
    pub zip_code: String,
    pub currency: String,
    pub email: String,
    pub email_invoice: String,
    pub your_reference: String,
    pub our_reference: String,
    pub terms_of_payment: String,
    /// Carries the source customer id. Fortnox has no external-reference
    /// field on customers, so the phone field doubles as the searchable
    /// cross-reference channel the resolver falls back to.
    pub phone1: String,
    pub default_delivery_types: DeliveryTypes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeliveryTypes {
    pub order: String,
    pub invoice: String,
}

impl DeliveryTypes {
    pub fn email() -> Self {
        Self { order: "EMAIL".to_string(), invoice: "EMAIL".to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerEnvelope {
    pub customer: ErpCustomer,
}

/// Order payload for `POST /3/orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErpOrder {
    pub customer_number: String,
    pub language: String,
    /// Holds the source invoice id; the idempotency guard searches on it.
    pub external_invoice_reference1: String,
    pub remarks: String,
    pub copy_remarks: bool,
    pub email_information: EmailInformation,
    pub order_rows: Vec<OrderRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailInformation {
    pub email_address_from: String,
    #[serde(rename = "EmailAddressBCC")]
    pub email_address_bcc: String,
    pub email_subject: String,
    pub email_body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderRow {
    pub description: String,
    pub account_number: String,
    pub article_number: String,
    /// Major currency units (minor units / 100).
    pub price: Decimal,
    pub ordered_quantity: u32,
    pub delivered_quantity: u32,
    #[serde(rename = "VAT")]
    pub vat: i32,
    pub discount: Decimal,
    pub discount_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderEnvelope {
    pub order: ErpOrder,
}

// ── Typed responses, parsed once at the boundary ────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerSummary {
    pub customer_number: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerPage {
    pub customer: CustomerSummary,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerSearchPage {
    #[serde(default)]
    pub customers: Vec<CustomerSummary>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderSearchPage {
    pub meta_information: MetaInformation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetaInformation {
    #[serde(rename = "@TotalResources")]
    pub total_resources: u32,
}

pub type ErpFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, GatewayError>> + Send + 'a>>;

/// Authenticated access to the ERP's REST surface. One method per consumed
/// endpoint; no retries at this seam.
pub trait ErpApi: Send + Sync {
    /// `POST /customers`. Returns the ERP's response body on success.
    fn create_customer(&self, customer: &ErpCustomer) -> ErpFuture<'_, serde_json::Value>;

    /// `POST /orders`. Returns the ERP's response body on success.
    fn create_order(&self, order: &ErpOrder) -> ErpFuture<'_, serde_json::Value>;

    /// `GET /customers/{number}`. `None` when the ERP reports the number
    /// as unknown (client-error status).
    fn customer_by_number(&self, number: &str) -> ErpFuture<'_, Option<CustomerSummary>>;

    /// `GET /customers?phone={phone}`.
    fn customers_by_phone(&self, phone: &str) -> ErpFuture<'_, Vec<CustomerSummary>>;

    /// `GET /orders?externalinvoicereference1={reference}` — total match
    /// count only; the idempotency guard needs nothing else.
    fn count_orders_by_external_reference(&self, reference: &str) -> ErpFuture<'_, u32>;
}
