use {
    super::error::GatewayError,
    derive_more::Display,
    rust_decimal::Decimal,
    serde::Deserialize,
    std::collections::HashMap,
};

/// Webhook envelope. `data.object` stays raw JSON here and is re-parsed
/// into the typed payload once the kind is known.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub livemode: bool,
    pub data: EventData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventData {
    pub object: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EventKind {
    #[display("customer.created")]
    CustomerCreated,
    #[display("invoice.created")]
    InvoiceCreated,
    #[display("{_0}")]
    Other(String),
}

impl EventKind {
    pub fn parse(kind: &str) -> Self {
        match kind {
            "customer.created" => Self::CustomerCreated,
            "invoice.created" => Self::InvoiceCreated,
            other => Self::Other(other.to_string()),
        }
    }
}

impl WebhookEvent {
    pub fn kind(&self) -> EventKind {
        EventKind::parse(&self.kind)
    }

    pub fn customer(&self) -> Result<SourceCustomer, GatewayError> {
        serde_json::from_value(self.data.object.clone())
            .map_err(|e| GatewayError::EventDecode(format!("customer payload: {e}")))
    }

    pub fn invoice(&self) -> Result<SourceInvoice, GatewayError> {
        serde_json::from_value(self.data.object.clone())
            .map_err(|e| GatewayError::EventDecode(format!("invoice payload: {e}")))
    }
}

/// Stripe customer as delivered in `customer.created`.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceCustomer {
    pub id: String,
    pub email: String,
    pub shipping: Shipping,
    #[serde(default)]
    pub tax_info: Option<TaxInfo>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl SourceCustomer {
    /// Metadata lookup that treats an empty value the same as an absent key.
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Shipping {
    pub name: String,
    pub address: Address,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    pub line1: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaxInfo {
    pub tax_id: Option<String>,
}

/// Stripe invoice as delivered in `invoice.created`. The invoice id is the
/// idempotency key: it is stable across redeliveries of the same event.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceInvoice {
    pub id: String,
    pub customer: String,
    pub billing: BillingMode,
    pub currency: String,
    #[serde(default)]
    pub tax_percent: Option<f64>,
    /// Invoice creation time, unix seconds.
    pub date: i64,
    pub lines: InvoiceLines,
    #[serde(default)]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl SourceInvoice {
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingMode {
    ChargeAutomatically,
    SendInvoice,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceLines {
    pub data: Vec<LineItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineItem {
    pub description: String,
    /// Amount in minor currency units.
    pub amount: i64,
    #[serde(default)]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Discount {
    pub coupon: Coupon,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Coupon {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub percent_off: Option<Decimal>,
}
