#![allow(dead_code)]

use fortnox_sync::domain::erp::{
    CustomerSummary, ErpApi, ErpCustomer, ErpFuture, ErpOrder,
};
use fortnox_sync::domain::event::{SourceCustomer, SourceInvoice, WebhookEvent};
use std::sync::Mutex;

/// In-memory stand-in for the Fortnox API. Lookup behavior is scripted per
/// test; every call is recorded so tests can assert on call order and count.
///
/// Order search counts the orders previously created through the fake, so a
/// redelivered invoice observes the first delivery's write — the same view
/// the real ERP would give.
pub struct FakeErp {
    /// Direct customer-number probe answers with the requested number.
    pub direct_hit: bool,
    /// Matches returned by the phone-channel search.
    pub phone_matches: Vec<CustomerSummary>,
    /// Orders that exist in the ERP before the test starts.
    pub preexisting_orders: u32,
    pub created_customers: Mutex<Vec<ErpCustomer>>,
    pub created_orders: Mutex<Vec<ErpOrder>>,
    /// Every call, in order, e.g. `order_search:in_1`, `customer_probe:cus_1`.
    pub calls: Mutex<Vec<String>>,
}

impl Default for FakeErp {
    fn default() -> Self {
        Self {
            direct_hit: true,
            phone_matches: Vec::new(),
            preexisting_orders: 0,
            created_customers: Mutex::new(Vec::new()),
            created_orders: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeErp {
    pub fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created_orders(&self) -> Vec<ErpOrder> {
        self.created_orders.lock().unwrap().clone()
    }

    pub fn created_customers(&self) -> Vec<ErpCustomer> {
        self.created_customers.lock().unwrap().clone()
    }
}

impl ErpApi for FakeErp {
    fn create_customer(&self, customer: &ErpCustomer) -> ErpFuture<'_, serde_json::Value> {
        let customer = customer.clone();
        Box::pin(async move {
            self.record(format!("create_customer:{}", customer.customer_number));
            self.created_customers.lock().unwrap().push(customer);
            Ok(serde_json::json!({"Customer": {"url": "fake"}}))
        })
    }

    fn create_order(&self, order: &ErpOrder) -> ErpFuture<'_, serde_json::Value> {
        let order = order.clone();
        Box::pin(async move {
            self.record(format!("create_order:{}", order.external_invoice_reference1));
            self.created_orders.lock().unwrap().push(order);
            Ok(serde_json::json!({"Order": {"DocumentNumber": "1001"}}))
        })
    }

    fn customer_by_number(&self, number: &str) -> ErpFuture<'_, Option<CustomerSummary>> {
        let number = number.to_string();
        Box::pin(async move {
            self.record(format!("customer_probe:{number}"));
            if self.direct_hit {
                Ok(Some(CustomerSummary { customer_number: number, name: None }))
            } else {
                Ok(None)
            }
        })
    }

    fn customers_by_phone(&self, phone: &str) -> ErpFuture<'_, Vec<CustomerSummary>> {
        let phone = phone.to_string();
        Box::pin(async move {
            self.record(format!("phone_search:{phone}"));
            Ok(self.phone_matches.clone())
        })
    }

    fn count_orders_by_external_reference(&self, reference: &str) -> ErpFuture<'_, u32> {
        let reference = reference.to_string();
        Box::pin(async move {
            self.record(format!("order_search:{reference}"));
            let created = self
                .created_orders
                .lock()
                .unwrap()
                .iter()
                .filter(|o| o.external_invoice_reference1 == reference)
                .count() as u32;
            Ok(created + self.preexisting_orders)
        })
    }
}

// ── Event payload builders ─────────────────────────────────────────────────

pub fn make_event(kind: &str, object: serde_json::Value) -> WebhookEvent {
    serde_json::from_value(serde_json::json!({
        "id": "evt_test_1",
        "type": kind,
        "livemode": false,
        "data": { "object": object },
    }))
    .expect("event envelope")
}

pub fn customer_object(id: &str, country: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": "user@example.com",
        "shipping": {
            "name": "Jane Doe",
            "address": {
                "line1": "Storgatan 1",
                "city": "Stockholm",
                "postal_code": "11122",
                "country": country,
            },
        },
        "metadata": {},
    })
}

pub fn invoice_object(id: &str, customer: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "customer": customer,
        "billing": "charge_automatically",
        "currency": "eur",
        "tax_percent": 25.0,
        "date": 1528718400,
        "lines": {
            "data": [
                { "description": "Subscription 1 × Basic Plan", "amount": 12345, "quantity": 1 },
            ],
        },
        "metadata": {},
    })
}

pub fn parse_customer(object: serde_json::Value) -> SourceCustomer {
    serde_json::from_value(object).expect("customer payload")
}

pub fn parse_invoice(object: serde_json::Value) -> SourceInvoice {
    serde_json::from_value(object).expect("invoice payload")
}
