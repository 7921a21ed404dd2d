use {
    crate::domain::{
        erp::{
            CustomerEnvelope, CustomerPage, CustomerSearchPage, CustomerSummary, ErpApi,
            ErpCustomer, ErpFuture, ErpOrder, OrderEnvelope, OrderSearchPage,
        },
        error::GatewayError,
        secrets::ErpCredentials,
    },
    reqwest::{
        Client,
        header::{HeaderMap, HeaderValue},
    },
    serde::{Serialize, de::DeserializeOwned},
};

/// Authenticated Fortnox REST client. Credentials are attached as default
/// headers at construction; one client per invocation, no retries.
pub struct FortnoxClient {
    client: Client,
    base_url: String,
}

impl FortnoxClient {
    pub fn new(
        credentials: &ErpCredentials,
        base_url: impl Into<String>,
    ) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(
            "Access-Token",
            HeaderValue::from_str(&credentials.access_token)
                .map_err(|e| GatewayError::Secrets(format!("access token not header-safe: {e}")))?,
        );
        headers.insert(
            "Client-Secret",
            HeaderValue::from_str(&credentials.client_secret)
                .map_err(|e| GatewayError::Secrets(format!("client secret not header-safe: {e}")))?,
        );
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client, base_url: base_url.into() })
    }

    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value, GatewayError> {
        // Serialized up front so a failure report can reproduce the request.
        let request = serde_json::to_string(body)?;
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "erp create request");
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            serde_json::from_str(&text).map_err(GatewayError::from)
        } else {
            Err(GatewayError::ErpRequest { status: status.as_u16(), body: text, request })
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, GatewayError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "erp lookup request");
        let mut req = self.client.get(&url);
        if !params.is_empty() {
            req = req.query(params);
        }
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            serde_json::from_str(&text).map_err(GatewayError::from)
        } else {
            Err(GatewayError::ErpRequest { status: status.as_u16(), body: text, request: url })
        }
    }

    async fn customer_by_number_inner(
        &self,
        number: &str,
    ) -> Result<Option<CustomerSummary>, GatewayError> {
        let path = format!("/customers/{number}");
        match self.get_json::<CustomerPage>(&path, &[]).await {
            Ok(page) => Ok(Some(page.customer)),
            // Fortnox reports unknown customer numbers as a client error.
            Err(GatewayError::ErpRequest { status, .. }) if (400..500).contains(&status) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

impl ErpApi for FortnoxClient {
    fn create_customer(&self, customer: &ErpCustomer) -> ErpFuture<'_, serde_json::Value> {
        let envelope = CustomerEnvelope { customer: customer.clone() };
        Box::pin(async move { self.post_json("/customers", &envelope).await })
    }

    fn create_order(&self, order: &ErpOrder) -> ErpFuture<'_, serde_json::Value> {
        let envelope = OrderEnvelope { order: order.clone() };
        Box::pin(async move { self.post_json("/orders", &envelope).await })
    }

    fn customer_by_number(&self, number: &str) -> ErpFuture<'_, Option<CustomerSummary>> {
        let number = number.to_string();
        Box::pin(async move { self.customer_by_number_inner(&number).await })
    }

    fn customers_by_phone(&self, phone: &str) -> ErpFuture<'_, Vec<CustomerSummary>> {
        let phone = phone.to_string();
        Box::pin(async move {
            let page: CustomerSearchPage =
                self.get_json("/customers", &[("phone", phone.as_str())]).await?;
            Ok(page.customers)
        })
    }

    fn count_orders_by_external_reference(&self, reference: &str) -> ErpFuture<'_, u32> {
        let reference = reference.to_string();
        Box::pin(async move {
            let page: OrderSearchPage = self
                .get_json("/orders", &[("externalinvoicereference1", reference.as_str())])
                .await?;
            Ok(page.meta_information.total_resources)
        })
    }
}
