use {
    crate::config::GatewayConfig,
    crate::domain::erp::{
        CustomerType, DeliveryTypes, EmailInformation, ErpCustomer, ErpOrder, OrderRow, VatType,
    },
    crate::domain::event::{BillingMode, SourceCustomer, SourceInvoice},
    chrono::DateTime,
    rust_decimal::Decimal,
};

const PREPAID_REMARKS: &str = "Don't pay this invoice!\n\nYou have prepaid by credit/debit card.";

const PREPAID_EMAIL_BODY: &str = "Dear Flexinets user,<br />This email contains the credit card \
     receipt for your prepaid subscription. No action required.<br /><br />Best regards<br />\
     Flexinets<br />www.flexinets.eu";

// Placeholder pending real copy for manually paid invoices.
const SEND_INVOICE_EMAIL_BODY: &str = "hitta på text för fakturan";

/// Map a source customer to the Fortnox customer payload. The customer
/// number is the source id; the phone field carries it too so the
/// resolver's fallback search has a channel to read after renumbering.
pub fn build_customer(customer: &SourceCustomer, config: &GatewayConfig) -> ErpCustomer {
    let vat_type = if customer
        .shipping
        .address
        .country
        .eq_ignore_ascii_case(&config.home_country)
    {
        VatType::Sevat
    } else {
        VatType::Export
    };

    let (customer_type, name) = match customer.metadata_value("CompanyName") {
        Some(company) => (CustomerType::Company, company.to_string()),
        None => (CustomerType::Private, customer.shipping.name.clone()),
    };

    ErpCustomer {
        customer_number: customer.id.clone(),
        name,
        customer_type,
        vat_type,
        vat_number: customer.tax_info.as_ref().and_then(|t| t.tax_id.clone()),
        address1: customer.shipping.address.line1.clone(),
        city: customer.shipping.address.city.clone(),
        country_code: customer.shipping.address.country.clone(),
        zip_code: customer.shipping.address.postal_code.clone(),
        currency: config.settlement_currency.clone(),
        email: customer.email.clone(),
        email_invoice: customer.email.clone(),
        your_reference: customer.shipping.name.clone(),
        our_reference: "web".to_string(),
        terms_of_payment: "K".to_string(),
        phone1: customer.id.clone(),
        default_delivery_types: DeliveryTypes::email(),
    }
}

/// Assemble the Fortnox order for an invoice: one row per line item, an
/// informational promo row when a percent discount applies, and a trailing
/// row with the original invoice timestamp.
pub fn build_order(
    invoice: &SourceInvoice,
    customer_number: &str,
    config: &GatewayConfig,
) -> ErpOrder {
    let vat = invoice.tax_percent.map(|p| p.trunc() as i32).unwrap_or(0);
    let coupon = invoice.discount.as_ref().map(|d| &d.coupon);
    let percent_off = coupon.and_then(|c| c.percent_off);

    let mut rows: Vec<OrderRow> = invoice
        .lines
        .data
        .iter()
        .map(|line| OrderRow {
            // thats not an x, this is an x
            description: line.description.replace('×', "x"),
            account_number: String::new(),
            article_number: config.article_number.clone(),
            price: Decimal::new(line.amount, 2),
            ordered_quantity: line.quantity.unwrap_or(0),
            delivered_quantity: line.quantity.unwrap_or(0),
            vat,
            discount: percent_off.unwrap_or(Decimal::ZERO),
            discount_type: "PERCENT".to_string(),
        })
        .collect();

    if let Some(coupon) = coupon.filter(|c| c.percent_off.is_some()) {
        rows.push(info_row(format!(
            "Promo code {} applied: {}",
            coupon.id,
            coupon.name.as_deref().unwrap_or_default()
        )));
    }

    rows.push(info_row(format!("Order date {} UTC", order_date(invoice.date))));

    let (remarks, email_body) = match invoice.billing {
        BillingMode::ChargeAutomatically => (PREPAID_REMARKS, PREPAID_EMAIL_BODY),
        BillingMode::SendInvoice => ("", SEND_INVOICE_EMAIL_BODY),
    };

    ErpOrder {
        customer_number: customer_number.to_string(),
        language: "EN".to_string(),
        external_invoice_reference1: invoice.id.clone(),
        remarks: remarks.to_string(),
        copy_remarks: true,
        email_information: EmailInformation {
            email_address_from: config.email_from.clone(),
            email_address_bcc: config.email_bcc.clone(),
            email_subject: config.email_subject.clone(),
            email_body: email_body.to_string(),
        },
        order_rows: rows,
    }
}

/// Zero-valued row used for the promo and order-date annotations.
fn info_row(description: String) -> OrderRow {
    OrderRow {
        description,
        account_number: "0".to_string(),
        article_number: String::new(),
        price: Decimal::ZERO,
        ordered_quantity: 0,
        delivered_quantity: 0,
        vat: 0,
        discount: Decimal::ZERO,
        discount_type: String::new(),
    }
}

fn order_date(unix_seconds: i64) -> String {
    // Out-of-range timestamps clamp to the epoch.
    DateTime::from_timestamp(unix_seconds, 0)
        .unwrap_or_default()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
