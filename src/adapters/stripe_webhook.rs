use {
    crate::{
        AppState,
        adapters::{api_errors::ApiError, fortnox::FortnoxClient},
        domain::error::GatewayError,
        domain::event::WebhookEvent,
        services::reconciler::{ReconcileOutcome, reconcile},
    },
    axum::{Json, extract::State},
};

/// Webhook entry point. Decodes the event, loads the credential set the
/// event's livemode selects, and hands the typed event to the reconciler.
/// Success echoes the ERP's response body back to the caller.
pub async fn stripe_webhook_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<serde_json::Value>, ApiError> {
    let event: WebhookEvent = serde_json::from_str(&body)
        .map_err(|e| GatewayError::EventDecode(e.to_string()))?;
    tracing::info!(
        event_id = %event.id,
        kind = %event.kind,
        livemode = event.livemode,
        "received stripe event"
    );

    let credentials = state.secrets.erp_credentials(event.livemode).await?;
    let erp = FortnoxClient::new(&credentials, state.config.erp_base_url.clone())?;

    match reconcile(&erp, &state.config, &event).await? {
        ReconcileOutcome::CustomerCreated(response) => {
            tracing::info!(event_id = %event.id, "customer created");
            Ok(Json(serde_json::json!({"status": "customer_created", "response": response})))
        }
        ReconcileOutcome::OrderCreated(response) => {
            tracing::info!(event_id = %event.id, "order created");
            Ok(Json(serde_json::json!({"status": "order_created", "response": response})))
        }
        ReconcileOutcome::DuplicateIgnored => {
            tracing::info!(event_id = %event.id, "duplicate delivery, order already exists");
            Ok(Json(serde_json::json!({"status": "duplicate"})))
        }
        ReconcileOutcome::Unsupported(kind) => {
            tracing::info!(event_id = %event.id, %kind, "unsupported event kind, ignored");
            Ok(Json(serde_json::json!({"status": "ignored", "kind": kind})))
        }
    }
}
