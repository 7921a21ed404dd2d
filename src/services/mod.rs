pub mod customer_resolver;
pub mod idempotency;
pub mod order_builder;
pub mod reconciler;
