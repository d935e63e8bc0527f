//! Tool definitions module.
//!
//! One file per logistics tool, plus shared argument and formatting helpers.

pub mod common;
pub mod container_status;
pub mod health_ping;
pub mod invoice_audit;
pub mod predict;
pub mod shipping_cost;
pub mod weather_tie;

pub use container_status::{ContainerStatusParams, ContainerStatusTool};
pub use health_ping::{HealthPingParams, HealthPingTool};
pub use invoice_audit::{InvoiceAuditParams, InvoiceAuditTool};
pub use predict::{PredictParams, PredictTool};
pub use shipping_cost::{CostBreakdown, ShippingCostParams, ShippingCostTool};
pub use weather_tie::{WeatherTieParams, WeatherTieTool};
