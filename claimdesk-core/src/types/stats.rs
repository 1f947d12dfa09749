//! Dashboard statistics consumed for menu badges

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Aggregate counters returned by the dashboard endpoint.
///
/// Counters arrive either as JSON numbers or as numeric strings. Anything
/// that is not a non-negative integer deserializes to `None`, which the menu
/// resolver reads as "no badge".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Customers with an open file
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub active_customers: Option<u64>,
    /// Registered dealers
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub total_dealers: Option<u64>,
    /// Dealer payments waiting for approval
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub pending_payments: Option<u64>,
    /// Notifications not yet read by the user
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub unread_notifications: Option<u64>,
    /// Other dashboard fields, kept verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl DashboardStats {
    /// Stats with every counter absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the active customer counter.
    pub fn with_active_customers(mut self, count: u64) -> Self {
        self.active_customers = Some(count);
        self
    }

    /// Set the dealer counter.
    pub fn with_total_dealers(mut self, count: u64) -> Self {
        self.total_dealers = Some(count);
        self
    }

    /// Set the pending payment counter.
    pub fn with_pending_payments(mut self, count: u64) -> Self {
        self.pending_payments = Some(count);
        self
    }

    /// Set the unread notification counter.
    pub fn with_unread_notifications(mut self, count: u64) -> Self {
        self.unread_notifications = Some(count);
        self
    }
}

fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value))
}

fn count_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            // 3.0 is a count, 3.5 and -1 are not
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}
