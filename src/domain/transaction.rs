//! Transaction records as received on the wire and as stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A transaction as submitted by a client, before it has been stored.
///
/// Carries no identifier: ids are assigned by the store. An `id` field in
/// the incoming JSON is ignored. Field values are not validated: a missing
/// or `null` field takes its zero value (`""`, `0`, `0.0`), and a missing
/// or `null` timestamp takes the decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewTransaction {
    /// Customer name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer: String,
    /// Number of units.
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: i64,
    /// Unit price.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    /// When the transaction happened.
    #[serde(default = "Utc::now", deserialize_with = "null_as_now")]
    pub timestamp: DateTime<Utc>,
}

/// Decodes `null` as `T::default()`. Pair with `#[serde(default)]` so an
/// absent field behaves the same.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_now<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?.unwrap_or_else(Utc::now))
}

/// A stored transaction row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    /// Store-assigned identifier.
    pub id: i64,
    /// Customer name.
    pub customer: String,
    /// Number of units.
    pub quantity: i64,
    /// Unit price.
    pub price: f64,
    /// When the transaction happened.
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Combines a submitted record with the id the store assigned to it.
    #[must_use]
    pub fn from_new(id: i64, record: NewTransaction) -> Self {
        Self {
            id,
            customer: record.customer,
            quantity: record.quantity,
            price: record.price,
            timestamp: record.timestamp,
        }
    }
}
