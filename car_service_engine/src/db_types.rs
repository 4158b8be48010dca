//! Data types that are used in the database and over the wire.
//!
//! Records deliberately carry most of their payload as an opaque [`Document`]. The booking site owns the shape of
//! service listings and order details; the engine only cares about the store-assigned `_id` and, for orders, the
//! `customer_email` ownership key.

use mongodb::{
    bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string, Document},
    results::{DeleteResult, InsertOneResult},
};
use serde::{Deserialize, Serialize};

//--------------------------------------     ServiceListing     ------------------------------------------------------

/// A single entry in the service catalogue (an oil change, a tyre rotation, and so on).
///
/// Listings are created and maintained by an out-of-band data-loading process; the engine only ever reads them.
/// The descriptive fields (name, price, image url, ...) are opaque to the engine and round-trip through `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceListing {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub fields: Document,
}

//--------------------------------------        Order       ---------------------------------------------------------

/// A customer order as stored in the `orders` collection.
///
/// `customer_email` doubles as the ownership key: the owner-scoped order listing filters on it, and the access
/// policy compares it against the authenticated identity claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub customer_email: String,
    #[serde(flatten)]
    pub details: Document,
}

//--------------------------------------       NewOrder      ---------------------------------------------------------

/// An order as submitted by a client, before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_email: String,
    #[serde(flatten)]
    pub details: Document,
}

impl NewOrder {
    pub fn new<S: Into<String>>(customer_email: S) -> Self {
        Self { customer_email: customer_email.into(), details: Document::new() }
    }
}

//--------------------------------------   Store acknowledgments   ---------------------------------------------------

/// The store's acknowledgment of an insert, passed back to the client as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOrderResult {
    pub acknowledged: bool,
    /// Hex form of the id the store assigned to the new record.
    pub inserted_id: String,
}

impl From<InsertOneResult> for InsertOrderResult {
    fn from(result: InsertOneResult) -> Self {
        let inserted_id = result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string());
        Self { acknowledged: true, inserted_id }
    }
}

/// The store's acknowledgment of a delete. `deleted_count` is zero when no record matched the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOrderResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteOrderResult {
    fn from(result: DeleteResult) -> Self {
        Self { acknowledged: true, deleted_count: result.deleted_count }
    }
}
