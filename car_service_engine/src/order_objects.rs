use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

/// A filter for order queries.
///
/// An empty filter matches every order in the collection. The only supported field today is the customer email
/// (the ownership key); the builder style is kept so new fields slot in without breaking callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderQueryFilter {
    pub customer_email: Option<String>,
}

impl OrderQueryFilter {
    pub fn with_customer_email<S: Into<String>>(mut self, email: S) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.customer_email.is_none()
    }

    /// Render the filter as a store query document. An empty filter renders as `{}`, i.e. match-all.
    pub fn to_document(&self) -> Document {
        let mut query = Document::new();
        if let Some(email) = &self.customer_email {
            query.insert("customer_email", email);
        }
        query
    }
}
