//! Book model and pagination query types.
//!
//! `Book` is the persistence representation (BSON `_id`), `BookResponse` the
//! JSON representation exposed over HTTP (24-character hex id), and
//! `BookInput` the create/replace payload.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A catalog entry as stored in the Books collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub author: String,
}

/// Payload for creating or replacing a book
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BookInput {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub author: String,
}

impl From<BookInput> for Book {
    fn from(input: BookInput) -> Self {
        Self {
            id: None,
            name: input.name,
            price: input.price,
            category: input.category,
            author: input.author,
        }
    }
}

/// A book as returned over HTTP
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookResponse {
    /// 24-character hex identifier
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub author: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: book.name,
            price: book.price,
            category: book.category,
            author: book.author,
        }
    }
}

fn default_page_number() -> i64 {
    1
}

fn default_page_size() -> i64 {
    100
}

/// Pagination and structured-search parameters
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Page number, 1-based (default: 1)
    #[serde(default = "default_page_number")]
    pub page_number: i64,
    /// Page size (default: 100, no upper bound)
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    /// Case-insensitive substring match on the book name
    pub keyword: Option<String>,
    /// Exact match on the book category
    pub category: Option<String>,
}

impl PageQuery {
    /// Number of documents to discard before the requested page.
    /// Negative products clamp to zero, never pass through; the product
    /// saturates instead of overflowing on extreme query values.
    pub fn skip(&self) -> u64 {
        self.page_size
            .saturating_mul(self.page_number.saturating_sub(1))
            .max(0) as u64
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Keyword trimmed of surrounding whitespace; empty means absent
    pub fn keyword(&self) -> Option<&str> {
        normalized(self.keyword.as_deref())
    }

    /// Category trimmed of surrounding whitespace; empty means absent
    pub fn category(&self) -> Option<&str> {
        normalized(self.category.as_deref())
    }
}

fn normalized(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
