//! Books repository for document-store operations

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

#[derive(Clone)]
pub struct BooksRepository {
    collection: Collection<Book>,
}

impl BooksRepository {
    pub fn new(collection: Collection<Book>) -> Self {
        Self { collection }
    }

    /// Paginated find with the given filter document
    pub async fn find(&self, filter: Document, skip: u64, limit: i64) -> AppResult<Vec<Book>> {
        let books = self
            .collection
            .find(filter)
            .skip(skip)
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(books)
    }

    /// Get book by ID, or None when absent
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Book>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Insert a new book, returning its generated identifier
    pub async fn insert(&self, book: &Book) -> AppResult<ObjectId> {
        let result = self.collection.insert_one(book).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("inserted id is not an ObjectId".to_string()))
    }

    /// Replace the book with the given id. Returns false when no document
    /// matched; never inserts.
    pub async fn replace(&self, id: ObjectId, book: &Book) -> AppResult<bool> {
        let result = self
            .collection
            .replace_one(doc! { "_id": id }, book)
            .await?;
        Ok(result.matched_count > 0)
    }

    /// Delete the book with the given id. Returns false when no document
    /// matched.
    pub async fn delete(&self, id: ObjectId) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
