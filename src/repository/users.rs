//! Users repository for document-store operations

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;

use crate::{error::AppResult, models::user::UserDocument};

#[derive(Clone)]
pub struct UsersRepository {
    collection: Collection<UserDocument>,
}

impl UsersRepository {
    pub fn new(collection: Collection<UserDocument>) -> Self {
        Self { collection }
    }

    /// Insert an arbitrary document
    pub async fn insert(&self, document: UserDocument) -> AppResult<()> {
        self.collection.insert_one(document).await?;
        Ok(())
    }

    /// Full scan of the collection, no filtering or pagination.
    /// Unbounded by design; a known scalability limitation of this endpoint.
    pub async fn find_all(&self) -> AppResult<Vec<UserDocument>> {
        let users = self
            .collection
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        Ok(users)
    }
}
