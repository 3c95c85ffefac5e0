//! Repository layer for MongoDB operations

pub mod books;
pub mod users;

use mongodb::Database;

use crate::config::DatabaseConfig;

/// Main repository struct holding the collection handles
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository over the given database
    pub fn new(database: &Database, config: &DatabaseConfig) -> Self {
        Self {
            books: books::BooksRepository::new(database.collection(&config.books_collection)),
            users: users::UsersRepository::new(database.collection(&config.users_collection)),
        }
    }
}
