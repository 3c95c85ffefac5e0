//! API handlers for Bookstore REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
