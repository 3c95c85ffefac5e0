//! Data models for Bookstore entities

pub mod book;
pub mod user;

pub use book::{Book, BookInput, BookResponse, PageQuery};
pub use user::UserDocument;
