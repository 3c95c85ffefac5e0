//! User model.
//!
//! Users are stored as opaque documents: an ordered mapping from string keys
//! to generic BSON values, with no schema of their own. Handlers accept and
//! return them as arbitrary JSON objects.

use mongodb::bson::Document;

/// An untyped record in the Users collection
pub type UserDocument = Document;
