//! Book catalog service: filter building, pagination, and CRUD delegation

use mongodb::bson::{oid::ObjectId, Document};

use crate::{
    error::{AppError, AppResult},
    filter::{FilterExpression, FilterMode},
    models::book::{Book, BookInput, PageQuery},
    models::user::UserDocument,
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Paginated search using the structured keyword/category filter
    pub async fn list(&self, query: &PageQuery) -> AppResult<Vec<Book>> {
        let filter = FilterExpression::structured(query.keyword(), query.category());
        self.repository
            .books
            .find(filter.to_document(), query.skip(), query.limit())
            .await
    }

    /// Paginated search combining delimited equal/like filters and the
    /// generic JSON-object filter into one expression
    pub async fn list_with_filter(
        &self,
        query: &PageQuery,
        filter_equal: Option<&str>,
        filter_like: Option<&str>,
        filter_json: Option<&str>,
    ) -> AppResult<Vec<Book>> {
        let mut filter = FilterExpression::new();
        if let Some(input) = filter_equal {
            filter.push_delimited(input, FilterMode::Equal)?;
        }
        if let Some(input) = filter_like {
            filter.push_delimited(input, FilterMode::Like)?;
        }
        if let Some(input) = filter_json {
            filter.push_json(input)?;
        }
        self.repository
            .books
            .find(filter.to_document(), query.skip(), query.limit())
            .await
    }

    /// Fetch the requested page unfiltered, then apply the keyword/category
    /// constraints in process. Kept for compatibility with the legacy
    /// in-memory variant: the filter runs after pagination, so a page can
    /// come back partially filled even when more matches exist.
    pub async fn list_in_process(&self, query: &PageQuery) -> AppResult<Vec<Book>> {
        let page = self
            .repository
            .books
            .find(Document::new(), query.skip(), query.limit())
            .await?;
        let keyword = query.keyword().map(str::to_lowercase);
        let category = query.category();
        Ok(page
            .into_iter()
            .filter(|book| {
                keyword
                    .as_deref()
                    .map_or(true, |k| book.name.to_lowercase().contains(k))
            })
            .filter(|book| category.map_or(true, |c| book.category == c))
            .collect())
    }

    /// Diagnostic helper: builds the JSON string accepted by the generic
    /// filter form from a category and an author
    pub fn create_json_params(&self, category: &str, author: &str) -> String {
        serde_json::json!({ "category": category, "author": author }).to_string()
    }

    /// Get book by its 24-character hex identifier
    pub async fn get(&self, id: &str) -> AppResult<Book> {
        let oid = parse_book_id(id)?;
        self.repository
            .books
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Create a new book, returning it with its generated identifier
    pub async fn create(&self, input: BookInput) -> AppResult<Book> {
        let mut book = Book::from(input);
        let id = self.repository.books.insert(&book).await?;
        book.id = Some(id);
        Ok(book)
    }

    /// Replace the book with the given id. The path identifier always wins
    /// over anything in the payload; an absent id is NotFound, never an
    /// upsert.
    pub async fn update(&self, id: &str, input: BookInput) -> AppResult<()> {
        let oid = parse_book_id(id)?;
        let mut book = Book::from(input);
        book.id = Some(oid);
        if !self.repository.books.replace(oid, &book).await? {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }
        Ok(())
    }

    /// Delete the book with the given id
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let oid = parse_book_id(id)?;
        if !self.repository.books.delete(oid).await? {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }
        Ok(())
    }

    /// Insert an arbitrary document into the Users collection
    pub async fn add_user(&self, document: UserDocument) -> AppResult<()> {
        self.repository.users.insert(document).await
    }

    /// Full scan of the Users collection
    pub async fn user_list(&self) -> AppResult<Vec<UserDocument>> {
        self.repository.users.find_all().await
    }
}

/// Book identifiers are 24-character ObjectId hex strings; anything else is
/// an unknown book, matching the original route constraint behavior.
fn parse_book_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::NotFound(format!("Book with id {} not found", id)))
}
