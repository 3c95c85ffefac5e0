//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    Json,
};
use mongodb::bson::Bson;
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use crate::{
    error::{AppError, AppResult},
    models::book::{BookInput, BookResponse, PageQuery},
    AppState,
};

/// Ad-hoc filter parameters for the get-with-filter endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    /// Delimited `key:value,...` pairs matched exactly
    pub filter_equal: Option<String>,
    /// Delimited `key:value,...` pairs matched as case-insensitive substrings
    pub filter_like: Option<String>,
    /// JSON object whose fields are matched exactly, stringified
    pub filter_json: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct JsonParamsQuery {
    pub category: String,
    pub author: String,
}

/// List books with structured search and pagination
#[utoipa::path(
    get,
    path = "/api/books/get-all",
    tag = "books",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of books", body = Vec<BookResponse>)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Vec<BookResponse>>> {
    let books = state.services.books.list(&query).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// List books with ad-hoc delimited or JSON filters and pagination
#[utoipa::path(
    get,
    path = "/api/books/get-with-filter",
    tag = "books",
    params(PageQuery, FilterParams),
    responses(
        (status = 200, description = "Page of books", body = Vec<BookResponse>),
        (status = 400, description = "Malformed filter", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_with_filter(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    Query(filters): Query<FilterParams>,
) -> AppResult<Json<Vec<BookResponse>>> {
    let books = state
        .services
        .books
        .list_with_filter(
            &query,
            filters.filter_equal.as_deref(),
            filters.filter_like.as_deref(),
            filters.filter_json.as_deref(),
        )
        .await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// List books with the in-process-filtered legacy variant
#[utoipa::path(
    get,
    path = "/api/books/get-linQ",
    tag = "books",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of books, filtered in process", body = Vec<BookResponse>)
    )
)]
pub async fn list_in_process(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Vec<BookResponse>>> {
    let books = state.services.books.list_in_process(&query).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// Build the JSON string accepted by the generic filter form
#[utoipa::path(
    post,
    path = "/api/books/create-json-params",
    tag = "books",
    params(JsonParamsQuery),
    responses(
        (status = 200, description = "JSON filter string", body = String)
    )
)]
pub async fn create_json_params(
    State(state): State<AppState>,
    Query(params): Query<JsonParamsQuery>,
) -> String {
    state
        .services
        .books
        .create_json_params(&params.category, &params.author)
}

/// Get book details by its 24-character hex identifier
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "24-character book identifier")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.get(&id).await?;
    Ok(Json(BookResponse::from(book)))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 201, description = "Book created", body = BookResponse)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<BookInput>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<BookResponse>)> {
    let book = state.services.books.create(input).await?;
    let response = BookResponse::from(book);
    let location = format!("/api/books/{}", response.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}

/// Replace an existing book
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "24-character book identifier")
    ),
    request_body = BookInput,
    responses(
        (status = 204, description = "Book replaced"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<BookInput>,
) -> AppResult<StatusCode> {
    state.services.books.update(&id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "24-character book identifier")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.books.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Insert an arbitrary document into the Users collection
#[utoipa::path(
    post,
    path = "/api/books/add-user",
    tag = "books",
    request_body = Object,
    responses(
        (status = 201, description = "User document inserted"),
        (status = 400, description = "Payload is not a JSON object", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_user(
    State(state): State<AppState>,
    Json(input): Json<Value>,
) -> AppResult<StatusCode> {
    let document = mongodb::bson::to_document(&input)
        .map_err(|e| AppError::BadRequest(format!("expected a JSON object: {}", e)))?;
    state.services.books.add_user(document).await?;
    Ok(StatusCode::CREATED)
}

/// Full scan of the Users collection
#[utoipa::path(
    get,
    path = "/api/books/get-user-list",
    tag = "books",
    responses(
        (status = 200, description = "Every user document", body = Vec<Object>)
    )
)]
pub async fn user_list(State(state): State<AppState>) -> AppResult<Json<Vec<Value>>> {
    let users = state.services.books.user_list().await?;
    Ok(Json(
        users
            .into_iter()
            .map(|document| Bson::Document(document).into_relaxed_extjson())
            .collect(),
    ))
}
