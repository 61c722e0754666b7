//! Browser-facing listing page.
//!
//! The page surface mirrors the JSON API over the same catalog service:
//! `GET /` renders the current list, `POST /add` inserts from the form, and
//! `GET /delete/{id}` removes a book (a missing id is silently ignored).
//! Both mutations redirect back to the listing regardless of outcome.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::{error::AppResult, models::book::Book, AppState};

/// Form body for the add-book form
#[derive(Debug, Deserialize)]
pub struct AddBookForm {
    pub title: String,
    pub author: String,
}

/// Book listing page
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Html(render_index(&books)))
}

/// Handle the add-book form and return to the listing.
/// The form path performs no server-side validation.
pub async fn add_book(
    State(state): State<AppState>,
    Form(form): Form<AddBookForm>,
) -> AppResult<Redirect> {
    state
        .services
        .catalog
        .add_book_from_form(&form.title, &form.author)
        .await?;
    Ok(Redirect::to("/"))
}

/// Delete a book from the listing page; a missing id is ignored
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    state.services.catalog.remove_book_if_present(id).await?;
    Ok(Redirect::to("/"))
}

/// Render the listing view. Kept deliberately minimal; the page is a thin
/// mirror of the JSON API, not a styled frontend.
fn render_index(books: &[Book]) -> String {
    let mut rows = String::new();
    for book in books {
        rows.push_str(&format!(
            "      <li>{} by {} <a href=\"/delete/{}\">Delete</a></li>\n",
            escape_html(&book.title),
            escape_html(&book.author),
            book.id,
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Book Catalog</title></head>\n\
         <body>\n\
           <h1>Book Catalog</h1>\n\
           <form action=\"/add\" method=\"post\">\n\
             <input type=\"text\" name=\"title\" placeholder=\"Title\" required>\n\
             <input type=\"text\" name=\"author\" placeholder=\"Author\" required>\n\
             <button type=\"submit\">Add Book</button>\n\
           </form>\n\
           <ul>\n{rows}      </ul>\n\
         </body>\n\
         </html>\n"
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
