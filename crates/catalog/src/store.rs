//! In-memory catalog store.
//!
//! The axum runtime is genuinely multi-threaded, so the "one review per
//! username" invariant is protected by a mutex rather than by single-threaded
//! handler semantics. Critical sections are short and never held across an
//! `.await`.

use std::collections::HashMap;
use std::sync::Mutex;

use bookshop_core::{DomainError, DomainResult, Isbn, Username};

use crate::book::{Book, ReviewError, ReviewOutcome};

/// Process-wide book catalog, keyed by ISBN.
#[derive(Debug, Default)]
pub struct CatalogStore {
    books: Mutex<HashMap<Isbn, Book>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed-time insert. Books are never created or deleted after startup.
    pub fn insert(&self, isbn: Isbn, book: Book) {
        self.books.lock().unwrap().insert(isbn, book);
    }

    /// The full catalog. `NotFound` only when the catalog is empty, which is
    /// unreachable with the static seed.
    pub fn list(&self) -> DomainResult<HashMap<Isbn, Book>> {
        let books = self.books.lock().unwrap();
        if books.is_empty() {
            return Err(DomainError::NotFound);
        }
        Ok(books.clone())
    }

    pub fn get(&self, isbn: &Isbn) -> DomainResult<Book> {
        self.books
            .lock()
            .unwrap()
            .get(isbn)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    /// All books whose author exactly equals the input, tagged with their ISBN.
    pub fn by_author(&self, author: &str) -> DomainResult<Vec<(Isbn, Book)>> {
        self.find(|book| book.author == author)
    }

    /// All books whose title exactly equals the input, tagged with their ISBN.
    pub fn by_title(&self, title: &str) -> DomainResult<Vec<(Isbn, Book)>> {
        self.find(|book| book.title == title)
    }

    fn find(&self, matches: impl Fn(&Book) -> bool) -> DomainResult<Vec<(Isbn, Book)>> {
        let books = self.books.lock().unwrap();
        let mut found: Vec<(Isbn, Book)> = books
            .iter()
            .filter(|(_, book)| matches(book))
            .map(|(isbn, book)| (isbn.clone(), book.clone()))
            .collect();
        if found.is_empty() {
            return Err(DomainError::NotFound);
        }
        // HashMap iteration order is arbitrary; keep responses stable.
        found.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(found)
    }

    /// The review map for one book.
    pub fn reviews(&self, isbn: &Isbn) -> DomainResult<HashMap<Username, String>> {
        Ok(self.get(isbn)?.reviews)
    }

    /// Set the acting user's review, replacing any previous one.
    ///
    /// Checks run in contract order: unknown book wins over empty text.
    pub fn upsert_review(
        &self,
        isbn: &Isbn,
        username: &Username,
        text: &str,
    ) -> Result<ReviewOutcome, ReviewError> {
        let mut books = self.books.lock().unwrap();
        let book = books.get_mut(isbn).ok_or(ReviewError::UnknownBook)?;
        if text.is_empty() {
            return Err(ReviewError::EmptyText);
        }
        let outcome = if book.reviews.contains_key(username) {
            ReviewOutcome::Modified
        } else {
            ReviewOutcome::Added
        };
        book.reviews.insert(username.clone(), text.to_string());
        Ok(outcome)
    }

    /// Remove the acting user's review, leaving other users' entries intact.
    pub fn delete_review(&self, isbn: &Isbn, username: &Username) -> Result<(), ReviewError> {
        let mut books = self.books.lock().unwrap();
        let book = books.get_mut(isbn).ok_or(ReviewError::UnknownBook)?;
        book.reviews
            .remove(username)
            .map(|_| ())
            .ok_or(ReviewError::NoReview)
    }
}
