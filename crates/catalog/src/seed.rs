//! Static seed data.

use bookshop_core::Isbn;

use crate::book::Book;
use crate::store::CatalogStore;

/// The fixed catalog loaded at process start. Reviews begin empty.
pub fn seed_catalog() -> CatalogStore {
    let store = CatalogStore::new();
    for (isbn, author, title) in [
        ("1", "Chinua Achebe", "Things Fall Apart"),
        ("2", "Hans Christian Andersen", "Fairy tales"),
        ("3", "Dante Alighieri", "The Divine Comedy"),
        ("4", "Unknown", "The Epic Of Gilgamesh"),
        ("5", "Unknown", "The Book Of Job"),
        ("6", "Unknown", "One Thousand and One Nights"),
        ("7", "Unknown", "Njál's Saga"),
        ("8", "Jane Austen", "Pride and Prejudice"),
        ("9", "Honoré de Balzac", "Le Père Goriot"),
        ("10", "Samuel Beckett", "Molloy, Malone Dies, The Unnamable, the trilogy"),
    ] {
        store.insert(Isbn::from(isbn), Book::new(title, author));
    }
    store
}
