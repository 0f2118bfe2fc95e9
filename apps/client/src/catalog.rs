//! Reference collections read by every view, remote or bundled.

use bookclub_api_types::{Book, Club};
use tracing::{info, warn};

use crate::api::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    Bundled,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    clubs: Vec<Club>,
    source: DataSource,
}

impl Catalog {
    pub fn bundled() -> Self {
        Self {
            books: bundled_books(),
            clubs: bundled_clubs(),
            source: DataSource::Bundled,
        }
    }

    /// Ask the endpoint once and keep whatever it serves.
    ///
    /// Books decide availability. If they load, clubs are fetched too; a
    /// failure there keeps the bundled clubs without demoting the source.
    pub async fn load(api: &ApiClient) -> Self {
        let books = match api.books().await {
            Ok(books) => books,
            Err(e) => {
                info!(url = api.base_url(), error = %e, "endpoint unavailable, using bundled data");
                return Self::bundled();
            }
        };

        let clubs = api.clubs().await.unwrap_or_else(|e| {
            warn!(error = %e, "failed to load clubs, keeping bundled clubs");
            bundled_clubs()
        });

        Self {
            books,
            clubs,
            source: DataSource::Remote,
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn source(&self) -> DataSource {
        self.source
    }
}

fn bundled_books() -> Vec<Book> {
    vec![Book {
        id: 1,
        title: "War and Peace".to_string(),
        author: "Leo Tolstoy".to_string(),
        genre: "Classic literature".to_string(),
        year: None,
        pages: None,
        rating: 4.8,
        ratings_count: None,
        cover: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=300&h=450&fit=crop"
            .to_string(),
        description: None,
        isbn: None,
        language: None,
        publisher: None,
        tags: Vec::new(),
    }]
}

fn bundled_clubs() -> Vec<Club> {
    vec![Club {
        id: 1,
        name: "Classics Forever".to_string(),
        description: "Reading and discussing classic literature".to_string(),
        members: 156,
        max_members: None,
        current_book: None,
        current_book_id: None,
        owner: None,
        created: None,
        avatar: None,
        tags: Vec::new(),
        meeting_day: None,
        meeting_time: None,
        is_private: false,
        language: None,
    }]
}
