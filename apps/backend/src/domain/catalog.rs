//! Demo tables served by the endpoint.
//!
//! These stand in for a datastore: built once at startup, never mutated.

use bookclub_api_types::{
    Achievement, Book, Club, NotificationSettings, Preferences, Profile, ProfileStats, UserStats,
};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[derive(Debug, Clone)]
pub struct DemoCatalog {
    pub books: Vec<Book>,
    pub clubs: Vec<Club>,
    pub profile: Profile,
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self {
            books: demo_books(),
            clubs: demo_clubs(),
            profile: demo_profile(),
        }
    }
}

pub fn demo_books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "War and Peace".to_string(),
            author: "Leo Tolstoy".to_string(),
            genre: "Classic literature".to_string(),
            year: Some(1869),
            pages: Some(1408),
            rating: 4.8,
            ratings_count: Some(1247),
            cover: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=300&h=450&fit=crop"
                .to_string(),
            description: Some(
                "An epic novel of Russian society during the Napoleonic wars".to_string(),
            ),
            isbn: Some("978-5-389-01234-5".to_string()),
            language: Some("ru".to_string()),
            publisher: Some("AST".to_string()),
            tags: tags(&["classics", "war", "love", "history"]),
        },
        Book {
            id: 2,
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            genre: "Dystopia".to_string(),
            year: Some(1949),
            pages: Some(328),
            rating: 4.7,
            ratings_count: Some(2156),
            cover: "https://images.unsplash.com/photo-1495640388908-05fa85288e61?w=300&h=450&fit=crop"
                .to_string(),
            description: Some("A bleak dystopia about a totalitarian society of the future".to_string()),
            isbn: Some("978-5-17-123456-7".to_string()),
            language: Some("ru".to_string()),
            publisher: Some("Eksmo".to_string()),
            tags: tags(&["dystopia", "science fiction", "politics", "control"]),
        },
        Book {
            id: 3,
            title: "The Master and Margarita".to_string(),
            author: "Mikhail Bulgakov".to_string(),
            genre: "Magical realism".to_string(),
            year: Some(1967),
            pages: Some(480),
            rating: 4.9,
            ratings_count: Some(3421),
            cover: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=300&h=450&fit=crop"
                .to_string(),
            description: Some(
                "A novel of good and evil, love and betrayal in Soviet Moscow".to_string(),
            ),
            isbn: Some("978-5-699-12345-8".to_string()),
            language: Some("ru".to_string()),
            publisher: Some("Eksmo".to_string()),
            tags: tags(&["mysticism", "philosophy", "love", "satire"]),
        },
    ]
}

pub fn demo_clubs() -> Vec<Club> {
    vec![
        Club {
            id: 1,
            name: "Classics Forever".to_string(),
            description: "Reading and discussing the classics of world literature".to_string(),
            members: 156,
            max_members: Some(500),
            current_book: Some("War and Peace".to_string()),
            current_book_id: Some(1),
            owner: Some("Anna Petrova".to_string()),
            created: Some("2024-01-15".to_string()),
            avatar: Some(
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&h=200&fit=crop"
                    .to_string(),
            ),
            tags: tags(&["classics", "discussions", "history"]),
            meeting_day: Some("Sunday".to_string()),
            meeting_time: Some("19:00".to_string()),
            is_private: false,
            language: Some("ru".to_string()),
        },
        Club {
            id: 2,
            name: "Fantastic Worlds".to_string(),
            description: "Diving into the worlds of science fiction and fantasy".to_string(),
            members: 234,
            max_members: Some(300),
            current_book: Some("Dune".to_string()),
            current_book_id: Some(4),
            owner: Some("Dmitry Ivanov".to_string()),
            created: Some("2024-02-20".to_string()),
            avatar: Some(
                "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=200&h=200&fit=crop"
                    .to_string(),
            ),
            tags: tags(&["science fiction", "fantasy", "future"]),
            meeting_day: Some("Saturday".to_string()),
            meeting_time: Some("20:00".to_string()),
            is_private: false,
            language: Some("ru".to_string()),
        },
        Club {
            id: 3,
            name: "Modern Prose".to_string(),
            description: "Discussing the literature of the twenty-first century".to_string(),
            members: 89,
            max_members: Some(200),
            current_book: Some("No Time to Die".to_string()),
            current_book_id: Some(5),
            owner: Some("Elena Sidorova".to_string()),
            created: Some("2024-03-10".to_string()),
            avatar: Some(
                "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=200&h=200&fit=crop"
                    .to_string(),
            ),
            tags: tags(&["contemporary", "prose", "new releases"]),
            meeting_day: Some("Friday".to_string()),
            meeting_time: Some("18:30".to_string()),
            is_private: false,
            language: Some("ru".to_string()),
        },
    ]
}

pub fn demo_profile() -> Profile {
    Profile {
        id: 1,
        email: "demo@bookclub.ru".to_string(),
        first_name: "Demo".to_string(),
        last_name: "User".to_string(),
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face"
            .to_string(),
        bio: "I love classic and contemporary literature, nineteenth-century Russian prose most of all."
            .to_string(),
        location: "Moscow, Russia".to_string(),
        joined_at: "2024-01-01".to_string(),
        stats: ProfileStats {
            counts: UserStats {
                books_read: 47,
                clubs_joined: 3,
                reviews_written: 12,
                points: 850,
            },
            level: "Literature connoisseur".to_string(),
        },
        preferences: Preferences {
            genres: tags(&["Classics", "Modern prose", "History"]),
            languages: tags(&["ru", "en"]),
            notifications: NotificationSettings {
                email: true,
                push: false,
                club_updates: true,
                new_books: true,
            },
        },
        achievements: vec![
            Achievement {
                id: 1,
                name: "First steps".to_string(),
                description: "Finished a first book".to_string(),
                date: "2024-01-05".to_string(),
            },
            Achievement {
                id: 2,
                name: "Critic".to_string(),
                description: "Wrote a first review".to_string(),
                date: "2024-01-15".to_string(),
            },
            Achievement {
                id: 3,
                name: "Social reader".to_string(),
                description: "Joined a first club".to_string(),
                date: "2024-02-01".to_string(),
            },
        ],
    }
}
