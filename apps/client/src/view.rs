//! Screens and section content.

use std::fmt;

use bookclub_api_types::{Book, Club, Profile, User};

const DEFAULT_FEED_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=40&h=40&fit=crop&crop=face";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Section {
    Feed,
    Catalog,
    Clubs,
    Events,
    Profile,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Feed,
        Section::Catalog,
        Section::Clubs,
        Section::Events,
        Section::Profile,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Feed => "Feed",
            Section::Catalog => "Catalog",
            Section::Clubs => "Clubs",
            Section::Events => "Events",
            Section::Profile => "Profile",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Welcome,
    Authenticated(Section),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: u32,
    pub user_name: String,
    pub avatar: String,
    pub action: String,
    pub target: String,
    pub time: String,
}

/// Activity shown on the feed; the last entry is the signed-in user's own.
pub fn mock_feed(user: Option<&User>) -> Vec<FeedItem> {
    let item = |id, name: &str, avatar: &str, action: &str, target: &str, time: &str| FeedItem {
        id,
        user_name: name.to_string(),
        avatar: avatar.to_string(),
        action: action.to_string(),
        target: target.to_string(),
        time: time.to_string(),
    };

    vec![
        item(
            1,
            "Alexey",
            DEFAULT_FEED_AVATAR,
            "added the book",
            "War and Peace",
            "2 h ago",
        ),
        item(
            2,
            "Maria",
            "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=40&h=40&fit=crop&crop=face",
            "joined the club",
            "Classics Forever",
            "4 h ago",
        ),
        item(
            3,
            "You",
            user.map_or(DEFAULT_FEED_AVATAR, |u| u.avatar.as_str()),
            "earned the achievement",
            "First steps",
            "1 d ago",
        ),
    ]
}

/// What a section shows once loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Feed(Vec<FeedItem>),
    Catalog(Vec<Book>),
    Clubs(Vec<Club>),
    Events,
    Profile(Profile),
}
