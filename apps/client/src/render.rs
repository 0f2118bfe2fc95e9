//! Plain-text screens printed after each command.

use std::fmt::Write;

use bookclub_api_types::{Book, Club, Profile, User};
use time::OffsetDateTime;

use crate::app::App;
use crate::catalog::DataSource;
use crate::notifications::{format_relative, Notification};
use crate::onboarding::Tour;
use crate::search::{highlight, Suggestions, NOTHING_FOUND};
use crate::storage::KeyValueStore;
use crate::toast::Toast;
use crate::view::{FeedItem, Section, SectionContent, View};

pub const EMPTY_FEED: &str = "Your feed is empty. Join a club or add a book to get started!";
const CONSENT_BANNER: &str =
    "We use cookies to improve the site. Run `bookclub cookies accept` or `bookclub cookies decline`.";

/// Header line, view body and pending toasts.
pub fn screen<S: KeyValueStore>(app: &mut App<S>, content: Option<&SectionContent>) -> String {
    let mut out = String::new();

    match app.view() {
        View::Welcome => out.push_str(&welcome()),
        View::Authenticated(section) => {
            if let Some(user) = app.user() {
                out.push_str(&header(user, app.unread_count(), section));
            }
            if let Some(content) = content {
                out.push('\n');
                out.push_str(&section_content(content));
            }
            if let Some(tour) = app.tour() {
                out.push('\n');
                out.push_str(&tour_card(tour));
            }
        }
    }

    if app.catalog().source() == DataSource::Bundled {
        out.push_str("\n(offline: showing bundled data)\n");
    }
    if app.needs_consent_banner() {
        out.push('\n');
        out.push_str(CONSENT_BANNER);
        out.push('\n');
    }

    let toasts = app.drain_toasts();
    if !toasts.is_empty() {
        out.push('\n');
        out.push_str(&toast_lines(&toasts));
    }
    out
}

pub fn welcome() -> String {
    [
        "BookClub",
        "A place to read together, share reviews and find like-minded readers.",
        "",
        "Sign in:   bookclub login --email <email> --password <password>",
        "Register:  bookclub register --username <name> --email <email> ...",
        "",
    ]
    .join("\n")
}

pub fn header(user: &User, unread: usize, section: Section) -> String {
    let name = format!("{} {}", user.first_name, user.last_name);
    let mut line = format!("BookClub · {section} · {}", name.trim_end());
    if unread > 0 {
        let _ = write!(line, " · 🔔 {unread}");
    }
    line.push('\n');
    line
}

pub fn section_content(content: &SectionContent) -> String {
    match content {
        SectionContent::Feed(items) => feed(items),
        SectionContent::Catalog(books) => catalog(books),
        SectionContent::Clubs(clubs) => clubs_list(clubs),
        SectionContent::Events => "Events\n\nNothing scheduled yet.\n".to_string(),
        SectionContent::Profile(profile) => profile_card(profile),
    }
}

pub fn feed(items: &[FeedItem]) -> String {
    if items.is_empty() {
        return format!("{EMPTY_FEED}\n");
    }
    let mut out = String::new();
    for item in items {
        let _ = writeln!(
            out,
            "{} {} \"{}\" ({})",
            item.user_name, item.action, item.target, item.time
        );
    }
    out
}

pub fn catalog(books: &[Book]) -> String {
    let mut out = String::new();
    for book in books {
        let _ = writeln!(
            out,
            "#{} {} by {} [{}] ★ {:.1}",
            book.id, book.title, book.author, book.genre, book.rating
        );
    }
    out
}

pub fn clubs_list(clubs: &[Club]) -> String {
    let mut out = String::new();
    for club in clubs {
        let _ = writeln!(out, "#{} {} ({} members)", club.id, club.name, club.members);
        let _ = writeln!(out, "    {}", club.description);
        if let Some(schedule) = club.schedule() {
            let _ = writeln!(out, "    Meets {schedule}");
        }
    }
    out
}

pub fn profile_card(profile: &Profile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {} <{}>", profile.first_name, profile.last_name, profile.email);
    let _ = writeln!(out, "Level: {}", profile.stats.level);
    if !profile.bio.is_empty() {
        let _ = writeln!(out, "{}", profile.bio);
    }
    if !profile.location.is_empty() {
        let _ = writeln!(out, "Location: {}", profile.location);
    }
    let counts = &profile.stats.counts;
    let _ = writeln!(
        out,
        "Books read: {} · Clubs: {} · Reviews: {} · Points: {}",
        counts.books_read, counts.clubs_joined, counts.reviews_written, counts.points
    );
    for achievement in &profile.achievements {
        let _ = writeln!(out, "🏆 {} ({})", achievement.name, achievement.date);
    }
    out
}

pub fn suggestions(result: &Suggestions, query: &str) -> String {
    match result {
        Suggestions::Hidden => String::new(),
        Suggestions::NothingFound => format!("{NOTHING_FOUND}\n"),
        Suggestions::Hits(hits) => {
            let mut out = String::new();
            for hit in hits {
                let _ = writeln!(
                    out,
                    "{} · {}",
                    highlight(&hit.title, query),
                    highlight(&hit.subtitle, query)
                );
            }
            out
        }
    }
}

pub fn notifications(list: &[Notification], now: OffsetDateTime) -> String {
    if list.is_empty() {
        return "No notifications\n".to_string();
    }
    let mut out = String::new();
    for n in list {
        let marker = if n.read { " " } else { "•" };
        let _ = writeln!(
            out,
            "{marker} {}: {} ({})",
            n.title,
            n.message,
            format_relative(n.timestamp, now)
        );
    }
    out
}

pub fn tour_card(tour: &Tour) -> String {
    let step = tour.current();
    format!(
        "{} · {}\n{}\n[{}] · `bookclub tour --skip` to skip\n",
        tour.progress_label(),
        step.title,
        step.body,
        tour.button_label()
    )
}

pub fn toast_lines(toasts: &[Toast]) -> String {
    let mut out = String::new();
    for toast in toasts {
        let _ = writeln!(out, "{toast}");
    }
    out
}
