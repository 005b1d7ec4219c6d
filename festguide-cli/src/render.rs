//! TUI rendering for festguide types.
//!
//! Extension traits that add colored terminal output to festguide-core
//! types using owo_colors.

use chrono::NaiveDate;
use festguide_core::Event;
use festguide_core::grouping::LetterBucket;
use festguide_core::likes::Liked;
use festguide_core::tags::TagFilter;
use festguide_core::temporal::Headline;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Headline {
    fn render(&self) -> String {
        self.title().bold().to_string()
    }
}

impl Render for LetterBucket {
    fn render(&self) -> String {
        self.letter.to_string().bold().underline().to_string()
    }
}

/// Second line of an event card.
#[derive(Debug, Clone, Copy)]
pub enum CardDetail {
    /// "10:00 - 11:00" then location (day view)
    TimeSpan,
    /// "2024-01-01 | 10:00" then location
    DateAndLocation,
    /// "2024-01-01 | 10:00" then host
    DateAndHost,
}

/// An event card, with a heart when the screen shows likes.
pub fn render_card(event: &Event, liked: Option<bool>, detail: CardDetail) -> String {
    let heart = match liked {
        Some(true) => format!(" {}", "♥".red()),
        Some(false) => format!(" {}", "♡".dimmed()),
        None => String::new(),
    };

    let (when, where_) = match detail {
        CardDetail::TimeSpan => (
            format!("{} - {}", event.start_time, event.end_time),
            &event.location,
        ),
        CardDetail::DateAndLocation => (
            format!("{} | {}", event.date, event.start_time),
            &event.location,
        ),
        CardDetail::DateAndHost => (
            format!("{} | {}", event.date, event.start_time),
            &event.host,
        ),
    };

    format!(
        "  {}{}\n    {}  {}",
        event.event.bold(),
        heart,
        when,
        where_.dimmed()
    )
}

pub fn render_liked(liked: &Liked, detail: CardDetail) -> String {
    render_card(liked.event, Some(liked.liked), detail)
}

/// "id: 12" line so users can `festguide like <id>`.
pub fn render_id(event: &Event) -> String {
    format!("    {}", format!("id: {}", event.id).dimmed())
}

/// The filter chip row; active tags are highlighted.
pub fn render_tag_chips(available: &[String], filter: &TagFilter) -> String {
    available
        .iter()
        .map(|tag| {
            if filter.is_active(tag) {
                format!("[{}]", tag).reversed().to_string()
            } else {
                format!("[{}]", tag).dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapsible section header, e.g. "▼ Tomorrow, January 2".
pub fn render_section_header(marker: &str, title: &str) -> String {
    format!("{} {}", marker, title).bold().to_string()
}

/// "Tuesday, January 2"
pub fn day_title(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// "Tomorrow, January 2"
pub fn tomorrow_title(date: NaiveDate) -> String {
    format!("Tomorrow, {}", date.format("%B %-d"))
}

/// The alphabet jump bar: letters with hosts are bold, the rest dimmed.
pub fn render_alphabet_bar(alphabet: &str, buckets: &[LetterBucket]) -> String {
    alphabet
        .chars()
        .map(|letter| {
            if buckets.iter().any(|b| b.letter == letter) {
                letter.to_string().bold().to_string()
            } else {
                letter.to_string().dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
