/// Daily fortune composition from the tag-keyed message table.

use chrono::Local;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::reference::FortuneTable;
use crate::schema::fortune::FortuneResult;

pub const DATE_FORMAT: &str = "%Y/%m/%d";

const COSMIC_COOKIES: &[&str] = &[
    "A squirrel is burying a nut for its future self. What small, wonderful thing can you do today that 'Future You' will thank you for?",
    "The universe is conspiring to bring you exactly what you need. Stay open to unexpected meetings.",
    "Your energy today is like a gentle breeze - soft but capable of moving mountains of doubt.",
    "Today's plot twist: the thing you've been worrying about will resolve itself in the most unexpected way.",
    "The stars suggest you trust your first instinct today. Your intuition is particularly sharp.",
];

const LUCKY_SNACKS: &[&str] = &[
    "Anything with chocolate. Seriously.",
    "Something crunchy - it will spark creativity.",
    "A warm drink will bring clarity to your thoughts.",
    "Fresh fruit will energize your afternoon.",
    "Share a snack with someone - double the luck!",
];

/// Deeper look used when the message table has no tags at all.
pub const FALLBACK_DEEPER_LOOK: &str =
    "Quiet days are fortunes too. Let today unfold at its own pace.";

/// Today's date in `YYYY/MM/DD` form.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Split a comma-separated tag list, trimming pieces and dropping empties.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Choose the themed message for a set of requested tags.
///
/// Only tags present in the table are eligible; if none is, every table
/// tag is.
pub fn pick_deeper_look<R: Rng + ?Sized>(
    table: &FortuneTable,
    tags: &[String],
    rng: &mut R,
) -> String {
    let mut eligible: Vec<&str> = tags
        .iter()
        .map(String::as_str)
        .filter(|tag| table.contains(tag))
        .collect();
    if eligible.is_empty() {
        debug!("no fortune tag matched {:?}, using all tags", tags);
        eligible = table.tags();
    }

    eligible
        .choose(rng)
        .and_then(|tag| table.get(tag))
        .and_then(|messages| messages.choose(rng))
        .cloned()
        .unwrap_or_else(|| FALLBACK_DEEPER_LOOK.to_string())
}

/// Compose a fortune. `date` defaults to today.
pub fn generate_fortune<R: Rng + ?Sized>(
    table: &FortuneTable,
    tags: &[String],
    date: Option<&str>,
    rng: &mut R,
) -> FortuneResult {
    let date = date.map(str::to_string).unwrap_or_else(today);
    let deeper_look = pick_deeper_look(table, tags, rng);

    FortuneResult {
        date,
        cosmic_cookie: pick_line(COSMIC_COOKIES, rng),
        lucky_snack: pick_line(LUCKY_SNACKS, rng),
        deeper_look,
    }
}

fn pick_line<R: Rng + ?Sized>(lines: &[&str], rng: &mut R) -> String {
    lines.choose(rng).map(|l| l.to_string()).unwrap_or_default()
}
