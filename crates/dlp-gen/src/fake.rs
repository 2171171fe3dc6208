//! Fake-value builders.
//!
//! Every builder draws from a [`FakeRng`] and returns an owned `String`.
//! Values are shaped like the real thing so pattern-based detectors fire on
//! them, but they come from reserved or never-issued ranges:
//!
//! | Builder         | Range                                                   |
//! |-----------------|---------------------------------------------------------|
//! | [`email`]       | RFC 2606 / RFC 6761 reserved domains                    |
//! | [`phone`]       | `555-01xx` fictional exchange                           |
//! | [`national_id`] | SSN shape in the never-issued `9xx` area                |
//! | [`card_number`] | Luhn-valid numbers on public test-card prefixes         |
//!
//! [`notes`] deliberately mixes in `&`, `<`, `>`, quotes and commas so the
//! writers' escaping is exercised by realistic data.

use crate::FakeRng;

const FIRST_NAMES: &[&str] = &[
    "Alex", "Taylor", "Jordan", "Morgan", "Casey", "Riley", "Avery", "Quinn",
    "Jamie", "Robin", "Drew", "Sam", "Priya", "Mateo", "Aiko", "Noor",
];

const LAST_NAMES: &[&str] = &[
    "Lee", "Tan", "Garcia", "Nguyen", "Okafor", "Schmidt", "Rossi", "Khan",
    "Silva", "Novak", "O'Brien", "Haddad", "Kowalski", "Moreau", "Ito", "Park",
];

const EMAIL_DOMAINS: &[&str] = &[
    "example.com", "example.org", "example.net", "test.local", "sample.net", "invalid.test",
];

const STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Maple", "Cedar", "Elm", "Lakeview", "Hillcrest", "Sunset", "River", "Park",
];

const STREET_SUFFIXES: &[&str] = &["St", "Ave", "Rd", "Blvd", "Ln", "Dr", "Ct"];

const CITIES: &[(&str, &str)] = &[
    ("Springfield", "IL"), ("Riverton", "WY"), ("Fairview", "TN"), ("Greenville", "SC"),
    ("Madison", "WI"), ("Georgetown", "TX"), ("Salem", "OR"), ("Franklin", "MA"),
];

const NOTE_TEMPLATES: &[&str] = &[
    "Prefers contact by email & phone",
    "Call after 5pm <weekdays only>",
    "Account flagged for review, see ticket",
    "Said \"do not mail\" during last call",
    "VIP customer; renewals > 3 years",
    "Billing & shipping addresses differ",
    "Requested paper statements, not e-statements",
    "Spouse is secondary holder",
];

/// Card brands with a public test prefix and total length.
const CARD_PREFIXES: &[(&str, usize)] = &[
    ("4111", 16), // Visa
    ("4012", 16),
    ("5555", 16), // Mastercard
    ("5105", 16),
    ("3782", 15), // Amex
    ("6011", 16), // Discover
];

// ── People ────────────────────────────────────────────────────────────────────

/// `First Last`.
pub fn person_name(rng: &mut FakeRng) -> String {
    format!("{} {}", rng.pick(FIRST_NAMES), rng.pick(LAST_NAMES))
}

/// An address on a reserved domain, derived from `name` when it is a
/// two-part `First Last` name.
pub fn email(rng: &mut FakeRng, name: &str) -> String {
    let local: String = name
        .split_whitespace()
        .map(|part| {
            part.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_ascii_lowercase()
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".");
    let local = if local.is_empty() { "user".to_owned() } else { local };
    let suffix = if rng.gen_bool(0.3) { rng.gen_range(1..100).to_string() } else { String::new() };
    format!("{local}{suffix}@{}", rng.pick(EMAIL_DOMAINS))
}

/// `(NNN) 555-01NN`.
pub fn phone(rng: &mut FakeRng) -> String {
    let area: u16 = rng.gen_range(201..990);
    let line: u8 = rng.gen_range(0..100);
    format!("({area}) 555-01{line:02}")
}

/// SSN-shaped identifier in the `900-999` area, which is never issued.
pub fn national_id(rng: &mut FakeRng) -> String {
    let area: u16 = rng.gen_range(900..1000);
    let group: u8 = rng.gen_range(1..100);
    let serial: u16 = rng.gen_range(1..10_000);
    format!("{area}-{group:02}-{serial:04}")
}

/// A Luhn-valid card number on a test prefix, grouped by 4 with a random
/// separator (space, dash or none).
pub fn card_number(rng: &mut FakeRng) -> String {
    let &(prefix, len) = rng.pick(CARD_PREFIXES);
    let mut digits: Vec<u8> = prefix.bytes().map(|b| b - b'0').collect();
    while digits.len() < len - 1 {
        digits.push(rng.digit());
    }
    digits.push(luhn_check_digit(&digits));

    let sep = *rng.pick(&["", " ", "-"]);
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().map(|d| char::from(b'0' + d)).collect::<String>())
        .collect::<Vec<_>>()
        .join(sep)
}

/// The digit that makes `payload ++ [digit]` pass the Luhn check.
pub fn luhn_check_digit(payload: &[u8]) -> u8 {
    // Doubling starts at the rightmost payload digit once the check digit
    // is appended.
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = d as u32;
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// `true` if `number` (ignoring spaces and dashes) passes the Luhn check.
pub fn luhn_valid(number: &str) -> bool {
    let digits: Vec<u8> = number
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect::<Option<_>>()
        .unwrap_or_default();
    match digits.split_last() {
        Some((&check, payload)) if !payload.is_empty() => luhn_check_digit(payload) == check,
        _ => false,
    }
}

/// `123 Oak Ave, Springfield, IL 62704`.
pub fn address(rng: &mut FakeRng) -> String {
    let number: u16 = rng.gen_range(1..9_999);
    let &(city, state) = rng.pick(CITIES);
    let zip: u32 = rng.gen_range(10_000..99_999);
    format!(
        "{number} {} {}, {city}, {state} {zip:05}",
        rng.pick(STREET_NAMES),
        rng.pick(STREET_SUFFIXES),
    )
}

/// Free-text note, sometimes with a trailing reference number.
pub fn notes(rng: &mut FakeRng) -> String {
    let note = *rng.pick(NOTE_TEMPLATES);
    if rng.gen_bool(0.25) {
        format!("{note}, ref #{}", rng.gen_range(1_000..10_000))
    } else {
        note.to_owned()
    }
}

// ── Documents ─────────────────────────────────────────────────────────────────

const TITLE_ADJECTIVES: &[&str] = &[
    "Quarterly", "Annual", "Internal", "Draft", "Revised", "Public", "Technical", "Weekly",
];

const TITLE_NOUNS: &[&str] = &[
    "Roadmap", "Release Notes", "Style Guide", "Onboarding Checklist", "Budget Overview",
    "Architecture Review", "Meeting Minutes", "Product Brief",
];

const CATEGORIES: &[&str] = &[
    "Engineering", "Marketing", "Operations", "Design", "Research", "Support", "Legal & Compliance",
];

const SUMMARIES: &[&str] = &[
    "Outlines goals and milestones for the coming period.",
    "Summarizes changes, fixes and known issues.",
    "Describes conventions for naming, layout and tone.",
    "Lists steps for new team members in their first week.",
    "Compares planned vs. actual spend <by department>.",
    "Captures decisions, owners & follow-ups.",
];

const TAGS: &[&str] = &[
    "internal", "draft", "reviewed", "archive", "planning", "howto", "reference", "faq",
];

/// `Quarterly Roadmap`.
pub fn document_title(rng: &mut FakeRng) -> String {
    format!("{} {}", rng.pick(TITLE_ADJECTIVES), rng.pick(TITLE_NOUNS))
}

pub fn category(rng: &mut FakeRng) -> String {
    (*rng.pick(CATEGORIES)).to_owned()
}

/// A `major.minor` version as a decimal, e.g. `2.3`.
pub fn version(rng: &mut FakeRng) -> f64 {
    let major: u8 = rng.gen_range(1..6);
    let minor: u8 = rng.gen_range(0..10);
    major as f64 + minor as f64 / 10.0
}

pub fn summary(rng: &mut FakeRng) -> String {
    (*rng.pick(SUMMARIES)).to_owned()
}

/// One to three distinct tags joined with `;`.
pub fn tags(rng: &mut FakeRng) -> String {
    let count = rng.gen_range(1..=3);
    rng.pick_many(TAGS, count)
        .into_iter()
        .copied()
        .collect::<Vec<_>>()
        .join(";")
}
