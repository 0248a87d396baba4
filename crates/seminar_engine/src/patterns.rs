use std::sync::LazyLock;

use regex::Regex;
use seminar_core::DeliveryMode;

const PRESENCE_PATTERN: &str = r"(?i)\b(präsenz|praesenz|vor ort|vorort|in\s*präsenz)\b";
const ONLINE_PATTERN: &str = r"(?i)\b(online|virtuell|webinar|digital)\b";
const HYBRID_PATTERN: &str = r"(?i)\b(hybrid|blended|mix\s+aus\s+online\s+und\s+präsenz)\b";

const REGISTERED_PATTERN: &str = r"(?i)angemeldete?\s*:?\s*([0-9]+)";
const REGISTRATIONS_PATTERN: &str = r"(?i)anmeldungen\s*:?\s*([0-9]+)";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid static pattern {pattern:?}: {err}"))
}

// Checked top to bottom; the first hit decides. A text mentioning both
// "online" and "Präsenz" is therefore Presence.
static DELIVERY_MODE_PATTERNS: LazyLock<[(DeliveryMode, Regex); 3]> = LazyLock::new(|| {
    [
        (DeliveryMode::Presence, compile(PRESENCE_PATTERN)),
        (DeliveryMode::Online, compile(ONLINE_PATTERN)),
        (DeliveryMode::Hybrid, compile(HYBRID_PATTERN)),
    ]
});

static REGISTERED_PATTERNS: LazyLock<[Regex; 2]> =
    LazyLock::new(|| [compile(REGISTERED_PATTERN), compile(REGISTRATIONS_PATTERN)]);

/// Classifies free text by the first delivery-mode vocabulary it mentions.
pub fn classify_delivery_mode(text: &str) -> DeliveryMode {
    for (mode, pattern) in DELIVERY_MODE_PATTERNS.iter() {
        if pattern.is_match(text) {
            return *mode;
        }
    }
    DeliveryMode::Unknown
}

/// Finds a registration count such as `Angemeldete: 12` or `Anmeldungen 7`.
///
/// The "angemeldet" form is tried before "anmeldungen"; within a pattern the
/// leftmost match wins. A number too large for `u64` counts as no match.
pub fn extract_registered_count(text: &str) -> Option<u64> {
    REGISTERED_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse().ok())
    })
}
