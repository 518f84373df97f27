//! Built-in tactic keyword lists.
//!
//! These lists are what `Dictionary::load_default` restores. Other tools
//! consume dictionaries seeded from them, so edits here change results.

/// Name of the built-in urgency tactic.
pub const URGENCY_MARKETING: &str = "urgency_marketing";

/// Name of the built-in exclusivity tactic.
pub const EXCLUSIVE_MARKETING: &str = "exclusive_marketing";

/// Phrases that signal time pressure or scarcity.
pub(crate) const URGENCY_KW: &[&str] = &[
    "limited",
    "limited time",
    "limited run",
    "limited edition",
    "order now",
    "last chance",
    "hurry",
    "while supplies last",
    "before they're gone",
    "selling out",
    "selling fast",
    "act now",
    "don't wait",
    "today only",
    "expires soon",
    "final hours",
    "almost gone",
];

/// Phrases that signal privileged or restricted access.
pub(crate) const EXCLUSIVE_KW: &[&str] = &[
    "exclusive",
    "exclusively",
    "exclusive offer",
    "exclusive deal",
    "members only",
    "vip",
    "special access",
    "invitation only",
    "premium",
    "privileged",
    "limited access",
    "select customers",
    "insider",
    "private sale",
    "early access",
];

/// Default tactics in the order they are installed.
pub(crate) const DEFAULT_TACTICS: &[(&str, &[&str])] = &[
    (URGENCY_MARKETING, URGENCY_KW),
    (EXCLUSIVE_MARKETING, EXCLUSIVE_KW),
];
