//! Valence lexicon and modifier word lists for review sentiment.

/// Word valences on the VADER scale, roughly `[-4.0, 4.0]`.
///
/// Keys are lowercase single words. The list is trimmed to vocabulary
/// that actually occurs in product/service reviews; unknown words are
/// neutral.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("comfortable", 1.5),
    ("delighted", 2.9),
    ("delicious", 2.3),
    ("durable", 1.5),
    ("easy", 1.9),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("fast", 1.3),
    ("friendly", 2.2),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("impressed", 2.2),
    ("impressive", 2.3),
    ("like", 1.5),
    ("love", 3.2),
    ("loved", 2.9),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("pleased", 2.0),
    ("quick", 1.3),
    ("recommend", 1.5),
    ("recommended", 1.5),
    ("reliable", 1.9),
    ("satisfied", 1.7),
    ("smooth", 1.5),
    ("solid", 1.2),
    ("sturdy", 1.4),
    ("superb", 3.1),
    ("wonderful", 2.7),
    ("worth", 0.9),
    // Negative
    ("angry", -2.3),
    ("awful", -2.0),
    ("bad", -2.5),
    ("broke", -1.6),
    ("broken", -1.8),
    ("cracked", -1.3),
    ("damaged", -1.7),
    ("defective", -2.1),
    ("delay", -1.2),
    ("delayed", -1.3),
    ("disappointed", -2.3),
    ("disappointing", -2.2),
    ("error", -1.6),
    ("errors", -1.7),
    ("fail", -2.3),
    ("failed", -2.3),
    ("failure", -2.4),
    ("fake", -1.8),
    ("faulty", -1.9),
    ("flimsy", -1.4),
    ("frustrated", -2.0),
    ("frustrating", -1.9),
    ("hate", -2.7),
    ("hated", -2.6),
    ("horrible", -2.5),
    ("issue", -0.8),
    ("issues", -0.9),
    ("late", -1.1),
    ("leaking", -1.3),
    ("missing", -1.3),
    ("noisy", -1.1),
    ("overpriced", -1.6),
    ("poor", -2.3),
    ("problem", -1.4),
    ("problems", -1.5),
    ("regret", -2.0),
    ("rude", -2.0),
    ("scam", -2.6),
    ("slow", -1.2),
    ("stuck", -1.1),
    ("terrible", -2.1),
    ("useless", -1.8),
    ("waste", -1.8),
    ("worst", -3.1),
    ("wrong", -1.6),
];

/// Adverbs that intensify the following sentiment word.
pub(crate) const BOOSTERS: &[&str] = &[
    "absolutely",
    "completely",
    "extremely",
    "incredibly",
    "really",
    "so",
    "super",
    "totally",
    "utterly",
    "very",
];

/// Adverbs that dampen the following sentiment word.
pub(crate) const DAMPENERS: &[&str] = &[
    "barely",
    "hardly",
    "kinda",
    "marginally",
    "slightly",
    "somewhat",
];

/// Negation words that flip the valence of a nearby sentiment word.
pub(crate) const NEGATORS: &[&str] = &[
    "cannot", "cant", "can't", "didnt", "didn't", "doesnt", "doesn't", "dont", "don't", "isnt",
    "isn't", "neither", "never", "no", "none", "nor", "not", "wasnt", "wasn't", "wont", "won't",
];
