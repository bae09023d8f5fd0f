// Cloud-mode word pools.
// Each pool is drawn from with a fixed share of the total probability mass; see
// `WEIGHTED_POOLS` in the parent module.

pub const WARM_GROUNDING: &[&str] = &[
    "matcha", "window", "stairs", "tea", "couch", "nap", "morning", "coffee", "caramelised",
    "blanket", "candle", "notebook", "balcony", "plants", "soft", "quiet", "warm", "sleep",
    "zakopane", "Josh Groban", "books", "mismatched mug", "old hoodie", "slow morning",
    // soft negatives
    "tired", "fog", "30k words", "restless brain", "grey morning", "winter", "5 floors",
];

pub const TINY_HOPES: &[&str] = &[
    "sun", "vacation", "luck", "dreamjob", "weekend", "sea", "sky", "future", "chance",
    "journey", "step", "soon", "passport", "train", "clear day", "tiny win", "message",
    "courage", "soft start", "another try",
    // tiny shadows
    "delay", "waiting", "application", "missed train", "maybe",
];

pub const PLAYFUL_SILLINESS: &[&str] = &[
    "woohoo", "trophy", "silly", "tiny win", "chaos", "paws", "wiggle", "snack", "daje",
    "spark", "cat stretch", "fake productivity", "tiny dance", "crumbs",
    // playful "negatives"
    "tiny loss", "oopsie", "late again",
];

pub const RANDOM_WORDS: &[&str] = &[
    "carbonara", "ciao", "matcha", "Kasia", "Ayla", "stairs", "focusmate", "i win", "lalaland",
    "rembrandt", "roadtrip", "Italy", "polish", "Italian", "window view", "horse", "sun cure",
    "europe",
];

pub const SECRET: &[&str] = &["pierogi"];
