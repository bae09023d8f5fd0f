// Story-mode fragment pools, one per grammatical slot.

pub const TIME: &[&str] = &[
    "today",
    "this morning",
    "tonight",
    "this afternoon",
    "right now",
    "lately",
    "these days",
    "this quiet hour",
    "after all this time",
    "on this small Tuesday",
    "in the soft blue light",
    "somewhere between coffee and sleep",
];

pub const MOOD: &[&str] = &[
    "it feels foggy",
    "the sky is heavy",
    "the room is soft",
    "the stairs feel tall",
    "the window is kind",
    "the air feels slow",
    "the city is humming far away",
    "my thoughts feel cotton-soft",
    "the light is gentle and tired",
    "nothing is urgent, but everything hums",
    "the world feels slightly out of focus",
    "the silence is loud but not unkind",
];

pub const MYSELF: &[&str] = &[
    "tired but curious",
    "not sure what I want",
    "still here",
    "softer than I thought",
    "humming quietly",
    "a little frayed at the edges",
    "braver than I remembered",
    "full of half-finished thoughts",
];

pub const DESIRE: &[&str] = &[
    "a little sun",
    "to leave the stairs behind",
    "to feel enough",
    "to hear from you",
    "a small yes",
    "one honest rest",
    "a day without rushing",
    "to feel proud of myself",
];

pub const MOVEMENT: &[&str] = &[
    "take one more step",
    "stay and breathe",
    "wait and see",
    "make some tea",
    "watch the window",
    "write three soft words",
    "stretch and stand anyway",
    "let tonight be enough for now",
];
