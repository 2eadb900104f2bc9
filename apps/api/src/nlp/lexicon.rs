//! Closed-class word lists and shape hints used by the tagger and entity finder.

use std::collections::HashSet;
use std::sync::LazyLock;

fn set(words: &'static [&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

pub static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any",
        "no", "all", "both", "either", "neither", "another", "such", "my", "your", "his", "her",
        "its", "our", "their", "several", "many", "few", "multiple", "various",
    ])
});

pub static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "i", "me", "we", "us", "you", "he", "him", "she", "it", "they", "them", "myself",
        "ourselves", "yourself", "itself", "themselves", "who", "whom", "whose", "which",
        "what", "mine", "ours", "yours", "theirs", "one",
    ])
});

pub static PREPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
        "of", "off", "over", "under", "across", "within", "without", "via", "per", "among",
        "around", "toward", "towards", "upon", "like", "than", "as", "since", "until",
        "throughout", "alongside", "including",
    ])
});

pub static CONJUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "and", "or", "but", "nor", "so", "yet", "while", "whereas", "because", "although",
        "though", "if", "unless", "whether", "where", "when", "then", "&",
    ])
});

pub static AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "be", "is", "am", "are", "was", "were", "been", "being", "have", "has", "had",
        "having", "do", "does", "did", "will", "would", "shall", "should", "can", "could",
        "may", "might", "must", "not",
    ])
});

pub static ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "also", "very", "well", "too", "just", "only", "currently", "previously", "now",
        "there", "here", "more", "most", "less", "least", "again", "often", "always", "never",
        "already", "still", "even", "especially", "independently",
    ])
});

/// Verbs that commonly open resume bullet points, plus frequent base forms.
pub static VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "led", "built", "made", "ran", "wrote", "drove", "grew", "won", "taught", "began",
        "develop", "build", "design", "implement", "lead", "manage", "create", "maintain",
        "deliver", "improve", "reduce", "increase", "optimize", "migrate", "deploy", "use",
        "work", "collaborate", "support", "own", "write", "drive", "mentor", "launch",
        "automate", "analyze", "architect", "integrate", "ensure", "help", "enable",
        "develops", "builds", "designs", "implements", "leads", "manages", "creates",
        "maintains", "delivers", "improves", "reduces", "works", "uses", "supports",
        "spearheaded", "oversaw",
    ])
});

/// Words that look like participles or adjectives but are almost always nouns here.
pub static NOUN_EXCEPTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "bed", "need", "speed", "feed", "seed", "red", "shed", "hundred", "thread", "embed",
        "festival", "proposal", "approval", "portal", "terminal", "journal", "rental",
        "capital", "hospital", "interval", "arrival", "individual", "principal", "potential",
        "material", "professional", "technical", "criminal", "analytics", "logistics",
        "statistics", "mathematics", "economics", "physics", "electronics", "graphics",
        "robotics", "ethics", "mechanics", "dynamics", "table", "cable", "variable",
        "deliverable", "receivable", "payable",
    ])
});

pub const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ive", "ous", "ful", "able", "ible", "al", "ic", "less", "ish", "ant",
];

pub static ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "new", "good", "great", "high", "low", "large", "small", "big", "strong", "deep",
        "fast", "senior", "junior", "lead", "key", "main", "major", "complex", "modern",
        "agile", "remote", "robust", "scalable", "reliable", "secure", "cross", "full",
        "real", "open", "native", "distributed", "advanced", "proficient", "excellent",
        "solid", "hands-on", "end-to-end", "full-stack", "back-end", "front-end",
    ])
});

/// Capitalized words that open lines as headings or sentence starts without
/// naming anything in particular.
pub static COMMON_CAPITALIZED: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "experience", "education", "skills", "summary", "projects", "project", "objective",
        "profile", "certifications", "certification", "languages", "references", "awards",
        "achievements", "responsibilities", "requirements", "contact", "interests",
        "publications", "tools", "frameworks", "technologies", "platforms", "databases",
        "libraries", "work", "professional", "technical", "employment", "history",
        "present", "current", "responsible", "worked", "developed", "designed", "implemented",
        "managed", "created", "maintained", "delivered", "improved", "reduced", "increased",
        "optimized", "migrated", "deployed", "collaborated", "supported", "owned", "mentored",
        "launched", "automated", "analyzed", "architected", "integrated", "ensured", "helped",
        "enabled", "coordinated", "conducted", "established", "performed", "provided",
        "utilized", "assisted", "participated", "gained",
    ])
});

pub static ORG_SUFFIXES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "inc", "inc.", "llc", "ltd", "ltd.", "corp", "corp.", "corporation", "company", "co.",
        "university", "college", "institute", "school", "technologies", "labs", "bank",
        "group", "foundation", "agency", "gmbh", "plc",
    ])
});

/// Connectors allowed inside a multi-word entity, e.g. `University of Toronto`.
pub static ENTITY_CONNECTORS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| set(&["of", "&", "for", "de"]));

pub static MONTHS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "jan", "january", "feb", "february", "mar", "march", "apr", "april", "may", "jun",
        "june", "jul", "july", "aug", "august", "sep", "sept", "september", "oct", "october",
        "nov", "november", "dec", "december",
    ])
});

/// Words excluded from the keyphrase graph regardless of tag.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut words = set(&[
        "etc", "e.g", "i.e", "year", "years", "month", "months", "day", "days", "time",
        "way", "thing", "things", "lot", "lots",
    ]);
    for list in [&*DETERMINERS, &*PRONOUNS, &*PREPOSITIONS, &*CONJUNCTIONS, &*AUXILIARIES] {
        words.extend(list.iter().copied());
    }
    words
});
