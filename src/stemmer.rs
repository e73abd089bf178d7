//! Porter suffix-stripping stemmer.
//!
//! Implements Porter, M.F. "An algorithm for suffix stripping" (1980) with the
//! widely deployed refinements: a small table of irregular forms, `ies`/`ied`
//! on four-letter words, the consonant-guarded `y` -> `i` rule, the extra
//! `fulli`/`logi` rules and the `alli` re-run in step 2.
//!
//! CRITICAL: the index and the query path both go through [`stem`]. Any change
//! here changes which lines a query matches; rebuild and rerun the tests.
//!
//! Input is lowercased first. Non-ASCII input is returned lowercased but
//! otherwise untouched.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Irregular forms mapped straight to their stem, bypassing the rule steps.
static IRREGULAR_FORMS: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = FxHashMap::default();
    m.insert("sky", "sky");
    m.insert("skies", "sky");
    m.insert("dying", "die");
    m.insert("lying", "lie");
    m.insert("tying", "tie");
    m.insert("news", "news");
    m.insert("innings", "inning");
    m.insert("inning", "inning");
    m.insert("outings", "outing");
    m.insert("outing", "outing");
    m.insert("cannings", "canning");
    m.insert("canning", "canning");
    m.insert("howe", "howe");
    m.insert("proceed", "proceed");
    m.insert("exceed", "exceed");
    m.insert("succeed", "succeed");
    m
});

/// Stem a single word (or a whole query string, which is treated as one word).
///
/// ```
/// use lyric_matcher::stemmer::stem;
///
/// assert_eq!(stem("dancing"), "danc");
/// assert_eq!(stem("Loving"), "love");
/// ```
pub fn stem(word: &str) -> String {
    // Irregular forms are looked up on the word as given, before lowercasing
    if let Some(&irregular) = IRREGULAR_FORMS.get(word) {
        return irregular.to_string();
    }

    let lower = word.to_lowercase();
    if word.len() <= 2 || !lower.is_ascii() {
        return lower;
    }

    let w = step1a(&lower);
    let w = step1b(&w);
    let w = step1c(&w);
    let w = step2(&w);
    let w = step3(&w);
    let w = step4(&w);
    let w = step5a(&w);
    step5b(&w)
}

// ============================================================================
// HELPERS
// ============================================================================

fn is_consonant(b: &[u8], i: usize) -> bool {
    match b[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(b, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant transitions, the `m` in `[C](VC)^m[V]`.
fn measure(word: &str) -> usize {
    let b = word.as_bytes();
    (1..b.len())
        .filter(|&i| !is_consonant(b, i - 1) && is_consonant(b, i))
        .count()
}

fn has_positive_measure(word: &str) -> bool {
    measure(word) > 0
}

fn contains_vowel(word: &str) -> bool {
    let b = word.as_bytes();
    (0..b.len()).any(|i| !is_consonant(b, i))
}

fn ends_double_consonant(word: &str) -> bool {
    let b = word.as_bytes();
    let len = b.len();
    len >= 2 && b[len - 1] == b[len - 2] && is_consonant(b, len - 1)
}

/// consonant-vowel-consonant ending where the last consonant is not w, x or y.
/// Two-letter vowel-consonant words count as well.
fn ends_cvc(word: &str) -> bool {
    let b = word.as_bytes();
    let len = b.len();
    if len >= 3 {
        is_consonant(b, len - 3)
            && !is_consonant(b, len - 2)
            && is_consonant(b, len - 1)
            && !matches!(b[len - 1], b'w' | b'x' | b'y')
    } else {
        len == 2 && !is_consonant(b, 0) && is_consonant(b, 1)
    }
}

/// Apply the first rule whose suffix matches. If its condition fails the word
/// is returned unchanged; later rules are not tried.
fn apply_first_rule(word: &str, rules: &[(&str, &str)], condition: impl Fn(&str) -> bool) -> String {
    for &(suffix, replacement) in rules {
        if let Some(stem) = word.strip_suffix(suffix) {
            if condition(stem) {
                return format!("{}{}", stem, replacement);
            }
            return word.to_string();
        }
    }
    word.to_string()
}

// ============================================================================
// STEPS
// ============================================================================

/// Plurals.
fn step1a(word: &str) -> String {
    if word.len() == 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{}ie", stem);
        }
    }
    apply_first_rule(
        word,
        &[("sses", "ss"), ("ies", "i"), ("ss", "ss"), ("s", "")],
        |_| true,
    )
}

/// Past tense and gerunds.
fn step1b(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ied") {
        let replacement = if word.len() == 4 { "ie" } else { "i" };
        return format!("{}{}", stem, replacement);
    }

    if let Some(stem) = word.strip_suffix("eed") {
        if has_positive_measure(stem) {
            return format!("{}ee", stem);
        }
        return word.to_string();
    }

    let intermediate = ["ed", "ing"]
        .iter()
        .find_map(|suffix| word.strip_suffix(suffix))
        .filter(|stem| contains_vowel(stem));
    let Some(stem) = intermediate else {
        return word.to_string();
    };

    for (suffix, replacement) in [("at", "ate"), ("bl", "ble"), ("iz", "ize")] {
        if let Some(base) = stem.strip_suffix(suffix) {
            return format!("{}{}", base, replacement);
        }
    }

    if ends_double_consonant(stem) {
        let last = stem.as_bytes()[stem.len() - 1];
        if matches!(last, b'l' | b's' | b'z') {
            return stem.to_string();
        }
        return stem[..stem.len() - 1].to_string();
    }

    if measure(stem) == 1 && ends_cvc(stem) {
        return format!("{}e", stem);
    }
    stem.to_string()
}

/// Terminal `y` -> `i` when preceded by a consonant that is not the first letter.
fn step1c(word: &str) -> String {
    apply_first_rule(word, &[("y", "i")], |stem| {
        stem.len() > 1 && is_consonant(stem.as_bytes(), stem.len() - 1)
    })
}

/// Double suffixes to single ones.
fn step2(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("alli") {
        if has_positive_measure(stem) {
            return step2(&format!("{}al", stem));
        }
    }

    if let Some(stem) = word.strip_suffix("logi") {
        // The `l` stays with the stem so that short stems such as "geo" qualify
        if has_positive_measure(&format!("{}l", stem)) {
            return format!("{}log", stem);
        }
        return word.to_string();
    }

    apply_first_rule(
        word,
        &[
            ("ational", "ate"),
            ("tional", "tion"),
            ("enci", "ence"),
            ("anci", "ance"),
            ("izer", "ize"),
            ("bli", "ble"),
            ("alli", "al"),
            ("entli", "ent"),
            ("eli", "e"),
            ("ousli", "ous"),
            ("ization", "ize"),
            ("ation", "ate"),
            ("ator", "ate"),
            ("alism", "al"),
            ("iveness", "ive"),
            ("fulness", "ful"),
            ("ousness", "ous"),
            ("aliti", "al"),
            ("iviti", "ive"),
            ("biliti", "ble"),
            ("fulli", "ful"),
        ],
        has_positive_measure,
    )
}

/// -icate, -ative, -alize and friends.
fn step3(word: &str) -> String {
    apply_first_rule(
        word,
        &[
            ("icate", "ic"),
            ("ative", ""),
            ("alize", "al"),
            ("iciti", "ic"),
            ("ical", "ic"),
            ("ful", ""),
            ("ness", ""),
        ],
        has_positive_measure,
    )
}

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Strip residual suffixes when m > 1. `-ion` additionally needs a preceding s or t.
fn step4(word: &str) -> String {
    for &suffix in STEP4_SUFFIXES {
        if let Some(stem) = word.strip_suffix(suffix) {
            let allowed = measure(stem) > 1 && (suffix != "ion" || stem.ends_with(['s', 't']));
            if allowed {
                return stem.to_string();
            }
            return word.to_string();
        }
    }
    word.to_string()
}

/// Trailing `e`.
fn step5a(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('e') {
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// `-ll` -> `-l` when m > 1.
fn step5b(word: &str) -> String {
    if word.ends_with("ll") && measure(&word[..word.len() - 1]) > 1 {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

// ============================================================================
// TESTS
// ============================================================================
