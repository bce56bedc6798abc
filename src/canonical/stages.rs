//! Individual text rewrites of the canonicalization pipeline.
//!
//! Every function here is a total `&str -> String` transformation. The input
//! of stage N is always the output of stage N-1, so several patterns below
//! rely on earlier normalization (lowercase text, collapsed whitespace).

use std::sync::LazyLock;

use regex::Regex;

/// Keywords that tokenization sometimes fuses with the following word.
const KEYWORDS: [&str; 15] = [
    "select", "from", "where", "and", "or", "count", "sum", "avg", "max", "min", "group", "order",
    "by", "having", "limit"
];

/// Words after which the next word is an identifier or a value.
const OPERAND_WORDS: [&str; 17] = [
    "as", "asc", "between", "case", "desc", "distinct", "else", "in", "is", "join", "like", "not",
    "null", "on", "then", "when", "with"
];

/// Characters after which the next word is an operand.
const OPERAND_MARKERS: [char; 6] = ['=', '<', '>', '!', '(', ','];

const QUOTES: [char; 2] = ['"', '\''];

/// Dataset artifact prefixed to some film titles.
const DOMAIN_PREFIX: &str = "short film ";

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*").expect("valid regex"));

/// `word / word`, `word/ word`, `"2010"/"11"`.
static SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+)["']*\s*/\s*["']*(\w+)"#).expect("valid regex"));

/// ASCII hyphen plus the dash variants later mapped onto it.
static HYPHEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*([-\x{2010}-\x{2015}\x{2212}\x{FE58}\x{FE63}\x{FF0D}])\s*")
        .expect("valid regex")
});

static DASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{2010}-\x{2015}\x{2212}\x{FE58}\x{FE63}\x{FF0D}]").expect("valid regex")
});

/// Abbreviation periods: `oct.`, `8.,`, `jr.` at the end.
static TRAILING_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.+(\s|,|$)").expect("valid regex"));

static TRAILING_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)-+(\s|,|$)").expect("valid regex"));

static SEPT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bsept\b").expect("valid regex"));

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-z]\w*").expect("valid regex"));

/// Longest operators first so `<=` is never split into `<` and `=`.
static OPERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(<=|>=|<>|!=|=|<|>)\s*").expect("valid regex"));

static WEEK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\b(?:week\s+["']*)+(\d+)"#).expect("valid regex"));

static QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"["']"#).expect("valid regex"));

/// Checkmarks, arrows and the multiplication sign.
static SYMBOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{2713}\x{2714}\x{2717}\x{2718}\x{2190}-\x{2193}\x{21D2}\x{00D7}]+")
        .expect("valid regex")
});

static ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:the|a|an)\s+").expect("valid regex"));

static OPEN_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\s+").expect("valid regex"));

static CLOSE_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\)").expect("valid regex"));

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Stage 1.
pub fn lowercase_and_trim(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Stage 2: fold compound column names written with a slash.
///
/// Repeats until no slash between two words remains, so `a/b/c` becomes
/// `a_b_c` in a single call.
pub fn fold_slashes(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let folded = SLASH.replace_all(&current, "${1}_${2}").into_owned();
        if folded == current {
            return current;
        }
        current = folded;
    }
}

/// Stage 3.
pub fn clean_hyphens_and_periods(text: &str) -> String {
    let hyphens = HYPHEN.replace_all(text, "$1");
    let periods = TRAILING_PERIOD.replace_all(&hyphens, "$1");
    SEPT.replace_all(&periods, "sep").into_owned()
}

/// Stage 4: split keywords fused with the next word (`selectname`).
///
/// Only words in clause position are repaired. A word that directly follows
/// a comparison operator, `(`, `,` or an operand-introducing keyword is a
/// value or identifier (`= orlando`, `from orders`) and is left alone.
/// `order` and `group` keep splitting their remainder, so `orderbyname`
/// becomes `order by name` in one call.
pub fn repair_keyword_spacing(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for word in WORD.find_iter(text) {
        result.push_str(&text[last..word.start()]);
        last = word.start();
        if fused_keyword(word.as_str()).is_none() || in_operand_position(&result) {
            continue;
        }
        split_fused_word(word.as_str(), &mut result);
        last = word.end();
    }
    result.push_str(&text[last..]);
    result
}

fn split_fused_word(word: &str, result: &mut String) {
    let mut rest = word;
    while let Some(keyword) = fused_keyword(rest) {
        result.push_str(keyword);
        result.push(' ');
        rest = &rest[keyword.len()..];
        if !matches!(keyword, "order" | "group") {
            break;
        }
    }
    result.push_str(rest);
}

/// Longest keyword that `word` starts with, directly followed by a letter.
fn fused_keyword(word: &str) -> Option<&'static str> {
    if KEYWORDS.contains(&word) {
        return None;
    }
    KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| {
            word.strip_prefix(keyword)
                .and_then(|rest| rest.chars().next())
                .is_some_and(char::is_alphabetic)
        })
        .max_by_key(|keyword| keyword.len())
}

fn in_operand_position(preceding: &str) -> bool {
    let preceding =
        preceding.trim_end_matches(|c: char| c.is_whitespace() || QUOTES.contains(&c));
    match preceding.chars().next_back() {
        None => false,
        Some(c) if OPERAND_MARKERS.contains(&c) => true,
        Some(_) => {
            let previous = preceding
                .rsplit(|c: char| !(c.is_alphanumeric() || c == '_'))
                .next()
                .unwrap_or_default();
            // `order`/`group` expect `by`, so `order byname` is still repaired
            OPERAND_WORDS.contains(&previous)
                || (KEYWORDS.contains(&previous) && !matches!(previous, "order" | "group"))
        }
    }
}

/// Stage 5. Also used to tidy up after stages that delete characters.
pub fn normalize_whitespace(text: &str) -> String {
    let commas = COMMA.replace_all(text, ", ");
    collapse_whitespace(&commas)
}

/// Stage 6.
pub fn space_operators(text: &str) -> String {
    let spaced = OPERATOR.replace_all(text, " $1 ");
    collapse_whitespace(&spaced)
}

/// Stage 7: `week 4` is labelled as plain `4` in the reference data.
pub fn strip_week_prefix(text: &str) -> String {
    WEEK.replace_all(text, "$1").into_owned()
}

/// Stage 8.
pub fn strip_quotes(text: &str) -> String {
    let unquoted = QUOTE.replace_all(text, "");
    normalize_whitespace(&unquoted)
}

/// Stage 9.
pub fn unify_dashes(text: &str) -> String {
    DASH.replace_all(text, "-").into_owned()
}

/// Stage 10.
///
/// A removed symbol can leave a gap next to a hyphen or an operator, so the
/// stage 3 and stage 6 spacing rules run again on the result.
pub fn remove_symbols(text: &str) -> String {
    let without_symbols = SYMBOL.replace_all(text, " ");
    let joined = HYPHEN.replace_all(&without_symbols, "$1");
    let hyphens = TRAILING_HYPHEN.replace_all(&joined, "${1}${2}");
    let periods = TRAILING_PERIOD.replace_all(&hyphens, "$1");
    let spaced = space_operators(&periods);
    normalize_whitespace(&spaced)
}

/// Stage 11: drop `the`, `a` and `an` in front of any word.
///
/// Global: it also fires outside literal values, e.g. on a column literally
/// named `a`.
pub fn strip_articles(text: &str) -> String {
    let stripped = ARTICLE.replace_all(text, "");
    normalize_whitespace(&stripped)
}

/// Stage 12.
pub fn remove_domain_prefix(text: &str) -> String {
    let mut current = text.to_string();
    while current.contains(DOMAIN_PREFIX) {
        current = current.replace(DOMAIN_PREFIX, "");
    }
    current
}

/// Stage 13.
pub fn tighten_parentheses(text: &str) -> String {
    let opened = OPEN_PAREN.replace_all(text, "(");
    CLOSE_PAREN.replace_all(&opened, ")").into_owned()
}

/// Stage 15.
pub fn unify_quote_style(text: &str) -> String {
    text.replace('\'', "\"")
}
