use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Match, Regex};

static DIM_SIZE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"dimension ([0-9]+) does not have size [0-9]+").unwrap());

static DIM_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"Dimension out of range \(expected to be in range of \[-[0-9]+, ([0-9]+)\], but got (-?[0-9]+)\)",
    )
    .unwrap()
});

static MAX_INDEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Found an invalid max index: ([0-9]+)").unwrap());

/// One of the rewrite rules applied by [`translate`].
///
/// Each rule recognizes a single message shape produced by Lantern and shifts the
/// zero-based numbers in it by one. A message that does not contain the shape is
/// returned unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `dimension <D> does not have size <S>`: `<D>` is shifted, `<S>` is a size and kept.
    DimensionSize,
    /// `Dimension out of range (expected to be in range of [-<U>, <L>], but got <G>)`.
    DimensionRange,
    /// `Found an invalid max index: <I>`.
    MaxIndex,
}

impl Rule {
    /// All rules, in the order [`translate`] applies them.
    pub const ALL: [Rule; 3] = [Rule::DimensionSize, Rule::DimensionRange, Rule::MaxIndex];

    pub fn apply(self, msg: &str) -> String {
        match self {
            Rule::DimensionSize => translate_dim_size(msg),
            Rule::DimensionRange => translate_dim_range(msg),
            Rule::MaxIndex => translate_max_index(msg),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::DimensionSize => "dim_size",
            Rule::DimensionRange => "dim_range",
            Rule::MaxIndex => "max_index",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = String;

    /// Accepts the rule name with either `_` or `-` as separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "dim_size" => Ok(Rule::DimensionSize),
            "dim_range" => Ok(Rule::DimensionRange),
            "max_index" => Ok(Rule::MaxIndex),
            _ => Err(format!(
                "unknown rule {s:?} (expected dim_size, dim_range or max_index)"
            )),
        }
    }
}

/// Rewrite a Lantern error message for a one-based host.
///
/// Applies the dimension-size, dimension-range and max-index rules in that order.
/// Never fails: text that matches none of them comes back as-is.
pub fn translate(msg: &str) -> String {
    Rule::ALL
        .iter()
        .fold(msg.to_string(), |out, rule| rule.apply(&out))
}

/// Shift the dimension in `dimension <D> does not have size <S>`.
pub fn translate_dim_size(msg: &str) -> String {
    shift_first_capture(&DIM_SIZE, Rule::DimensionSize, msg)
}

/// Shift the upper bound and, when positive, the offending index of a
/// `Dimension out of range` message.
///
/// Non-positive indices count from the end and read the same in both conventions,
/// so they keep their value.
pub fn translate_dim_range(msg: &str) -> String {
    let Some(caps) = DIM_RANGE.captures(msg) else {
        return msg.to_string();
    };
    let (Some(upper), Some(got)) = (caps.get(1), caps.get(2)) else {
        return msg.to_string();
    };

    let Some(new_upper) = increment(upper.as_str(), Rule::DimensionRange) else {
        return msg.to_string();
    };
    let Ok(value) = got.as_str().parse::<i64>() else {
        log::warn!(
            "{}: index {:?} out of range, left as-is",
            Rule::DimensionRange,
            got.as_str()
        );
        return msg.to_string();
    };
    let new_got = if value > 0 {
        match increment(got.as_str(), Rule::DimensionRange) {
            Some(v) => v,
            None => return msg.to_string(),
        }
    } else {
        value.to_string()
    };

    log::trace!(
        "{} matched: upper {} -> {new_upper}, got {} -> {new_got}",
        Rule::DimensionRange,
        upper.as_str(),
        got.as_str()
    );
    splice(msg, vec![(upper, new_upper), (got, new_got)])
}

/// Shift the index in `Found an invalid max index: <I>`.
pub fn translate_max_index(msg: &str) -> String {
    shift_first_capture(&MAX_INDEX, Rule::MaxIndex, msg)
}

fn shift_first_capture(re: &Regex, rule: Rule, msg: &str) -> String {
    let Some(m) = re.captures(msg).and_then(|c| c.get(1)) else {
        return msg.to_string();
    };
    match increment(m.as_str(), rule) {
        Some(v) => {
            log::trace!("{rule} matched: {} -> {v}", m.as_str());
            splice(msg, vec![(m, v)])
        }
        None => msg.to_string(),
    }
}

/// Parse a decimal capture and add one. `None` when the value does not fit an `i64`.
fn increment(digits: &str, rule: Rule) -> Option<String> {
    let bumped = digits.parse::<i64>().ok().and_then(|n| n.checked_add(1));
    if bumped.is_none() {
        log::warn!("{rule}: number {digits:?} out of range, left as-is");
    }
    bumped.map(|n| n.to_string())
}

/// Replace each matched span with its new text, right-most span first so earlier
/// offsets stay valid whatever the replacement lengths are.
fn splice(msg: &str, mut edits: Vec<(Match<'_>, String)>) -> String {
    edits.sort_by_key(|(m, _)| std::cmp::Reverse(m.start()));
    let mut out = msg.to_string();
    for (m, text) in &edits {
        out.replace_range(m.range(), text);
    }
    out
}
