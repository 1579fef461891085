//! Prefix-based argument tokenizer.
//!
//! Command arguments are flat text with `x/`-style prefix markers, e.g.
//! `1 n/Jacob NG d/2022-10-13 t/CS1231S t/URGENT`. The tokenizer splits the
//! text at every recognized prefix, keeping repeated-prefix values as an
//! ordered sequence and the unprefixed leading text as the preamble.
//!
//! A prefix only delimits when it starts a whitespace-separated token, so a
//! value like `l/COM1 B1/B2` keeps its embedded slash intact.

/// A recognized argument prefix, e.g. `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix(pub &'static str);

/// Name prefix: `n/NAME`.
pub const PREFIX_NAME: Prefix = Prefix("n/");
/// Date prefix: `d/YYYY-MM-DD`.
pub const PREFIX_DATE: Prefix = Prefix("d/");
/// Time-slot prefix: `ts/HHMM-HHMM`.
pub const PREFIX_TIME_SLOT: Prefix = Prefix("ts/");
/// Location prefix: `l/LOCATION`.
pub const PREFIX_LOCATION: Prefix = Prefix("l/");
/// Tag prefix, repeatable: `t/TAG`.
pub const PREFIX_TAG: Prefix = Prefix("t/");
/// Remark prefix: `r/REMARK`.
pub const PREFIX_REMARK: Prefix = Prefix("r/");

/// Tokenized arguments: the preamble plus values grouped by prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentTokens {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

impl ArgumentTokens {
    /// Split `args` at every occurrence of a recognized prefix.
    pub fn tokenize(args: &str, prefixes: &[Prefix]) -> Self {
        // Byte offsets of every prefixed token start, in input order.
        let mut marks: Vec<(usize, Prefix)> = Vec::new();
        let mut token_start = true;
        for (i, ch) in args.char_indices() {
            if token_start {
                if let Some(&prefix) = prefixes.iter().find(|p| args[i..].starts_with(p.0)) {
                    marks.push((i, prefix));
                }
            }
            token_start = ch.is_whitespace();
        }

        let preamble_end = marks.first().map_or(args.len(), |&(i, _)| i);
        let preamble = args[..preamble_end].trim().to_string();

        let mut values = Vec::with_capacity(marks.len());
        for (n, &(start, prefix)) in marks.iter().enumerate() {
            let end = marks.get(n + 1).map_or(args.len(), |&(i, _)| i);
            let value = args[start + prefix.0.len()..end].trim().to_string();
            values.push((prefix, value));
        }

        Self { preamble, values }
    }

    /// The unprefixed leading text (an index, keyword list, or empty).
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`, if any. For single-valued fields
    /// a repeated prefix means the user changed their mind; the final
    /// occurrence wins.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether `prefix` appeared at all.
    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.iter().any(|(p, _)| *p == prefix)
    }
}
