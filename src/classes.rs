//! Class-name processing
//!
//! Normalizes the `class` / `className` options of a node into a single
//! space-joined string and applies the library prefix (`mtrl-` by default).
//!
//! Policy: `class` tokens come first, then `className` tokens, in the order
//! written. Duplicates are kept; the element factory's class list ignores
//! repeated tokens when it applies them.

use serde_json::Value;

use crate::options::Options;

/// Prefix used when no explicit prefix is configured
pub const DEFAULT_PREFIX: &str = "mtrl";

const BEM_SEPARATORS: [&str; 2] = ["__", "--"];

/// Class-name processor bound to a prefix
#[derive(Debug, Clone, PartialEq)]
pub struct ClassNames {
    prefix: String,
    bem: bool,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl ClassNames {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            bem: false,
        }
    }

    /// Enable BEM-aware prefixing
    pub fn bem(mut self, bem: bool) -> Self {
        self.bem = bem;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Class tokens from `class` then `className`
    pub fn normalize(&self, options: &Options) -> Vec<String> {
        let mut tokens = Vec::new();
        for key in ["class", "className"] {
            match options.get(key) {
                Some(Value::String(s)) => push_tokens(&mut tokens, s),
                Some(Value::Array(items)) => {
                    for item in items.iter().filter_map(Value::as_str) {
                        push_tokens(&mut tokens, item);
                    }
                }
                _ => {}
            }
        }
        tokens
    }

    /// Apply the prefix to a single token
    ///
    /// Plain mode prefixes the whole token unless it already starts with the
    /// prefix. BEM mode prefixes only the block (the part before the first
    /// `__` or `--`) and drops a prefix repeated after a separator, so
    /// `button__mtrl-icon` becomes `mtrl-button__icon`. Modifier- or
    /// element-only tokens such as `--active` have no block and stay as
    /// written in BEM mode.
    pub fn prefix_token(&self, token: &str) -> String {
        if self.prefix.is_empty() {
            return token.to_string();
        }
        let lead = format!("{}-", self.prefix);

        if !self.bem {
            return prefixed(token, &lead);
        }

        let split = BEM_SEPARATORS
            .iter()
            .filter_map(|sep| token.find(sep))
            .min();

        match split {
            None => prefixed(token, &lead),
            Some(0) => token.to_string(),
            Some(at) => {
                let (block, rest) = token.split_at(at);
                let mut rest = rest.to_string();
                for sep in BEM_SEPARATORS {
                    rest = rest.replace(&format!("{}{}", sep, lead), sep);
                }
                format!("{}{}", prefixed(block, &lead), rest)
            }
        }
    }

    /// Return a copy of `options` with `class` processed and `className` removed.
    /// `skipPrefix: true` in the options joins tokens without prefixing.
    pub fn process(&self, options: &Options) -> Options {
        let apply_prefix = !options.get_bool("skipPrefix");
        self.process_with(options, apply_prefix)
    }

    /// Like [`process`](Self::process) with the prefix decision made by the caller
    pub fn process_with(&self, options: &Options, apply_prefix: bool) -> Options {
        let tokens = self.normalize(options);
        let mut out = options.clone();
        out.remove("className");
        out.remove("class");

        if tokens.is_empty() {
            return out;
        }

        let joined = if apply_prefix {
            tokens
                .iter()
                .map(|t| self.prefix_token(t))
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            tokens.join(" ")
        };
        out.set("class", joined);
        out
    }
}

fn push_tokens(tokens: &mut Vec<String>, value: &str) {
    tokens.extend(value.split_whitespace().map(str::to_string));
}

fn prefixed(token: &str, lead: &str) -> String {
    if token.starts_with(lead) {
        token.to_string()
    } else {
        format!("{}{}", lead, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_class_and_classname_are_merged_in_order() {
        let opts = Options::new()
            .with("class", "card elevated")
            .with("className", json!(["outlined", "card"]));

        let tokens = ClassNames::default().normalize(&opts);
        assert_eq!(tokens, vec!["card", "elevated", "outlined", "card"]);
    }

    #[test]
    fn test_prefix_is_not_applied_twice() {
        let classes = ClassNames::default();
        assert_eq!(classes.prefix_token("box"), "mtrl-box");
        assert_eq!(classes.prefix_token("mtrl-box"), "mtrl-box");
    }

    #[test]
    fn test_bem_prefixes_block_only() {
        let plain = ClassNames::default();
        let bem = ClassNames::default().bem(true);

        assert_eq!(bem.prefix_token("button__icon"), "mtrl-button__icon");
        assert_eq!(bem.prefix_token("button__mtrl-icon"), "mtrl-button__icon");
        assert_eq!(bem.prefix_token("button--mtrl-primary"), "mtrl-button--primary");
        assert_eq!(bem.prefix_token("--active"), "--active");
        assert_eq!(plain.prefix_token("button__mtrl-icon"), "mtrl-button__mtrl-icon");
        assert_eq!(plain.prefix_token("--active"), "mtrl---active");
    }

    #[test]
    fn test_process_does_not_mutate_input() {
        let opts = Options::new()
            .with("class", "box")
            .with("className", "wide")
            .with("text", "Hi");

        let processed = ClassNames::default().process(&opts);

        assert_eq!(processed.get_str("class"), Some("mtrl-box mtrl-wide"));
        assert!(!processed.contains_key("className"));
        assert_eq!(processed.text(), Some("Hi"));
        assert_eq!(opts.get_str("class"), Some("box"), "input keeps its class");
        assert_eq!(opts.get_str("className"), Some("wide"));
    }

    #[test]
    fn test_skip_prefix_joins_raw_tokens() {
        let opts = Options::new()
            .with("class", "raw")
            .with("className", "tokens")
            .with("skipPrefix", true);

        let processed = ClassNames::default().process(&opts);
        assert_eq!(processed.get_str("class"), Some("raw tokens"));
    }

    #[test]
    fn test_custom_and_empty_prefix() {
        assert_eq!(ClassNames::new("app").prefix_token("nav"), "app-nav");
        assert_eq!(ClassNames::new("").prefix_token("nav"), "nav");
    }

    #[test]
    fn test_no_class_options_leave_no_class_key() {
        let processed = ClassNames::default().process(&Options::new().with("text", "x"));
        assert!(!processed.contains_key("class"));
    }
}
