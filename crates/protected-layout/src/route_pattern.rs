use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Errors raised while compiling a [`RoutePattern`].
#[derive(Debug, thiserror::Error)]
pub enum RoutePatternError {
    /// The pattern was an empty string.
    #[error("route pattern is empty")]
    Empty,
    /// Router-style patterns are absolute and must start with `/`.
    #[error("route pattern must start with '/': {0}")]
    MissingLeadingSlash(String),
    /// The pattern contains `//`.
    #[error("route pattern has an empty segment: {0}")]
    EmptySegment(String),
    /// A `:` segment without a parameter name.
    #[error("route pattern has an unnamed parameter: {0}")]
    UnnamedParam(String),
    /// A raw expression handed to [`RoutePattern::from_regex`] did not compile.
    #[error("invalid route regex: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// An anchored path pattern, matched against the whole pathname.
///
/// Built either from router syntax (`/pos/:id`) or from a raw regular
/// expression. A `:param` segment matches exactly one non-empty segment, so
/// `/pos/:id` accepts `/pos/123` but neither `/pos` nor `/pos/123/receipt`.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    source: String,
    regex: Regex,
}

impl RoutePattern {
    /// Compiles a router-style pattern such as `/pos/:id`.
    pub fn parse(pattern: &str) -> Result<Self, RoutePatternError> {
        if pattern.is_empty() {
            return Err(RoutePatternError::Empty);
        }
        if !pattern.starts_with('/') {
            return Err(RoutePatternError::MissingLeadingSlash(pattern.to_string()));
        }

        let trimmed = pattern.strip_suffix('/').unwrap_or(pattern);
        let mut expr = String::from("^");
        if trimmed.is_empty() {
            expr.push('/');
        }
        for segment in trimmed.split('/').skip(1) {
            expr.push('/');
            match segment.strip_prefix(':') {
                _ if segment.is_empty() => {
                    return Err(RoutePatternError::EmptySegment(pattern.to_string()));
                }
                Some("") => return Err(RoutePatternError::UnnamedParam(pattern.to_string())),
                Some(_) => expr.push_str("[^/]+"),
                None => expr.push_str(&regex::escape(segment)),
            }
        }
        expr.push('$');

        Ok(Self {
            source: pattern.to_string(),
            regex: Regex::new(&expr)?,
        })
    }

    /// Compiles a raw regular expression. The expression is grouped and
    /// anchored at both ends, so every alternative must match the whole path.
    pub fn from_regex(expr: &str) -> Result<Self, RoutePatternError> {
        // Reject `a)|(b` style input that only balances once wrapped.
        Regex::new(expr)?;
        Ok(Self {
            source: expr.to_string(),
            regex: Regex::new(&format!("^(?:{expr})$"))?,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// The pattern as it was written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The anchored expression actually used for matching.
    pub fn as_regex(&self) -> &str {
        self.regex.as_str()
    }
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_regex() == other.as_regex()
    }
}

impl Eq for RoutePattern {}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for RoutePattern {
    type Err = RoutePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
