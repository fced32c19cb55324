use std::collections::HashMap;

use regex::Regex;
use strum_macros::{Display, EnumIter};
use tracing::{debug, span, trace, Level, Span};

use crate::{
    error::MatchError,
    escape::{decode_value, escape_literal, trim_trailing_slashes},
    parser::parse,
    token::Token,
};

/// Decoded parameter values keyed by parameter name.
pub type Params = HashMap<String, String>;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum MatchMode {
    /// The template must consume the entire path.
    #[default]
    Whole,
    /// The template must match a leading part of the path ending on a `/`
    /// boundary or at the end of the path.
    Prefix,
}

impl From<bool> for MatchMode {
    fn from(prefix: bool) -> Self {
        if prefix {
            MatchMode::Prefix
        } else {
            MatchMode::Whole
        }
    }
}

const SEGMENT_GROUP: &str = "([^/]+)";
const GREEDY_GROUP: &str = "((?s:.+))";

/// A token sequence compiled into an anchored regex for one [`MatchMode`].
///
/// Compiling is the expensive half of a match; keep a `Pattern` around to
/// match many paths against the same tokens.
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
    names: Vec<String>,
    mode: MatchMode,
}

impl Pattern {
    pub fn compile(tokens: &[Token], mode: MatchMode) -> Result<Self, MatchError> {
        let mut source = String::from("^");
        let mut names = vec![];

        for token in tokens {
            match token {
                Token::Literal(text) => source.push_str(&escape_literal(text)),
                Token::Param { name, greedy } => {
                    source.push_str(if *greedy { GREEDY_GROUP } else { SEGMENT_GROUP });
                    names.push(name.clone());
                }
            }
        }

        source.push_str(match mode {
            MatchMode::Whole => "$",
            MatchMode::Prefix => "(?:/|$)",
        });

        let regex = Regex::new(&source)?;
        trace!(pattern = regex.as_str(), %mode, "compiled pattern");

        Ok(Self { regex, names, mode })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Parameter names in capture order. Duplicates are kept.
    pub fn param_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|name| name.as_str())
    }

    /// Matches `path`, ignoring its trailing slashes.
    ///
    /// Returns `Ok(None)` when the path does not have the template's shape.
    /// If a template reuses a name, which value wins is unspecified.
    pub fn captures(&self, path: &str) -> Result<Option<Params>, MatchError> {
        let span = create_match_span(path, self.mode);
        let _guard = span.enter();

        let path = trim_trailing_slashes(path);
        let Some(caps) = self.regex.captures(path) else {
            trace!("no match");
            return Ok(None);
        };

        let mut params = Params::with_capacity(self.names.len());
        // Group i + 1 belongs to the i-th parameter token.
        for (name, group) in self.names.iter().zip(caps.iter().skip(1)) {
            let raw = group.map_or("", |m| m.as_str());
            let value = match decode_value(name, raw) {
                Ok(value) => value,
                Err(err) => {
                    debug!(%err);
                    return Err(err);
                }
            };
            params.insert(name.clone(), value);
        }

        trace!(?params, "matched");
        Ok(Some(params))
    }
}

/// Matches `path` against a token sequence from [`parse`].
///
/// `mode` accepts a [`MatchMode`] or a `bool` prefix flag.
pub fn match_tokens(
    tokens: &[Token],
    path: &str,
    mode: impl Into<MatchMode>,
) -> Result<Option<Params>, MatchError> {
    Pattern::compile(tokens, mode.into())?.captures(path)
}

/// Parses `template` and matches `path` against it.
pub fn match_path(
    template: &str,
    path: &str,
    mode: impl Into<MatchMode>,
) -> Result<Option<Params>, MatchError> {
    match_tokens(&parse(template), path, mode)
}

fn create_match_span(path: &str, mode: MatchMode) -> Span {
    span!(Level::TRACE, "match", path, mode = %mode)
}
