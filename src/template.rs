use std::{fmt::Display, str::FromStr};

use crate::{
    error::MatchError,
    matcher::{MatchMode, Params, Pattern},
    parser::parse,
    token::Token,
};

/// A parsed template with both of its patterns compiled up front.
///
/// Meant to be built once per registered route and shared between requests.
#[derive(Clone, Debug)]
pub struct Template {
    source: String,
    tokens: Vec<Token>,
    whole: Pattern,
    prefix: Pattern,
}

impl Template {
    pub fn new(template: impl Into<String>) -> Result<Self, MatchError> {
        let source = template.into();
        let tokens = parse(&source);
        let whole = Pattern::compile(&tokens, MatchMode::Whole)?;
        let prefix = Pattern::compile(&tokens, MatchMode::Prefix)?;
        Ok(Self {
            source,
            tokens,
            whole,
            prefix,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens
            .iter()
            .filter(|token| token.is_param())
            .map(|token| token.text())
    }

    pub fn pattern(&self, mode: MatchMode) -> &Pattern {
        match mode {
            MatchMode::Whole => &self.whole,
            MatchMode::Prefix => &self.prefix,
        }
    }

    pub fn matches(
        &self,
        path: &str,
        mode: impl Into<MatchMode>,
    ) -> Result<Option<Params>, MatchError> {
        self.pattern(mode.into()).captures(path)
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Template {
    type Err = MatchError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::new(s)
    }
}
