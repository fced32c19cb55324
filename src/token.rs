/// A parsed unit of a route template.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Token {
    /// Text matched exactly.
    Literal(String),
    /// A captured value. `greedy` parameters may span `/`.
    Param { name: String, greedy: bool },
}

impl Token {
    pub fn literal(text: impl Into<String>) -> Self {
        Token::Literal(text.into())
    }

    pub fn param(name: impl Into<String>, greedy: bool) -> Self {
        Token::Param {
            name: name.into(),
            greedy,
        }
    }

    /// Literal text, or the parameter name.
    pub fn text(&self) -> &str {
        match self {
            Token::Literal(text) => text,
            Token::Param { name, .. } => name,
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Token::Param { .. })
    }

    /// Always false for literals.
    pub fn is_greedy(&self) -> bool {
        matches!(self, Token::Param { greedy: true, .. })
    }
}
