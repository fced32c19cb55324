//! Route templates such as `/foo/{fooId}/files/{*path}`: parsing into tokens
//! and matching request paths to extract decoded parameter values.

pub use error::MatchError;
pub use matcher::{match_path, match_tokens, MatchMode, Params, Pattern};
pub use parser::parse;
pub use template::Template;
pub use token::Token;

mod error;
mod escape;
mod matcher;
mod parser;
mod template;
mod token;

#[cfg(test)]
mod test_utils;
