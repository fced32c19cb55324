use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{escape::trim_trailing_slashes, token::Token};

lazy_static! {
    // `{name}` up to the first closing brace, or a bare `*`.
    static ref PARAM_FORM: Regex = Regex::new(r"\{(.*?)\}|\*").unwrap();
}

/// Splits a template like `/foo/{fooId}/bar/{*rest}` into tokens.
///
/// Trailing slashes are discarded, so `/foo/` and `/foo` parse identically.
/// A braced name starting with `*` is greedy; a bare `*` is a greedy
/// parameter named `*`. Names are not validated.
pub fn parse(template: &str) -> Vec<Token> {
    let template = trim_trailing_slashes(template);
    let mut tokens = vec![];
    let mut idx = 0;

    for m in PARAM_FORM.find_iter(template) {
        push_literal(&mut tokens, &template[idx..m.start()]);
        idx = m.end();
        tokens.push(param_from_form(m.as_str()));
    }
    push_literal(&mut tokens, &template[idx..]);

    trace!(template, ?tokens, "parsed template");
    tokens
}

fn param_from_form(form: &str) -> Token {
    if form == "*" {
        return Token::param("*", true);
    }

    let name = &form[1..form.len() - 1];
    match name.strip_prefix('*') {
        Some(name) => Token::param(name, true),
        None => Token::param(name, false),
    }
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Token::Literal(last)) = tokens.last_mut() {
        last.push_str(text);
        return;
    }
    tokens.push(Token::literal(text));
}

#[cfg(test)]
mod tests {
    use crate::token::Token;

    use super::{parse, push_literal};

    fn lit(text: &str) -> Token {
        Token::literal(text)
    }

    fn param(name: &str) -> Token {
        Token::param(name, false)
    }

    fn greedy(name: &str) -> Token {
        Token::param(name, true)
    }

    // - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
    // literals
    // - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -

    #[test]
    fn test_parse_empty() {
        for template in ["", "/", "//", "///"] {
            assert_eq!(parse(template), vec![], "template {:?}", template);
        }
    }

    #[test]
    fn test_parse_literal_only() {
        assert_eq!(parse("/hello/world"), vec![lit("/hello/world")]);
        assert_eq!(parse("/hello/world/"), vec![lit("/hello/world")]);
        assert_eq!(parse("/hello/world//"), vec![lit("/hello/world")]);
        assert_eq!(parse("hello"), vec![lit("hello")]);
    }

    #[test]
    fn test_parse_unclosed_brace_is_literal() {
        assert_eq!(parse("/foo/{id"), vec![lit("/foo/{id")]);
        assert_eq!(parse("/foo/}id{"), vec![lit("/foo/}id{")]);
    }

    // - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
    // parameters
    // - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -

    #[test]
    fn test_parse_params() {
        let tests = [
            ("/foo/{fooId}", vec![lit("/foo/"), param("fooId")]),
            ("/foo/{*fooId}", vec![lit("/foo/"), greedy("fooId")]),
            ("/foo/*", vec![lit("/foo/"), greedy("*")]),
            ("/foo/{fooId}/", vec![lit("/foo/"), param("fooId")]),
            (
                "/foo/{fooId}/bar/{barId}",
                vec![lit("/foo/"), param("fooId"), lit("/bar/"), param("barId")],
            ),
            (
                "/foo/{fooId}/bar/{barId}.{ext}",
                vec![
                    lit("/foo/"),
                    param("fooId"),
                    lit("/bar/"),
                    param("barId"),
                    lit("."),
                    param("ext"),
                ],
            ),
            ("/files/*.{ext}", vec![lit("/files/"), greedy("*"), lit("."), param("ext")]),
            ("{a}{b}", vec![param("a"), param("b")]),
            ("/{}", vec![lit("/"), param("")]),
        ];

        for (template, want) in tests {
            assert_eq!(parse(template), want, "template {:?}", template);
        }
    }

    #[test]
    fn test_parse_first_closing_brace_wins() {
        assert_eq!(
            parse("/{a}b}/{c}"),
            vec![lit("/"), param("a"), lit("b}/"), param("c")]
        );
        assert_eq!(parse("/{{a}"), vec![lit("/"), param("{a")]);
    }

    #[test]
    fn test_parse_opaque_names() {
        assert_eq!(parse("/{a.b}"), vec![lit("/"), param("a.b")]);
        assert_eq!(parse("/{(x)+}"), vec![lit("/"), param("(x)+")]);
        assert_eq!(parse("/{**x}"), vec![lit("/"), greedy("*x")]);
        assert_eq!(parse("/{*}"), vec![lit("/"), greedy("")]);
    }

    #[test]
    fn test_parse_no_adjacent_literals() {
        let tests = ["/a/{b}/c/*", "{a}.{b}", "x*y*z", "/{a}{b}/"];
        for template in tests {
            let tokens = parse(template);
            let adjacent = tokens
                .windows(2)
                .any(|w| !w[0].is_param() && !w[1].is_param());
            assert!(!adjacent, "template {:?} gave {:?}", template, tokens);
        }
    }

    #[test]
    fn test_push_literal_merges() {
        let mut tokens = vec![];
        push_literal(&mut tokens, "/a");
        push_literal(&mut tokens, "");
        push_literal(&mut tokens, "/b");
        assert_eq!(tokens, vec![lit("/a/b")]);
    }
}
