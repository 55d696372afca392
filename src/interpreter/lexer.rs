use logos::Logos;

use crate::{ast::LiteralValue, error::ParseError};

/// The kind of a lexical token.
///
/// Each variant is one recognised unit of source text. Keywords take priority
/// over identifiers, and longer operators (`==`, `<=`) over their one-character
/// prefixes.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `|`
    #[token("|")]
    Pipe,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `subseteq`
    #[token("subseteq")]
    Subseteq,
    /// `in`
    #[token("in")]
    In,
    /// `union`
    #[token("union")]
    Union,
    /// `intersect`
    #[token("intersect")]
    Intersect,
    /// `let`
    #[token("let")]
    Let,
    /// `def`
    #[token("def")]
    Def,
    /// `print`
    #[token("print")]
    Print,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// Numeric literals such as `42` or `2.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// String literals such as `"abc"`. No escape sequences.
    #[regex(r#""[^"]*""#, allow_greedy = true)]
    String,
    /// A string literal missing its closing quote. Reported by [`scan`] and
    /// never part of a token stream.
    #[regex(r#""[^"]*"#, allow_greedy = true)]
    UnterminatedString,
    /// Variable and function names such as `A` or `evens`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks; skipped, but counted for line numbers.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// End of input. Appended by [`scan`], never matched.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A single token of the stream consumed by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The source text of the token.
    pub lexeme:  String,
    /// The decoded value for number, string and boolean tokens.
    pub literal: Option<LiteralValue>,
    /// The line the token starts on, starting at 1.
    pub line:    usize,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind,
               lexeme: impl Into<String>,
               literal: Option<LiteralValue>,
               line: usize)
               -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal,
               line }
    }
}

/// The output of [`scan`]: the token stream plus any lexical errors.
#[derive(Debug, Default)]
pub struct Scanned {
    /// Tokens in source order, always terminated by [`TokenKind::Eof`].
    pub tokens: Vec<Token>,
    /// Lexical errors, in source order.
    pub errors: Vec<ParseError>,
}

/// Splits source text into tokens.
///
/// Unrecognised characters, unterminated strings and number literals too large
/// for an `f64` are recorded as errors and skipped, so one pass surfaces every
/// lexical problem. The returned stream always ends with an `Eof` token on the
/// last line.
///
/// # Example
/// ```
/// use setta::interpreter::lexer::{TokenKind, scan};
///
/// let scanned = scan("print 1 in {1};");
/// let kinds: Vec<_> = scanned.tokens.iter().map(|t| t.kind).collect();
///
/// assert!(scanned.errors.is_empty());
/// assert_eq!(kinds,
///            [TokenKind::Print,
///             TokenKind::Number,
///             TokenKind::In,
///             TokenKind::LeftBrace,
///             TokenKind::Number,
///             TokenKind::RightBrace,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// ```
#[must_use]
pub fn scan(source: &str) -> Scanned {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut scanned = Scanned::default();

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        let lexeme = lexer.slice();

        match result {
            Ok(TokenKind::Number) => match lexeme.parse::<f64>() {
                Ok(n) if n.is_finite() => {
                    scanned.tokens.push(Token::new(TokenKind::Number,
                                                   lexeme,
                                                   Some(LiteralValue::Number(n)),
                                                   line));
                },
                _ => scanned.errors
                            .push(ParseError::NumberOutOfRange { lexeme: lexeme.to_owned(),
                                                                 line }),
            },
            Ok(TokenKind::String) => {
                let text = &lexeme[1..lexeme.len() - 1];
                scanned.tokens.push(Token::new(TokenKind::String,
                                               lexeme,
                                               Some(LiteralValue::Str(text.to_owned())),
                                               line));
                lexer.extras.line += count_newlines(lexeme);
            },
            Ok(TokenKind::UnterminatedString) => {
                scanned.errors.push(ParseError::UnterminatedString { line });
                lexer.extras.line += count_newlines(lexeme);
            },
            Ok(kind @ (TokenKind::True | TokenKind::False)) => {
                let value = LiteralValue::Bool(kind == TokenKind::True);
                scanned.tokens.push(Token::new(kind, lexeme, Some(value), line));
            },
            Ok(kind) => scanned.tokens.push(Token::new(kind, lexeme, None, line)),
            Err(()) => {
                scanned.errors
                       .push(ParseError::UnexpectedCharacter { lexeme: lexeme.to_owned(),
                                                               line });
            },
        }
    }

    scanned.tokens
           .push(Token::new(TokenKind::Eof, "", None, lexer.extras.line));
    scanned
}

fn count_newlines(text: &str) -> usize {
    text.chars().filter(|&c| c == '\n').count()
}
