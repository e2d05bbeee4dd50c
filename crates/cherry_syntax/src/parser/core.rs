/// Reasons a syntax rule can fail.
///
/// ## Notes
/// - [`ParseError::NotMySyntax`] is the only recoverable code: the rule's litmus rejected the current token and
///   nothing was consumed.
/// - A child rule's `NotMySyntax` in a position where that child is mandatory is reported as the specific
///   expectation for the position (for example [`ParseError::ExpectedType`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    #[error("unexpected syntax")]
    NotMySyntax,
    #[error("expected an identifier")]
    ExpectedIdentifier,
    #[error("expected ';'")]
    ExpectedTerminator,
    #[error("expected a type")]
    ExpectedType,
    #[error("expected '{}'", delimiter_spelling(.0))]
    ExpectedDelimiter(Leaf),
    /// No syntax rule claims the current token.
    #[error("unexpected input")]
    Failure,
    /// Types nest deeper than [`SyntaxConfig::max_depth`].
    #[error("types nest too deeply")]
    Unrecoverable,
    /// The lexer failed while the parser was pulling the next token.
    #[error("{0}")]
    Lexical(LexError),
}

impl ParseError {
    /// Stable machine-readable name of this error.
    pub fn code(self) -> &'static str {
        match self {
            ParseError::NotMySyntax => "not_my_syntax",
            ParseError::ExpectedIdentifier => "expected_identifier",
            ParseError::ExpectedTerminator => "expected_terminator",
            ParseError::ExpectedType => "expected_type",
            ParseError::ExpectedDelimiter(_) => "expected_delimiter",
            ParseError::Failure => "failure",
            ParseError::Unrecoverable => "unrecoverable",
            ParseError::Lexical(error) => error.code(),
        }
    }
}

fn delimiter_spelling(leaf: &Leaf) -> &'static str {
    leaves::info(*leaf).spelling.unwrap_or_else(|| leaf.name())
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Treat a child rule's `NotMySyntax` as the `expected` error for a mandatory position.
fn require<T>(result: ParseResult<T>, expected: ParseError) -> ParseResult<T> {
    match result {
        Err(ParseError::NotMySyntax) => Err(expected),
        other => other,
    }
}

/// One syntactic construct.
///
/// ## Notes
/// - `litmus` only looks at the current token's kind; it never consumes input.
/// - `parse` returns [`ParseError::NotMySyntax`] without consuming anything when `litmus` rejects the current token,
///   and otherwise leaves the parser on the first token after the construct.
pub trait SyntaxRule<'src> {
    type Output;

    fn litmus(&self, leaf: Leaf) -> bool;

    fn parse<L: Lexer<'src>>(&self, state: &mut ParserState<'src, L>) -> ParseResult<Self::Output>;
}

/// Parser state: a lexer, its cursor, and the current token.
///
/// Syntax rules only ever read [`ParserState::current`] and advance with [`ParserState::next_token`]; they never
/// look at the raw source.
pub struct ParserState<'src, L> {
    lex_state: LexState<'src>,
    lexer: L,
    path: Option<PathBuf>,
    current: Token<'src>,
    config: SyntaxConfig,
    depth: usize,
}

impl<'src, L: Lexer<'src>> ParserState<'src, L> {
    /// Create a parser state over `source`.
    ///
    /// ## Notes
    /// - No token is pulled yet; callers advance once with [`ParserState::next_token`] before invoking a rule.
    pub fn new(source: &'src str, lexer: L) -> Self {
        Self {
            lex_state: LexState::new(source),
            lexer,
            path: None,
            current: Token::new("", Leaf::Unknown, 0, 0),
            config: SyntaxConfig::default(),
            depth: 0,
        }
    }

    /// Attach the path the source was loaded from (used only in diagnostics).
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_config(mut self, config: SyntaxConfig) -> Self {
        self.config = config;
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn source(&self) -> &'src str {
        self.lex_state.source()
    }

    pub fn config(&self) -> &SyntaxConfig {
        &self.config
    }

    /// The token every rule inspects.
    pub fn current(&self) -> Token<'src> {
        self.current
    }

    /// Pull the next token from the lexer and make it current.
    ///
    /// ## Errors
    /// Lexer failures surface verbatim as [`ParseError::Lexical`].
    pub fn next_token(&mut self) -> ParseResult<Token<'src>> {
        loop {
            let token = self
                .lexer
                .tokenize(&mut self.lex_state)
                .map_err(ParseError::Lexical)?;
            if self.config.skip_comments && token.is_trivia() {
                continue;
            }
            self.current = token;
            return Ok(token);
        }
    }

    /// Turn `error` into a diagnostic positioned at the current token (or at the failed lexeme).
    pub fn diagnostic(&self, error: ParseError) -> CompileError {
        let diagnostic = match error {
            ParseError::Lexical(inner) => CompileError::lexical(inner, &self.lex_state.token_start()),
            _ => CompileError::syntax(error, &self.current, self.source()),
        };
        match &self.path {
            Some(path) => diagnostic.with_note(format!("in {}", path.display())),
            None => diagnostic,
        }
    }

    /// Consume one `>` closing a generic argument list.
    ///
    /// A `>>` token closes two nested lists: the first half is consumed here and the current token becomes the
    /// remaining `>`.
    fn eat_closing_angle(&mut self) -> ParseResult<bool> {
        match self.current.kind {
            Leaf::OpLogmore => {
                self.next_token()?;
                Ok(true)
            }
            Leaf::OpBitrsh => {
                let rest = self.current.lexeme.get(1..).unwrap_or_default();
                self.current = Token::new(rest, Leaf::OpLogmore, self.current.line, self.current.column + 1);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Run `f` one nesting level deeper.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::Unrecoverable);
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}
