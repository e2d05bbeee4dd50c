/// Parse a source buffer into a [`Document`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `source`: Source text; the returned AST borrows from it.
///
/// ## Errors
/// Returns the first lexical or syntax error as a [`CompileError`].
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<Document<'_>, CompileError> {
    parse_with(source, SyntaxConfig::default())
}

/// Like [`parse`], with an explicit [`SyntaxConfig`].
pub fn parse_with(source: &str, config: SyntaxConfig) -> Result<Document<'_>, CompileError> {
    let mut state = ParserState::new(source, LexicalAnalyzer::new()).with_config(config);
    run(&mut state, &DocumentParser)
}

/// Parse a source buffer holding exactly one type expression.
///
/// ## Errors
/// Returns a [`CompileError`] if the source is not a type, or if tokens remain after the type.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_type(source: &str) -> Result<Type<'_>, CompileError> {
    let mut state = ParserState::new(source, LexicalAnalyzer::new());
    let ty = run(&mut state, &TypeParser)?;
    if !state.current().is_eos() {
        return Err(state.diagnostic(ParseError::Failure));
    }
    Ok(ty)
}

/// Prime `state` with its first token and run `rule` from there.
///
/// ## Notes
/// - A rule whose litmus rejects the very first token is reported as [`ParseError::Failure`].
pub fn run<'src, L, R>(state: &mut ParserState<'src, L>, rule: &R) -> Result<R::Output, CompileError>
where
    L: Lexer<'src>,
    R: SyntaxRule<'src>,
{
    let result = state.next_token().and_then(|_| rule.parse(state));
    tracing::debug!(ok = result.is_ok(), "syntax rule finished");
    result.map_err(|error| match error {
        ParseError::NotMySyntax => state.diagnostic(ParseError::Failure),
        other => state.diagnostic(other),
    })
}
