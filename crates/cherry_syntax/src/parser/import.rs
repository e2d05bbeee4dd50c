/// Parses `using simple.path;`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportParser;

impl<'src> SyntaxRule<'src> for ImportParser {
    type Output = Import<'src>;

    fn litmus(&self, leaf: Leaf) -> bool {
        leaf == Leaf::KwUsing
    }

    fn parse<L: Lexer<'src>>(&self, state: &mut ParserState<'src, L>) -> ParseResult<Import<'src>> {
        if !self.litmus(state.current().kind) {
            return Err(ParseError::NotMySyntax);
        }
        state.next_token()?;

        let path = require(SimplePathParser.parse(state), ParseError::ExpectedIdentifier)?;
        if !state.current().is(Leaf::DcTerminator) {
            return Err(ParseError::ExpectedTerminator);
        }
        state.next_token()?;
        Ok(Import { path })
    }
}

/// Parses a whole compilation unit: top-level statements until end of source.
///
/// ## Notes
/// - Only imports are recognised at the top level. A token that no top-level rule claims fails with
///   [`ParseError::Failure`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentParser;

impl<'src> SyntaxRule<'src> for DocumentParser {
    type Output = Document<'src>;

    fn litmus(&self, leaf: Leaf) -> bool {
        leaf == Leaf::Eos || ImportParser.litmus(leaf)
    }

    fn parse<L: Lexer<'src>>(&self, state: &mut ParserState<'src, L>) -> ParseResult<Document<'src>> {
        let mut imports = Vec::new();
        while !state.current().is_eos() {
            match ImportParser.parse(state) {
                Ok(import) => imports.push(import),
                Err(ParseError::NotMySyntax) => return Err(ParseError::Failure),
                Err(error) => return Err(error),
            }
        }
        Ok(Document { imports })
    }
}
