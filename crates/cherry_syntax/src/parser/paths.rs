/// Parses a simple path: `ident ('.' ident)*`.
///
/// ## Notes
/// - Only plain identifiers are allowed (`std.io.file`); this is what `using` takes. Paths with primitive or generic
///   segments go through [`PathExprParser`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePathParser;

impl<'src> SyntaxRule<'src> for SimplePathParser {
    type Output = SimplePath<'src>;

    fn litmus(&self, leaf: Leaf) -> bool {
        leaf == Leaf::Identifier
    }

    fn parse<L: Lexer<'src>>(&self, state: &mut ParserState<'src, L>) -> ParseResult<SimplePath<'src>> {
        let first = state.current();
        if !self.litmus(first.kind) {
            return Err(ParseError::NotMySyntax);
        }
        let mut segments = vec![first.lexeme];
        state.next_token()?;

        while state.current().is(Leaf::OpAccess) {
            let token = state.next_token()?;
            if !token.is_identifier() {
                return Err(ParseError::ExpectedIdentifier);
            }
            segments.push(token.lexeme);
            state.next_token()?;
        }
        Ok(SimplePath { segments })
    }
}

/// `primitive | ident ('<' type (',' type)* '>')?`
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentParser;

impl<'src> SyntaxRule<'src> for SegmentParser {
    type Output = Segment<'src>;

    fn litmus(&self, leaf: Leaf) -> bool {
        leaf == Leaf::Identifier || leaf.is_primitive()
    }

    fn parse<L: Lexer<'src>>(&self, state: &mut ParserState<'src, L>) -> ParseResult<Segment<'src>> {
        let token = state.current();
        if let Some(primitive) = primitives::from_leaf(token.kind) {
            state.next_token()?;
            return Ok(Segment::Primitive(primitive));
        }
        if !token.is_identifier() {
            return Err(ParseError::NotMySyntax);
        }
        state.next_token()?;

        let mut inputs = Vec::new();
        if state.current().is(Leaf::OpLogless) {
            loop {
                state.next_token()?;
                inputs.push(require(TypeParser.parse(state), ParseError::ExpectedType)?);
                if !state.current().is(Leaf::DcComma) {
                    break;
                }
            }
            if !state.eat_closing_angle()? {
                return Err(ParseError::ExpectedDelimiter(Leaf::OpLogmore));
            }
        }
        Ok(Segment::Generic {
            name: token.lexeme,
            inputs,
        })
    }
}

/// `segment ('.' segment)*`
#[derive(Debug, Clone, Copy, Default)]
pub struct PathExprParser;

impl<'src> SyntaxRule<'src> for PathExprParser {
    type Output = PathExpr<'src>;

    fn litmus(&self, leaf: Leaf) -> bool {
        SegmentParser.litmus(leaf)
    }

    fn parse<L: Lexer<'src>>(&self, state: &mut ParserState<'src, L>) -> ParseResult<PathExpr<'src>> {
        let mut segments = vec![SegmentParser.parse(state)?];
        while state.current().is(Leaf::OpAccess) {
            state.next_token()?;
            segments.push(require(SegmentParser.parse(state), ParseError::ExpectedIdentifier)?);
        }
        Ok(PathExpr { segments })
    }
}
