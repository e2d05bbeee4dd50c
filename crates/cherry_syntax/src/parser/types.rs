/// Parses a type expression.
///
/// A type starts with a path expression, and the token after the path selects the variant:
///
/// - `(` gives a function type: `path(type, ...)`, optionally followed by `: type` for the return type.
/// - `[` gives an array type: `path[]`.
/// - `*`, `&` or `&&` give a pointer/reference type: `path*&`. `&&` counts as two references.
/// - Anything else gives a plain type.
///
/// ## Notes
/// - Nesting through generic arguments and function signatures is limited by [`SyntaxConfig::max_depth`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeParser;

impl<'src> SyntaxRule<'src> for TypeParser {
    type Output = Type<'src>;

    fn litmus(&self, leaf: Leaf) -> bool {
        PathExprParser.litmus(leaf)
    }

    fn parse<L: Lexer<'src>>(&self, state: &mut ParserState<'src, L>) -> ParseResult<Type<'src>> {
        if !self.litmus(state.current().kind) {
            return Err(ParseError::NotMySyntax);
        }
        state.nested(type_expr)
    }
}

fn type_expr<'src, L: Lexer<'src>>(state: &mut ParserState<'src, L>) -> ParseResult<Type<'src>> {
    let PathExpr { segments } = PathExprParser.parse(state)?;

    match state.current().kind {
        Leaf::DcLparen => {
            state.next_token()?;
            let inputs = fn_inputs(state)?;
            let output = if state.current().is(Leaf::DcColon) {
                state.next_token()?;
                Some(Box::new(require(TypeParser.parse(state), ParseError::ExpectedType)?))
            } else {
                None
            };
            Ok(Type::Fn {
                segments,
                inputs,
                output,
            })
        }
        Leaf::DcLbracket => {
            let token = state.next_token()?;
            if !token.is(Leaf::DcRbracket) {
                return Err(ParseError::ExpectedDelimiter(Leaf::DcRbracket));
            }
            state.next_token()?;
            Ok(Type::Arr { segments })
        }
        Leaf::OpMul | Leaf::OpBitand | Leaf::OpLogand => {
            let mut depth = Vec::new();
            loop {
                match state.current().kind {
                    Leaf::OpMul => depth.push(true),
                    Leaf::OpBitand => depth.push(false),
                    Leaf::OpLogand => depth.extend([false, false]),
                    _ => break,
                }
                state.next_token()?;
            }
            Ok(Type::Ref { segments, depth })
        }
        _ => Ok(Type::Raw { segments }),
    }
}

/// Parameter list after the opening `(`, up to and including the `)`.
fn fn_inputs<'src, L: Lexer<'src>>(state: &mut ParserState<'src, L>) -> ParseResult<Vec<Type<'src>>> {
    let mut inputs = Vec::new();
    if !state.current().is(Leaf::DcRparen) {
        loop {
            inputs.push(require(TypeParser.parse(state), ParseError::ExpectedType)?);
            if !state.current().is(Leaf::DcComma) {
                break;
            }
            state.next_token()?;
        }
    }
    if !state.current().is(Leaf::DcRparen) {
        return Err(ParseError::ExpectedDelimiter(Leaf::DcRparen));
    }
    state.next_token()?;
    Ok(inputs)
}
