#[cfg(test)]
/// Parser unit tests.
///
/// Most tests drive the rules from scripted token streams so each rule is checked in isolation from the lexer; the
/// rest go through the public entrypoints.
mod tests {
    use super::*;
    use crate::lexer::Replay;

    fn tok(lexeme: &'static str, kind: Leaf) -> Token<'static> {
        Token::new(lexeme, kind, 0, 0)
    }

    fn ident(lexeme: &'static str) -> Token<'static> {
        tok(lexeme, Leaf::Identifier)
    }

    fn dot() -> Token<'static> {
        tok(".", Leaf::OpAccess)
    }

    fn primed(tokens: Vec<Token<'static>>) -> ParserState<'static, Replay<'static>> {
        let mut state = ParserState::new("", Replay::new(tokens));
        state.next_token().unwrap();
        state
    }

    fn named(name: &str) -> Segment<'_> {
        Segment::Generic {
            name,
            inputs: Vec::new(),
        }
    }

    // ========================================================================
    // Simple paths
    // ========================================================================

    #[test]
    fn test_simple_path() {
        let mut state = primed(vec![ident("std"), dot(), ident("io"), dot(), ident("file")]);
        let path = SimplePathParser.parse(&mut state).unwrap();
        assert_eq!(path.segments, vec!["std", "io", "file"]);
        assert!(state.current().is_eos());
    }

    #[test]
    fn test_simple_path_requires_identifier_after_dot() {
        let mut state = primed(vec![ident("std"), dot(), dot()]);
        assert_eq!(SimplePathParser.parse(&mut state), Err(ParseError::ExpectedIdentifier));
    }

    #[test]
    fn test_simple_path_rejects_primitives() {
        let mut state = primed(vec![tok("int32", Leaf::KwInt32)]);
        assert_eq!(SimplePathParser.parse(&mut state), Err(ParseError::NotMySyntax));
        // Nothing was consumed.
        assert!(state.current().is(Leaf::KwInt32));
    }

    // ========================================================================
    // Segments and path expressions
    // ========================================================================

    #[test]
    fn test_primitive_segment() {
        let mut state = primed(vec![tok("uint8", Leaf::KwUint8)]);
        assert_eq!(
            SegmentParser.parse(&mut state),
            Ok(Segment::Primitive(Primitive::Uint8))
        );
    }

    #[test]
    fn test_generic_segment() {
        let mut state = primed(vec![
            ident("map"),
            tok("<", Leaf::OpLogless),
            tok("string", Leaf::KwString),
            tok(",", Leaf::DcComma),
            ident("item"),
            tok("*", Leaf::OpMul),
            tok(">", Leaf::OpLogmore),
            tok(";", Leaf::DcTerminator),
        ]);
        let segment = SegmentParser.parse(&mut state).unwrap();
        assert_eq!(
            segment,
            Segment::Generic {
                name: "map",
                inputs: vec![
                    Type::Raw {
                        segments: vec![Segment::Primitive(Primitive::String)]
                    },
                    Type::Ref {
                        segments: vec![named("item")],
                        depth: vec![true]
                    },
                ],
            }
        );
        assert!(state.current().is(Leaf::DcTerminator));
    }

    #[test]
    fn test_generic_segment_errors() {
        let mut state = primed(vec![ident("list"), tok("<", Leaf::OpLogless), tok(">", Leaf::OpLogmore)]);
        assert_eq!(SegmentParser.parse(&mut state), Err(ParseError::ExpectedType));

        let mut state = primed(vec![ident("list"), tok("<", Leaf::OpLogless), tok("bool", Leaf::KwBool)]);
        assert_eq!(
            SegmentParser.parse(&mut state),
            Err(ParseError::ExpectedDelimiter(Leaf::OpLogmore))
        );
    }

    #[test]
    fn test_path_expr() {
        let mut state = primed(vec![ident("std"), dot(), ident("io"), dot(), tok("char", Leaf::KwChar)]);
        let path = PathExprParser.parse(&mut state).unwrap();
        assert_eq!(
            path.segments,
            vec![named("std"), named("io"), Segment::Primitive(Primitive::Char)]
        );
    }

    #[test]
    fn test_path_expr_errors() {
        let mut state = primed(vec![tok(";", Leaf::DcTerminator)]);
        assert_eq!(PathExprParser.parse(&mut state), Err(ParseError::NotMySyntax));

        let mut state = primed(vec![ident("std"), dot(), tok(";", Leaf::DcTerminator)]);
        assert_eq!(PathExprParser.parse(&mut state), Err(ParseError::ExpectedIdentifier));
    }

    // ========================================================================
    // Types
    // ========================================================================

    #[test]
    fn test_raw_type() {
        let mut state = primed(vec![ident("std"), dot(), ident("string_view")]);
        assert_eq!(
            TypeParser.parse(&mut state),
            Ok(Type::Raw {
                segments: vec![named("std"), named("string_view")]
            })
        );
    }

    #[test]
    fn test_fn_type() {
        let mut state = primed(vec![
            ident("std"),
            dot(),
            ident("io"),
            dot(),
            ident("console"),
            dot(),
            ident("write"),
            tok("(", Leaf::DcLparen),
            tok("string", Leaf::KwString),
            tok(")", Leaf::DcRparen),
            tok(":", Leaf::DcColon),
            tok("void", Leaf::KwVoid),
        ]);
        let ty = TypeParser.parse(&mut state).unwrap();
        assert_eq!(
            ty,
            Type::Fn {
                segments: vec![named("std"), named("io"), named("console"), named("write")],
                inputs: vec![Type::Raw {
                    segments: vec![Segment::Primitive(Primitive::String)]
                }],
                output: Some(Box::new(Type::Raw {
                    segments: vec![Segment::Primitive(Primitive::Void)]
                })),
            }
        );
    }

    #[test]
    fn test_fn_type_without_inputs_or_output() {
        let mut state = primed(vec![ident("tick"), tok("(", Leaf::DcLparen), tok(")", Leaf::DcRparen)]);
        assert_eq!(
            TypeParser.parse(&mut state),
            Ok(Type::Fn {
                segments: vec![named("tick")],
                inputs: Vec::new(),
                output: None,
            })
        );
    }

    #[test]
    fn test_fn_type_errors() {
        let mut state = primed(vec![ident("f"), tok("(", Leaf::DcLparen), tok("bool", Leaf::KwBool)]);
        assert_eq!(
            TypeParser.parse(&mut state),
            Err(ParseError::ExpectedDelimiter(Leaf::DcRparen))
        );

        let mut state = primed(vec![
            ident("f"),
            tok("(", Leaf::DcLparen),
            tok(")", Leaf::DcRparen),
            tok(":", Leaf::DcColon),
        ]);
        assert_eq!(TypeParser.parse(&mut state), Err(ParseError::ExpectedType));
    }

    #[test]
    fn test_arr_type() {
        let mut state = primed(vec![
            tok("int8", Leaf::KwInt8),
            tok("[", Leaf::DcLbracket),
            tok("]", Leaf::DcRbracket),
        ]);
        assert_eq!(
            TypeParser.parse(&mut state),
            Ok(Type::Arr {
                segments: vec![Segment::Primitive(Primitive::Int8)]
            })
        );

        let mut state = primed(vec![tok("int8", Leaf::KwInt8), tok("[", Leaf::DcLbracket)]);
        assert_eq!(
            TypeParser.parse(&mut state),
            Err(ParseError::ExpectedDelimiter(Leaf::DcRbracket))
        );
    }

    #[test]
    fn test_ref_type_depth_order() {
        let mut state = primed(vec![
            tok("int32", Leaf::KwInt32),
            tok("*", Leaf::OpMul),
            tok("*", Leaf::OpMul),
            tok("&", Leaf::OpBitand),
            tok("&", Leaf::OpBitand),
            tok("*", Leaf::OpMul),
            tok("&", Leaf::OpBitand),
        ]);
        assert_eq!(
            TypeParser.parse(&mut state),
            Ok(Type::Ref {
                segments: vec![Segment::Primitive(Primitive::Int32)],
                depth: vec![true, true, false, false, true, false],
            })
        );
    }

    #[test]
    fn test_type_rejects_non_path_start() {
        let mut state = primed(vec![tok("*", Leaf::OpMul)]);
        assert_eq!(TypeParser.parse(&mut state), Err(ParseError::NotMySyntax));
    }

    // ========================================================================
    // Imports and documents
    // ========================================================================

    #[test]
    fn test_import() {
        let mut state = primed(vec![tok("using", Leaf::KwUsing), ident("std"), tok(";", Leaf::DcTerminator)]);
        let import = ImportParser.parse(&mut state).unwrap();
        assert_eq!(
            import,
            Import {
                path: SimplePath { segments: vec!["std"] }
            }
        );
        assert!(state.current().is_eos());
    }

    #[test]
    fn test_import_errors() {
        let mut state = primed(vec![tok("using", Leaf::KwUsing), ident("std")]);
        assert_eq!(ImportParser.parse(&mut state), Err(ParseError::ExpectedTerminator));

        let mut state = primed(vec![tok("using", Leaf::KwUsing), tok(";", Leaf::DcTerminator)]);
        assert_eq!(ImportParser.parse(&mut state), Err(ParseError::ExpectedIdentifier));

        let mut state = primed(vec![ident("std")]);
        assert_eq!(ImportParser.parse(&mut state), Err(ParseError::NotMySyntax));
    }

    #[test]
    fn test_document_of_imports() {
        let document = parse("# prelude\nusing std;\nusing app.util; # trailing\n").unwrap();
        assert_eq!(document.imports.len(), 2);
        assert_eq!(document.imports[1].path.segments, vec!["app", "util"]);
    }

    #[test]
    fn test_document_rejects_unknown_statement() {
        let err = parse("using std;\nmodule sample;").unwrap_err();
        assert_eq!(err.code, "failure");
        assert_eq!((err.line, err.column), (1, 0));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(parse("  \n").unwrap(), Document::default());
    }

    // ========================================================================
    // Parser state
    // ========================================================================

    #[test]
    fn test_comments_reach_rules_when_not_skipped() {
        let source = "# doc\nusing std;";
        let config = SyntaxConfig::new().with_skip_comments(false);
        let err = parse_with(source, config).unwrap_err();
        assert_eq!(err.code, "failure");
        assert!(parse_with(source, SyntaxConfig::new()).is_ok());
    }

    #[test]
    fn test_lexer_errors_surface_verbatim() {
        let mut state = ParserState::new("using 0x;", LexicalAnalyzer::new());
        state.next_token().unwrap();
        assert_eq!(
            ImportParser.parse(&mut state),
            Err(ParseError::Lexical(LexError::InvalidHexadecimal))
        );

        let err = parse("using 0x;").unwrap_err();
        assert_eq!(err.code, "invalid_hexadecimal");
        assert_eq!((err.line, err.column), (0, 6));
    }

    #[test]
    fn test_lexer_error_position_skips_dropped_comments() {
        let lexer = LexicalAnalyzer::new().with_config(crate::config::LexerConfig::new().with_emit_comments(false));
        let mut state = ParserState::new("# header
using 0b;", lexer);
        state.next_token().unwrap();
        let error = ImportParser.parse(&mut state).unwrap_err();
        let err = state.diagnostic(error);
        assert_eq!(err.code, "invalid_binary");
        assert_eq!((err.line, err.column, err.offset), (1, 6, 15));
    }

    #[test]
    fn test_nested_generics_split_shift_token() {
        let ty = parse_type("map<string, list<int32>>").unwrap();
        assert_eq!(ty.to_string(), "map<string, list<int32>>");

        let ty = parse_type("a<b<c<bool>>>").unwrap();
        assert_eq!(ty.to_string(), "a<b<c<bool>>>");
    }

    #[test]
    fn test_lexed_logical_and_counts_as_two_references() {
        let ty = parse_type("int32**&&*&").unwrap();
        assert_eq!(
            ty,
            Type::Ref {
                segments: vec![Segment::Primitive(Primitive::Int32)],
                depth: vec![true, true, false, false, true, false],
            }
        );
    }

    #[test]
    fn test_depth_limit_is_unrecoverable() {
        let source = "a<a<a<a<bool>>>>";
        let config = SyntaxConfig::new().with_max_depth(3);
        let mut state = ParserState::new(source, LexicalAnalyzer::new()).with_config(config);
        state.next_token().unwrap();
        assert_eq!(TypeParser.parse(&mut state), Err(ParseError::Unrecoverable));
        assert!(parse_type(source).is_ok());
    }

    #[test]
    fn test_parse_type_rejects_trailing_tokens() {
        let err = parse_type("int32 )").unwrap_err();
        assert_eq!(err.code, "failure");
        assert_eq!(err.column, 6);
    }

    #[test]
    fn test_parse_type_rejects_non_type() {
        let err = parse_type(";").unwrap_err();
        assert_eq!(err.code, "failure");
    }

    #[test]
    fn test_path_is_noted_in_diagnostics() {
        let mut state = ParserState::new("using", LexicalAnalyzer::new()).with_path("src/main.cherry");
        let err = run(&mut state, &ImportParser).unwrap_err();
        assert_eq!(err.code, "expected_identifier");
        assert_eq!(err.notes, vec!["in src/main.cherry".to_string()]);
        assert_eq!(state.path(), Some(Path::new("src/main.cherry")));
    }

    #[test]
    fn test_ast_borrows_from_source() {
        let source = String::from("using alpha.beta;");
        let document = parse(&source).unwrap();
        let beta = document.imports[0].path.segments[1];
        assert!(std::ptr::eq(beta.as_ptr(), source[12..].as_ptr()));
    }
}
