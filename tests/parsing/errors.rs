#[cfg(test)]
mod syntax {
    use ftl::parsing::{parse_str, Context, ParsingError, Position, Problem};

    /// Helper function to check if parsing produces the expected error type
    fn expect_error(content: &str, expected: Problem) -> ParsingError {
        match parse_str(content, Context::full()) {
            Ok(_) => panic!(
                "Expected parsing to fail, but it succeeded for input: {}",
                content
            ),
            Err(error) => {
                if std::mem::discriminant(&error.problem) != std::mem::discriminant(&expected) {
                    panic!(
                        "Expected error type like {:?} but got: {:?} for input '{}'",
                        expected, error, content
                    );
                }
                error
            }
        }
    }

    #[test]
    fn select_with_two_spaces() {
        let error = expect_error(
            "emails = { $count  ->\n  [one] one\n  *[other] many\n}\n",
            Problem::InvalidSelectSpacing(2),
        );
        assert_eq!(error.problem, Problem::InvalidSelectSpacing(2));
        assert_eq!(
            error.position,
            Position {
                offset: 19,
                line: 0,
                column: 19
            }
        );
        assert!(error
            .context
            .starts_with("->"));
    }

    #[test]
    fn select_without_space() {
        expect_error(
            "emails = { 42->\n  [one] one\n}\n",
            Problem::InvalidSelectSpacing(0),
        );

        // after a variable the '-' is part of the name
        expect_error(
            "emails = { $count->\n  [one] one\n}\n",
            Problem::UnexpectedCharacter('>', '}'),
        );
    }

    #[test]
    fn message_without_value() {
        expect_error("foo = ", Problem::MissingValue);
        expect_error("foo =\nbar = baz", Problem::MissingValue);
    }

    #[test]
    fn lowercase_builtin() {
        let error = expect_error(
            "x = { number($n) }",
            Problem::InvalidBuiltin(String::new()),
        );
        assert_eq!(error.problem, Problem::InvalidBuiltin("number".to_string()));
    }

    #[test]
    fn digit_required_after_point() {
        expect_error("x = { 4. }", Problem::InvalidNumber);
        expect_error("x = { $n ->\n  [4.] four\n}", Problem::InvalidNumber);
    }

    #[test]
    fn blank_line_between_entries() {
        let error = expect_error("a = b\n\nc = d\n", Problem::Expected(""));
        assert_eq!(error.position.line, 1);
        assert_eq!(error.position.column, 0);
    }

    #[test]
    fn unclosed_placeable() {
        expect_error("x = { $n", Problem::UnexpectedEndOfInput);
        expect_error("x = { $n\ny = z", Problem::UnexpectedCharacter('y', '}'));
    }

    #[test]
    fn placeable_across_two_lines() {
        // one line break is allowed inside a placeable, two are not
        assert!(parse_str("x = {\n  $n\n}", Context::full()).is_ok());
        expect_error("x = {\n\n$n }", Problem::Expected(""));
    }

    #[test]
    fn malformed_section() {
        expect_error("[[ unfinished\n", Problem::UnexpectedCharacter('\n', ']'));
        expect_error("[single]\n", Problem::UnexpectedCharacter('s', '['));
        expect_error("[[ menu ]] junk", Problem::Expected(""));
    }

    #[test]
    fn malformed_section_ignored_when_partial() {
        let body = parse_str("[[ unfinished\nx = y\n", Context::partial()).unwrap();
        assert_eq!(
            body.entries
                .len(),
            1
        );
    }

    #[test]
    fn single_bracket_rejected_when_partial() {
        let content = "[oops this is junk\nhello = x\n";

        let error = parse_str(content, Context::partial()).unwrap_err();
        assert_eq!(error.problem, Problem::UnexpectedCharacter('o', '['));
        assert_eq!(
            error.position,
            Position {
                offset: 1,
                line: 0,
                column: 1
            }
        );
        assert!(parse_str(content, Context::full()).is_err());
    }

    #[test]
    fn positions_on_later_lines() {
        let error = expect_error(
            "# comment\r\nok = fine\r\nbad = { $x  -> }",
            Problem::InvalidSelectSpacing(2),
        );
        assert_eq!(error.position.line, 2);
        assert_eq!(error.position.column, 12);
        assert_eq!(error.offset(), 34);
    }

    #[test]
    fn messages_are_readable() {
        let error = expect_error("foo = ", Problem::MissingValue);
        assert_eq!(
            error.to_string(),
            "1:7 message has neither a pattern nor a member list (at \"\")"
        );
    }
}
