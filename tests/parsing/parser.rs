#[cfg(test)]
mod verify {
    use ftl::language::*;
    use ftl::parsing::{parse_str, CharStream, Context, Parser};

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    fn text(value: &str) -> Element {
        Element::Text(value.to_string())
    }

    fn variable(name: &str) -> Expression {
        Expression::Variable(Identifier::new(name))
    }

    #[test]
    fn simple_messages() {
        let body = parse_str(
            trim(
                r#"
hello = Hello, world!
hello-user = Hello, { $username }!
"#,
            ),
            Context::full(),
        )
        .unwrap();

        assert_eq!(
            body.entries
                .len(),
            2
        );

        let message = body
            .message("hello")
            .unwrap();
        assert_eq!(
            message.value,
            Value::Pattern(Pattern {
                quoted: false,
                elements: vec![text("Hello, world!")],
            })
        );

        let message = body
            .message("hello-user")
            .unwrap();
        assert_eq!(
            message.value,
            Value::Pattern(Pattern {
                quoted: false,
                elements: vec![
                    text("Hello, "),
                    Element::Placeable(Placeable {
                        expressions: vec![variable("username")]
                    }),
                    text("!"),
                ],
            })
        );
    }

    #[test]
    fn comments_attach_to_next_entry() {
        let body = parse_str(
            trim(
                r#"
# a
# b
hello = world
# about menus
[[ Menu ]]
# left over
"#,
            ),
            Context::full(),
        )
        .unwrap();

        assert_eq!(
            body.entries,
            vec![
                Entry::Message(Message {
                    identifier: Identifier::new("hello"),
                    value: Value::Pattern(Pattern {
                        quoted: false,
                        elements: vec![text("world")],
                    }),
                    comment: Some(Comment::new(" a").merge(Comment::new(" b"))),
                }),
                Entry::Section(Section {
                    keyword: Identifier::new("Menu"),
                    comment: Some(Comment::new(" about menus")),
                }),
                Entry::Comment(Comment::new(" left over")),
            ]
        );
    }

    #[test]
    fn partial_mode_keeps_only_messages() {
        let content = trim(
            r#"
# a
[[ Menu ]]
# b
hello = world
# trailing
"#,
        );

        let body = parse_str(content, Context::partial()).unwrap();
        assert_eq!(
            body.entries,
            vec![Entry::Message(Message {
                identifier: Identifier::new("hello"),
                value: Value::Pattern(Pattern {
                    quoted: false,
                    elements: vec![text("world")],
                }),
                comment: None,
            })]
        );

        // the messages are the same either way
        let full = parse_str(content, Context::full()).unwrap();
        let names: Vec<&str> = full
            .messages()
            .map(|message| {
                message
                    .identifier
                    .0
                    .as_str()
            })
            .collect();
        assert_eq!(names, vec!["hello"]);
    }

    #[test]
    fn pattern_and_members() {
        let body = parse_str(
            trim(
                r#"
brandName = Firefox
  [gender] masculine
  *[case/nominative] Firefox
"#,
            ),
            Context::full(),
        )
        .unwrap();

        let message = body
            .message("brandName")
            .unwrap();
        assert_eq!(
            message
                .value
                .pattern(),
            Some(&Pattern {
                quoted: false,
                elements: vec![text("Firefox")],
            })
        );

        let members = message
            .value
            .members()
            .unwrap();
        assert_eq!(
            members
                .members()
                .len(),
            2
        );
        assert_eq!(
            members
                .default_member()
                .map(|member| &member.key),
            Some(&MemberKey::Attribute(Attribute {
                identifier: Identifier::new("case"),
                keyword: Identifier::new("nominative"),
            }))
        );
    }

    #[test]
    fn select_expression() {
        let body = parse_str(
            trim(
                r#"
emails = { $count ->
  [0] none
  [one] one
  *[other] { $count } emails
}
"#,
            ),
            Context::full(),
        )
        .unwrap();

        let message = body
            .message("emails")
            .unwrap();
        let pattern = message
            .value
            .pattern()
            .unwrap();

        match &pattern.elements[..] {
            [Element::Placeable(placeable)] => match &placeable.expressions[..] {
                [Expression::Select(select)] => {
                    assert_eq!(*select.selector, variable("count"));

                    let keys: Vec<&MemberKey> = select
                        .members
                        .members()
                        .iter()
                        .map(|member| &member.key)
                        .collect();
                    assert_eq!(
                        keys,
                        vec![
                            &MemberKey::Number(Number(0.0)),
                            &MemberKey::Identifier(Identifier::new("one")),
                            &MemberKey::Identifier(Identifier::new("other")),
                        ]
                    );
                }
                _ => panic!("Expected a single select expression"),
            },
            _ => panic!("Expected a single placeable"),
        }
    }

    #[test]
    fn call_with_keyword_arguments() {
        let body = parse_str(
            "price = { NUMBER($amount, style = \"currency\") }",
            Context::full(),
        )
        .unwrap();

        let pattern = body
            .message("price")
            .unwrap()
            .value
            .pattern()
            .unwrap();

        assert_eq!(
            pattern.elements[0],
            Element::Placeable(Placeable {
                expressions: vec![Expression::Call(CallExpression {
                    builtin: Identifier::new("NUMBER"),
                    arguments: vec![
                        Argument::Expression(variable("amount")),
                        Argument::Keyword(KeywordArgument {
                            identifier: Identifier::new("style"),
                            value: Pattern {
                                quoted: true,
                                elements: vec![Element::QuotedText("currency".to_string())],
                            },
                        }),
                    ],
                })]
            })
        );
    }

    #[test]
    fn block_text_message() {
        let body = parse_str(
            trim(
                r#"
terms =
  | first line
  | second { $line }
next = one
"#,
            ),
            Context::full(),
        )
        .unwrap();

        assert_eq!(
            body.message("terms")
                .unwrap()
                .value,
            Value::Pattern(Pattern {
                quoted: false,
                elements: vec![Element::Block(BlockText {
                    lines: vec![
                        vec![text("first line")],
                        vec![
                            text("second "),
                            Element::Placeable(Placeable {
                                expressions: vec![variable("line")]
                            }),
                        ],
                    ],
                })],
            })
        );
        assert!(body
            .message("next")
            .is_some());
    }

    #[test]
    fn empty_document() {
        let body = parse_str("", Context::full()).unwrap();
        assert_eq!(body, Body::default());
    }

    #[test]
    fn parsing_from_any_character_source() {
        let source = "hello = world\n"
            .chars()
            .collect::<Vec<char>>();
        let stream = CharStream::new(source.into_iter());

        let body = Parser::from_stream(stream, Context::full())
            .read_body()
            .unwrap();
        assert!(body
            .message("hello")
            .is_some());
    }
}
