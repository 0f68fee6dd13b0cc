#[cfg(test)]
mod verify {
    use phrasing::language::*;
    use phrasing::parsing::{self, BuildError, Builder, CompileError, Event};

    fn group(items: Vec<Expression>) -> Expression {
        Sequence::new(SequenceKind::Group, items).into()
    }

    fn alternative(items: Vec<Expression>) -> Expression {
        Sequence::new(SequenceKind::Alternative, items).into()
    }

    fn word(text: &str) -> Expression {
        Expression::word(text)
    }

    fn compile_one(text: &str) -> Sentence {
        let mut sentences = parsing::compile([text]).unwrap();
        assert_eq!(sentences.len(), 1);
        sentences
            .pop()
            .unwrap()
    }

    #[test]
    fn flat_template_keeps_source_order() {
        let sentence = compile_one("set {name} brightness to 50 percent");

        assert_eq!(
            sentence
                .root
                .kind,
            SequenceKind::Group
        );
        assert_eq!(
            sentence.items(),
            &[
                word("set"),
                Expression::list("name"),
                word("brightness"),
                word("to"),
                Expression::number(50),
                word("percent"),
            ]
        );
        assert_eq!(sentence.text, "set {name} brightness to 50 percent");
    }

    #[test]
    fn optional_span() {
        let sentence = compile_one("turn on [the] light");

        assert_eq!(
            sentence.items(),
            &[
                word("turn"),
                word("on"),
                alternative(vec![word("the"), Expression::empty()]),
                word("light"),
            ]
        );
    }

    #[test]
    fn alternative_in_group() {
        let sentence = compile_one("(a | b c)");

        assert_eq!(
            sentence.items(),
            &[alternative(vec![
                word("a"),
                group(vec![word("b"), word("c")])
            ])]
        );
    }

    #[test]
    fn nested_scopes_isolate_alternatives() {
        let sentence = compile_one("(a (b | c) d)");

        assert_eq!(
            sentence.items(),
            &[group(vec![
                word("a"),
                alternative(vec![word("b"), word("c")]),
                word("d"),
            ])]
        );
    }

    #[test]
    fn alternatives_after_nested_group() {
        let sentence = compile_one("((a | b) c | d)");

        assert_eq!(
            sentence.items(),
            &[alternative(vec![
                group(vec![alternative(vec![word("a"), word("b")]), word("c")]),
                word("d"),
            ])]
        );
    }

    #[test]
    fn optional_inside_alternative() {
        let sentence = compile_one("what is [the] (temperature | temp [outside])");

        assert_eq!(
            sentence.items(),
            &[
                word("what"),
                word("is"),
                alternative(vec![word("the"), Expression::empty()]),
                alternative(vec![
                    word("temperature"),
                    group(vec![
                        word("temp"),
                        alternative(vec![word("outside"), Expression::empty()]),
                    ]),
                ]),
            ]
        );
    }

    #[test]
    fn optional_with_several_words() {
        let sentence = compile_one("lights [in the] {area}");

        assert_eq!(
            sentence.items(),
            &[
                word("lights"),
                alternative(vec![
                    group(vec![word("in"), word("the")]),
                    Expression::empty()
                ]),
                Expression::list("area"),
            ]
        );
    }

    #[test]
    fn optional_alternatives_end_with_nothing() {
        let sentence = compile_one("[turn | switch] on");

        assert_eq!(
            sentence.items(),
            &[
                alternative(vec![word("turn"), word("switch"), Expression::empty()]),
                word("on"),
            ]
        );
    }

    #[test]
    fn numbers_ranges_and_references() {
        let sentence = compile_one("set <name> to {brightness} 0..100 by 1..10..2 \"a b\"");

        assert_eq!(
            sentence.items(),
            &[
                word("set"),
                Expression::rule("name"),
                word("to"),
                Expression::list("brightness"),
                Expression::range(0, 100, 1),
                word("by"),
                Expression::range(1, 10, 2),
                word("a b"),
            ]
        );
        assert_eq!(sentence.list_names(), vec!["brightness"]);
        assert_eq!(sentence.rule_names(), vec!["name"]);
    }

    #[test]
    fn compiling_twice_is_identical() {
        let text = "[please] (turn | switch) (on | off) [the] {name} [in <area>]";
        let first = parsing::compile([text]).unwrap();
        let second = parsing::compile([text]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn multiple_lines_in_order() {
        let sentences = parsing::compile(["a", "b"]).unwrap();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].items(), &[word("a")]);
        assert_eq!(sentences[1].items(), &[word("b")]);
    }

    #[test]
    fn blank_input_compiles_to_nothing() {
        let none: [&str; 0] = [];
        assert_eq!(parsing::compile(none), Ok(vec![]));
        assert_eq!(parsing::compile(["", "   ", "\t"]), Ok(vec![]));
        assert_eq!(parsing::compile_text(""), Ok(vec![]));
    }

    #[test]
    fn blank_lines_between_templates_are_skipped() {
        let sentences = parsing::compile_text("one\n\ntwo\n   \nthree").unwrap();
        let texts: Vec<&str> = sentences
            .iter()
            .map(|sentence| sentence.text.as_str())
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn non_breaking_space_separates_words() {
        let sentence = compile_one("turn on\u{a0}the light");

        assert_eq!(
            sentence.items(),
            &[word("turn"), word("on"), word("the"), word("light")]
        );
    }

    #[test]
    fn syntax_errors_are_reported() {
        assert!(matches!(
            parsing::compile(["turn on (the light"]),
            Err(CompileError::Syntax(_))
        ));
    }

    #[test]
    fn malformed_event_stream_is_rejected() {
        let mut builder = Builder::new();
        builder
            .handle(Event::EnterSentence("a | b"))
            .unwrap();
        builder
            .handle(Event::Word("a"))
            .unwrap();

        assert_eq!(
            builder.handle(Event::Alternation),
            Err(BuildError::MissingMarker)
        );
        assert!(builder
            .sentences()
            .is_empty());
    }

    #[test]
    fn builder_requires_open_sentence() {
        let mut builder = Builder::new();
        assert_eq!(
            builder.handle(Event::ListReference("area")),
            Err(BuildError::NoSentence)
        );
    }
}
