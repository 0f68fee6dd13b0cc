#[cfg(test)]
mod verify {
    use phrasing::formatting::*;
    use phrasing::language::*;
    use phrasing::parsing;

    fn combine(fragments: Vec<(Syntax, String)>) -> String {
        let mut result = String::new();
        for fragment in fragments {
            result.push_str(&fragment.1);
        }
        result
    }

    fn reformat(text: &str) -> String {
        let sentences = parsing::compile([text]).unwrap();
        assert_eq!(sentences.len(), 1);
        render(&sentences[0], &Identity)
    }

    #[test]
    fn canonical_templates_are_unchanged() {
        let templates = [
            "turn on [the] {name}",
            "(turn | switch) (on | off) [the] {name}",
            "set <name> to 0..100..5 percent",
            "what is the (temperature | temp) [in [the] {area}]",
            "lights [in the] {area}",
            "(a | b c) d",
            "[turn | switch] on",
            "x ( | a) y",
        ];

        for template in templates {
            assert_eq!(reformat(template), template);
        }
    }

    #[test]
    fn spacing_is_normalized() {
        assert_eq!(
            reformat("  turn   on[the]{ name }(on|off)  "),
            "turn on [the] {name} (on | off)"
        );
    }

    #[test]
    fn words_are_requoted() {
        assert_eq!(
            reformat(r#"play "the living room" \(please\)"#),
            r#"play "the living room" \(please\)"#
        );
        assert_eq!(reformat("set 'kitchen' 1..10..1"), "set kitchen 1..10");
    }

    #[test]
    fn rendered_templates_compile_to_the_same_tree() {
        let templates = [
            "[please] (turn | switch) (on | off) [the] {name} [in <area>]",
            "((a | b) c | d)",
            "what is [the] (temperature | temp [outside])",
            "say \"hello (world)\" to {name}",
            "open 'garage door' by -5..5",
            "set [the] {name} [to] {brightness}[%]",
            "set [a] timer for {minutes} minute[s]",
            "x ( | a) y",
            "x ( | a b) y",
            "x (a | ) y",
            "( | )",
        ];

        for template in templates {
            let first = parsing::compile([template]).unwrap();
            let text = render(&first[0], &Identity);
            let second = parsing::compile([&text]).unwrap();

            assert_eq!(
                first[0].items(),
                second[0].items(),
                "rendering '{}' gave '{}'",
                template,
                text
            );
        }
    }

    #[test]
    fn lone_alternative_stays_alternative() {
        let first = parsing::compile(["x ( | a) y"]).unwrap();
        let text = render(&first[0], &Identity);
        assert_eq!(text, "x ( | a) y");

        let second = parsing::compile([&text]).unwrap();
        match &second[0].items()[1] {
            Expression::Sequence(sequence) => {
                assert_eq!(sequence.kind, SequenceKind::Alternative);
                assert_eq!(sequence.items, vec![Expression::word("a")]);
            }
            other => panic!("Expected an alternative, got {:?}", other),
        }
    }

    #[test]
    fn fragments_carry_syntax() {
        let sentences = parsing::compile(["[turn] on {name} 5"]).unwrap();
        let fragments = format_with_renderer(&sentences[0]);

        assert_eq!(
            fragments[0],
            (Syntax::Structure, "[".to_string())
        );
        assert_eq!(fragments[1], (Syntax::Word, "turn".to_string()));
        assert!(fragments.contains(&(Syntax::List, "name".to_string())));
        assert_eq!(
            fragments
                .last()
                .unwrap(),
            &(Syntax::Numeric, "5".to_string())
        );
        assert_eq!(combine(fragments), "[turn] on {name} 5");
    }

    #[test]
    fn terminal_renderer_only_adds_escapes() {
        let sentences = parsing::compile(["turn on [the] {name}"]).unwrap();
        let styled = render(&sentences[0], &Terminal);

        assert_ne!(styled, "turn on [the] {name}");
        assert!(styled.contains("turn"));
        assert!(styled.contains("name"));
    }

    #[test]
    fn expression_on_its_own() {
        let expression = Expression::Sequence(Sequence::new(
            SequenceKind::Alternative,
            vec![Expression::word("on"), Expression::word("off")],
        ));
        assert_eq!(render_expression(&expression, &Identity), "(on | off)");
    }
}
