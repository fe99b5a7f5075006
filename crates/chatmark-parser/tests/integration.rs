use chatmark_parser::{parse_function, tokenize, Token};
use proptest::prelude::*;

#[test]
fn test_mixed_markup() {
    let tokens = tokenize("&l&6Gold #abc{player}: {greet(\"hi, you\")} https://a.b/c?d&e");

    assert_eq!(
        tokens,
        vec![
            Token::LegacyColor('l'),
            Token::LegacyColor('6'),
            Token::Text("Gold ".into()),
            Token::HexColor("aabbcc".into()),
            Token::Variable("player".into()),
            Token::Text(": ".into()),
            Token::Variable("greet(\"hi, you\")".into()),
            Token::Text(" ".into()),
            Token::Url("https://a.b/c?d&e".into()),
        ]
    );
}

#[test]
fn test_function_body_from_tokenizer() {
    let tokens = tokenize("{ join ( \"-\" , a , b ) }");
    let Token::Variable(body) = &tokens[0] else {
        panic!("expected a variable, got {:?}", tokens);
    };

    let call = parse_function(body).unwrap();
    assert_eq!(call.name, "join");
    assert_eq!(call.args, vec!["-", "a", "b"]);
}

#[test]
fn test_escaped_brace_reaches_function_arguments() {
    let tokens = tokenize("{wrap(\"&}\")}");
    assert_eq!(tokens, vec![Token::Variable("wrap(\"}\")".into())]);

    let Token::Variable(body) = &tokens[0] else {
        unreachable!()
    };
    assert_eq!(parse_function(body).unwrap().args, vec!["}"]);
}

#[test]
fn test_wide_characters_not_split() {
    // Astral-plane characters next to every trigger.
    let tokens = tokenize("𝄞{𝄞}&𝄞#𝄞");
    assert_eq!(
        tokens,
        vec![
            Token::Text("𝄞".into()),
            Token::Variable("𝄞".into()),
            Token::Text("&𝄞#𝄞".into()),
        ]
    );
}

#[test]
fn test_triggers_at_end_of_input() {
    assert_eq!(tokenize("a&"), vec![Token::Text("a&".into())]);
    assert_eq!(tokenize("a#"), vec![Token::Text("a#".into())]);
    assert_eq!(tokenize("a#f"), vec![Token::Text("a#f".into())]);
    assert_eq!(tokenize("a{"), vec![Token::Text("a{".into())]);
}

mod proptests {
    use super::*;

    // Text with no trigger characters and no link prefixes.
    fn plain_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,!?:;'\"()éü漢]{0,60}"
    }

    fn concat_text(tokens: &[Token]) -> Option<String> {
        let mut out = String::new();
        for token in tokens {
            match token {
                Token::Text(t) => out.push_str(t),
                _ => return None,
            }
        }
        Some(out)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn plain_text_is_one_token(content in plain_text()) {
            let tokens = tokenize(&content);
            if content.is_empty() {
                prop_assert!(tokens.is_empty());
            } else {
                prop_assert_eq!(tokens, vec![Token::Text(content)]);
            }
        }

        #[test]
        fn tokenizer_never_panics(input in "\\PC{0,80}") {
            let _ = tokenize(&input);
        }

        #[test]
        fn no_adjacent_text_tokens_within_markup(input in "[a-c{}&#0-9 ]{0,40}") {
            let tokens = tokenize(&input);
            for pair in tokens.windows(2) {
                prop_assert!(!(pair[0].is_text() && pair[1].is_text()));
            }
        }

        #[test]
        fn escaped_triggers_round_trip(content in plain_text()) {
            let input = format!("&{{{}&}}&&&#", content);
            let tokens = tokenize(&input);
            prop_assert_eq!(concat_text(&tokens), Some(format!("{{{}}}&#", content)));
        }

        #[test]
        fn variable_body_is_trimmed(name in "[a-z_]{1,12}", pad in " {0,3}") {
            let input = format!("{{{pad}{name}{pad}}}");
            prop_assert_eq!(tokenize(&input), vec![Token::Variable(name)]);
        }
    }
}
