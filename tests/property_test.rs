use basic::lang::token::{Token, KEYWORDS};
use basic::lang::{lex, Encoding};
use basic::parse;
use proptest::prelude::*;
use proptest::sample::select;

fn fragments() -> Vec<&'static str> {
    vec![
        "PRINT", "x", "\"hi\"", "12", "(", ")", ":", ",", " ", "rem zz", "a$", "+", "\"𝄞\"", "3.5",
        "goto", "\t",
    ]
}

fn statement_words() -> Vec<&'static str> {
    vec!["PRINT", "x", "12", "+", "GOTO", "\"s\"", "and", "a$", "Chr$"]
}

proptest! {
    #[test]
    fn label_lookup_finds_every_line(labels in prop::collection::btree_set(any::<u64>(), 1..20)) {
        let src: String = labels.iter().map(|l| format!("{} END\n", l)).collect();
        let program = parse("labels.bas", &src).unwrap();
        for label in &labels {
            prop_assert_eq!(program.find_basic_line(*label).map(|l| l.label), Some(*label));
        }
    }

    #[test]
    fn keywords_ignore_case(
        keyword in select(KEYWORDS.to_vec()),
        mask in prop::collection::vec(any::<bool>(), 8),
    ) {
        let spelled: String = keyword
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, lower)| if *lower { c.to_ascii_lowercase() } else { c })
            .collect();
        let lexemes = lex(&format!("10 {}", spelled), Encoding::Utf16).unwrap();
        prop_assert_eq!(&lexemes[1].token, &Token::Keyword(keyword));
    }

    #[test]
    fn lexemes_stay_on_their_line(
        lines in prop::collection::vec(prop::collection::vec(select(fragments()), 0..12), 1..6),
    ) {
        let text: Vec<String> = lines.iter().map(|l| l.concat()).collect();
        let src = text.join("\n");
        let lexemes = lex(&src, Encoding::Utf16).unwrap();
        for lexeme in &lexemes {
            if let Token::Eol | Token::Eof = lexeme.token {
                continue;
            }
            let physical = &text[lexeme.position.line - 1];
            prop_assert!(lexeme.width > 0);
            prop_assert!(
                lexeme.position.column + lexeme.width - 1 <= Encoding::Utf16.width(physical)
            );
        }
    }

    #[test]
    fn subexpressions_nest(depth in 1usize..40) {
        let src = format!("10 X={}1{}", "(".repeat(depth), ")".repeat(depth));
        let program = parse("nest.bas", &src).unwrap();
        let mut statement = &program.lines()[0].statements()[0];
        let mut found = 0;
        while let Some(basic::lang::ast::Value::Subexpression(inner)) =
            statement.tokens.last().and_then(|t| t.value())
        {
            found += 1;
            statement = inner;
        }
        prop_assert_eq!(found, depth);
    }

    #[test]
    fn find_token_at_misses_outside_keywords(
        words in prop::collection::vec(select(statement_words()), 1..10),
        character in 0usize..80,
    ) {
        let src = format!("10 {}", words.join(" "));
        let program = parse("query.bas", &src).unwrap();
        let lexemes = lex(&src, Encoding::Utf16).unwrap();
        let inside = lexemes.iter().any(|l| match l.token {
            Token::Keyword(k) => {
                l.position.column <= character && character <= l.position.column + k.len()
            }
            _ => false,
        });
        prop_assert_eq!(program.find_token_at(0, character).is_some(), inside);
    }
}
