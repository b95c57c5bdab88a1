use std::fs;
use std::path::Path;

use narayan_script::{
    Config, PrintHandler, RuntimeError, ScriptError, SyntaxError, Token, TokenKind, Value, run,
    tokenize,
};
use pretty_assertions::assert_eq;

fn output_of(src: &str) -> Vec<String> {
    match run(src, &Config::default(), PrintHandler::buffer()) {
        Ok(interp) => interp.output().iter().map(Value::to_string).collect(),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn failure_of(src: &str) -> ScriptError {
    match run(src, &Config::default(), PrintHandler::buffer()) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => e,
    }
}

#[test]
fn assignment_then_print() {
    let interp = run("x a 7 rakho; x dekha;", &Config::default(), PrintHandler::buffer()).unwrap();
    assert_eq!(interp.output(), &[Value::Int(7)]);

    let env = interp.environment();
    assert_eq!(env.len(), 1);
    assert_eq!(env.get("x"), Some(&Value::Int(7)));
}

#[test]
fn if_else_is_exclusive() {
    assert_eq!(
        output_of("jodi (5 beshi 3) { \"yes\" dekha; } naile { \"no\" dekha; }"),
        vec!["yes"]
    );
    assert_eq!(
        output_of("jodi (3 beshi 5) { \"yes\" dekha; } naile { \"no\" dekha; }"),
        vec!["no"]
    );
}

#[test]
fn quote_turns_pending_word_into_string() {
    assert_eq!(output_of("salam\" dekha;"), vec!["salam"]);
    assert_eq!(output_of("dekha\" dekha;"), vec!["dekha"]);
}

#[test]
fn space_inside_quotes_still_splits_words() {
    // Parses as `x`, then STRING(y) dekha; the stray name is skipped
    assert_eq!(output_of("\"x y\" dekha;"), vec!["y"]);
}

#[test]
fn while_runs_body_until_condition_fails() {
    assert_eq!(
        output_of("count a 1 rakho; jotokhon (count kom 4) { count dekha; count a 4 rakho; }"),
        vec!["1"]
    );
}

#[test]
fn while_with_false_condition_never_runs() {
    assert!(output_of("jotokhon (1 beshi 2) { \"never\" dekha; }").is_empty());
}

#[test]
fn undefined_variable_prints_nothing() {
    let err = failure_of("y dekha;");
    assert!(matches!(
        err,
        ScriptError::Runtime(RuntimeError::UndefinedVariable { ref name }) if name == "y"
    ));
    assert_eq!(err.to_string(), "Runtime error: variable 'y' is not defined");
}

#[test]
fn missing_semicolon_runs_nothing() {
    // The first statement is well formed but must not execute
    let err = failure_of("\"before\" dekha; x a 7 rakho");
    assert!(matches!(
        err,
        ScriptError::Syntax(SyntaxError::UnexpectedToken {
            expected: TokenKind::Semi,
            found: TokenKind::Eof,
            ..
        })
    ));
}

#[test]
fn arithmetic_keywords_are_not_supported() {
    // er_sathe, gun and vag are lexed but no expression consumes them
    let tokens: Vec<Token> = tokenize("jog a x er_sathe y rakho;")
        .unwrap()
        .into_iter()
        .map(|t| t.token)
        .collect();
    assert!(tokens.contains(&Token::Plus));

    for src in [
        "x a 1; y a 2; jog a x er_sathe y rakho;",
        "x a 2 gun 3;",
        "x a 6 vag 2;",
    ] {
        let err = failure_of(src);
        assert!(
            matches!(
                err,
                ScriptError::Syntax(SyntaxError::UnexpectedToken {
                    expected: TokenKind::Semi,
                    ..
                })
            ),
            "{src}: {err}"
        );
    }
}

#[test]
fn statements_without_semicolons_do_not_parse() {
    let src = "
    x a 10 rakho
    y a 5 rakho
    \"Jogfol:\" dekha
    ";
    assert!(matches!(failure_of(src), ScriptError::Syntax(_)));
}

#[test]
fn infinite_loop_parses_but_is_not_run() {
    // jotokhon (1 shoman 1) { } would never return: loops have no bound
    let program =
        narayan_script::parser::parse("jotokhon (1 shoman 1) { }", &Config::default()).unwrap();
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn lenient_skip_ignores_stray_tokens() {
    assert_eq!(output_of("} ; 42 naile \"ok\" dekha; rakho"), vec!["ok"]);
}

#[test]
fn parenthesised_operands() {
    assert_eq!(
        output_of("x a (3); jodi ((x) shoman (3)) { x dekha; }"),
        vec!["3"]
    );
}

#[test]
fn nesting_limit_is_configurable() {
    let src = "jodi (1 shoman 1) { jodi (1 shoman 1) { \"deep\" dekha; } }";
    let err = run(src, &Config::with_max_depth(1), PrintHandler::buffer()).err();
    assert!(matches!(
        err,
        Some(ScriptError::Syntax(SyntaxError::NestingTooDeep { limit: 1, .. }))
    ));
    assert_eq!(output_of(src), vec!["deep"]);
}

#[test]
fn demos_run() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let mut count = 0;

    for entry in fs::read_dir(&dir).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_none_or(|ext| ext != "ngs") {
            continue;
        }
        count += 1;
        let src = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        if let Err(e) = run(&src, &Config::default(), PrintHandler::Silent) {
            panic!("Demo {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No demos found in {dir:?}");
}

#[test]
fn demo_outputs() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let read = |name: &str| fs::read_to_string(dir.join(name)).unwrap();

    assert_eq!(
        output_of(&read("hello.ngs")),
        vec!["Salam", "naam:", "10"]
    );
    assert_eq!(output_of(&read("if_else.ngs")), vec!["boro"]);
    assert_eq!(output_of(&read("while.ngs")), vec!["1", "2", "3", "shesh"]);
}
