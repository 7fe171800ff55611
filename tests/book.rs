use std::fs;

use calculon::Session;
use walkdir::WalkDir;

/// One `expression => expected` line from a `calc` block.
#[derive(Debug)]
struct Example {
    line:       usize,
    expression: String,
    expected:   f64,
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for example in calc_examples(&content) {
            count += 1;
            let value =
                Session::new().evaluate(&example.expression)
                              .unwrap_or_else(|e| panic!("{path:?}:{} does not lex: {e}", example.line));
            assert!(same_value(value, example.expected),
                    "{path:?}:{}: `{}` gave {value}, expected {}",
                    example.line,
                    example.expression,
                    example.expected);
        }
    }

    assert!(count > 0, "No calc examples found in book/src");
}

/// Collects the examples of every ```` ```calc ```` block, one per non-blank
/// line, with their 1-based line numbers.
fn calc_examples(content: &str) -> Vec<Example> {
    let mut examples = Vec::new();
    let mut inside = false;

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            inside = !inside && trimmed == "```calc";
            continue;
        }
        if !inside || trimmed.is_empty() {
            continue;
        }

        let (expression, expected) =
            trimmed.split_once("=>")
                   .unwrap_or_else(|| panic!("line {}: missing `=>` in {trimmed:?}", index + 1));
        examples.push(Example { line:       index + 1,
                                expression: expression.trim().to_string(),
                                expected:   expected_value(expected.trim()), });
    }

    examples
}

fn expected_value(text: &str) -> f64 {
    match text {
        "NaN" => f64::NAN,
        "inf" => f64::INFINITY,
        "-inf" => f64::NEG_INFINITY,
        other => other.parse()
                      .unwrap_or_else(|e| panic!("Bad expected value {other:?}: {e}")),
    }
}

fn same_value(value: f64, expected: f64) -> bool {
    if expected.is_nan() {
        return value.is_nan();
    }
    if expected.is_infinite() {
        return value == expected;
    }

    (value - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

#[test]
fn only_calc_blocks_are_collected() {
    let content = "text\n```calc\n1 + 1 => 2\n\n0 ÷ 0 => NaN\n```\nmore\n```rust\nlet x = 1;\n```\n";
    let examples = calc_examples(content);

    assert_eq!(examples.len(), 2);
    assert_eq!(examples[0].line, 3);
    assert_eq!(examples[0].expression, "1 + 1");
    assert_eq!(examples[0].expected, 2.0);
    assert_eq!(examples[1].expression, "0 ÷ 0");
    assert!(examples[1].expected.is_nan());
}
