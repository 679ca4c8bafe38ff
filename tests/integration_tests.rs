//! Integration tests using scenario fixtures
//!
//! Each file in testdata/scenarios/ holds a JSON scenario, a `---` line,
//! and the expected step-by-step report. Run all tests with: cargo test

use std::fs;
use std::path::PathBuf;

/// Get the path to the scenario fixture directory
fn get_scenario_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/scenarios")
}

/// Parse a fixture file into (input, expected_output)
fn parse_test_file(content: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = content.splitn(2, "\n---\n").collect();
    if parts.len() != 2 {
        return None;
    }
    Some((parts[0].to_string(), parts[1].trim_end().to_string()))
}

/// Normalize output for comparison (trim trailing whitespace from each line)
fn normalize_output(s: &str) -> String {
    s.lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Run a specific fixture file
fn run_scenario_test(test_name: &str) {
    let test_file = get_scenario_dir().join(format!("{}.txt", test_name));
    let content = fs::read_to_string(&test_file)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", test_file, e));

    let (input, expected) = parse_test_file(&content)
        .unwrap_or_else(|| panic!("Failed to parse test file: {:?}", test_file));

    let actual = textfit::run_scenario(&input)
        .unwrap_or_else(|e| panic!("Failed to run scenario: {}", e));

    let expected_normalized = normalize_output(&expected);
    let actual_normalized = normalize_output(&actual);

    if expected_normalized != actual_normalized {
        eprintln!("=== Test: {} ===", test_name);
        eprintln!("Input:\n{}", input);
        eprintln!("\n--- Expected ---");
        eprintln!("{}", expected_normalized);
        eprintln!("\n--- Actual ---");
        eprintln!("{}", actual_normalized);
        eprintln!("\n--- Diff ---");

        let expected_lines: Vec<_> = expected_normalized.lines().collect();
        let actual_lines: Vec<_> = actual_normalized.lines().collect();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).unwrap_or(&"<missing>");
            let act = actual_lines.get(i).unwrap_or(&"<missing>");
            if exp != act {
                eprintln!("Line {}: expected {:?}", i + 1, exp);
                eprintln!("Line {}: actual   {:?}", i + 1, act);
            }
        }

        panic!("Output mismatch for test: {}", test_name);
    }
}

/// Macro to generate a test function per fixture
macro_rules! scenario_test {
    ($name:ident) => {
        paste::paste! {
            #[test]
            fn [<scenario_ $name>]() {
                run_scenario_test(stringify!($name));
            }
        }
    };
}

scenario_test!(basic_attach);
scenario_test!(clamp_bounds);
scenario_test!(debounce_collapse);
scenario_test!(multiple_targets);
scenario_test!(resize_debounce);
scenario_test!(resize_spacing);
scenario_test!(scale_option);
scenario_test!(string_bounds);
scenario_test!(zero_width_probe);
