//! Digit grouping through the recursive function adapter

use crate::common::*;
use fnkit::core::recursion::recursive_function;
use fnkit::core::{Error, CONFIG_FILE_NAME};
use fnkit::showcase::{insert_separators, DigitGrouping, Scenario};
use tempfile::TempDir;

const CASES: [&str; 3] = ["1234567:1,234,567", "12345:12,345", "123:123"];

#[test]
fn parameterized_cases() {
    init_tracing();
    let grouping = DigitGrouping::default();
    for case in CASES {
        let scenario = Scenario::parse(case).unwrap();
        assert_eq!(
            scenario.run(&grouping),
            scenario.expected,
            "case {}",
            case
        );
        assert_eq!(insert_separators(&scenario.input), scenario.expected);
    }
}

#[test]
fn malformed_case_is_an_error() {
    assert!(matches!(
        Scenario::parse("1234567"),
        Err(Error::InvalidScenario(_))
    ));
}

#[test]
fn always_terminal_operation_is_identity() {
    let id = recursive_function(|_this: &dyn Fn(String) -> String, s: String| s);
    for case in CASES {
        assert_eq!(id(case.to_string()), case);
    }
}

#[test]
fn grouping_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "separator = \" \"\ngroup_size = 3\n").unwrap();

    let config = FormatConfig::from_file(&path).unwrap();
    let grouping = DigitGrouping::with_config(&config).unwrap();
    assert_eq!(grouping.apply("1234567"), "1 234 567");
}

#[test]
fn default_config_file_reproduces_default_grouping() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    FormatConfig::write_default_if_missing(&path).unwrap();

    let config = FormatConfig::from_file_or_default(&path).unwrap();
    let grouping = DigitGrouping::with_config(&config).unwrap();
    assert_eq!(grouping, DigitGrouping::default());
}
