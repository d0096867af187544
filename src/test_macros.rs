//! Declarative macros for generating CLI parsing tests.
//!
//! Reduces boilerplate in CLI argument parsing tests: declare the command and
//! the cases, and let the macro generate the test functions.

/// Generate a test asserting that a command rejects an incomplete argument
/// list (one or more required arguments missing).
#[macro_export]
macro_rules! cli_required_args_test {
    (
        command: $cmd:literal,
        args: [$($arg:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn test_incomplete_args_rejected() {
            let result = Args::try_parse_from(["laragen", $cmd, $($arg),*]);
            assert!(
                result.is_err(),
                concat!("'", $cmd, "' should require more arguments")
            );
        }
    };
}

/// Generate a single CLI option test.
#[macro_export]
macro_rules! cli_option_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from([
                "laragen",
                $cmd,
                $($arg),+
            ]).unwrap();
            match args.command {
                crate::commands::Command::$variant(cmd) => {
                    assert_eq!(cmd.$field, $expected,
                        concat!("Field ", stringify!($field), " mismatch"));
                }
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }
    };
}
