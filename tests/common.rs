//! Test utilities for cli-template integration tests

use cli_template::App;
use termcolor::Buffer;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Captured outcome of one in-process invocation
#[derive(Debug)]
pub struct CliOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// Run the dispatcher with `args` (program name is prepended)
pub fn run_cli(args: &[&str]) -> TestResult<CliOutput> {
    let argv: Vec<&str> = std::iter::once("cli-template")
        .chain(args.iter().copied())
        .collect();

    let mut out = Buffer::no_color();
    let mut err = Buffer::no_color();
    let code = App::new().run_with(argv, &mut out, &mut err);

    Ok(CliOutput {
        code,
        stdout: String::from_utf8(out.into_inner())?,
        stderr: String::from_utf8(err.into_inner())?,
    })
}

/// Extract Ok value or panic with context
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}
