// tests/common.rs

use assert_cmd::Command;

/// Returns a `Command` for the `codecat` binary under test.
pub fn codecat_cmd() -> Command {
    Command::cargo_bin("codecat").expect("binary 'codecat' should be built")
}
