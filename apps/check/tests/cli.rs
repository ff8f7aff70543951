use assert_cmd::Command;
use predicates::prelude::*;

const USAGE: &str = "check vowelheavy|firstcons|palindrome word\n";

fn check() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_check"));
    cmd.env_remove("RUST_LOG")
        .env_remove("WORDCHECK__LOG__LEVEL")
        .env_remove("WORDCHECK__LOG__JSON")
        .env_remove("WORDCHECK__PALINDROME__STRICT");
    cmd
}

#[test]
fn no_arguments_prints_usage() {
    check().assert().code(1).stdout(USAGE);
}

#[test]
fn single_argument_prints_usage() {
    check().arg("palindrome").assert().code(1).stdout(USAGE);
}

#[test]
fn unknown_test_is_rejected() {
    check().args(["isnoun", "cat"]).assert().code(1).stdout("Huh?\n");
    check().args(["PALINDROME", "noon"]).assert().code(1).stdout("Huh?\n");
    check().args(["--help", "noon"]).assert().code(1).stdout("Huh?\n");
}

#[test]
fn documented_examples() {
    let cases = [
        ("vowelheavy", "aeiou", "yes\n"),
        ("vowelheavy", "xyz", "no\n"),
        ("vowelheavy", "", "no\n"),
        ("firstcons", "1abc", "no\n"),
        ("firstcons", "bat", "yes\n"),
        ("firstcons", "at", "no\n"),
        ("firstcons", "", "no\n"),
        ("palindrome", "noon", "yes\n"),
        ("palindrome", "a toyotas a toyota", "yes\n"),
        ("palindrome", "hello", "no\n"),
        ("palindrome", "", "yes\n"),
        ("palindrome", "A", "yes\n"),
    ];

    for (test, word, expected) in cases {
        check().args([test, word]).assert().success().stdout(expected);
    }
}

#[test]
fn hostile_words_are_plain_data() {
    for word in ["%s%s%s%n", "%x %p %n", "$(touch /tmp/pwned)", "`id`; rm -rf ~", "a|b>c&&d", "-rf"] {
        check()
            .args(["palindrome", word])
            .assert()
            .success()
            .stdout(predicate::str::is_match("^(yes|no)\n$").unwrap());
    }
}

#[test]
fn same_invocation_twice_is_identical() {
    let first = check().args(["vowelheavy", "queue"]).output().unwrap();
    let second = check().args(["vowelheavy", "queue"]).output().unwrap();

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, b"yes\n");
}

#[test]
fn long_words_are_accepted() {
    let word = format!("{}x{}", "ab".repeat(30_000), "ba".repeat(30_000));
    check().args(["palindrome", word.as_str()]).assert().success().stdout("yes\n");
    check().args(["firstcons", word.as_str()]).assert().success().stdout("no\n");
}

#[test]
fn extra_arguments_are_ignored() {
    check().args(["firstcons", "bat", "and", "more"]).assert().success().stdout("yes\n");
}

#[cfg(unix)]
#[test]
fn non_utf8_words_are_classified_by_their_ascii_bytes() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    check()
        .arg("firstcons")
        .arg(OsStr::from_bytes(b"b\xff\xfe"))
        .assert()
        .success()
        .stdout("yes\n");
}

#[cfg(unix)]
#[test]
fn invalid_utf8_sequences_compare_equal_after_replacement() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    check()
        .env("WORDCHECK__PALINDROME__STRICT", "true")
        .arg("palindrome")
        .arg(OsStr::from_bytes(b"\xffa\xfe"))
        .assert()
        .success()
        .stdout("yes\n");
}

#[test]
fn strict_palindrome_from_environment() {
    check()
        .env("WORDCHECK__PALINDROME__STRICT", "true")
        .args(["palindrome", "a toyotas a toyota"])
        .assert()
        .success()
        .stdout("no\n");
}

#[test]
fn malformed_environment_fails_before_output() {
    check()
        .env("WORDCHECK__PALINDROME__STRICT", "maybe")
        .args(["palindrome", "noon"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Configuration is malformed"));
}

#[test]
fn diagnostics_stay_on_stderr() {
    check().args(["palindrome", "noon"]).assert().success().stdout("yes\n").stderr("");

    check()
        .args(["-vv", "palindrome", "noon"])
        .assert()
        .success()
        .stdout("yes\n")
        .stderr(predicate::str::contains("Configuration loaded"))
        .stderr(predicate::str::contains("Predicates registered"));
}

#[test]
fn flag_like_test_names_are_unknown_tests() {
    for args in [["-V", "x"], ["-v", "x"], ["--", "x"], ["-x", "noon"], ["--version", "noon"]] {
        check().args(args).assert().code(1).stdout("Huh?\n");
    }
    check().args(["-V", "palindrome", "noon"]).assert().code(1).stdout("Huh?\n");
}

#[test]
fn escape_token_as_word_is_data() {
    check().args(["firstcons", "--", "bat"]).assert().success().stdout("no\n");
}

#[test]
fn version_flag() {
    check()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
