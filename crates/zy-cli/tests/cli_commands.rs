//! Integration tests for the CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn zy() -> Command {
    Command::cargo_bin("zy").unwrap()
}

#[test]
fn cast_is_deterministic_for_a_seed() {
    let run = || {
        let output = zy()
            .args(["cast", "--seed", "7", "--category", "career"])
            .assert()
            .success();
        String::from_utf8(output.get_output().stdout.clone()).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn cast_shows_both_hexagrams() {
    zy().args(["cast", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("本卦:"))
        .stdout(predicate::str::contains("变卦:"));
}

#[test]
fn cast_prints_six_throws() {
    let output = zy()
        .args(["cast", "--seed", "11", "--question", "test"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    for label in ["第1爻", "第2爻", "第3爻", "第4爻", "第5爻", "第6爻"] {
        assert!(stdout.contains(label), "missing {label} in:\n{stdout}");
    }
}

#[test]
fn cast_rejects_unknown_category() {
    zy().args(["cast", "--category", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn hexagrams_lists_all_sixty_four() {
    let output = zy().arg("hexagrams").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("乾为天"));
    assert!(stdout.contains("坤为地"));
    assert!(stdout.contains("火水未济"));
    assert!(stdout.contains("64"));
}

#[test]
fn hexagrams_looks_up_a_key() {
    zy().args(["hexagrams", "111111"])
        .assert()
        .success()
        .stdout(predicate::str::contains("乾为天"));
}

#[test]
fn hexagrams_unknown_key_falls_back_to_sentinel() {
    zy().args(["hexagrams", "abcdef"])
        .assert()
        .success()
        .stdout(predicate::str::contains("未知卦"));
}

#[test]
fn ask_dry_run_prints_the_prompt() {
    // Category 2 (事业方向), a question, then six Enter presses to throw.
    zy().args(["ask", "--seed", "3", "--dry-run"])
        .write_stdin("2\n近期事业变动如何应对？\n\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("用户咨询：事业方向"))
        .stdout(predicate::str::contains("具体问题：近期事业变动如何应对？"))
        .stdout(predicate::str::contains("- 本卦："))
        .stdout(predicate::str::contains("- 变卦："));
}

#[test]
fn ask_rejects_empty_question_until_one_is_given() {
    zy().args(["ask", "--seed", "3", "--dry-run"])
        .write_stdin("1\n\n有问题\n\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("具体问题：有问题"));
}
