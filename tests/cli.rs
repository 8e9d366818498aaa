use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn songpull() -> Command {
    Command::cargo_bin("songpull").unwrap()
}

#[test]
fn rejects_notrim_combined_with_nodownload() {
    songpull()
        .args(["--notrim", "--nodownload"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_song_list_is_fatal_with_exact_message() {
    let dir = tempfile::tempdir().unwrap();
    songpull()
        .current_dir(dir.path())
        .args(["--wd", "--notrim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "ERROR: Could not find song list \"song-list.txt\".",
        ));
}

#[test]
fn missing_song_list_message_names_the_given_file() {
    let dir = tempfile::tempdir().unwrap();
    songpull()
        .current_dir(dir.path())
        .args(["--wd", "--notrim", "--song-list", "mix.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "ERROR: Could not find song list \"mix.txt\".",
        ));
}

#[test]
fn nodownload_in_an_empty_directory_is_a_quiet_no_op() {
    let dir = tempfile::tempdir().unwrap();
    songpull()
        .current_dir(dir.path())
        .args(["--wd", "--nodownload"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn nodownload_leaves_an_existing_list_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let list = dir.path().join("song-list.txt");
    fs::write(&list, "https://example.com/a\n").unwrap();

    songpull()
        .current_dir(dir.path())
        .args(["--wd", "--nodownload"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&list).unwrap(),
        "https://example.com/a\n"
    );
}

#[test]
fn profile_reintroducing_the_flag_conflict_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let profile = dir.path().join("profile.json");
    fs::write(&profile, r#"{"nodownload": true}"#).unwrap();

    songpull()
        .current_dir(dir.path())
        .args(["--wd", "--notrim", "--profile"])
        .arg(&profile)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be combined"));
}

#[test]
fn unreadable_profile_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    songpull()
        .current_dir(dir.path())
        .args(["--wd", "--profile", "no-such-profile.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load profile"));
}
