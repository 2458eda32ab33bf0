//! Integration tests for the vlc-protocol crate.
//!
//! These tests go from selected text to the exact request the player would
//! receive, crossing the timestamp, settings, and request modules.

use vlc_protocol::request::{basic_auth_header, command_url, Endpoint, PlayerCommand, PlayerRequest};
use vlc_protocol::settings::Settings;
use vlc_protocol::timestamp::{extract, Timestamp};

// ---------------------------------------------------------------------------
// 1. Text -> seek request
// ---------------------------------------------------------------------------

#[test]
fn transcript_line_to_seek_url_with_default_settings() {
    let settings = Settings::default();
    let ts = extract("[00:01:02.500] --> [00:01:05.000] hello").expect("timestamp in line");

    let req = PlayerRequest::seek(&Endpoint::from(&settings), &ts);

    assert_eq!(
        req.url,
        "http://127.0.0.1:8080/requests/status.xml?val=0H%3A1M%3A2S&command=seek"
    );
    assert_eq!(req.authorization, "Basic Og==");
}

#[test]
fn minutes_only_selection_to_seek_url() {
    let settings = Settings::from_toml(
        "host = \"http://192.168.1.20\"\nport = \"9090\"\npassword = \"vetinari\"\n",
    )
    .unwrap();
    let ts = extract("see 12:34.5 for the good part").unwrap();

    let req = PlayerRequest::seek(&Endpoint::from(&settings), &ts);

    assert_eq!(
        req.url,
        "http://192.168.1.20:9090/requests/status.xml?val=12M%3A34S&command=seek"
    );
    assert_eq!(req.authorization, "Basic OnZldGluYXJp");
}

#[test]
fn selection_without_timestamp_builds_nothing() {
    for text in ["", "10:30", "chapter 4", "1:02:03", "3.14"] {
        assert!(extract(text).is_none(), "unexpected match in {:?}", text);
    }
}

// ---------------------------------------------------------------------------
// 2. Seek value formatting
// ---------------------------------------------------------------------------

#[test]
fn seek_value_formats() {
    let cases = [
        ("5:09.0", "5M:9S"),
        ("2:00:00.0", "2H:0M:0S"),
        ("1:02:03.456", "1H:2M:3S"),
        ("0:00.1", "0M:0S"),
    ];
    for (text, expected) in cases {
        assert_eq!(Timestamp::find(text).unwrap().seek_value(), expected, "for {}", text);
    }
}

// ---------------------------------------------------------------------------
// 3. URL determinism and auth
// ---------------------------------------------------------------------------

#[test]
fn identical_inputs_give_identical_urls() {
    let params = [("val", "1H:2M:3S")];
    let first = command_url("http://127.0.0.1", "8080", PlayerCommand::Seek.as_str(), &params);
    for _ in 0..10 {
        let again = command_url("http://127.0.0.1", "8080", PlayerCommand::Seek.as_str(), &params);
        assert_eq!(first, again);
    }
    assert!(first.ends_with("&command=seek"));
}

#[test]
fn auth_header_matches_for_various_passwords() {
    // base64(":" + pw), computed independently
    let cases = [
        ("", "Og=="),
        ("a", "OmE="),
        ("vetinari", "OnZldGluYXJp"),
        ("p:ss", "OnA6c3M="),
    ];
    for (password, encoded) in cases {
        assert_eq!(basic_auth_header(password), format!("Basic {}", encoded));
    }
}

#[test]
fn every_request_carries_auth() {
    let endpoint = Endpoint::new("http://127.0.0.1", "8080", "pw");
    let seek = PlayerRequest::seek(&endpoint, &Timestamp::new(None, 1, 2));
    let resume = PlayerRequest::force_resume(&endpoint);
    assert_eq!(seek.authorization, resume.authorization);
    assert_eq!(seek.authorization, basic_auth_header("pw"));
}
