use seminar_engine::resolve_seminar_id;

#[test]
fn first_candidate_parameter_wins() {
    assert_eq!(
        resolve_seminar_id("https://x/y?seminar=42&id=7").as_deref(),
        Some("42")
    );
    assert_eq!(
        resolve_seminar_id("https://x/y?seminarId=5&id=7").as_deref(),
        Some("7")
    );
}

#[test]
fn relative_links_are_resolved() {
    assert_eq!(resolve_seminar_id("detail?seminarId=99").as_deref(), Some("99"));
    assert_eq!(resolve_seminar_id("/manage.php?id=12&tab=2").as_deref(), Some("12"));
}

#[test]
fn first_value_of_repeated_parameter_is_used() {
    assert_eq!(
        resolve_seminar_id("https://x/y?seminar=a&seminar=b").as_deref(),
        Some("a")
    );
}

#[test]
fn blank_values_do_not_count() {
    assert_eq!(resolve_seminar_id("https://x/y?seminar=&id=8").as_deref(), Some("8"));
    assert_eq!(resolve_seminar_id("https://x/y?seminar="), None);
}

#[test]
fn values_are_percent_decoded_but_otherwise_verbatim() {
    assert_eq!(
        resolve_seminar_id("https://x/y?seminar=WS%2026-01").as_deref(),
        Some("WS 26-01")
    );
    assert_eq!(resolve_seminar_id("https://x/y?seminar=007").as_deref(), Some("007"));
}

#[test]
fn no_match_cases_return_none() {
    assert_eq!(resolve_seminar_id("https://x/y"), None);
    assert_eq!(resolve_seminar_id("https://x/y?tab=2"), None);
    assert_eq!(resolve_seminar_id("https://x/y?ID=2"), None);
    assert_eq!(resolve_seminar_id(""), None);
    assert_eq!(resolve_seminar_id("http://[::1"), None);
    assert_eq!(resolve_seminar_id("https://x/y#seminar=3"), None);
}
