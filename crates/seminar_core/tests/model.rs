use pretty_assertions::assert_eq;
use seminar_core::{DeliveryMode, Link, Seminar, SeminarDetail};

fn stub() -> Seminar {
    Seminar {
        seminar_id: Some("42".to_string()),
        title: "Grundlagen der Hochschuldidaktik".to_string(),
        management_url: Some("manage?seminar=42".to_string()),
        links: vec![Link::new("Verwalten", "manage?seminar=42")],
        detail: None,
    }
}

#[test]
fn delivery_mode_defaults_to_unknown() {
    assert_eq!(DeliveryMode::default(), DeliveryMode::Unknown);
    assert_eq!(SeminarDetail::default().delivery_mode, DeliveryMode::Unknown);
}

#[test]
fn delivery_mode_uses_stable_wire_names() {
    assert_eq!(
        serde_json::to_string(&DeliveryMode::Presence).unwrap(),
        "\"praesenz\""
    );
    assert_eq!(DeliveryMode::Hybrid.to_string(), "hybrid");
    let parsed: DeliveryMode = serde_json::from_str("\"online\"").unwrap();
    assert_eq!(parsed, DeliveryMode::Online);
}

#[test]
fn all_links_without_detail_are_own_links() {
    let seminar = stub();
    assert_eq!(seminar.link_urls(), vec!["manage?seminar=42"]);
}

#[test]
fn all_links_append_detail_links_in_order() {
    let mut seminar = stub();
    seminar.attach_detail(SeminarDetail {
        description: "Online-Seminar".to_string(),
        delivery_mode: DeliveryMode::Online,
        registered_count: Some(12),
        links: vec![
            Link::new("Anmeldung", "https://portal.example/anmeldung"),
            Link::new("Link", "manage?seminar=42"),
        ],
    });

    assert_eq!(
        seminar.link_urls(),
        vec![
            "manage?seminar=42",
            "https://portal.example/anmeldung",
            "manage?seminar=42",
        ]
    );
    assert_eq!(seminar.all_links()[1].label, "Anmeldung");
    // The stored links are untouched by the merged view.
    assert_eq!(seminar.links.len(), 1);
}

#[test]
fn attaching_twice_replaces_detail() {
    let mut seminar = stub();
    seminar.attach_detail(SeminarDetail {
        links: vec![Link::new("a", "https://a.example")],
        ..SeminarDetail::default()
    });
    seminar.attach_detail(SeminarDetail::default());

    assert_eq!(seminar.all_links().len(), 1);
    assert_eq!(
        seminar.detail.as_ref().map(SeminarDetail::link_urls),
        Some(Vec::new())
    );
}
