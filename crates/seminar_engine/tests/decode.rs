use pretty_assertions::assert_eq;
use seminar_core::DeliveryMode;
use seminar_engine::{decode_page, parse_detail};

#[test]
fn latin1_page_keeps_umlauts() {
    let bytes = b"<div class=\"seminar-description\">in Pr\xe4senz</div>";
    let decoded = decode_page(bytes, Some("text/html; charset=ISO-8859-1")).unwrap();

    assert_eq!(decoded.html, "<div class=\"seminar-description\">in Präsenz</div>");
    assert_eq!(parse_detail(&decoded.html).delivery_mode, DeliveryMode::Presence);
}

#[test]
fn utf8_bom_overrides_header() {
    let decoded = decode_page(b"\xEF\xBB\xBFAngemeldete: 4", Some("text/html; charset=latin1")).unwrap();
    assert_eq!(decoded.html, "Angemeldete: 4");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn plain_utf8_without_hint_is_detected() {
    let decoded = decode_page("<p>Präsenz vor Ort</p>".as_bytes(), None).unwrap();
    assert_eq!(decoded.html, "<p>Präsenz vor Ort</p>");
}

#[test]
fn invalid_utf8_under_declared_charset_is_an_error() {
    let err = decode_page(b"Pr\xe4senz", Some("text/html; charset=utf-8")).unwrap_err();
    assert!(err.to_string().contains("UTF-8"));
}
