use chrono::{TimeZone, Utc};

use verdis_backend::models::application::ApplicationRecord;
use verdis_backend::services::document_service::{
    document_filename, layout, render_pdf, wrap_text,
};

const PAGE_HEIGHT_MM: f32 = 297.0;

fn sample_record() -> ApplicationRecord {
    ApplicationRecord {
        first_name: "Ana".into(),
        last_name: "Horvat".into(),
        email: "ana.horvat@example.com".into(),
        phone: "+385911234567".into(),
        date_of_birth: "1994-03-12".into(),
        nationality: "Croatian".into(),
        address: "Ilica 24, 10000 Zagreb, Croatia".into(),
        occupation: "Software Engineer".into(),
        education: "master".into(),
        skills: "Distributed systems, web platforms and developer tooling.".into(),
        motivation: "I want to contribute my engineering experience to building the digital institutions of Verdis.".into(),
        criminal_record: "no-record".into(),
        agree_terms: true,
    }
}

#[test]
fn wrap_text_keeps_short_text_on_one_line() {
    assert_eq!(wrap_text("hello world", 40), vec!["hello world"]);
    assert_eq!(wrap_text("", 40), vec![""]);
}

#[test]
fn wrap_text_breaks_at_word_boundaries() {
    let lines = wrap_text("the quick brown fox jumps over the lazy dog", 15);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(line.chars().count() <= 15, "line too long: {line:?}");
    }
    // No word is split when it fits within the width.
    assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
}

#[test]
fn wrap_text_hard_splits_oversized_words() {
    let lines = wrap_text("abcdefghij", 4);
    assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
}

#[test]
fn layout_places_title_block_and_identity() {
    let record = sample_record();
    let generated_at = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
    let doc = layout(&record, "VR-12345678", generated_at);

    let title = doc.find("FREE REPUBLIC OF VERDIS").expect("title");
    assert_eq!(title.page, 0);
    assert!(title.bold);

    let membership = doc.find("Membership ID:").expect("membership line");
    assert_eq!(membership.text, "Membership ID: VR-12345678");

    let date = doc.find("Application Date:").expect("date line");
    assert_eq!(date.text, "Application Date: 2026-06-01");

    assert!(doc.find("PERSONAL INFORMATION").is_some());
    assert!(doc.find("PROFESSIONAL BACKGROUND").is_some());
    assert!(doc.find("APPLICATION DETAILS").is_some());
    assert_eq!(
        doc.find("Ana Horvat").expect("full name").x,
        80.0
    );
}

/// Global top-down position of a run, pages stacked vertically.
fn global_y(run: &verdis_backend::services::document_service::TextRun) -> f32 {
    run.page as f32 * PAGE_HEIGHT_MM + run.y
}

#[test]
fn long_motivation_pushes_following_content_down() {
    let generated_at = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();

    let short = layout(&sample_record(), "VR-00000001", generated_at);

    let mut record = sample_record();
    record.motivation = "motivation ".repeat(60);
    let long = layout(&record, "VR-00000001", generated_at);

    let short_decl = short.find("Criminal Record Declaration:").unwrap();
    let long_decl = long.find("Criminal Record Declaration:").unwrap();
    assert!(global_y(long_decl) > global_y(short_decl));

    // Status lines stay after the declaration in both layouts.
    let long_status = long.find("APPLICATION STATUS").unwrap();
    assert!(global_y(long_status) > global_y(long_decl));
}

#[test]
fn footer_lands_on_the_final_page() {
    let mut record = sample_record();
    record.skills = "skill ".repeat(200);
    record.motivation = "motivation ".repeat(200);
    let generated_at = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
    let doc = layout(&record, "VR-00000001", generated_at);

    assert!(doc.pages > 1);
    let footer = doc
        .find("Free Republic of Verdis - Ministry of Citizenship")
        .expect("footer");
    assert_eq!(footer.page, doc.pages - 1);
    assert!(doc
        .find("For inquiries: citizenship@verdis.org")
        .is_some());
}

#[test]
fn render_pdf_produces_a_pdf_document() {
    let generated_at = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
    let bytes = render_pdf(&sample_record(), "VR-12345678", generated_at).expect("pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn filename_carries_the_membership_id() {
    assert_eq!(
        document_filename("VR-12345678"),
        "Verdis-Citizenship-Application-VR-12345678.pdf"
    );
}
