//! End-to-end rendering through the PDF backend.

use chrono::NaiveDate;
use quote_core::{
    ClientField, LocaleFormat, Pricing, ProjectCategory, ProjectField, QuoteState, SequentialIds,
};
use quote_document::{quote_file_name, DocumentBackend, DocumentError, PdfBackend, QuoteLayout};

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn issue_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn sample_state(items: usize) -> QuoteState<SequentialIds> {
    let mut state = QuoteState::with_ids(Pricing::default(), SequentialIds::new());
    state.set_client_field(ClientField::Name, "Bianchi & Figli");
    state.set_client_field(ClientField::Email, "amministrazione@bianchi.it");
    state.set_project_field(ProjectField::Name, "Sito Web E-commerce");
    state.set_project_field(
        ProjectField::Description,
        "Negozio online con catalogo, carrello e pagamenti.",
    );
    state.set_project_category(Some(ProjectCategory::Ecommerce));
    for i in 1..=items {
        state.add_item(&format!("Attività {i}"), 1.5).unwrap();
    }
    state
}

#[test]
fn renders_a_single_page_quote() {
    let state = sample_state(3);
    let format = LocaleFormat::italian_euro();
    let mut backend = PdfBackend::new();

    let summary = QuoteLayout::new(state.quote(), state.pricing(), &format, issue_date())
        .render(&mut backend)
        .unwrap();
    assert_eq!(summary.page_count, 1);

    let bytes = backend.finish();
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(contains(&bytes, b"(QUOTE)"));
    assert!(contains(&bytes, b"(Page 1 of 1)"));
    assert!(contains(&bytes, b"(Project: Sito Web E-commerce)"));
    assert!(contains(&bytes, b"(ACTIVITY BREAKDOWN)"));
}

#[test]
fn long_item_list_spans_several_pages() {
    let state = sample_state(90);
    let format = LocaleFormat::italian_euro();
    let mut backend = PdfBackend::new();

    let summary = QuoteLayout::new(state.quote(), state.pricing(), &format, issue_date())
        .render(&mut backend)
        .unwrap();

    assert!(summary.page_count >= 3);
    assert_eq!(backend.page_count(), summary.page_count);

    let bytes = backend.finish();
    for page in 1..=summary.page_count {
        let stamp = format!("(Page {page} of {})", summary.page_count);
        assert!(contains(&bytes, stamp.as_bytes()), "missing {stamp}");
    }
}

#[test]
fn empty_quote_is_not_rendered() {
    let state = QuoteState::with_ids(Pricing::default(), SequentialIds::new());
    let format = LocaleFormat::italian_euro();
    let mut backend = PdfBackend::new();

    let result = QuoteLayout::new(state.quote(), state.pricing(), &format, issue_date())
        .render(&mut backend);

    assert!(matches!(result, Err(DocumentError::EmptyQuote)));
}

#[test]
fn saves_under_the_quote_file_name() {
    let state = sample_state(2);
    let format = LocaleFormat::italian_euro();
    let mut backend = PdfBackend::new();
    QuoteLayout::new(state.quote(), state.pricing(), &format, issue_date())
        .render(&mut backend)
        .unwrap();

    let dir = std::env::temp_dir().join(format!("quote-document-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(quote_file_name(&state.quote().project.name));
    backend.save(&path).unwrap();

    assert!(path.ends_with("Quote_Sito_Web_Ecommerce.pdf"));
    let written = std::fs::read(&path).unwrap();
    assert!(written.starts_with(b"%PDF-"));

    std::fs::remove_dir_all(&dir).unwrap();
}
