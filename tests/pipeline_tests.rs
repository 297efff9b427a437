mod common;

use common::pdf_assertions::{operator_count, page_of};
use common::{SYMBOL_NUMBER, SYMBOL_YEAR, TestResult, pipeline_with_icon, render, source};
use resolutio::example::{SAHEL_FILE_NAME, SAHEL_RESOLUTION};
use resolutio::traits::{NoIcon, RasterImage, StaticIcon};
use resolutio::{ParseError, PipelineBuilder, PipelineConfig, PipelineError};
use std::sync::Arc;

#[test]
fn test_missing_front_matter_is_a_parse_error() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let pipeline = pipeline_with_icon(Arc::new(NoIcon))?;
    let result = tokio::runtime::Runtime::new()?.block_on(pipeline.render("# Nur ein Titel\n"));
    match result {
        Err(PipelineError::Parse(ParseError::MissingFrontMatter)) => {}
        other => panic!("expected a front matter error, got {:?}", other.map(|d| d.pages)),
    }
    Ok(())
}

#[test]
fn test_sample_resolution_header() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let pdf = render(SAHEL_RESOLUTION)?;

    assert_pdf_contains_text!(pdf, "Vereinte Nationen");
    assert_pdf_contains_text!(pdf, "S/2024/417");
    assert_pdf_contains_text!(pdf, "Verteilung: Allgemein");
    assert_pdf_contains_text!(pdf, "20. November 2024");
    // The committee name is too wide for one line.
    assert_pdf_contains_text!(pdf, "Kommission für Wissenschaft,");
    assert_pdf_contains_text!(pdf, "Umwelt und Technik");
    assert_pdf_contains_text!(pdf, "Die Kommission für Wissenschaft, Umwelt und Technik,");
    assert_pdf_contains_text!(pdf, "Operative Bestimmungen");
    assert_pdf_contains_text!(pdf, "• Schwache staatliche Institutionen");
    Ok(())
}

#[test]
fn test_sample_resolution_document() -> TestResult {
    let pdf = render(SAHEL_RESOLUTION)?;
    assert_eq!(pdf.document.export_file_name(), SAHEL_FILE_NAME);
    assert_eq!(pdf.document.symbol.to_string(), format!("S/{SYMBOL_YEAR}/{SYMBOL_NUMBER}"));
    assert_pdf_page_count!(pdf, pdf.document.pages);

    // Emphasis markers are consumed, never painted.
    assert_pdf_not_contains_text!(pdf, "*verurteilt*");
    assert_pdf_not_contains_text!(pdf, "**mit Besorgnis");
    assert_pdf_contains_text!(pdf, "verurteilt");
    assert_pdf_contains_text!(pdf, "mit Besorgnis feststellend");
    Ok(())
}

#[test]
fn test_unknown_committee_falls_back() -> TestResult {
    let pdf = render(&source("XYZ", "1. beschließt, befasst zu bleiben."))?;
    assert_pdf_contains_text!(pdf, "Der Sicherheitsrat,");
    assert_pdf_not_contains_text!(pdf, "XYZ");
    Ok(())
}

#[test]
fn test_unparseable_date_is_shown_verbatim() -> TestResult {
    let text = source("GV", "Text").replace("2024-11-20", "demnächst");
    let pdf = render(&text)?;
    assert_pdf_contains_text!(pdf, "demnächst");
    assert_eq!(pdf.document.export_file_name(), "UN_Resolution_demnächst.pdf");
    Ok(())
}

#[test]
fn test_long_body_paginates_in_order() -> TestResult {
    let body: Vec<String> = (1..=60)
        .map(|i| format!("{i}. ersucht den Generalsekretär, Bericht über Absatz {i} zu erstatten;"))
        .collect();
    let pdf = render(&source("SR", &body.join("\n")))?;

    assert!(pdf.page_count() > 1);
    assert_pdf_page_count!(pdf, pdf.document.pages);
    let first = page_of(&pdf.doc, "Absatz 1 ").ok_or("first paragraph missing")?;
    let last = page_of(&pdf.doc, "Absatz 60 ").ok_or("last paragraph missing")?;
    assert_eq!(first, 0);
    assert_eq!(last, pdf.page_count() - 1);
    Ok(())
}

#[test]
fn test_emblem_outline_without_icon() -> TestResult {
    let pdf = render(&source("GV", ""))?;
    assert_eq!(operator_count(&pdf.doc, "Do"), 0);
    // Circle outline: four Bezier segments.
    assert_eq!(operator_count(&pdf.doc, "c"), 4);
    Ok(())
}

#[test]
fn test_icon_is_placed_once() -> TestResult {
    let icon = Arc::new(RasterImage::solid(16, 16, [0, 94, 184]));
    let pipeline = pipeline_with_icon(Arc::new(StaticIcon(icon)))?;
    let document = tokio::runtime::Runtime::new()?.block_on(pipeline.render(&source("GV", "Text")))?;
    let pdf = common::GeneratedPdf::from_document(document)?;
    assert_eq!(operator_count(&pdf.doc, "Do"), 1);
    assert_eq!(operator_count(&pdf.doc, "c"), 4);
    Ok(())
}

#[test]
fn test_missing_icon_file_still_renders() -> TestResult {
    let assets = tempfile::tempdir()?;
    let pipeline = PipelineBuilder::new()
        .with_config(PipelineConfig {
            asset_dir: assets.path().to_path_buf(),
            ..Default::default()
        })
        .with_year(SYMBOL_YEAR)
        .build()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let first = runtime.block_on(pipeline.render(&source("RE", "Text")))?;
    let second = runtime.block_on(pipeline.render(&source("RE", "Text")))?;
    for document in [first, second] {
        let pdf = common::GeneratedPdf::from_document(document)?;
        assert_eq!(operator_count(&pdf.doc, "Do"), 0);
        assert_pdf_contains_text!(pdf, "Kommission für Recht und Ethik");
    }
    Ok(())
}

#[test]
fn test_data_uri_embeds_pdf() -> TestResult {
    let pdf = render(&source("WS", "Text"))?;
    let uri = pdf.document.to_data_uri();
    assert!(uri.starts_with("data:application/pdf;base64,JVBERi0"));
    Ok(())
}

#[test]
fn test_write_into_uses_export_name() -> TestResult {
    let out = tempfile::tempdir()?;
    let pdf = render(&source("WS", "Text"))?;
    let path = pdf.document.write_into(out.path())?;
    assert_eq!(path, out.path().join("UN_Resolution_2024_11_20.pdf"));
    assert_eq!(std::fs::read(path)?, pdf.document.bytes);
    Ok(())
}
