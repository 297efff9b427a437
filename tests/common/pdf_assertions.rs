use lopdf::Document as LopdfDocument;
use lopdf::content::Operation;
use resolutio::render::encode_win_ansi;

fn page_operations(doc: &LopdfDocument) -> Vec<Vec<Operation>> {
    doc.get_pages()
        .values()
        .map(|id| {
            doc.get_and_decode_page_content(*id)
                .map(|content| content.operations)
                .unwrap_or_default()
        })
        .collect()
}

/// The bytes of every `Tj` on each page, concatenated in paint order.
///
/// Lines are painted word by word including the spaces between words, so a
/// phrase on one line shows up contiguously.
pub fn page_text(doc: &LopdfDocument) -> Vec<Vec<u8>> {
    page_operations(doc)
        .iter()
        .map(|ops| {
            ops.iter()
                .filter(|op| op.operator == "Tj")
                .filter_map(|op| op.operands.first().and_then(|o| o.as_str().ok()))
                .flat_map(|s| s.iter().copied())
                .collect()
        })
        .collect()
}

/// Index of the first page (0-based) showing `text`.
pub fn page_of(doc: &LopdfDocument, text: &str) -> Option<usize> {
    let needle = encode_win_ansi(text);
    page_text(doc)
        .iter()
        .position(|page| page.windows(needle.len()).any(|w| w == needle.as_slice()))
}

/// Count of a drawing operator across all pages.
pub fn operator_count(doc: &LopdfDocument, operator: &str) -> usize {
    page_operations(doc)
        .iter()
        .flatten()
        .filter(|op| op.operator == operator)
        .count()
}

/// Assert that the PDF shows `text` on some page
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        assert!(
            $crate::common::pdf_assertions::page_of(&$pdf.doc, $text).is_some(),
            "PDF should contain '{}'",
            $text
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        assert!(
            $crate::common::pdf_assertions::page_of(&$pdf.doc, $text).is_none(),
            "PDF should NOT contain '{}'",
            $text
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}
