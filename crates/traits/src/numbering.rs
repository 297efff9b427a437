//! Source of the running number in the document symbol (`S/2024/417`).

/// Produces the number printed in the document symbol.
///
/// Real documents draw a random placeholder; tests inject a fixed value.
pub trait DocumentNumberSource: Send {
    fn next_number(&mut self) -> u32;
}

/// Always yields the same number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDocumentNumber(pub u32);

impl DocumentNumberSource for FixedDocumentNumber {
    fn next_number(&mut self) -> u32 {
        self.0
    }
}
