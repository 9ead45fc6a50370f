mod common;

use boleto::{DocumentBuilder, LayoutMode};
use common::fixtures::{DIGITABLE_LINE, record_for};
use common::{TestResult, render};

fn carne() -> DocumentBuilder {
    DocumentBuilder::new().with_mode(LayoutMode::Carne)
}

#[test]
fn test_two_slips_per_landscape_page() -> TestResult {
    let records = [
        record_for("Ana Lima", "1/3"),
        record_for("Bruno Costa", "2/3"),
        record_for("Carla Dias", "3/3"),
    ];
    let pdf = render(carne(), &records)?;

    assert_eq!(pdf.page_count(), 2);
    let (width, height) = pdf.page_size(1)?;
    assert!(width > height);

    assert!(pdf.page_contains(1, "Ana Lima")?);
    assert!(pdf.page_contains(1, "Bruno Costa")?);
    assert!(pdf.page_contains(2, "Carla Dias")?);
    assert!(!pdf.page_contains(2, "Ana Lima")?);
    Ok(())
}

#[test]
fn test_odd_slip_draws_a_single_pair() -> TestResult {
    let pdf = render(carne(), &[record_for("Ana Lima", "1/1")])?;

    let digitable_lines = pdf
        .page_strings(1)?
        .into_iter()
        .filter(|s| s.as_slice() == DIGITABLE_LINE.as_bytes())
        .count();
    assert_eq!(digitable_lines, 1);
    Ok(())
}

#[test]
fn test_stub_and_teller_both_print_the_value() -> TestResult {
    let pdf = render(carne(), &[record_for("Ana Lima", "1/1")])?;

    let values = pdf
        .page_strings(1)?
        .into_iter()
        .filter(|s| s.as_slice() == b"1.234,50")
        .count();
    assert!(values >= 2, "value printed {values} times");
    Ok(())
}

#[test]
fn test_no_records_still_yields_a_page() -> TestResult {
    let pdf = render(carne(), &[])?;

    assert_eq!(pdf.page_count(), 1);
    let (width, height) = pdf.page_size(1)?;
    assert!(width > height);
    assert!(pdf.page_strings(1)?.is_empty());
    Ok(())
}
