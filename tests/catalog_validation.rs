use microdetect::catalog::{
    BRIGHT_FIBRIL, CORONA, CROSS, LINES_SAMPLE, MIXED_SAMPLE, MODERATE_FIBRIL, SCATTERED_CROSSES,
    SPIKED_CORONA, SPIKED_CORONA_SAMPLE,
};
use microdetect::{Catalog, DiagnosticAnalyzer, LinearRecognizer, PatternRecognizer};
use std::sync::Arc;

#[test]
fn corona_template_has_expected_footprint() {
    let catalog = Catalog::predefined().unwrap();
    let corona = catalog.pattern(CORONA).unwrap();
    assert_eq!((corona.width(), corona.height()), (9, 9));
    // Lattice points within radius 4.2 of the centre.
    assert_eq!(corona.defined_count(), 57);
    assert!(corona.is_wildcard(0, 0));
    assert_eq!(corona.pixel(4, 4), 0xF);
}

#[test]
fn crosses_are_counted_once_per_defined_cell() {
    let catalog = Catalog::predefined().unwrap();
    let cross = PatternRecognizer::new(Arc::clone(catalog.pattern(CROSS).unwrap()));

    let scattered = catalog.sample(SCATTERED_CROSSES).unwrap();
    assert_eq!(cross.detect(scattered).unwrap().count_positive(), 3 * 9);

    let mixed = catalog.sample(MIXED_SAMPLE).unwrap();
    assert_eq!(cross.detect(mixed).unwrap().count_positive(), 2 * 9);
}

#[test]
fn coronas_are_found_in_the_mixed_sample() {
    let catalog = Catalog::predefined().unwrap();
    let corona = catalog.pattern(CORONA).unwrap();
    let recognizer = PatternRecognizer::new(Arc::clone(corona));
    let mask = recognizer
        .detect(catalog.sample(MIXED_SAMPLE).unwrap())
        .unwrap();
    assert_eq!(mask.count_positive(), 2 * corona.defined_count());
    // Corona centres stamped at (5 + 4, 8 + 4) and (16 + 4, 18 + 4).
    assert!(mask.is_set(9, 12));
    assert!(mask.is_set(20, 22));
    assert!(!mask.is_set(5, 8));
}

#[test]
fn spiked_corona_is_found_once() {
    let catalog = Catalog::predefined().unwrap();
    let spiked = catalog.pattern(SPIKED_CORONA).unwrap();
    let mask = PatternRecognizer::new(Arc::clone(spiked))
        .detect(catalog.sample(SPIKED_CORONA_SAMPLE).unwrap())
        .unwrap();
    assert_eq!(mask.count_positive(), spiked.defined_count());
}

#[test]
fn streaks_in_the_lines_sample() {
    let catalog = Catalog::predefined().unwrap();
    let lines = catalog.sample(LINES_SAMPLE).unwrap();

    let bright = LinearRecognizer::new(Arc::clone(catalog.fibril(BRIGHT_FIBRIL).unwrap()));
    let mask = bright.detect(lines).unwrap();
    assert_eq!(mask.count_positive(), 20);
    assert!((5..25).all(|c| mask.is_set(8, c)));
    assert!(!mask.is_set(4, 28));

    let moderate = LinearRecognizer::new(Arc::clone(catalog.fibril(MODERATE_FIBRIL).unwrap()));
    let mask = moderate.detect(lines).unwrap();
    assert_eq!(mask.count_positive(), 14);
    assert!((0..14).all(|i| mask.is_set(18 + i, 5 + i)));
}

#[test]
fn catalog_study_reports_every_element() {
    let catalog = Catalog::predefined().unwrap();
    let study = catalog.study("demo").unwrap();
    assert_eq!(study.len(), 4);

    let mut analyzer = DiagnosticAnalyzer::new();
    for recognizer in catalog.recognizers() {
        assert!(analyzer.add_recognizer(recognizer));
    }
    let report = analyzer.analyze(&study).unwrap();
    assert_eq!(report.len(), 6);

    // Besides the five stamped crosses, plus shapes fit inside the spiked corona core.
    let cross = PatternRecognizer::new(Arc::clone(catalog.pattern(CROSS).unwrap()));
    let in_core = cross
        .detect(catalog.sample(SPIKED_CORONA_SAMPLE).unwrap())
        .unwrap()
        .count_positive();
    assert!(in_core > 0);
    assert_eq!(report.get(CROSS), Some(5 * 9 + in_core));
    assert_eq!(report.get(BRIGHT_FIBRIL).map(|v| v >= 20), Some(true));
}
