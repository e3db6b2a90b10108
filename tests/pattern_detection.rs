use microdetect::lowlevel::stamp;
use microdetect::{MicroDetectError, Pattern, PatternRecognizer, Sample, WILDCARD};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn single_cell_pattern_marks_only_its_match() {
    let sample = Sample::new("Ejemplo 3x3", &[[0, 1, 2], [2, 3, 4], [4, 5, 6]]).unwrap();
    let pattern = Pattern::new("P", &[[0]]).unwrap();
    let mask = PatternRecognizer::new(pattern).detect(&sample).unwrap();

    assert_eq!((mask.width(), mask.height()), (3, 3));
    assert!(mask.is_set(0, 0));
    assert_eq!(mask.count_positive(), 1);
}

#[test]
fn pattern_larger_than_sample_is_rejected() {
    let sample = Sample::new("s", &[[1, 2, 3]]).unwrap();
    let tall = Pattern::new("tall", &[[1], [1]]).unwrap();
    let err = PatternRecognizer::new(tall).detect(&sample).unwrap_err();
    assert_eq!(
        err,
        MicroDetectError::PatternTooLarge {
            pattern_width: 1,
            pattern_height: 2,
            sample_width: 3,
            sample_height: 1,
        }
    );

    let wide = Pattern::new("wide", &[[1, 2, 3, 4]]).unwrap();
    assert!(matches!(
        PatternRecognizer::new(wide).detect(&sample),
        Err(MicroDetectError::PatternTooLarge { .. })
    ));
}

#[test]
fn pattern_equal_to_sample_size_is_accepted() {
    let sample = Sample::new("s", &[[1, 2], [3, 4]]).unwrap();
    let pattern = Pattern::new("same", &[[1, 2], [3, 4]]).unwrap();
    let mask = PatternRecognizer::new(pattern).detect(&sample).unwrap();
    assert_eq!(mask.count_positive(), 4);
}

#[test]
fn exact_footprint_is_marked_at_its_position() {
    let mut grid = vec![vec![0; 10]; 8];
    let tpl = Pattern::new("blob", &[[9, 8, 7], [6, 5, 4]]).unwrap();
    stamp(&mut grid, &tpl, 3, 5);
    let sample = Sample::new("s", &grid).unwrap();

    let mask = PatternRecognizer::new(tpl).detect(&sample).unwrap();
    for r in 0..8 {
        for c in 0..10 {
            let inside = (3..5).contains(&r) && (5..8).contains(&c);
            assert_eq!(mask.is_set(r, c), inside, "cell ({r}, {c})");
        }
    }
    assert_eq!(mask.count_positive(), 6);
}

#[test]
fn wildcard_cells_match_anything_but_are_never_marked() {
    let w = WILDCARD;
    let ring = Pattern::new("ring", &[[15, 15, 15], [15, w, 15], [15, 15, 15]]).unwrap();
    let recognizer = PatternRecognizer::new(ring);

    for center in 0..=15 {
        let sample =
            Sample::new("s", &[[15, 15, 15], [15, center, 15], [15, 15, 15]]).unwrap();
        let mask = recognizer.detect(&sample).unwrap();
        assert!(!mask.is_set(1, 1));
        assert_eq!(mask.count_positive(), 8);
    }
}

#[test]
fn wildcard_positions_stay_unmarked_on_random_samples() {
    let mut rng = StdRng::seed_from_u64(42);
    let w = WILDCARD;
    let pattern = Pattern::new("plus", &[[w, 1, w], [1, 1, 1], [w, 1, w]]).unwrap();
    let recognizer = PatternRecognizer::new(pattern);

    for _ in 0..50 {
        let rows: Vec<Vec<i32>> = (0..9)
            .map(|_| (0..9).map(|_| rng.random_range(0..=1)).collect())
            .collect();
        let sample = Sample::new("binary", &rows).unwrap();
        let mask = recognizer.detect(&sample).unwrap();
        for r in 0..9 {
            for c in 0..9 {
                if mask.is_set(r, c) {
                    assert_eq!(sample.pixel(r, c).unwrap(), 1);
                }
            }
        }
    }
}

#[test]
fn partial_mismatch_does_not_mark() {
    let sample = Sample::new("s", &[[15, 15, 15], [15, 15, 14]]).unwrap();
    let pattern = Pattern::new("block", &[[15, 15], [15, 15]]).unwrap();
    let mask = PatternRecognizer::new(pattern).detect(&sample).unwrap();
    assert_eq!(
        mask.as_slice(),
        &[true, true, false, true, true, false]
    );
}
