use approx::assert_relative_eq;

use isoquant_core::{Analysis, CobbDouglas, Inputs, Model, Params};

#[test]
fn default_run_produces_full_surface() {
    let analysis = Analysis::run(&Params::default()).expect("default params should run");

    assert_eq!(analysis.mesh().shape(), (200, 200));
    assert_eq!(analysis.output().shape(), (200, 200));

    let norm = analysis.normalization();
    assert_eq!(norm.min(), analysis.output().min());
    assert_eq!(norm.max(), analysis.output().max());
    assert_eq!(norm.min(), 5.0);
    assert_relative_eq!(norm.max(), 39.502_065_593, epsilon = 1e-6);

    let levels = norm.levels();
    assert_eq!(levels.len(), 25);
    assert_eq!(levels[0], norm.min());
    assert_eq!(levels[24], norm.max());
    assert!(levels.windows(2).all(|pair| pair[1] > pair[0]));
}

#[test]
fn extremes_sit_at_smallest_and_largest_inputs() {
    let analysis = Analysis::run(&Params::default()).unwrap();

    assert_eq!(analysis.output().argmin(), Some([0, 0]));
    assert_eq!(analysis.output().argmax(), Some([199, 199]));

    let [low, high] = analysis.extremes().unwrap();
    assert_eq!(low.input, Inputs::new(1.0, 1.0));
    assert_eq!(high.input, Inputs::new(5.0, 10.0));
}

#[test]
fn reruns_are_bit_identical() {
    let first = Analysis::run(&Params::default()).unwrap();
    let second = Analysis::run(&Params::default()).unwrap();

    let bits = |analysis: &Analysis| -> Vec<u64> {
        analysis.output().values().iter().map(|v| v.to_bits()).collect()
    };

    assert_eq!(bits(&first), bits(&second));
    assert_eq!(first.normalization(), second.normalization());
    assert_eq!(first, second);
}

#[test]
fn surface_agrees_with_model_calls() {
    let analysis = Analysis::run(&Params::default()).unwrap();
    let function = CobbDouglas::default();
    let mesh = analysis.mesh();

    for (row, col) in [(0, 0), (17, 123), (100, 42), (199, 199)] {
        let input = Inputs::new(mesh.capital()[[row, col]], mesh.labor()[[row, col]]);
        let expected = function.call(&input).unwrap();
        assert_eq!(analysis.output().get(row, col), Some(expected));
    }
}

#[test]
fn every_isoquant_crosses_the_domain() {
    let analysis = Analysis::run(&Params::default()).unwrap();
    let lines = analysis.isoquants();

    assert_eq!(lines.len(), 23);
    for line in &lines {
        assert_eq!(line.paths().len(), 1, "level {}", line.level());
        assert!(line.label_anchor().is_some());
    }
}
