use margin_core::chart::{X_LABEL, Y_LABEL};
use margin_core::{evaluate, render, ChartLabels, Curve, Grid, Parameters};

#[test]
fn render_pairs_grid_with_curve() {
    let grid = Grid::default();
    let params = Parameters::new(0.9, 0.1, 0.2, 0.05);
    let curve = evaluate(&params, &grid);
    let spec = render(&grid, &curve, ChartLabels::for_preset("Baseline", &params))
        .expect("render chart");

    assert_eq!(spec.points.len(), 101);
    for (i, (x, y)) in spec.points.iter().enumerate() {
        assert_eq!(*x, grid.points()[i]);
        assert_eq!(*y, curve.values()[i]);
    }
    assert_eq!(spec.x_label, X_LABEL);
    assert_eq!(spec.y_label, Y_LABEL);
}

#[test]
fn labels_embed_preset_and_values() {
    let labels = ChartLabels::for_preset("Strict", &Parameters::new(0.4, 0.6, 0.05, 0.3));
    assert_eq!(labels.title, "Preset: Strict\n0.4,0.6,0.05,0.3");
    assert_eq!(labels.series_name, Y_LABEL);
}

#[test]
fn mismatched_lengths_are_shape_errors() {
    let grid = Grid::default();
    let curve = Curve::from(vec![0.0; 10]);
    let err = render(&grid, &curve, ChartLabels::for_preset("x", &Parameters::new(0.0, 0.0, 0.0, 0.0)))
        .expect_err("shape mismatch");
    assert_eq!(err.grid, 101);
    assert_eq!(err.curve, 10);
}

#[test]
fn ranges_cover_the_series() {
    let grid = Grid::default();
    let params = Parameters::new(0.9, 0.1, 0.2, 0.05);
    let spec = render(
        &grid,
        &evaluate(&params, &grid),
        ChartLabels::for_preset("Baseline", &params),
    )
    .expect("render chart");
    assert_eq!(spec.x_range(), Some((0.0, 1.0)));
    let (lo, hi) = spec.y_range().expect("y range");
    assert!((lo - (-0.15)).abs() < 1e-12);
    assert!((hi - (-0.04)).abs() < 1e-12);
}

#[test]
fn flat_curve_gets_padded_range() {
    let grid = Grid::default();
    let params = Parameters::new(0.5, 0.5, 0.25, 0.25);
    let spec = render(
        &grid,
        &evaluate(&params, &grid),
        ChartLabels::for_preset("Flat", &params),
    )
    .expect("render chart");
    let (lo, hi) = spec.y_range().expect("y range");
    assert!(lo < hi);
}
