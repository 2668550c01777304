use approx::assert_relative_eq;
use graphic_charts::core::{
    BandScale, Breakpoints, ChartKind, LinearScale, MarginOverrides, OrdinalScale,
    STACKED_ROUND_FACTOR, Segment, SlopeRow, SlopegraphScales, StackedColumn,
    StackedColumnScales, compute_layout, slopegraph_value_domain, stacked_value_domain,
};
use proptest::prelude::*;

fn row(start: f64, end: f64) -> SlopeRow {
    SlopeRow {
        label: "row".to_owned(),
        start,
        end,
    }
}

fn column(label: &str, total: f64) -> StackedColumn {
    StackedColumn {
        label: label.to_owned(),
        total,
        segments: vec![Segment {
            name: "only".to_owned(),
            offset_start: 0.0,
            offset_end: total,
            value: total,
        }],
    }
}

#[test]
fn slopegraph_domain_rounds_outward_to_factor() {
    assert_eq!(slopegraph_value_domain(&[row(3.0, 19.0)], 4.0).expect("domain"), (0.0, 20.0));
    assert_eq!(
        slopegraph_value_domain(&[row(9.0, 12.0), row(5.0, 33.0)], 4.0).expect("domain"),
        (4.0, 36.0)
    );
}

#[test]
fn stacked_domain_floor_is_clamped_to_zero() {
    let positive = [column("a", 120.0), column("b", 260.0)];
    assert_eq!(
        stacked_value_domain(&positive, STACKED_ROUND_FACTOR).expect("domain"),
        (0.0, 300.0)
    );

    let mixed = [column("a", 120.0), column("b", -30.0)];
    assert_eq!(
        stacked_value_domain(&mixed, STACKED_ROUND_FACTOR).expect("domain"),
        (-50.0, 150.0)
    );
}

#[test]
fn empty_series_cannot_build_a_domain() {
    assert!(slopegraph_value_domain(&[], 4.0).is_err());
    assert!(stacked_value_domain(&[], STACKED_ROUND_FACTOR).is_err());
}

#[test]
fn value_axis_is_inverted() {
    let scale = LinearScale::new((0.0, 20.0), (300.0, 0.0));
    assert_relative_eq!(scale.map(0.0), 300.0);
    assert_relative_eq!(scale.map(20.0), 0.0);
    assert_relative_eq!(scale.map(5.0), 225.0);
}

#[test]
fn rounded_linear_scale_snaps_to_pixels() {
    let scale = LinearScale::new((0.0, 3.0), (0.0, 100.0)).with_rounding(true);
    assert_eq!(scale.map(1.0), 33.0);
    assert_eq!(scale.map(2.0), 67.0);
}

#[test]
fn round_bands_split_leftover_pixels_evenly() {
    let bands = BandScale::round_bands(["a", "b", "c"], (0.0, 300.0), 0.1);
    assert_eq!(bands.bandwidth(), 86.0);
    assert_eq!(bands.position("a"), Some(11.0));
    assert_eq!(bands.position("b"), Some(107.0));
    assert_eq!(bands.position("c"), Some(203.0));
    assert_eq!(bands.position("d"), None);
}

#[test]
fn duplicate_band_keys_share_one_band() {
    let bands = BandScale::round_bands(["a", "b", "a"], (0.0, 200.0), 0.1);
    assert_eq!(bands.domain(), ["a", "b"]);
}

#[test]
fn ordinal_outputs_repeat_cyclically() {
    let scale = OrdinalScale::new(["a", "b", "c"], vec![1, 2]);
    assert_eq!(scale.map("a"), Some(1));
    assert_eq!(scale.map("c"), Some(1));
    assert_eq!(scale.map("z"), None);
}

#[test]
fn slopegraph_scales_span_the_plot_area() {
    let geometry = compute_layout(
        600.0,
        ChartKind::Slopegraph,
        MarginOverrides::default(),
        Breakpoints::default(),
    );
    let scales = SlopegraphScales::build(&[row(3.0, 19.0)], geometry, "2010", "2020")
        .expect("scales");

    assert_eq!(scales.x.map("2010"), Some(0.0));
    assert_eq!(scales.x.map("2020"), Some(geometry.chart_width));
    assert_relative_eq!(scales.y.map(0.0), geometry.chart_height);
    assert_relative_eq!(scales.y.map(20.0), 0.0);
}

#[test]
fn stacked_scales_use_padded_bands() {
    let geometry = compute_layout(
        640.0,
        ChartKind::StackedColumn,
        MarginOverrides::default(),
        Breakpoints::default(),
    );
    let columns = [column("2019", 40.0), column("2020", 90.0)];
    let scales = StackedColumnScales::build(&columns, geometry).expect("scales");

    assert_eq!(scales.y.domain(), (0.0, 100.0));
    assert!(scales.x.bandwidth() > 0.0);
    let first = scales.x.position("2019").expect("first band");
    let second = scales.x.position("2020").expect("second band");
    assert!(first > 0.0);
    assert!(second + scales.x.bandwidth() < geometry.chart_width);
}

#[test]
fn all_nan_series_yield_nan_domain() {
    let (lo, hi) = slopegraph_value_domain(&[row(f64::NAN, f64::NAN)], 4.0).expect("domain");
    assert!(lo.is_nan() && hi.is_nan());

    let (lo, hi) =
        stacked_value_domain(&[column("x", f64::NAN)], STACKED_ROUND_FACTOR).expect("domain");
    assert!(lo.is_nan() && hi.is_nan());

    let scale = LinearScale::new((lo, hi), (100.0, 0.0));
    assert!(scale.map(3.0).is_nan());
    assert!(scale.ticks(5).is_empty());
}

proptest! {
    #[test]
    fn slopegraph_domain_contains_every_row(
        values in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 1..20)
    ) {
        let rows: Vec<SlopeRow> = values.iter().map(|&(s, e)| row(s, e)).collect();
        let (lo, hi) = slopegraph_value_domain(&rows, 4.0).expect("domain");
        for r in &rows {
            prop_assert!(lo <= r.start);
            prop_assert!(hi >= r.end);
        }
        prop_assert_eq!(lo % 4.0, 0.0);
        prop_assert_eq!(hi % 4.0, 0.0);
    }

    #[test]
    fn ticks_stay_inside_the_domain(lo in -1_000.0f64..1_000.0, span in 1.0f64..5_000.0) {
        let scale = LinearScale::new((lo, lo + span), (0.0, 100.0));
        let ticks = scale.ticks(5);
        prop_assert!(!ticks.is_empty());
        for pair in ticks.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for t in ticks {
            prop_assert!(t >= lo - 1e-6 && t <= lo + span + 1e-6);
        }
    }
}
