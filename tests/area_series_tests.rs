use approx::assert_abs_diff_eq;
use graph_view::core::{
    AxisWindow, BackgroundFillMode, BackgroundGeometry, DataPoint, PlotArea, PlotMapping,
    ScreenPoint, curtain_column_count, project_background,
};

fn mapping(horizontal_start: f64) -> PlotMapping {
    PlotMapping::new(
        PlotArea::new(100.0, 100.0, 0.0, horizontal_start),
        AxisWindow::new(0.0, 0.0, 10.0, 10.0),
    )
}

fn curtain(points: &[DataPoint], mapping: PlotMapping) -> Vec<graph_view::core::LineSegment> {
    match project_background(points, mapping, BackgroundFillMode::Curtain) {
        BackgroundGeometry::Curtain(columns) => columns,
        other => panic!("expected curtain geometry, got {other:?}"),
    }
}

#[test]
fn background_of_single_point_is_empty() {
    for mode in [BackgroundFillMode::Polygon, BackgroundFillMode::Curtain] {
        let geometry = project_background(&[DataPoint::new(3.0, 3.0)], mapping(0.0), mode);
        assert!(geometry.is_empty());
    }
}

#[test]
fn curtain_columns_rise_from_baseline_to_offset_curve() {
    let points = [DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 10.0)];
    let columns = curtain(&points, mapping(0.0));

    // 35 columns over 100px; the one on the axis line is skipped.
    assert_eq!(curtain_column_count(1.0, 101.0), 35);
    assert_eq!(columns.len(), 34);
    for column in &columns {
        assert_abs_diff_eq!(column.x1, column.x2);
        assert_abs_diff_eq!(column.y1, 100.0);
        assert!(column.x1 > 1.0 && column.x1 <= 101.0 + 1e-9);
    }

    let last = columns.last().expect("last column");
    assert_abs_diff_eq!(last.x2, 101.0, epsilon = 1e-9);
    assert_abs_diff_eq!(last.y2, 2.0, epsilon = 1e-9);
}

#[test]
fn curtain_column_count_scales_with_distance() {
    let near = curtain(
        &[DataPoint::new(2.0, 5.0), DataPoint::new(3.0, 5.0)],
        mapping(0.0),
    );
    let far = curtain(
        &[DataPoint::new(2.0, 5.0), DataPoint::new(8.0, 5.0)],
        mapping(0.0),
    );

    assert!(near.len() > 1);
    assert_eq!(near.len(), curtain_column_count(21.0, 31.0));
    assert_eq!(far.len(), curtain_column_count(21.0, 81.0));
    assert!(far.len() > 5 * near.len() / 2);
}

#[test]
fn curtain_columns_near_left_edge_are_skipped() {
    let points = [DataPoint::new(-1.0, 5.0), DataPoint::new(1.0, 5.0)];
    let columns = curtain(&points, mapping(30.0));

    assert!(!columns.is_empty());
    assert!(columns.iter().all(|column| column.x1 - 30.0 > 1.0));
}

#[test]
fn polygon_fill_closes_segment_against_baseline() {
    let points = [DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 10.0)];
    let BackgroundGeometry::Polygons(polygons) =
        project_background(&points, mapping(0.0), BackgroundFillMode::Polygon)
    else {
        panic!("expected polygon geometry");
    };

    assert_eq!(polygons.len(), 1);
    assert_eq!(
        polygons[0].as_slice(),
        &[
            ScreenPoint::new(1.0, 102.0),
            ScreenPoint::new(101.0, 2.0),
            ScreenPoint::new(101.0, 100.0),
            ScreenPoint::new(1.0, 100.0),
        ]
    );
}

#[test]
fn polygon_fill_is_clipped_at_left_plot_edge() {
    let points = [DataPoint::new(-5.0, 0.0), DataPoint::new(5.0, 10.0)];
    let BackgroundGeometry::Polygons(polygons) =
        project_background(&points, mapping(10.0), BackgroundFillMode::Polygon)
    else {
        panic!("expected polygon geometry");
    };

    assert_eq!(polygons.len(), 1);
    let polygon = &polygons[0];
    assert_abs_diff_eq!(polygon[0].x, 11.0, epsilon = 1e-9);
    assert_abs_diff_eq!(polygon[0].y, 52.0, epsilon = 1e-9);
    assert_abs_diff_eq!(polygon[3].x, 11.0, epsilon = 1e-9);
    assert_abs_diff_eq!(polygon[3].y, 100.0, epsilon = 1e-9);
}

#[test]
fn polygon_fill_skips_segments_left_of_plot() {
    let points = [DataPoint::new(-8.0, 1.0), DataPoint::new(-6.0, 4.0)];
    let geometry = project_background(&points, mapping(0.0), BackgroundFillMode::Polygon);
    assert!(geometry.is_empty());
}

#[test]
fn curtain_columns_stay_bounded_by_plot_width_when_zoomed_in() {
    let zoomed = PlotMapping::new(
        PlotArea::new(100.0, 100.0, 0.0, 0.0),
        AxisWindow::new(0.0, 0.0, 0.001, 10.0),
    );
    let points = [DataPoint::new(0.0, 5.0), DataPoint::new(1.0, 5.0)];
    let columns = curtain(&points, zoomed);

    assert!(!columns.is_empty());
    assert!(columns.len() <= 100 / 3 + 1);
    assert!(
        columns
            .iter()
            .all(|column| column.x1 > 1.0 && column.x1 <= 101.0)
    );
}

#[test]
fn curtain_columns_right_of_plot_are_culled() {
    let points = [DataPoint::new(5.0, 5.0), DataPoint::new(20.0, 5.0)];
    let columns = curtain(&points, mapping(0.0));

    assert!(!columns.is_empty());
    assert!(columns.iter().all(|column| column.x1 <= 101.0));
    assert!(columns.len() < curtain_column_count(51.0, 201.0));
}
