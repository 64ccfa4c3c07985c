use approx::assert_abs_diff_eq;
use graph_view::core::{
    AxisWindow, ClipWindow, DataPoint, LineSegment, PlotArea, PlotMapping, project_line_pass,
};

fn unit_mapping() -> PlotMapping {
    PlotMapping::new(
        PlotArea::new(100.0, 100.0, 0.0, 0.0),
        AxisWindow::new(0.0, 0.0, 10.0, 10.0),
    )
}

fn diagonal(xs: &[f64]) -> Vec<DataPoint> {
    xs.iter().map(|x| DataPoint::new(*x, *x)).collect()
}

#[test]
fn line_pass_is_empty_for_empty_input() {
    let pass = project_line_pass(&[], unit_mapping(), None);
    assert!(pass.segments.is_empty());
    assert!(pass.vertices.is_empty());
}

#[test]
fn single_point_opens_polyline_without_segment() {
    let pass = project_line_pass(&[DataPoint::new(4.0, 2.0)], unit_mapping(), None);
    assert!(pass.segments.is_empty());
    assert_eq!(pass.vertices.len(), 1);
}

#[test]
fn two_points_map_to_offset_diagonal() {
    let points = [DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 10.0)];
    let pass = project_line_pass(&points, unit_mapping(), None);

    assert_eq!(
        pass.segments,
        vec![LineSegment {
            x1: 1.0,
            y1: 100.0,
            x2: 101.0,
            y2: 0.0,
        }]
    );
}

#[test]
fn point_at_pixel_origin_still_starts_the_polyline() {
    let points = diagonal(&[0.0, 5.0, 10.0]);
    let pass = project_line_pass(&points, unit_mapping(), None);

    assert_eq!(pass.segments.len(), 2);
    assert_abs_diff_eq!(pass.segments[0].x1, 1.0);
    assert_abs_diff_eq!(pass.segments[0].y1, 100.0);
    assert_abs_diff_eq!(pass.segments[0].x2, 51.0);
    assert_abs_diff_eq!(pass.segments[0].y2, 50.0);
    assert_abs_diff_eq!(pass.segments[1].x1, 51.0);
}

#[test]
fn clip_window_bounds_are_exclusive() {
    let points = diagonal(&[0.0, 2.0, 5.0, 8.0, 10.0]);
    let pass = project_line_pass(&points, unit_mapping(), Some(ClipWindow::new(2.0, 8.0)));

    assert!(pass.segments.is_empty());
    assert_eq!(pass.vertices.len(), 1);
    assert_eq!(pass.vertices[0].index, 2);
    assert_eq!(pass.vertices[0].point, DataPoint::new(5.0, 5.0));
}

#[test]
fn clipped_points_only_connect_retained_neighbours() {
    let points = diagonal(&[0.0, 2.0, 3.0, 5.0, 8.0, 10.0]);
    let pass = project_line_pass(&points, unit_mapping(), Some(ClipWindow::new(2.0, 8.0)));

    assert_eq!(pass.segments.len(), 1);
    assert_abs_diff_eq!(pass.segments[0].x1, 31.0);
    assert_abs_diff_eq!(pass.segments[0].y1, 70.0);
    assert_abs_diff_eq!(pass.segments[0].x2, 51.0);
    assert_abs_diff_eq!(pass.segments[0].y2, 50.0);
}

#[test]
fn last_retained_point_anchors_next_segment() {
    let points = vec![
        DataPoint::new(3.0, 1.0),
        DataPoint::new(9.0, 9.0),
        DataPoint::new(5.0, 1.0),
    ];
    let pass = project_line_pass(&points, unit_mapping(), Some(ClipWindow::new(2.0, 8.0)));

    assert_eq!(pass.segments.len(), 1);
    assert_abs_diff_eq!(pass.segments[0].x1, 31.0);
    assert_abs_diff_eq!(pass.segments[0].x2, 51.0);
    assert_eq!(
        pass.vertices.iter().map(|v| v.index).collect::<Vec<_>>(),
        vec![0, 2]
    );
}

#[test]
fn border_and_horizontal_start_shift_geometry() {
    let mapping = PlotMapping::new(
        PlotArea::new(200.0, 100.0, 15.0, 40.0),
        AxisWindow::new(-10.0, 100.0, 20.0, 50.0),
    );
    let points = [DataPoint::new(-10.0, 100.0), DataPoint::new(10.0, 150.0)];
    let pass = project_line_pass(&points, mapping, None);

    assert_eq!(pass.segments.len(), 1);
    assert_abs_diff_eq!(pass.segments[0].x1, 41.0);
    assert_abs_diff_eq!(pass.segments[0].y1, 115.0);
    assert_abs_diff_eq!(pass.segments[0].x2, 241.0);
    assert_abs_diff_eq!(pass.segments[0].y2, 15.0);
    assert_abs_diff_eq!(pass.vertices[1].pixel_x, 200.0);
}

#[test]
fn zero_range_produces_non_finite_geometry_without_panicking() {
    let mapping = PlotMapping::new(
        PlotArea::new(100.0, 100.0, 0.0, 0.0),
        AxisWindow::new(0.0, 0.0, 10.0, 0.0),
    );
    let pass = project_line_pass(&diagonal(&[1.0, 2.0]), mapping, None);

    assert_eq!(pass.segments.len(), 1);
    assert!(!pass.segments[0].y1.is_finite());
}
