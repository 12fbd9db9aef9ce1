use std::borrow::Cow;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use geoshape::compose::{self, Lune, RegularPolygon};
use geoshape::geoshape_types::cartesian::{CartesianPoint3d, CartesianRing, Winding};
use geoshape::geoshape_types::geo::impls::projection::PlanarProjector;
use geoshape::geoshape_types::geo::impls::GeodeticPoint;
use geoshape::geoshape_types::geo::{Ellipsoid, Projection};
use geoshape::{LocalFrame, Position3, ShapeOptions, Statistics};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn position(lon: f64, lat: f64, height: f64) -> Position3 {
    Ellipsoid::WGS84.to_cartesian(&GeodeticPoint::from_degrees(lon, lat, height))
}

#[test]
fn hexagon_around_beijing() {
    init_logger();

    let center = position(116.391, 39.907, 100.0);
    let vertex = position(116.392, 39.907, 100.0);
    let hexagon = RegularPolygon::default().compute(&center, &vertex, 6);

    assert_eq!(hexagon.len(), 6);
    assert_eq!(hexagon[0], vertex);

    let radius = center.distance(&vertex);
    let frame = LocalFrame::at_position(&center, &Ellipsoid::WGS84);
    let angles: Vec<f64> = hexagon
        .iter()
        .map(|p| {
            assert_relative_eq!(p.distance(&center), radius, max_relative = 1e-6);
            let local = frame.world_to_local(p);
            local.dy().atan2(local.dx()).to_degrees()
        })
        .collect();

    for pair in angles.windows(2) {
        let step = (pair[1] - pair[0]).rem_euclid(360.0);
        assert_abs_diff_eq!(step, 60.0, epsilon = 0.01);
    }

    let stats = Statistics::default();
    for p in &hexagon {
        assert_abs_diff_eq!(stats.height(p), 100.0, epsilon = 0.01);
    }

    let projector = PlanarProjector::default();
    let planar: Vec<_> = hexagon.iter().filter_map(|p| projector.project(p)).collect();
    assert_eq!(planar.len(), 6);
    assert_eq!(planar.winding(), Winding::CounterClockwise);
}

#[test]
fn closed_lune() {
    init_logger();

    let p1 = position(116.391, 39.907, 0.0);
    let p2 = position(116.395, 39.907, 0.0);
    let p3 = position(116.393, 39.909, 0.0);

    let lune = Lune::default().with_segments(50).compute(&p1, &p2, &p3);
    assert_eq!(lune.len(), 52);
    assert_eq!(lune.first(), lune.last());

    let control = [p1, p2, p3];
    let via_slice = compose::lune_positions(&control, 50);
    assert_eq!(via_slice.as_ref(), lune.as_slice());
}

#[test]
fn max_height_of_positions() {
    let stats = Statistics::default();
    assert_eq!(stats.max_height(&[], 100.0), 100.0);

    let positions = [
        position(116.391, 39.907, 100.0),
        position(116.392, 39.907, 500.0),
        position(116.393, 39.907, 300.0),
    ];
    assert_eq!(stats.max_height(&positions, 0.0), 500.0);
}

#[test]
fn insufficient_input_is_returned_as_is() {
    init_logger();

    let positions = vec![position(10.0, 10.0, 0.0), position(10.01, 10.0, 0.0)];

    let lune = compose::lune_positions(&positions, 50);
    assert!(matches!(lune, Cow::Borrowed(_)));
    assert!(std::ptr::eq(lune.as_ref(), positions.as_slice()));

    let triangle = compose::isosceles_triangle_positions(&positions);
    assert!(std::ptr::eq(triangle.as_ref(), positions.as_slice()));

    let single = &positions[..1];
    assert!(std::ptr::eq(compose::regular_polygon_positions(single, 6).as_ref(), single));
    assert!(std::ptr::eq(compose::offset_line_positions(single, 1.0).as_ref(), single));

    let unchanged = Statistics::default().add_height_all(&positions, f64::NAN);
    assert!(std::ptr::eq(unchanged.as_ref(), positions.as_slice()));
}

#[test]
fn shapes_from_options() -> anyhow::Result<()> {
    init_logger();

    let options: ShapeOptions = serde_json::from_str(r#"{"lune_segments": 16, "polygon_sides": 5}"#)?;
    options.validate()?;

    let center = position(-3.7038, 40.4168, 650.0);
    let vertex = position(-3.7000, 40.4168, 650.0);
    let p3 = position(-3.7019, 40.4190, 650.0);

    let control = [center, vertex];
    let pentagon = options.polygon_positions(&control);
    assert_eq!(pentagon.len(), 5);

    let lune = options.lune().compute(&center, &vertex, &p3);
    assert_eq!(lune.len(), 18);

    let stats = options.statistics();
    assert_eq!(stats.max_height(&lune, 0.0), 650.0);
    assert_abs_diff_eq!(stats.min_height(&pentagon, 0.0), 650.0, epsilon = 0.01);
    assert_abs_diff_eq!(stats.max_height(&pentagon, 0.0), 650.0, epsilon = 0.01);

    let shifted = options.offset_line().compute(&control, 0.2);
    assert_relative_eq!(shifted[0].distance(&center), 200.0, max_relative = 1e-9);

    let json = serde_json::to_string(&options)?;
    let back: ShapeOptions = serde_json::from_str(&json)?;
    assert_eq!(back, options);

    Ok(())
}

#[test]
fn invalid_options_are_reported() {
    let options: ShapeOptions =
        serde_json::from_str(r#"{"polygon_sides": 1}"#).expect("valid json");
    let err = options.validate().expect_err("too few sides");
    assert_eq!(err.to_string(), "polygon must have at least 3 sides, but 1 given");
}
