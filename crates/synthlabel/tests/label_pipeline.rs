use approx::assert_relative_eq;
use glam::{DMat4, DVec3};

use synthlabel::camera::{Camera, CameraParams};
use synthlabel::labels::{BoundingBox, LabelMode, LabelRecord, LabelWriter};
use synthlabel::scene::SceneObject;

fn camera_above_origin() -> Camera {
    Camera::new(CameraParams {
        sensor_width: 36.0,
        sensor_height: 24.0,
        focal_length: 18.0,
        shift_x: 0.0,
        shift_y: 0.0,
        x_resolution: 640,
        y_resolution: 480,
        pixel_aspect_y: 1.0,
        resolution_percentage: 100.0,
        // Looking down the negative z axis from five units up.
        world_from_camera: DMat4::from_translation(DVec3::new(0.0, 0.0, 5.0)),
    })
    .expect("valid camera")
}

fn unit_cube_at(center: DVec3) -> SceneObject {
    let h = 0.5;
    SceneObject {
        world_from_local: DMat4::from_translation(center),
        vertices: vec![
            DVec3::new(-h, -h, -h),
            DVec3::new(-h, -h, h),
            DVec3::new(-h, h, -h),
            DVec3::new(-h, h, h),
            DVec3::new(h, -h, -h),
            DVec3::new(h, -h, h),
            DVec3::new(h, h, -h),
            DVec3::new(h, h, h),
        ],
    }
}

#[test]
fn centered_cube_produces_the_expected_label() {
    let camera = camera_above_origin();
    let cube = unit_cube_at(DVec3::ZERO);

    let bbox = BoundingBox::of_object(&camera, &cube.world_vertices());
    let record = LabelRecord::from_bounding_box(&bbox);

    // The near face (one unit across at depth 4.5) bounds the projection:
    // width = 320 / (4.5 * 640), height = 432 / (4.5 * 480).
    assert_relative_eq!(record.center_x, 0.5, epsilon = 1e-9);
    assert_relative_eq!(record.center_y, 0.5, epsilon = 1e-9);
    assert_relative_eq!(record.width, 1.0 / 9.0, epsilon = 1e-9);
    assert_relative_eq!(record.height, 0.2, epsilon = 1e-9);
    assert!(record.is_trainable());
}

#[test]
fn object_behind_the_camera_is_dropped_in_filtered_mode() {
    let camera = camera_above_origin();
    let cube = unit_cube_at(DVec3::new(0.0, 0.0, 10.0));

    let bbox = BoundingBox::of_object(&camera, &cube.world_vertices());
    assert!(bbox.is_empty());

    let record = LabelRecord::from_bounding_box(&bbox);
    let writer = LabelWriter::new(LabelMode::Filtered);
    let mut out = Vec::new();
    let written = writer.write_records(&mut out, &[record]).expect("write");

    assert_eq!(written, 0);
    assert!(out.is_empty());
}

#[test]
fn unfiltered_mode_keeps_one_line_per_object() {
    let camera = camera_above_origin();
    let visible = unit_cube_at(DVec3::ZERO);
    let behind = unit_cube_at(DVec3::new(0.0, 0.0, 10.0));

    let records: Vec<LabelRecord> = [visible, behind]
        .iter()
        .map(|object| {
            LabelRecord::from_bounding_box(&BoundingBox::of_object(
                &camera,
                &object.world_vertices(),
            ))
        })
        .collect();

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("img_0.txt");
    let writer = LabelWriter::new(LabelMode::Unfiltered);
    let written = writer.write_frame(&path, &records).expect("write");

    assert_eq!(written, 2);
    let contents = std::fs::read_to_string(&path).expect("read back");
    let mut lines = contents.lines();
    assert!(lines.next().expect("first line").starts_with("0 0.5"));
    assert_eq!(
        lines.next().expect("second line"),
        "0 0.000000 0.000000 0.000000 0.000000"
    );
    assert!(contents.ends_with("\n\n"));
}

#[test]
fn off_center_cube_shifts_off_center() {
    let camera = camera_above_origin();
    let cube = unit_cube_at(DVec3::new(1.0, 0.5, 0.0));

    let bbox = BoundingBox::of_object(&camera, &cube.world_vertices());
    let record = LabelRecord::from_bounding_box(&bbox);

    // The divide by a negative depth mirrors both axes; the horizontal
    // flip then puts world +x on the high-u side while +y stays low-v.
    assert!(record.center_x > 0.5);
    assert!(record.center_y < 0.5);
    assert!(record.is_trainable());
}
