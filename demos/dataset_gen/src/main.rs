use std::fs::{self, File};
use std::path::{Path, PathBuf};

use argh::FromArgs;
use glam::{DMat4, DVec3};

use synthlabel::camera::{Camera, CameraParams};
use synthlabel::labels::{BoundingBox, LabelMode, LabelRecord, LabelWriter};
use synthlabel::scene::{FramePlan, FrameSampler, RenderSource, SampleRanges, SceneObject};

/// Number of fixed target objects in the scene.
const NUM_TARGETS: usize = 5;

/// Ring radius the targets are placed on.
const TARGET_RING_RADIUS: f64 = 1.5;

/// Target cube half extent.
const TARGET_HALF_EXTENT: f64 = 0.25;

#[derive(FromArgs)]
/// Generate randomized detection labels for a synthetic target scene
struct Args {
    /// number of training frames
    #[argh(option, default = "1000")]
    train_frames: usize,

    /// number of evaluation frames
    #[argh(option, default = "250")]
    eval_frames: usize,

    /// output directory
    #[argh(option, short = 'o', default = "PathBuf::from(\"dataset\")")]
    out_dir: PathBuf,

    /// RNG seed for reproducible runs
    #[argh(option)]
    seed: Option<u64>,
}

/// Stand-in for the external renderer: a fixed ring of cube targets observed
/// by the camera a frame plan describes.
struct SyntheticScene {
    plan: FramePlan,
}

impl SyntheticScene {
    fn new(plan: FramePlan) -> Self {
        Self { plan }
    }
}

impl RenderSource for SyntheticScene {
    fn camera_params(&self) -> CameraParams {
        CameraParams {
            sensor_width: 36.0,
            sensor_height: 24.0,
            focal_length: self.plan.camera.focal_length,
            shift_x: 0.0,
            shift_y: 0.0,
            x_resolution: 640,
            y_resolution: 480,
            pixel_aspect_y: 1.0,
            resolution_percentage: 100.0,
            world_from_camera: self.plan.camera.world_from_camera(),
        }
    }

    fn objects(&self) -> Vec<SceneObject> {
        let h = TARGET_HALF_EXTENT;
        let vertices = vec![
            DVec3::new(-h, -h, -h),
            DVec3::new(-h, -h, h),
            DVec3::new(-h, h, -h),
            DVec3::new(-h, h, h),
            DVec3::new(h, -h, -h),
            DVec3::new(h, -h, h),
            DVec3::new(h, h, -h),
            DVec3::new(h, h, h),
        ];

        (0..NUM_TARGETS)
            .map(|index| {
                let angle = index as f64 / NUM_TARGETS as f64 * std::f64::consts::TAU;
                let center = DVec3::new(
                    TARGET_RING_RADIUS * angle.cos(),
                    TARGET_RING_RADIUS * angle.sin(),
                    h,
                );
                SceneObject {
                    world_from_local: DMat4::from_translation(center),
                    vertices: vertices.clone(),
                }
            })
            .collect()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let ranges = SampleRanges::default();
    let mut sampler = match args.seed {
        Some(seed) => FrameSampler::with_seed(ranges, seed),
        None => FrameSampler::new(ranges),
    };

    generate_split(
        &mut sampler,
        &args.out_dir.join("train"),
        args.train_frames,
        LabelMode::Filtered,
    )?;
    generate_split(
        &mut sampler,
        &args.out_dir.join("eval"),
        args.eval_frames,
        LabelMode::Unfiltered,
    )?;

    Ok(())
}

fn generate_split(
    sampler: &mut FrameSampler,
    dir: &Path,
    frames: usize,
    mode: LabelMode,
) -> Result<(), Box<dyn std::error::Error>> {
    let labels_dir = dir.join("labels");
    let plans_dir = dir.join("plans");
    fs::create_dir_all(&labels_dir)?;
    fs::create_dir_all(&plans_dir)?;

    let writer = LabelWriter::new(mode);
    let mut total_labels = 0;

    for index in 0..frames {
        let plan = sampler.sample();
        let scene = SyntheticScene::new(plan);
        let camera = Camera::new(scene.camera_params())?;

        let records: Vec<LabelRecord> = scene
            .objects()
            .iter()
            .map(|object| {
                LabelRecord::from_bounding_box(&BoundingBox::of_object(
                    &camera,
                    &object.world_vertices(),
                ))
            })
            .collect();

        let written = writer.write_frame(labels_dir.join(format!("img_{index}.txt")), &records)?;
        total_labels += written;

        let plan_file = File::create(plans_dir.join(format!("img_{index}.json")))?;
        serde_json::to_writer_pretty(plan_file, &plan)?;

        log::debug!("frame {index}: {written} of {NUM_TARGETS} targets labeled");
    }

    log::info!(
        "wrote {total_labels} labels for {frames} frames into {}",
        dir.display()
    );
    Ok(())
}
