//! Preset screenshot tour: the overview and then every floor, each captured
//! to the temp directory, after which the app exits.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::winit::WinitSettings;

use rendering::camera::OrbitCamera;
use rendering::layout::plate_center;
use rendering::screenshot::capture_primary_window;
use venue::catalog::Catalog;
use venue::selection::SelectionRequest;
use venue::VenueSet;

/// Frames to wait before the first shot so meshes and materials are ready.
const WARMUP_FRAMES: u32 = 60;
/// Frames spent on each shot.
const FRAMES_PER_SHOT: u32 = 12;
/// Frame within a shot at which the capture is taken.
const CAPTURE_PHASE: u32 = 6;
/// Frames to wait after the last capture so it reaches the disk.
const FLUSH_FRAMES: u32 = 20;

/// Eye offset from the focused plate in floor shots.
const FLOOR_EYE_OFFSET: Vec3 = Vec3::new(3.5, 3.0, 3.5);

struct TourShot {
    name: String,
    floor: Option<u32>,
    camera: OrbitCamera,
}

#[derive(Resource)]
struct TourQueue {
    frame: u32,
    shots: Vec<TourShot>,
}

/// What the tour does on a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TourStep {
    Wait,
    Stage(usize),
    Capture(usize),
    Exit,
}

fn tour_step(frame: u32, shot_count: usize) -> TourStep {
    if frame < WARMUP_FRAMES {
        return TourStep::Wait;
    }
    let since = frame - WARMUP_FRAMES;
    let index = (since / FRAMES_PER_SHOT) as usize;
    if index >= shot_count {
        let done_at = shot_count as u32 * FRAMES_PER_SHOT + FLUSH_FRAMES;
        return if since >= done_at {
            TourStep::Exit
        } else {
            TourStep::Wait
        };
    }
    match since % FRAMES_PER_SHOT {
        0 => TourStep::Stage(index),
        CAPTURE_PHASE => TourStep::Capture(index),
        _ => TourStep::Wait,
    }
}

fn tour_shots(catalog: &Catalog) -> Vec<TourShot> {
    let mut shots = vec![TourShot {
        name: "01_overview".to_string(),
        floor: None,
        camera: OrbitCamera::default(),
    }];
    for (index, floor) in catalog.floors().iter().enumerate() {
        let focus = plate_center(index);
        shots.push(TourShot {
            name: format!("{:02}_floor_{}", index + 2, floor.tag().to_lowercase()),
            floor: Some(floor.id),
            camera: OrbitCamera::looking_from(focus + FLOOR_EYE_OFFSET, focus),
        });
    }
    shots
}

fn shot_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("exhibition_{}.png", name))
}

fn setup_tour(mut commands: Commands, catalog: Res<Catalog>) {
    let shots = tour_shots(&catalog);
    info!("Screenshot tour: {} shots", shots.len());
    commands.insert_resource(TourQueue { frame: 0, shots });
    // The reactive winit modes would stall the frame counter without input.
    commands.insert_resource(WinitSettings::game());
}

fn drive_tour(
    mut commands: Commands,
    mut queue: ResMut<TourQueue>,
    mut orbit: ResMut<OrbitCamera>,
    mut requests: EventWriter<SelectionRequest>,
    mut exit: EventWriter<AppExit>,
) {
    queue.frame += 1;

    match tour_step(queue.frame, queue.shots.len()) {
        TourStep::Wait => {}
        TourStep::Stage(index) => {
            let shot = &queue.shots[index];
            *orbit = shot.camera;
            requests.send(SelectionRequest::Floor(shot.floor));
        }
        TourStep::Capture(index) => {
            capture_primary_window(&mut commands, shot_path(&queue.shots[index].name));
        }
        TourStep::Exit => {
            info!("Screenshot tour finished");
            exit.send(AppExit::Success);
        }
    }
}

pub struct ScreenshotTourPlugin;

impl Plugin for ScreenshotTourPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            setup_tour.after(venue::catalog::load_catalog_override),
        )
        .add_systems(Update, drive_tour.in_set(VenueSet::Input));
    }
}
