use std::collections::VecDeque;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use glam::{Quat, Vec3};
use tracing_subscriber::EnvFilter;

use framewalk_common::Viewport;
use framewalk_input::{InputEvent, InputState, PointerLockHost};
use framewalk_scene::{
    DebugTextSurface, ProjectionSurface, SurfaceView, TransformNode, camera_frames, load_scene,
};
use framewalk_sim::{CameraController, SimulationClock};

#[derive(Parser)]
#[command(name = "framewalk", about = "Framewalk camera core driver")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate info for all workspace members
    Info,
    /// Run a scripted first-person walk through the scene
    Walk {
        /// Number of simulation ticks to run
        #[arg(short, long, default_value = "200")]
        ticks: u64,
        /// Tick interval in milliseconds
        #[arg(short, long, default_value = "10")]
        interval_ms: u64,
        /// Scene description file (JSON array of nodes); built-in demo scene if omitted
        #[arg(long)]
        scene: Option<PathBuf>,
        /// Print the camera pose every N ticks
        #[arg(long, default_value = "50")]
        print_every: u64,
    },
    /// Compose a scene with the default camera and dump the frame tree
    Compose {
        /// Scene description file (JSON array of nodes); built-in demo scene if omitted
        #[arg(long)]
        scene: Option<PathBuf>,
        #[arg(long, default_value = "1280")]
        width: f32,
        #[arg(long, default_value = "720")]
        height: f32,
        /// Perspective eye distance in pixels
        #[arg(long, default_value = "500")]
        perspective: f32,
    },
}

/// Platform adapter for scripted runs: grants pointer lock immediately and
/// queues events for delivery between ticks.
#[derive(Debug, Default)]
struct ScriptedHost {
    pending: VecDeque<InputEvent>,
}

impl ScriptedHost {
    fn queue(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Deliver all pending events into the input state.
    fn deliver(&mut self, input: &mut InputState) {
        while let Some(event) = self.pending.pop_front() {
            input.apply(&event);
        }
    }
}

impl PointerLockHost for ScriptedHost {
    fn request_lock(&mut self) {
        // A real host acquires the lock asynchronously; the scripted host
        // grants it on the next delivery.
        self.pending
            .push_back(InputEvent::LockChanged { locked: true });
    }
}

/// Built-in demo content: a floor panel, a wall of stacked panels, and one
/// diagonally turned frame with a nested child.
fn demo_scene() -> Vec<TransformNode> {
    let floor = Quat::from_axis_angle(Vec3::X, FRAC_PI_2);
    let wall = Quat::from_axis_angle(Vec3::X, -FRAC_PI_2);

    let mut nodes = vec![TransformNode::new().with_rotation(floor)];
    for i in 0..5 {
        nodes.push(
            TransformNode::new()
                .with_translation(Vec3::new(100.0, -100.0 * i as f32, 0.0))
                .with_rotation(wall),
        );
    }
    nodes.push(
        TransformNode::new()
            .with_translation(Vec3::new(200.0, 300.0, 0.0))
            .with_rotation(Quat::from_axis_angle(Vec3::Y, FRAC_PI_4))
            .with_child(TransformNode::new().with_translation(Vec3::new(0.0, 0.0, 50.0))),
    );
    nodes
}

fn resolve_scene(path: Option<&PathBuf>) -> Result<Vec<TransformNode>> {
    match path {
        Some(p) => Ok(load_scene(p)?),
        None => Ok(demo_scene()),
    }
}

fn run_walk(
    ticks: u64,
    interval_ms: u64,
    scene: Option<PathBuf>,
    print_every: u64,
) -> Result<()> {
    let content = resolve_scene(scene.as_ref())?;
    let viewport = Viewport::new(1280.0, 720.0);
    let perspective = 500.0;

    let mut host = ScriptedHost::default();
    let mut input = InputState::new();
    let mut camera = CameraController::default();
    let mut clock = SimulationClock::new(std::time::Duration::from_millis(interval_ms));

    // The hosting shell would request the lock on a user click; the script
    // does it up front.
    host.request_lock();
    host.queue(InputEvent::KeyDown("w".into()));

    tracing::info!(ticks, interval_ms, "starting scripted walk");

    clock.run(&mut camera, &mut input, |input, cam, tick| {
        // Scripted mouse drift: a slow turn to the left.
        if tick > 0 {
            host.queue(InputEvent::MouseMove { dx: 2.0, dy: 0.0 });
        }
        // Stop walking forward two thirds of the way in.
        if tick == ticks * 2 / 3 {
            host.queue(InputEvent::KeyUp("w".into()));
        }
        host.deliver(input);

        if print_every > 0 && tick % print_every == 0 {
            let pose = cam.pose();
            println!(
                "tick {:>5}  pos=({:8.2}, {:8.2}, {:8.2})  yaw={:7.4}  pitch={:7.4}",
                tick, pose.position.x, pose.position.y, pose.position.z, cam.yaw, cam.pitch
            );
        }
        tick < ticks
    });

    // One presentation at the final pose.
    let pose = camera.pose();
    let root = camera_frames(&pose, viewport, perspective, content);
    let view = SurfaceView::new(perspective, &pose, viewport);
    println!("{}", DebugTextSurface::new().present(&view, &root));
    Ok(())
}

fn run_compose(scene: Option<PathBuf>, width: f32, height: f32, perspective: f32) -> Result<()> {
    let content = resolve_scene(scene.as_ref())?;
    let viewport = Viewport::new(width, height);
    let camera = CameraController::default();

    let pose = camera.pose();
    let root = camera_frames(&pose, viewport, perspective, content);
    let view = SurfaceView::new(perspective, &pose, viewport);
    println!("{}", DebugTextSurface::new().present(&view, &root));
    println!("{} frames total", root.node_count());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("framewalk-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", framewalk_common::crate_info());
            println!("input: {}", framewalk_input::crate_info());
            println!("sim: {}", framewalk_sim::crate_info());
            println!("scene: {}", framewalk_scene::crate_info());
        }
        Commands::Walk {
            ticks,
            interval_ms,
            scene,
            print_every,
        } => run_walk(ticks, interval_ms, scene, print_every)?,
        Commands::Compose {
            scene,
            width,
            height,
            perspective,
        } => run_compose(scene, width, height, perspective)?,
    }

    Ok(())
}
