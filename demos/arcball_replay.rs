//! Headless arcball replay
//!
//! Replays a scripted drag and wheel sequence against a controller and logs
//! the matrices a render loop would upload each frame.
//!
//! Run with: cargo run --example arcball_replay -- --mode model --steps 20

use arcball::{
    ArcballConfig, ArcballController, ArcballInput, ArcballMode, Projection, TransformUniforms,
    Viewport,
};
use clap::{Parser, ValueEnum};
use log::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Camera,
    Model,
}

impl From<ModeArg> for ArcballMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Camera => ArcballMode::Camera,
            ModeArg::Model => ArcballMode::Model,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "arcball_replay")]
#[command(about = "Replay a scripted arcball drag and print the resulting matrices")]
struct Args {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 700)]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 700)]
    height: u32,

    /// Initial camera distance
    #[arg(long, default_value_t = 5.0)]
    distance: f32,

    /// Rotation sensitivity
    #[arg(long, default_value_t = 2.0)]
    rotation: f32,

    /// Zoom sensitivity
    #[arg(long, default_value_t = 0.0005)]
    zoom: f32,

    /// Arcball mode during the replay
    #[arg(long, value_enum, default_value = "camera")]
    mode: ModeArg,

    /// Number of pointer moves in the drag
    #[arg(long, default_value_t = 10)]
    steps: u32,

    /// Simulated frame time in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Use an orthographic projection framing the initial distance
    #[arg(long)]
    ortho: bool,
}

/// A rightward drag from the center across a quarter of the viewport,
/// followed by a scroll toward the target
fn script(viewport: &Viewport, steps: u32) -> Vec<ArcballInput> {
    let center = viewport.center();
    let span = viewport.width() as f32 * 0.25;
    let steps = steps.max(1);

    let mut inputs = vec![ArcballInput::PointerDown {
        x: center.x,
        y: center.y,
    }];
    inputs.extend((1..=steps).map(|i| ArcballInput::PointerMove {
        x: center.x + span * i as f32 / steps as f32,
        y: center.y,
    }));
    inputs.push(ArcballInput::PointerUp);
    inputs.push(ArcballInput::Wheel { delta_y: -1000.0 });
    inputs
}

fn main() {
    arcball::init_logging();
    let args = Args::parse();

    let viewport = match Viewport::new(args.width, args.height) {
        Ok(viewport) => viewport,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let config = ArcballConfig::new(args.rotation, args.zoom);
    let mut arcball = match ArcballController::new(viewport, args.distance, config) {
        Ok(arcball) => arcball,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    arcball.set_mode(args.mode.into());

    let projection = if args.ortho {
        // Frame a slab as tall as the initial eye-to-target distance in each direction
        let height = args.distance * 2.0;
        Projection::orthographic(height * viewport.aspect(), height, 0.1, 100.0)
    } else {
        Projection::for_viewport(&viewport)
    };
    info!("projection: {:?}", projection);

    // One input per frame, as a host delivering events between renders would
    for (frame, input) in script(&viewport, args.steps).into_iter().enumerate() {
        arcball.handle(input);
        arcball.tick(args.dt);

        let uniforms = TransformUniforms::from_arcball(&arcball, &projection);
        info!(
            "frame {:>3} {:?}: distance {:.4}, view pos {:?}",
            frame,
            input,
            arcball.distance(),
            uniforms.view_pos.truncate()
        );
    }

    let frame = arcball.frame_matrices();
    info!("mode: {}", arcball.mode().name());
    info!("orientation: {:?}", arcball.orientation());
    info!("model: {:?}", frame.model);
    info!("view: {:?}", frame.view);
}
