//! Interactive arcball window
//!
//! Opens a window and drives an arcball from real mouse and keyboard events.
//! Nothing is drawn; the window title shows the mode and eye position.
//!
//! Controls:
//! - Left drag: rotate
//! - Wheel: zoom
//! - A: switch between camera and model rotation
//! - R: reset
//! - Escape: quit

use std::time::Instant;

use arcball::{
    ArcballConfig, ArcballController, Projection, TransformUniforms, Viewport, WinitInputAdapter,
};
use log::{error, info};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

const WIDTH: u32 = 700;
const HEIGHT: u32 = 700;

fn main() {
    arcball::init_logging();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let window = WindowBuilder::new()
        .with_title("Arcball")
        .with_inner_size(PhysicalSize::new(WIDTH, HEIGHT))
        .build(&event_loop)
        .expect("Failed to create window");

    let size = window.inner_size();
    let viewport = match Viewport::new(size.width.max(1), size.height.max(1)) {
        Ok(viewport) => viewport,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };
    // Initial distance 5, rotation sensitivity 2, zoom sensitivity 0.0005
    let config = ArcballConfig::new(2.0, 0.0005);
    let mut arcball = match ArcballController::new(viewport, 5.0, config) {
        Ok(arcball) => arcball,
        Err(e) => {
            error!("Failed to create arcball: {}", e);
            return;
        }
    };
    let mut adapter = WinitInputAdapter::new();
    let mut projection = Projection::for_viewport(&viewport);
    let mut last_frame = Instant::now();

    info!("Drag to rotate, scroll to zoom, A to switch mode, R to reset");

    event_loop
        .run(move |event, elwt: &EventLoopWindowTarget<()>| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event, .. } => {
                    match &event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::KeyboardInput { event: key, .. }
                            if key.state == ElementState::Pressed
                                && key.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
                        {
                            elwt.exit()
                        }
                        WindowEvent::Resized(size) if size.width > 0 && size.height > 0 => {
                            projection.set_aspect(size.width as f32 / size.height as f32);
                        }
                        WindowEvent::RedrawRequested => {
                            let uniforms = TransformUniforms::from_arcball(&arcball, &projection);
                            let eye = uniforms.view_pos.truncate();
                            window.set_title(&format!(
                                "Arcball - {} - eye ({:.2}, {:.2}, {:.2}) - distance {:.3}",
                                arcball.mode().name(),
                                eye.x,
                                eye.y,
                                eye.z,
                                arcball.distance()
                            ));
                        }
                        _ => {}
                    }

                    if let Some(input) = adapter.translate(&event) {
                        arcball.handle(input);
                    }
                }
                Event::AboutToWait => {
                    let now = Instant::now();
                    let dt = (now - last_frame).as_secs_f32();
                    last_frame = now;

                    arcball.tick(dt);
                    window.request_redraw();
                }
                _ => {}
            }
        })
        .expect("Event loop failed");
}
