use std::sync::Arc;

use anyhow::Result;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::canvas::Canvas;
use crate::surface::SurfaceRenderer;

/// Displays a rendered canvas in a window until the user dismisses it.
///
/// The image is static: the event loop waits for events instead of polling,
/// and only re-presents the canvas on redraw requests.
pub struct Viewer {
    title: String,
    canvas: Canvas,
    window: Option<Arc<Window>>,
    renderer: Option<SurfaceRenderer>,
}

impl Viewer {
    pub fn new(title: impl Into<String>, canvas: Canvas) -> Self {
        Self {
            title: title.into(),
            canvas,
            window: None,
            renderer: None,
        }
    }

    /// Blocks until the window is closed or Escape is pressed.
    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);
        event_loop.run_app(&mut self)?;
        Ok(())
    }
}

impl ApplicationHandler for Viewer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.canvas.dimensions();
        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(LogicalSize::new(width, height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(SurfaceRenderer::new(window.clone(), width, height))
        {
            Ok(r) => r,
            Err(e) => {
                log::error!("failed to initialize display surface: {e:#}");
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &self.renderer {
                    if let Err(e) = renderer.present(self.canvas.pixels()) {
                        log::error!("failed to present canvas: {e:#}");
                    }
                }
            }
            _ => {}
        }
    }
}
