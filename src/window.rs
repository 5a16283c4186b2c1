//! Represents an OpenGL context and the window around it.
//!
//! This is the shared front door of the OpenGL lessons: open a window, make
//! the context current on the calling thread and load the GL symbols. The
//! WebGPU lesson manages its own window through `winit`.

use gl;
use glutin;
use glutin::GlContext;

use crate::errors::*;

#[derive(Debug, Clone)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: (u32, u32),
    /// Sets the multisampling level to request. A value of 0 indicates that
    /// multisampling must not be enabled.
    pub multisample: u16,
    /// Specifies whether should we have vsync.
    pub vsync: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "Lesson".to_owned(),
            size: (640, 640),
            multisample: 0,
            vsync: true,
        }
    }
}

/// Opens a window with an OpenGL core context, makes the context current
/// and loads the GL symbols. The returned window and events loop are owned
/// by the caller; the lesson polls the events loop once per frame and swaps
/// buffers on the window.
pub fn open(params: WindowParams) -> Result<(glutin::GlWindow, glutin::EventsLoop)> {
    let builder = glutin::WindowBuilder::new()
        .with_title(params.title)
        .with_dimensions(glutin::dpi::LogicalSize::new(
            f64::from(params.size.0),
            f64::from(params.size.1),
        ));

    let context = glutin::ContextBuilder::new()
        .with_multisampling(params.multisample)
        .with_gl_profile(glutin::GlProfile::Core)
        .with_gl(glutin::GlRequest::Latest)
        .with_vsync(params.vsync);

    let events_loop = glutin::EventsLoop::new();
    let window = glutin::GlWindow::new(builder, context, &events_loop)
        .map_err(failure::SyncFailure::new)?;

    unsafe {
        window.make_current()?;
        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);
    }

    info!(
        "Opened {}x{} window with an OpenGL core context.",
        params.size.0, params.size.1
    );

    Ok((window, events_loop))
}
