//! Lesson 1: open a window and clear the framebuffer to a solid color.

extern crate easel;
extern crate env_logger;
extern crate gl;
extern crate glutin;

use glutin::GlContext;

use easel::window::{self, WindowParams};

fn main() {
    env_logger::init();

    let params = WindowParams {
        title: "hello, world".to_owned(),
        ..Default::default()
    };
    let (window, mut events_loop) = window::open(params).expect("window and GL context");

    let mut running = true;
    while running {
        events_loop.poll_events(|event| {
            if let glutin::Event::WindowEvent {
                event: glutin::WindowEvent::CloseRequested,
                ..
            } = event
            {
                running = false;
            }
        });

        unsafe {
            gl::ClearColor(0.0, 0.0, 0.4, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        window.swap_buffers().expect("swap buffers");
    }
}
