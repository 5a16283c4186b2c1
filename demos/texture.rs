//! Lesson 2 (OpenGL): draw one indexed quad sampling a 2D texture.
//!
//! The original lesson downloads a PNG; here the image input is a generated
//! checkerboard, since decoding images is not what the lesson is about.

extern crate easel;
extern crate env_logger;
extern crate gl;
extern crate glutin;

use std::ffi::CString;
use std::mem;
use std::ptr;

use gl::types::*;
use glutin::GlContext;

use easel::video::{program, GlDriver};
use easel::window::{self, WindowParams};

const VERTEX_SHADER: &str = r#"#version 330 core

in vec4 a_position;
in vec2 a_uv;
out vec2 texcoord;

void main() {
    texcoord = a_uv;
    gl_Position = a_position;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core

uniform sampler2D u_image;
in vec2 texcoord;

out vec4 out_color;

void main() {
    out_color = vec4(texture(u_image, texcoord).rgb, 1);
}
"#;

const VERTICES: [f32; 12] = [
    -0.8, -0.8, 0.0, //
    0.8, -0.8, 0.0, //
    0.8, 0.8, 0.0, //
    -0.8, 0.8, 0.0,
];

const UVS: [f32; 8] = [
    0.0, 0.0, //
    1.0, 0.0, //
    1.0, 1.0, //
    0.0, 1.0,
];

const INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

const IMAGE_SIZE: usize = 64;

/// RGBA checkerboard, the stand-in for the tutorial's downloaded image.
fn checkerboard(size: usize, cell: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            if (x / cell + y / cell) % 2 == 0 {
                pixels.extend_from_slice(&[255, 196, 0, 255]);
            } else {
                pixels.extend_from_slice(&[32, 32, 32, 255]);
            }
        }
    }
    pixels
}

unsafe fn attribute_pointer(program: GLuint, name: &str, size: GLint) {
    let c_name = CString::new(name).unwrap();
    let location = gl::GetAttribLocation(program, c_name.as_ptr()) as GLuint;
    gl::EnableVertexAttribArray(location);
    gl::VertexAttribPointer(location, size, gl::FLOAT, gl::FALSE, 0, ptr::null());
}

fn main() {
    env_logger::init();

    let params = WindowParams {
        title: "texture".to_owned(),
        ..Default::default()
    };
    let (window, mut events_loop) = window::open(params).expect("window and GL context");

    let mut driver = unsafe { GlDriver::new() };
    let program =
        program::build(&mut driver, VERTEX_SHADER, FRAGMENT_SHADER).expect("shader program");

    unsafe {
        let mut vao = 0;
        gl::GenVertexArrays(1, &mut vao);
        gl::BindVertexArray(vao);

        let mut position_buffer = 0;
        gl::GenBuffers(1, &mut position_buffer);
        gl::BindBuffer(gl::ARRAY_BUFFER, position_buffer);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            (VERTICES.len() * mem::size_of::<f32>()) as GLsizeiptr,
            VERTICES.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );
        attribute_pointer(program, "a_position", 3);

        let mut uv_buffer = 0;
        gl::GenBuffers(1, &mut uv_buffer);
        gl::BindBuffer(gl::ARRAY_BUFFER, uv_buffer);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            (UVS.len() * mem::size_of::<f32>()) as GLsizeiptr,
            UVS.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );
        attribute_pointer(program, "a_uv", 2);

        let mut texture = 0;
        gl::GenTextures(1, &mut texture);
        gl::ActiveTexture(gl::TEXTURE0);
        gl::BindTexture(gl::TEXTURE_2D, texture);

        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as GLint);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as GLint);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::NEAREST as GLint);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::NEAREST as GLint);

        let pixels = checkerboard(IMAGE_SIZE, 8);
        gl::TexImage2D(
            gl::TEXTURE_2D,
            0,
            gl::RGBA as GLint,
            IMAGE_SIZE as GLsizei,
            IMAGE_SIZE as GLsizei,
            0,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            pixels.as_ptr() as *const _,
        );

        gl::UseProgram(program);
        let c_name = CString::new("u_image").unwrap();
        let image_location = gl::GetUniformLocation(program, c_name.as_ptr());
        gl::Uniform1i(image_location, 0);

        let mut index_buffer = 0;
        gl::GenBuffers(1, &mut index_buffer);
        gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, index_buffer);
        gl::BufferData(
            gl::ELEMENT_ARRAY_BUFFER,
            (INDICES.len() * mem::size_of::<u16>()) as GLsizeiptr,
            INDICES.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );
    }

    let dimensions = window.get_inner_size().expect("window dimensions");
    let dpr = window.get_hidpi_factor();
    let (width, height) = (
        (dimensions.width * dpr) as GLsizei,
        (dimensions.height * dpr) as GLsizei,
    );

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
            gl::Viewport(0, 0, width, height);
            gl::ClearColor(0.0, 0.0, 0.4, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
            gl::DrawElements(
                gl::TRIANGLES,
                INDICES.len() as GLsizei,
                gl::UNSIGNED_SHORT,
                ptr::null(),
            );
        }

        window.swap_buffers().expect("swap buffers");
    }
}
