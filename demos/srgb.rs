//! Lesson 5 (OpenGL): sRGB color correction under minification.
//!
//! The same six-filter grid as the mipmap lesson, with two twists. The
//! fragment shader decodes the sampled color from sRGB to linear and
//! re-encodes on output, unless `USE_SRGB` asks the driver to do the
//! decoding by uploading the image as `SRGB8_ALPHA8`. A second texture
//! carries hand-painted mip levels, one loud color per level, so the
//! selected level is visible at a glance; clicking anywhere in the window
//! cycles which texture is sampled.

extern crate cgmath;
extern crate easel;
extern crate env_logger;
extern crate gl;
extern crate glutin;

use std::f32::consts::FRAC_PI_2;
use std::ffi::CString;
use std::mem;
use std::ptr;

use cgmath::{perspective, Deg, Matrix4, Point3, Rad, Vector3};
use gl::types::*;
use glutin::GlContext;

use easel::video::{program, GlDriver};
use easel::window::{self, WindowParams};

/// Upload the gradient as SRGB8_ALPHA8 and let the sampler decode, instead
/// of decoding in the fragment shader.
const USE_SRGB: bool = false;

const VERTEX_SHADER: &str = r#"#version 330 core

in vec4 a_position;
in vec2 a_uv;

uniform mat4 u_matrix;

out vec2 texcoord;

void main() {
    texcoord = a_uv;
    gl_Position = u_matrix * a_position;
}
"#;

const FRAGMENT_PRELUDE: &str = r#"#version 330 core

uniform sampler2D u_image;
in vec2 texcoord;

out vec4 out_color;

vec4 sRGBToLinear( in vec4 value ) {
    return vec4( mix( pow( value.rgb * 0.9478672986 + vec3( 0.0521327014 ), vec3( 2.4 ) ), value.rgb * 0.0773993808, vec3( lessThanEqual( value.rgb, vec3( 0.04045 ) ) ) ), value.a );
}

vec4 LinearTosRGB( in vec4 value ) {
    return vec4( mix( pow( value.rgb, vec3( 0.41666 ) ) * 1.055 - vec3( 0.055 ), value.rgb * 12.92, vec3( lessThanEqual( value.rgb, vec3( 0.0031308 ) ) ) ), value.a );
}

vec4 LinearToLinear( in vec4 value ) {
    return value;
}
"#;

fn fragment_shader(use_srgb: bool) -> String {
    // With a hardware sRGB texture the sample already is linear.
    let decode = if use_srgb { "LinearToLinear" } else { "sRGBToLinear" };
    format!(
        "{}\nvoid main() {{\n    out_color = LinearTosRGB({}(vec4(texture(u_image, texcoord).rgb, 1)));\n}}\n",
        FRAGMENT_PRELUDE, decode
    )
}

const VERTICES: [f32; 12] = [
    -0.5, -0.5, 0.0, //
    0.5, -0.5, 0.0, //
    0.5, 0.5, 0.0, //
    -0.5, 0.5, 0.0,
];

const REPEAT_TIMES: f32 = 10.0;

const UVS: [f32; 8] = [
    0.0,
    0.0, //
    1.0,
    0.0, //
    1.0,
    REPEAT_TIMES, //
    0.0,
    REPEAT_TIMES,
];

const INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

const IMAGE_SIZE: usize = 64;

/// One distinct color per mip level, 64x64 down to 1x1.
const MIP_LEVELS: [(usize, [u8; 3]); 7] = [
    (64, [128, 0, 255]),
    (32, [0, 0, 255]),
    (16, [255, 0, 0]),
    (8, [255, 255, 0]),
    (4, [0, 255, 0]),
    (2, [0, 255, 255]),
    (1, [255, 0, 255]),
];

struct FilterSetting {
    x: f32,
    y: f32,
    z_rot: f32,
    mag_filter: GLenum,
    min_filter: GLenum,
}

const SETTINGS: [FilterSetting; 6] = [
    FilterSetting { x: -1.0, y: 1.0, z_rot: 1.0, mag_filter: gl::NEAREST, min_filter: gl::NEAREST },
    FilterSetting { x: 0.0, y: 1.0, z_rot: 1.0, mag_filter: gl::LINEAR, min_filter: gl::NEAREST_MIPMAP_NEAREST },
    FilterSetting { x: 1.0, y: 1.0, z_rot: 1.0, mag_filter: gl::LINEAR, min_filter: gl::LINEAR },
    FilterSetting { x: -1.0, y: -1.0, z_rot: -1.0, mag_filter: gl::LINEAR, min_filter: gl::LINEAR_MIPMAP_NEAREST },
    FilterSetting { x: 0.0, y: -1.0, z_rot: -1.0, mag_filter: gl::LINEAR, min_filter: gl::NEAREST_MIPMAP_LINEAR },
    FilterSetting { x: 1.0, y: -1.0, z_rot: -1.0, mag_filter: gl::LINEAR, min_filter: gl::LINEAR_MIPMAP_LINEAR },
];

/// Grayscale ramp; minifying it makes the wrong-colorspace averaging of a
/// non-decoded sRGB image obvious.
fn gradient(size: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(size * size * 4);
    for _ in 0..size {
        for x in 0..size {
            let v = (x * 255 / (size - 1)) as u8;
            pixels.extend_from_slice(&[v, v, v, 255]);
        }
    }
    pixels
}

/// White background with the level color in the upper-left and lower-right
/// quadrants.
fn painted_level(size: usize, color: [u8; 3]) -> Vec<u8> {
    let half = size / 2;
    let mut pixels = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            if (x < half) == (y < half) {
                pixels.extend_from_slice(&[color[0], color[1], color[2], 255]);
            } else {
                pixels.extend_from_slice(&[255, 255, 255, 255]);
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
        title: "srgb".to_owned(),
        ..Default::default()
    };
    let (window, mut events_loop) = window::open(params).expect("window and GL context");

    let mut driver = unsafe { GlDriver::new() };
    let program = program::build(&mut driver, VERTEX_SHADER, &fragment_shader(USE_SRGB))
        .expect("shader program");

    let matrix_location;
    let mut gradient_texture = 0;
    let mut painted_texture = 0;
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

        // A texture whose mip levels were painted by hand rather than
        // derived from the base image.
        gl::GenTextures(1, &mut painted_texture);
        gl::BindTexture(gl::TEXTURE_2D, painted_texture);
        for (level, &(size, color)) in MIP_LEVELS.iter().enumerate() {
            let pixels = painted_level(size, color);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                level as GLint,
                gl::RGBA as GLint,
                size as GLsizei,
                size as GLsizei,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                pixels.as_ptr() as *const _,
            );
        }

        gl::GenTextures(1, &mut gradient_texture);
        gl::ActiveTexture(gl::TEXTURE0);
        gl::BindTexture(gl::TEXTURE_2D, gradient_texture);

        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as GLint);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT as GLint);

        let internal_format = if USE_SRGB { gl::SRGB8_ALPHA8 } else { gl::RGBA };
        let pixels = gradient(IMAGE_SIZE);
        gl::TexImage2D(
            gl::TEXTURE_2D,
            0,
            internal_format as GLint,
            IMAGE_SIZE as GLsizei,
            IMAGE_SIZE as GLsizei,
            0,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            pixels.as_ptr() as *const _,
        );
        gl::GenerateMipmap(gl::TEXTURE_2D);

        let mut index_buffer = 0;
        gl::GenBuffers(1, &mut index_buffer);
        gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, index_buffer);
        gl::BufferData(
            gl::ELEMENT_ARRAY_BUFFER,
            (INDICES.len() * mem::size_of::<u16>()) as GLsizeiptr,
            INDICES.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );

        gl::UseProgram(program);
        let c_name = CString::new("u_image").unwrap();
        gl::Uniform1i(gl::GetUniformLocation(program, c_name.as_ptr()), 0);

        let c_name = CString::new("u_matrix").unwrap();
        matrix_location = gl::GetUniformLocation(program, c_name.as_ptr());
    }

    let textures = [gradient_texture, painted_texture];
    let mut texture_index = 0;

    let dimensions = window.get_inner_size().expect("window dimensions");
    let dpr = window.get_hidpi_factor();
    let (width, height) = (
        (dimensions.width * dpr) as GLsizei,
        (dimensions.height * dpr) as GLsizei,
    );
    let aspect = width as f32 / height as f32;

    let mut running = true;
    while running {
        events_loop.poll_events(|event| {
            if let glutin::Event::WindowEvent { event, .. } = event {
                match event {
                    glutin::WindowEvent::CloseRequested => running = false,
                    glutin::WindowEvent::MouseInput {
                        state: glutin::ElementState::Pressed,
                        ..
                    } => {
                        texture_index = (texture_index + 1) % textures.len();
                    }
                    _ => (),
                }
            }
        });

        unsafe {
            gl::Viewport(0, 0, width, height);
            gl::Enable(gl::CULL_FACE);
            gl::CullFace(gl::BACK);
            gl::ClearColor(0.0, 0.0, 0.4, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);

            for setting in &SETTINGS {
                gl::BindTexture(gl::TEXTURE_2D, textures[texture_index]);
                gl::TexParameteri(
                    gl::TEXTURE_2D,
                    gl::TEXTURE_MIN_FILTER,
                    setting.min_filter as GLint,
                );
                gl::TexParameteri(
                    gl::TEXTURE_2D,
                    gl::TEXTURE_MAG_FILTER,
                    setting.mag_filter as GLint,
                );

                let projection = perspective(Deg(60.0f32), aspect, 1.0, 2000.0);
                let view = Matrix4::look_at(
                    Point3::new(0.0, 0.0, 2.0),
                    Point3::new(0.0, 0.0, 0.0),
                    Vector3::new(0.0, 1.0, 0.0),
                );
                let model = Matrix4::from_translation(Vector3::new(setting.x, setting.y, -4.8))
                    * Matrix4::from_angle_x(Rad(FRAC_PI_2 * setting.z_rot))
                    * Matrix4::from_nonuniform_scale(0.8, REPEAT_TIMES, 1.0);
                let matrix: [[f32; 4]; 4] = (projection * view * model).into();
                gl::UniformMatrix4fv(matrix_location, 1, gl::FALSE, matrix[0].as_ptr());

                gl::DrawElements(
                    gl::TRIANGLES,
                    INDICES.len() as GLsizei,
                    gl::UNSIGNED_SHORT,
                    ptr::null(),
                );
            }
        }

        window.swap_buffers().expect("swap buffers");
    }
}
