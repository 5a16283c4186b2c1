//! `easel` is a set of small, independent lessons in introductory real-time
//! graphics, rendered through two different GPU APIs (OpenGL and WebGPU):
//! clearing a framebuffer, drawing a textured quad, mipmapping and sRGB
//! color correction.
//!
//! Each lesson lives in its own binary under `demos/` and deliberately keeps
//! its buffer, texture and draw-call boilerplate inline; the lessons are
//! about the raw API sequences, not about engine architecture. The one piece
//! of setup that every lesson repeats verbatim is hoisted into [`video`]:
//! compile two shader stages, link them into a program, and surface the
//! driver's diagnostics along the way. [`window`] opens the OpenGL window
//! and context the GL lessons share.
//!
//! The WebGPU lesson talks to `wgpu` directly and does not go through
//! [`video`]; the two APIs are intentionally not unified.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub mod errors;
pub mod video;
pub mod window;
