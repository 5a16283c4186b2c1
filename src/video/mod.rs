//! Building executable GPU programs from shader source text.
//!
//! This is the one sequence every OpenGL lesson repeats: submit a vertex and
//! a fragment stage to the driver for compilation, link the two into a
//! program object, and report the driver's diagnostic log when either step
//! fails. The sequence is written against the [`backends::Driver`] trait so
//! its cleanup behavior can be exercised without a live GPU; the OpenGL
//! implementation lives in [`backends::gl`].
//!
//! A failed compile or link is an authoring mistake, not a program fault.
//! Every failure path deletes the driver objects it created before returning
//! the diagnostic to the caller, and nothing in this module panics on bad
//! shader text.

pub mod backends;
pub mod errors;
pub mod program;

pub use self::backends::gl::GlDriver;
pub use self::backends::Driver;
pub use self::errors::{Error, Result};
pub use self::program::{build, compile, link, Stage};
