//! The build sequence itself: compile two stages, link them into a program,
//! clean up and surface diagnostics on every failure path.

use std::fmt;

use super::backends::Driver;
use super::errors::{Error, Result};

/// One compiled unit of GPU-executed code, before linking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Stage::Vertex => write!(f, "vertex"),
            Stage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Compiles one shader stage from source text.
///
/// On success the returned stage object is owned by the caller, who either
/// hands it to [`link`] or deletes it through the driver. On failure the
/// driver's diagnostic log is logged as a warning, the partially-created
/// stage object is deleted, and the log is returned inside the error; a bad
/// shader is an authoring mistake, so this never panics.
///
/// Empty source text is rejected before any driver object is created.
pub fn compile<D: Driver>(driver: &mut D, stage: Stage, src: &str) -> Result<D::StageObject> {
    if src.is_empty() {
        return Err(Error::CompileFailure(
            stage,
            "source text must not be empty".to_owned(),
        ));
    }

    unsafe {
        let object = driver.create_stage(stage, src);
        if driver.stage_compiled(&object) {
            return Ok(object);
        }

        let log = driver.stage_diagnostics(&object);
        driver.delete_stage(object);

        warn!("Failed to compile {} stage:\n{}", stage, log);
        Err(Error::CompileFailure(stage, log))
    }
}

/// Links a compiled vertex and fragment stage into an executable program.
///
/// Both stage objects are consumed: the driver keeps its own copy of the
/// linked result, so the stages are deleted before this returns, whether
/// linking succeeded or not. On failure the link log is logged as a warning,
/// the unusable program object is deleted, and the log is returned inside
/// the error.
pub fn link<D: Driver>(
    driver: &mut D,
    vs: D::StageObject,
    fs: D::StageObject,
) -> Result<D::ProgramObject> {
    unsafe {
        let program = driver.create_program(&vs, &fs);

        let result = if driver.program_linked(&program) {
            Ok(program)
        } else {
            let log = driver.program_diagnostics(&program);
            driver.delete_program(program);

            warn!("Failed to link program:\n{}", log);
            Err(Error::LinkFailure(log))
        };

        driver.delete_stage(vs);
        driver.delete_stage(fs);
        result
    }
}

/// Compiles both stages and links them in one call.
///
/// This is the entry point the lessons use. It returns either a fully
/// linked, usable program or an error; no stage object outlives the call,
/// and a failure leaves no driver object allocated.
pub fn build<D: Driver>(driver: &mut D, vs: &str, fs: &str) -> Result<D::ProgramObject> {
    let vs = compile(driver, Stage::Vertex, vs)?;
    let fs = match compile(driver, Stage::Fragment, fs) {
        Ok(fs) => fs,
        Err(err) => {
            unsafe { driver.delete_stage(vs) };
            return Err(err);
        }
    };

    link(driver, vs, fs)
}
