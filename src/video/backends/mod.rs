//! The backend of the program builder, which is responsible for only one
//! thing: issuing shader-build calls against a low-level GPU driver.

pub mod gl;

use super::program::Stage;

/// The raw driver verbs the program build sequence is written against.
///
/// The OpenGL backend maps these onto the global `gl` function pointers;
/// tests drive the build sequence with scripted in-memory implementations.
/// Both object types are opaque to the builder: it only creates them, asks
/// the driver about their status, and deletes them.
pub trait Driver {
    /// One compiled (but not yet linked) shader stage.
    type StageObject;
    /// One linked, executable program.
    type ProgramObject;

    /// Creates a stage object of the given kind and submits `src` to the
    /// driver for compilation. Always returns an object; whether the
    /// compilation actually succeeded is reported by `stage_compiled`.
    unsafe fn create_stage(&mut self, stage: Stage, src: &str) -> Self::StageObject;

    /// Returns true if the stage object holds a successfully compiled stage.
    unsafe fn stage_compiled(&self, stage: &Self::StageObject) -> bool;

    /// Retrieves the driver's compile diagnostic log for the stage object.
    unsafe fn stage_diagnostics(&self, stage: &Self::StageObject) -> String;

    /// Destroys a stage object.
    unsafe fn delete_stage(&mut self, stage: Self::StageObject);

    /// Creates a program object, attaches both stages and requests linking.
    /// The driver keeps its own copy of the linked result; the stage objects
    /// can be deleted as soon as this returns.
    unsafe fn create_program(
        &mut self,
        vs: &Self::StageObject,
        fs: &Self::StageObject,
    ) -> Self::ProgramObject;

    /// Returns true if the program object was linked successfully.
    unsafe fn program_linked(&self, program: &Self::ProgramObject) -> bool;

    /// Retrieves the driver's link diagnostic log for the program object.
    unsafe fn program_diagnostics(&self, program: &Self::ProgramObject) -> String;

    /// Destroys a program object.
    unsafe fn delete_program(&mut self, program: Self::ProgramObject);
}
