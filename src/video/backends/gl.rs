//! OpenGL implementation of the shader-build driver.

use std::ffi::CString;
use std::ptr;

use gl;
use gl::types::*;

use super::super::program::Stage;
use super::Driver;

fn stage_enum(stage: Stage) -> GLenum {
    match stage {
        Stage::Vertex => gl::VERTEX_SHADER,
        Stage::Fragment => gl::FRAGMENT_SHADER,
    }
}

/// Driver over the global OpenGL function pointers.
pub struct GlDriver(());

impl GlDriver {
    /// Creates the OpenGL driver.
    ///
    /// # Safety
    ///
    /// The GL symbols must have been loaded (`gl::load_with`) and the
    /// context that loaded them must stay current on the calling thread for
    /// as long as the driver or any object created through it is used.
    pub unsafe fn new() -> Self {
        GlDriver(())
    }
}

impl Driver for GlDriver {
    type StageObject = GLuint;
    type ProgramObject = GLuint;

    unsafe fn create_stage(&mut self, stage: Stage, src: &str) -> GLuint {
        let id = gl::CreateShader(stage_enum(stage));
        let c_str = CString::new(src.as_bytes()).unwrap();
        gl::ShaderSource(id, 1, &c_str.as_ptr(), ptr::null());
        gl::CompileShader(id);
        id
    }

    unsafe fn stage_compiled(&self, stage: &GLuint) -> bool {
        let mut status = GLint::from(gl::FALSE);
        gl::GetShaderiv(*stage, gl::COMPILE_STATUS, &mut status);
        status == GLint::from(gl::TRUE)
    }

    unsafe fn stage_diagnostics(&self, stage: &GLuint) -> String {
        let mut len = 0;
        gl::GetShaderiv(*stage, gl::INFO_LOG_LENGTH, &mut len);
        if len <= 0 {
            return String::new();
        }

        let mut buf = vec![0u8; len as usize];
        gl::GetShaderInfoLog(*stage, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
        buf.truncate(len as usize - 1); // skip the trailing null character
        String::from_utf8_lossy(&buf).into_owned()
    }

    unsafe fn delete_stage(&mut self, stage: GLuint) {
        gl::DeleteShader(stage);
    }

    unsafe fn create_program(&mut self, vs: &GLuint, fs: &GLuint) -> GLuint {
        let id = gl::CreateProgram();
        gl::AttachShader(id, *vs);
        gl::AttachShader(id, *fs);
        gl::LinkProgram(id);

        // The driver owns a copy of the linked result once LinkProgram has
        // run; detaching here lets DeleteShader actually free the stages.
        gl::DetachShader(id, *vs);
        gl::DetachShader(id, *fs);
        id
    }

    unsafe fn program_linked(&self, program: &GLuint) -> bool {
        let mut status = GLint::from(gl::FALSE);
        gl::GetProgramiv(*program, gl::LINK_STATUS, &mut status);
        status == GLint::from(gl::TRUE)
    }

    unsafe fn program_diagnostics(&self, program: &GLuint) -> String {
        let mut len = 0;
        gl::GetProgramiv(*program, gl::INFO_LOG_LENGTH, &mut len);
        if len <= 0 {
            return String::new();
        }

        let mut buf = vec![0u8; len as usize];
        gl::GetProgramInfoLog(*program, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
        buf.truncate(len as usize - 1); // skip the trailing null character
        String::from_utf8_lossy(&buf).into_owned()
    }

    unsafe fn delete_program(&mut self, program: GLuint) {
        gl::DeleteProgram(program);
    }
}
