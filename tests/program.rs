extern crate easel;

use std::collections::HashSet;

use easel::video::backends::Driver;
use easel::video::errors::Error;
use easel::video::program::{self, Stage};

const VS: &str = "void main() { gl_Position = vec4(0); }";
const FS: &str = "void main() { out_color = vec4(1, 0, 0, 1); }";
const FS_BAD: &str = "void main() { out_color = vec4(1, 0, 0, 1) }";

/// In-memory driver. It "compiles" any source except the ones listed as
/// invalid at construction, optionally fails every link, and keeps an
/// account of live driver objects so tests can assert that no failure path
/// leaks one.
struct ScriptedDriver {
    invalid: HashSet<&'static str>,
    link_fails: bool,
    next_id: u32,
    live_stages: HashSet<u32>,
    live_programs: HashSet<u32>,
    compiled: HashSet<u32>,
}

impl ScriptedDriver {
    fn new() -> Self {
        ScriptedDriver {
            invalid: HashSet::new(),
            link_fails: false,
            next_id: 1,
            live_stages: HashSet::new(),
            live_programs: HashSet::new(),
            compiled: HashSet::new(),
        }
    }

    fn with_invalid(sources: &[&'static str]) -> Self {
        let mut driver = ScriptedDriver::new();
        driver.invalid = sources.iter().cloned().collect();
        driver
    }

    fn failing_link() -> Self {
        let mut driver = ScriptedDriver::new();
        driver.link_fails = true;
        driver
    }

    fn live_objects(&self) -> usize {
        self.live_stages.len() + self.live_programs.len()
    }

    fn objects_created(&self) -> u32 {
        self.next_id - 1
    }
}

impl Driver for ScriptedDriver {
    type StageObject = u32;
    type ProgramObject = u32;

    unsafe fn create_stage(&mut self, _: Stage, src: &str) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.live_stages.insert(id);
        if !self.invalid.contains(src) {
            self.compiled.insert(id);
        }
        id
    }

    unsafe fn stage_compiled(&self, stage: &u32) -> bool {
        self.compiled.contains(stage)
    }

    unsafe fn stage_diagnostics(&self, _: &u32) -> String {
        "0:1: error: syntax error".to_owned()
    }

    unsafe fn delete_stage(&mut self, stage: u32) {
        assert!(
            self.live_stages.remove(&stage),
            "double free of stage object {}",
            stage
        );
    }

    unsafe fn create_program(&mut self, vs: &u32, fs: &u32) -> u32 {
        assert!(
            self.live_stages.contains(vs) && self.live_stages.contains(fs),
            "linking a deleted stage object"
        );

        let id = self.next_id;
        self.next_id += 1;
        self.live_programs.insert(id);
        id
    }

    unsafe fn program_linked(&self, _: &u32) -> bool {
        !self.link_fails
    }

    unsafe fn program_diagnostics(&self, _: &u32) -> String {
        "error: input of fragment stage has no matching output".to_owned()
    }

    unsafe fn delete_program(&mut self, program: u32) {
        assert!(
            self.live_programs.remove(&program),
            "double free of program object {}",
            program
        );
    }
}

#[test]
fn compile_valid_source() {
    let mut driver = ScriptedDriver::new();
    let stage = program::compile(&mut driver, Stage::Vertex, VS);

    assert!(stage.is_ok());
    assert_eq!(driver.live_objects(), 1);
}

#[test]
fn compile_invalid_source_leaves_no_object_behind() {
    let mut driver = ScriptedDriver::with_invalid(&[FS_BAD]);
    let stage = program::compile(&mut driver, Stage::Fragment, FS_BAD);

    match stage {
        Err(Error::CompileFailure(Stage::Fragment, log)) => {
            assert!(log.contains("error"));
        }
        other => panic!("expected a compile failure, got {:?}", other),
    }
    assert_eq!(driver.live_objects(), 0);
}

#[test]
fn compile_rejects_empty_source_before_touching_the_driver() {
    let mut driver = ScriptedDriver::new();
    let stage = program::compile(&mut driver, Stage::Vertex, "");

    assert!(stage.is_err());
    assert_eq!(driver.objects_created(), 0);
}

#[test]
fn recompiling_identical_source_yields_independent_objects() {
    let mut driver = ScriptedDriver::new();
    let first = program::compile(&mut driver, Stage::Vertex, VS).unwrap();
    let second = program::compile(&mut driver, Stage::Vertex, VS).unwrap();

    assert_ne!(first, second);
    assert_eq!(driver.live_objects(), 2);
}

#[test]
fn link_consumes_both_stages() {
    let mut driver = ScriptedDriver::new();
    let vs = program::compile(&mut driver, Stage::Vertex, VS).unwrap();
    let fs = program::compile(&mut driver, Stage::Fragment, FS).unwrap();

    let linked = program::link(&mut driver, vs, fs);

    assert!(linked.is_ok());
    assert_eq!(driver.live_stages.len(), 0);
    assert_eq!(driver.live_programs.len(), 1);
}

#[test]
fn link_failure_leaves_no_object_behind() {
    let mut driver = ScriptedDriver::failing_link();
    let vs = program::compile(&mut driver, Stage::Vertex, VS).unwrap();
    let fs = program::compile(&mut driver, Stage::Fragment, FS).unwrap();

    match program::link(&mut driver, vs, fs) {
        Err(Error::LinkFailure(log)) => assert!(log.contains("no matching output")),
        other => panic!("expected a link failure, got {:?}", other),
    }
    assert_eq!(driver.live_objects(), 0);
}

#[test]
fn build_produces_exactly_one_live_object() {
    let mut driver = ScriptedDriver::new();
    let program = program::build(&mut driver, VS, FS);

    assert!(program.is_ok());
    assert_eq!(driver.live_stages.len(), 0);
    assert_eq!(driver.live_programs.len(), 1);
}

#[test]
fn build_deletes_vertex_stage_when_fragment_compile_fails() {
    let mut driver = ScriptedDriver::with_invalid(&[FS_BAD]);
    let program = program::build(&mut driver, VS, FS_BAD);

    assert!(program.is_err());
    assert_eq!(driver.live_objects(), 0);
}

#[test]
fn errors_carry_the_driver_diagnostics() {
    let mut driver = ScriptedDriver::with_invalid(&[FS_BAD]);
    let err = program::build(&mut driver, VS, FS_BAD).unwrap_err();

    let message = format!("{}", err);
    assert!(message.contains("fragment"));
    assert!(message.contains("0:1: error"));
}
