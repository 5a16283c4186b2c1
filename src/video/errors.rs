use super::program::Stage;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Failed to compile {} stage, errors: \n{}", _0, _1)]
    CompileFailure(Stage, String),
    #[fail(display = "Failed to link program, errors: \n{}", _0)]
    LinkFailure(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;
