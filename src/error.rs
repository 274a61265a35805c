use core::fmt::Display;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    ParseErr(String),
    ReservedErr(String),
    WireErr(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParseErr(err) | Self::ReservedErr(err) | Self::WireErr(err) => {
                write!(f, "{}", err)
            }
        }
    }
}

impl std::error::Error for Error {}
