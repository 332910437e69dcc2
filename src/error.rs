use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InputFileNotFound(String),
    DecodeFailed(String, ::image::ImageError),
    NoImageLoaded,
    MismatchOfSizeBetweenDimensionsAndBuffer(usize, usize),
    UnableToCreateOutputDirectory(String, std::io::Error),
    FailedToWriteImage(String, ::image::ImageError),
    DecompositionWorkerDisconnected,
    MalformedProbePosition(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputFileNotFound(path) => {
                write!(f, "Input file '{}' not found", path)
            }
            Self::DecodeFailed(source, error) => {
                write!(f, "Unable to decode image '{}': {}", source, error)
            }
            Self::NoImageLoaded => write!(f, "No image is loaded"),
            Self::MismatchOfSizeBetweenDimensionsAndBuffer(expected, actual) => {
                write!(
                    f,
                    "Number of pixels does not match the dimensions. Expected {}, but got {}.",
                    expected, actual
                )
            }
            Self::UnableToCreateOutputDirectory(path, error) => {
                write!(
                    f,
                    "Unable to create output directory '{}': {}",
                    path, error
                )
            }
            Self::FailedToWriteImage(path, error) => {
                write!(f, "Failed to write image '{}': {}", path, error)
            }
            Self::DecompositionWorkerDisconnected => {
                write!(f, "A channel decomposition worker stopped before finishing")
            }
            Self::MalformedProbePosition(value) => {
                write!(
                    f,
                    "Probe position '{}' is malformed, expected '<X>,<Y>'",
                    value
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DecodeFailed(_, error) | Self::FailedToWriteImage(_, error) => Some(error),
            Self::UnableToCreateOutputDirectory(_, error) => Some(error),
            _ => None,
        }
    }
}
