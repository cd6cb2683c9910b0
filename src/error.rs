use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrajError {
    #[error("invalid header at line {line}: expected the number of atoms")]
    InvalidHeader { line: usize },
    #[error("malformed atom record at line {line}: {details}")]
    MalformedRecord { line: usize, details: String },
    #[error("invalid stride {stride} for {total} frames{}", target_length(.length))]
    InvalidStride {
        total: usize,
        stride: usize,
        length: Option<usize>,
    },
    #[error("cannot thin an empty trajectory")]
    EmptyTrajectory,
    #[error("{0}")]
    IoError(#[from] std::io::Error),
}

fn target_length(length: &Option<usize>) -> String {
    length
        .map(|l| format!(" (target length {l})"))
        .unwrap_or_default()
}

impl TrajError {
    pub(crate) fn malformed(line: usize, details: impl Into<String>) -> Self {
        TrajError::MalformedRecord {
            line,
            details: details.into(),
        }
    }
}
