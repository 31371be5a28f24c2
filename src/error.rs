use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("no parsable version tags among {listed} listed tags")]
    NoParsableTags { listed: usize },

    #[error("descriptor file {} not found", .0.display())]
    MissingDescriptor(PathBuf),

    #[error("{}: `{key}` is not a mapping", .file.display())]
    NotAMapping { file: PathBuf, key: String },
}
