mod walker;

pub use walker::{SymlinkEntry, SymlinkScanner};
