//! Input loading: single files and batch directories.

pub mod batch;
pub mod reader;

pub use batch::discover_batch_inputs;
pub use reader::read_input;
