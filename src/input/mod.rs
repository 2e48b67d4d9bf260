mod reader;

pub use reader::{read_input, STDIN_PATH};
