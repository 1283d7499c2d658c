mod prompt_assembler;
mod response_extractor;

pub use prompt_assembler::*;
pub use response_extractor::*;
