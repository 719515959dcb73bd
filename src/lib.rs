pub mod environment;
pub mod evaluator;
pub mod interpreter;
pub mod parser;
pub mod source;
pub mod value;
