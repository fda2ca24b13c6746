pub mod assembler;
pub mod climax;
pub mod content;
pub mod curve;
pub mod engine;
pub mod phases;
pub mod validator;
