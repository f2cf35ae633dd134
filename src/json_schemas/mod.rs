pub mod versions;
pub mod chunk;
