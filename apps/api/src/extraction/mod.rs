// Resume extraction pipeline: normalize -> locate sections -> field extractors -> Profile.
// Pure and synchronous; handlers run it inside tokio::task::spawn_blocking.

pub mod assembler;
pub mod contact;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod name;
pub mod normalizer;
pub mod sections;
pub mod skills;
pub mod summary;
pub mod vocabulary;

pub use assembler::assemble;
