// Graphite: stylometric authorship verification
//
// This is the library root. Each module corresponds to a stage of the
// comparison pipeline: raw text -> analysis -> profiles -> distance score.

pub mod analysis;
pub mod compare;
pub mod config;
pub mod output;
pub mod profile;
pub mod scoring;
pub mod source;
