//! Open Packaging Convention plumbing: the ZIP container and its well-known names.

pub mod constants;
pub mod phys_pkg;
pub mod rels;

pub use phys_pkg::{PhysPkgReader, PhysPkgWriter};
