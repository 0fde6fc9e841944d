//! Wire contracts of the inventory API: entity DTOs, pages and the
//! pagination/confirmation primitives shared by every list screen.

pub mod domain;
pub mod shared;
pub mod system;
