//! Code shared by the frontend and the generator.

pub mod typed_ids;
pub mod meta;
pub mod intrinsics;
pub mod error;
