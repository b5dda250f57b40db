//! Companion programs: small walkthroughs of the ownership model that the
//! allocation benchmarks are contrasted against.

pub mod fib;
pub mod ownership;
pub mod refcount;
pub mod scoped;
