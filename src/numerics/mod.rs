// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod fixed;
    pub mod ops;
    pub mod parse;
    #[cfg(feature = "serde")]
    pub mod serialization;
    pub mod tolerance;
    pub mod traits;
    pub mod vector;
}
