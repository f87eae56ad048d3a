// Leaf pieces
pub mod field_extras;
pub mod input;

// Composite fields; depend on the leaf pieces
pub mod details_field;
pub mod field_holder;

// Re-exports for convenience
pub use details_field::*;
pub use field_extras::*;
pub use field_holder::*;
pub use input::*;
