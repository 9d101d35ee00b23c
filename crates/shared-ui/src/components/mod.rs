// Standalone components (no overlay behavior)
pub mod badge;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod input;
pub mod label;
pub mod select;
pub mod separator;

// Overlay
pub mod dialog;

// Navigation
pub mod navbar;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use checkbox::*;
pub use dialog::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use select::*;
pub use separator::*;
