//! Reusable widget components.

pub mod banner;
pub mod confirm;
pub mod detail;

pub use banner::ErrorBanner;
pub use confirm::ConfirmOverlay;
pub use detail::DetailPanel;
