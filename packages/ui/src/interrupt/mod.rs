//! Interrupt surfaces: the full-screen broadcast reveal, the inline
//! dismissable banner, and the maintenance block.
//!
//! Each surface runs its own long-poll loop against the event feed and
//! re-fetches authoritative state when a relevant event lands. The decision
//! logic (dedup, reveal phases, gate) lives in `vault_core::interrupt`;
//! these components only drive it and render its state.

mod banner;
pub use banner::BroadcastBanner;

mod broadcast_overlay;
pub use broadcast_overlay::FullScreenBroadcast;

mod maintenance_overlay;
pub use maintenance_overlay::MaintenanceOverlay;
