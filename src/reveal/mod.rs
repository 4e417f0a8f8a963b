//! Scroll reveal and progress animation engine.
//!
//! The pure core (`ease`, `timeline`, `trigger`, `group`, `metric`,
//! `confetti`) is driven entirely by explicit clock ticks and callback
//! sinks, so it is tested natively with synthetic clocks. `dom` is the one
//! browser-facing module: it feeds scroll positions into trigger gates and
//! `requestAnimationFrame` timestamps into timelines, and writes the
//! resulting poses onto element styles.

pub mod confetti;
pub mod dom;
pub mod ease;
pub mod group;
pub mod metric;
pub mod timeline;
pub mod trigger;

pub use dom::{
    elements_in, mount_bridge_draw, mount_float_loop, mount_replayable_metrics,
    mount_reveal_group, mount_reveal_group_with, schedule_confetti, schedule_pop_in,
    MetricTarget, RevealOptions,
};
pub use ease::Ease;
pub use group::{FloatConfig, RevealConfig, VisualState};
pub use trigger::StartOffset;
