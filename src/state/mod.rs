/// State management module
///
/// This module handles all gallery state, including:
/// - Shared data structures (data.rs)
/// - The active-index state machine (gallery.rs)
/// - List geometry and page math (layout.rs)
/// - Scroll animations (motion.rs)
/// - Per-list scroll tracking and echo filtering (scroll.rs)

pub mod data;
pub mod gallery;
pub mod layout;
pub mod motion;
pub mod scroll;
