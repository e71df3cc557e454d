//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer, and the renderer diffs framebuffers onto the terminal. No
//! widget toolkit is involved.
//!
//! - [`BoardView`]: tile grid, progress line and win overlay
//! - [`TopicView`]: topic menu with loading/error notices
//! - [`TerminalRenderer`]: raw mode, alternate screen, diffed output, bell
//! - [`TermFeedback`]: [`EffectSink`](core::EffectSink) for the terminal
//! - [`RenderThrottle`]: draw on change, idle-rate otherwise

pub mod bidi;
pub mod board_view;
pub mod fb;
pub mod feedback;
pub mod render_throttle;
pub mod renderer;
pub mod topic_view;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use bidi::display_order;
pub use board_view::{AnchorY, BoardLayout, BoardScene, BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use feedback::TermFeedback;
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use topic_view::{Notice, TopicScene, TopicView};
