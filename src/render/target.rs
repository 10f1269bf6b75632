use crate::error::RenderError;

use super::state::RenderState;

/// A place a [`RenderState`] is drawn into. Every `render` replaces what the
/// target showed before.
pub trait RenderTarget {
    /// Blank the target before a new submission is processed.
    fn clear(&mut self) {}

    fn render(&mut self, state: &RenderState) -> Result<(), RenderError>;
}
