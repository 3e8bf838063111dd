//! The native animation-handle seam

use crate::FinishListener;

/// A live, imperative animation handle (a Web Animations API animation or an
/// equivalent engine object).
///
/// The coordinator installs a [`FinishListener`] at hoist time; the
/// implementation must invoke it when the underlying animation reports its
/// native finish. `cancel` stops the animation; the coordinator guarantees it
/// is called exactly once per un-hoist and never after.
pub trait WaapiHandle {
    /// Start or resume playback
    fn play(&mut self);

    /// Stop playback and discard progress
    fn cancel(&mut self);

    /// Install the coordinator's finish listener
    fn set_finish_listener(&mut self, listener: FinishListener);
}
