//! Dispatch middleware pipeline
//!
//! Middlewares wrap the reducer as an ordered chain of responsibility: each
//! one receives the state, the action, and a `next` continuation, and may
//! short-circuit by returning without calling `next`.

use crate::{Result, StoryAction};
use story_model::Story;

/// The continuation a middleware invokes to pass the action down the chain
pub type Next<'a> = dyn FnMut(&Story, &StoryAction) -> Result<Story> + 'a;

/// An interceptor around dispatch
pub trait Middleware {
    fn handle(&self, story: &Story, action: &StoryAction, next: &mut Next<'_>) -> Result<Story>;
}

/// Run an action through the middleware chain, ending at `terminal` (the
/// reducer). Middlewares run in registration order.
pub(crate) fn dispatch_through(
    middlewares: &[Box<dyn Middleware>],
    story: &Story,
    action: &StoryAction,
    terminal: &mut Next<'_>,
) -> Result<Story> {
    match middlewares.split_first() {
        None => terminal(story, action),
        Some((head, rest)) => {
            let mut next =
                |story: &Story, action: &StoryAction| dispatch_through(rest, story, action, terminal);
            head.handle(story, action, &mut next)
        }
    }
}

/// Built-in middleware logging every dispatched action at debug level
pub struct ActionLogger;

impl Middleware for ActionLogger {
    fn handle(&self, story: &Story, action: &StoryAction, next: &mut Next<'_>) -> Result<Story> {
        tracing::debug!(
            action = action.display_name(),
            pages = story.pages.len(),
            selected = story.selection.len(),
            "dispatching story action"
        );
        let result = next(story, action);
        if result.is_err() {
            tracing::warn!(action = action.display_name(), "story action failed");
        }
        result
    }
}
