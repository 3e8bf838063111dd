//! Coordinator for hoisted animation handles
//!
//! Associates declarative animation descriptors with live handles, plays the
//! hoisted set as a batch, and raises one aggregated finish event per play
//! cycle. Single-threaded by design: the registry lives behind `Rc<RefCell>`
//! and is only touched from the UI thread's callbacks.

use crate::WaapiHandle;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::{Rc, Weak};
use story_model::{Animation, AnimationKind, AnimationParams, ElementId};

/// A per-animation closure surface: exposes the effect's type tag and
/// parameters to a sink without exposing coordinator bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct AnimationGenerator {
    kind: AnimationKind,
    params: AnimationParams,
}

impl AnimationGenerator {
    /// Invoke `sink` with this animation's type tag and parameters
    pub fn emit(&self, sink: &mut dyn FnMut(&AnimationKind, &AnimationParams)) {
        sink(&self.kind, &self.params);
    }
}

type FinishCallback = Box<dyn FnMut()>;

struct Hoisted {
    id: u64,
    handle: Box<dyn WaapiHandle>,
}

/// Wait set for one playback cycle: the handle ids hoisted when the cycle
/// started that have not yet reported native finish.
struct Cycle {
    pending: HashSet<u64>,
}

struct CoordinatorState {
    next_handle_id: u64,
    cycle_count: u64,
    /// Hoisted handles in registration order
    hoisted: Vec<Hoisted>,
    cycle: Option<Cycle>,
    on_finish: Option<FinishCallback>,
}

impl CoordinatorState {
    /// Drop a handle from the active cycle's wait set. Returns true when
    /// that emptied the wait set, ending the cycle.
    fn complete(&mut self, handle_id: u64) -> bool {
        let Some(cycle) = &mut self.cycle else {
            return false;
        };
        if !cycle.pending.remove(&handle_id) {
            return false;
        }
        if cycle.pending.is_empty() {
            self.cycle = None;
            true
        } else {
            false
        }
    }
}

/// Fire the aggregated finish callback, tolerating callbacks that touch the
/// coordinator re-entrantly: the callback is taken out of the state for the
/// duration of the call and reinstalled unless it was replaced meanwhile.
fn fire_on_finish(state_rc: &Rc<RefCell<CoordinatorState>>) {
    let callback = state_rc.borrow_mut().on_finish.take();
    if let Some(mut callback) = callback {
        callback();
        let mut state = state_rc.borrow_mut();
        if state.on_finish.is_none() {
            state.on_finish = Some(callback);
        }
    }
}

/// Token installed on a hoisted handle; the handle invokes it when the
/// underlying animation reports native finish.
#[derive(Clone)]
pub struct FinishListener {
    state: Weak<RefCell<CoordinatorState>>,
    handle_id: u64,
}

impl FinishListener {
    /// Report that the handle's animation finished. A no-op once the
    /// coordinator is gone, or for handles outside the active cycle's wait
    /// set (un-hoisted, or hoisted after the cycle started).
    pub fn notify(&self) {
        let Some(state_rc) = self.state.upgrade() else {
            return;
        };
        let cycle_done = state_rc.borrow_mut().complete(self.handle_id);
        if cycle_done {
            tracing::trace!(handle = self.handle_id, "playback cycle finished");
            fire_on_finish(&state_rc);
        }
    }
}

/// Un-hoist token returned by [`AnimationCoordinator::hoist`].
///
/// Calling it removes the handle from the active set and invokes its native
/// `cancel` exactly once; further calls are no-ops.
pub struct Unhoist {
    state: Weak<RefCell<CoordinatorState>>,
    handle_id: u64,
    called: bool,
}

impl Unhoist {
    /// Remove the handle and cancel it
    pub fn call(&mut self) {
        if self.called {
            return;
        }
        self.called = true;

        let Some(state_rc) = self.state.upgrade() else {
            return;
        };
        let removed = {
            let mut state = state_rc.borrow_mut();
            state
                .hoisted
                .iter()
                .position(|hoisted| hoisted.id == self.handle_id)
                .map(|index| state.hoisted.remove(index))
        };
        let Some(mut removed) = removed else {
            return;
        };
        removed.handle.cancel();

        // Removal must not block the cycle: if every remaining handle in the
        // wait set already finished, the aggregated event fires now.
        let cycle_done = state_rc.borrow_mut().complete(self.handle_id);
        if cycle_done {
            fire_on_finish(&state_rc);
        }
    }
}

/// Bridges declarative animation descriptors to live hoisted handles.
pub struct AnimationCoordinator {
    state: Rc<RefCell<CoordinatorState>>,
    /// Per-target generator lists in declaration order; immutable after
    /// construction
    generators: HashMap<ElementId, Vec<AnimationGenerator>>,
}

impl AnimationCoordinator {
    /// Build a coordinator over the given animation descriptors
    pub fn new(animations: &[Animation]) -> Self {
        let mut generators: HashMap<ElementId, Vec<AnimationGenerator>> = HashMap::new();
        for animation in animations {
            for &target in &animation.targets {
                generators.entry(target).or_default().push(AnimationGenerator {
                    kind: animation.kind,
                    params: animation.params,
                });
            }
        }

        Self {
            state: Rc::new(RefCell::new(CoordinatorState {
                next_handle_id: 0,
                cycle_count: 0,
                hoisted: Vec::new(),
                cycle: None,
                on_finish: None,
            })),
            generators,
        }
    }

    /// The generators for every animation targeting `target`, in declaration
    /// order. A target with no animations yields an empty list.
    pub fn generators_for(&self, target: ElementId) -> Vec<AnimationGenerator> {
        self.generators.get(&target).cloned().unwrap_or_default()
    }

    /// Register a live handle. The returned token is the documented way to
    /// both unregister and stop the animation.
    pub fn hoist(&self, mut handle: Box<dyn WaapiHandle>) -> Unhoist {
        let handle_id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_handle_id;
            state.next_handle_id += 1;
            id
        };

        handle.set_finish_listener(FinishListener {
            state: Rc::downgrade(&self.state),
            handle_id,
        });
        self.state.borrow_mut().hoisted.push(Hoisted {
            id: handle_id,
            handle,
        });

        Unhoist {
            state: Rc::downgrade(&self.state),
            handle_id,
            called: false,
        }
    }

    /// Start a playback cycle over the currently hoisted handles.
    ///
    /// The cycle's wait set is fixed here: handles hoisted afterwards belong
    /// to the next cycle. Starting a new cycle while one is pending resets
    /// completion accounting. An empty set completes immediately.
    pub fn play_all(&self) {
        let completed_immediately = {
            let mut state = self.state.borrow_mut();
            state.cycle_count += 1;
            let pending: HashSet<u64> = state.hoisted.iter().map(|hoisted| hoisted.id).collect();
            tracing::trace!(
                cycle = state.cycle_count,
                handles = pending.len(),
                "starting playback cycle"
            );

            if pending.is_empty() {
                state.cycle = None;
                true
            } else {
                state.cycle = Some(Cycle { pending });
                for hoisted in &mut state.hoisted {
                    hoisted.handle.play();
                }
                false
            }
        };

        if completed_immediately {
            fire_on_finish(&self.state);
        }
    }

    /// Install the aggregated finish callback, replacing any previous one.
    /// It fires exactly once per completed playback cycle.
    pub fn set_on_finish(&self, callback: impl FnMut() + 'static) {
        self.state.borrow_mut().on_finish = Some(Box::new(callback));
    }
}
