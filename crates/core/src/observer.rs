/// A hook called once per sweep event.
///
/// `E` is the event a sweep stage emits: one per reading for a stimulus
/// sweep, one per fitted condition for a temperature run. `A` is the set of
/// actions that stage would accept back. Ohmic's sweeps accept none, so
/// their action types are empty enums and `observe` can only return `None`;
/// a sweep therefore visits every setpoint and condition unless an
/// instrument or fit fails.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` observes
/// nothing.
pub trait Observer<E, A> {
    /// Sees one event and returns the action to take, if any.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Ignores every event.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
