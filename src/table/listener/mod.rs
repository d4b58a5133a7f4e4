use super::{ListenerError, TableEvent};

/// Listeners are how a table tells the outside world what it dealt.
/// Players that need the community cards, loggers, or replay
/// recorders all register as listeners.
pub trait Listener {
    /// Called by the table once for every event, in the order
    /// the events happened.
    ///
    /// Returning an error will cause the listener to be dropped from
    /// the `Table`. The table itself carries on.
    fn on_event(&mut self, event: &TableEvent) -> Result<(), ListenerError>;
}

mod fn_listener;
mod vec;

pub use fn_listener::FnListener;
pub use vec::VecListener;
