use super::{Listener, ListenerError, TableEvent};

/// A `Listener` that hands every event to a closure.
#[derive(Debug, Clone)]
pub struct FnListener<F> {
    func: F,
}

impl<F: FnMut(&TableEvent) -> Result<(), ListenerError>> FnListener<F> {
    /// Create a new `FnListener` with the function that
    /// will be called on each table event.
    pub fn new(f: F) -> Self {
        Self { func: f }
    }
}

impl<F: FnMut(&TableEvent) -> Result<(), ListenerError>> Listener for FnListener<F> {
    fn on_event(&mut self, event: &TableEvent) -> Result<(), ListenerError> {
        (self.func)(event)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use crate::table::TableBuilder;

    use super::*;

    #[test]
    fn test_counts_community_cards() {
        let seen = Rc::new(RefCell::new(0));
        let borrow_seen = seen.clone();

        let listener: Box<dyn Listener> = Box::new(FnListener::new(move |event: &TableEvent| {
            if let TableEvent::CommunityCardsDealt(cards) = event {
                *borrow_seen.borrow_mut() += cards.len();
            }
            Ok(())
        }));

        let mut table = TableBuilder::default()
            .players(vec!["alice", "bob"])
            .listeners(vec![listener])
            .build();

        table.deal_to_table(3).unwrap();
        table.deal_to_table(1).unwrap();
        table.deal_to_table(1).unwrap();

        assert_eq!(5, seen.take());
    }

    #[test]
    fn test_failing_listener_is_dropped() {
        let calls = Rc::new(RefCell::new(0));
        let borrow_calls = calls.clone();

        let listener: Box<dyn Listener> = Box::new(FnListener::new(move |_: &TableEvent| {
            *borrow_calls.borrow_mut() += 1;
            Err(ListenerError::UnableToHandleEvent)
        }));

        let mut table = TableBuilder::default()
            .players(vec!["alice"])
            .listeners(vec![listener])
            .build();

        table.deal_to_table(3).unwrap();
        table.deal_to_table(1).unwrap();

        // The table keeps dealing but the listener only saw one event.
        assert_eq!(1, calls.take());
        assert_eq!(0, table.listener_count());
        assert_eq!(4, table.community_cards().len());
    }
}
