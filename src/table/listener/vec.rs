use std::{cell::RefCell, rc::Rc};

use super::{Listener, ListenerError, TableEvent};

/// VecListener is a listener that will
/// append each event to a vector.
pub struct VecListener {
    events: Rc<RefCell<Vec<TableEvent>>>,
}

impl VecListener {
    /// Create a new storage for the listener
    /// that can be introspected later.
    pub fn new_storage() -> Rc<RefCell<Vec<TableEvent>>> {
        Rc::new(RefCell::new(vec![]))
    }

    /// Create a new VecListener with the provided storage
    /// `Rc<RefCell<Vec<TableEvent>>>`
    pub fn new(events: Rc<RefCell<Vec<TableEvent>>>) -> Self {
        Self { events }
    }
}

impl Listener for VecListener {
    fn on_event(&mut self, event: &TableEvent) -> Result<(), ListenerError> {
        let mut events = self.events.try_borrow_mut()?;
        events.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::table::{PlayerId, TableBuilder};

    use super::*;

    #[test]
    fn test_vec_listener() {
        let events = VecListener::new_storage();
        let listener: Box<dyn Listener> = Box::new(VecListener::new(events.clone()));

        let mut table = TableBuilder::default()
            .rng(StdRng::seed_from_u64(420))
            .listeners(vec![listener])
            .build();

        let alice = table.add_player("alice");
        table.deal_to_all_players(2).unwrap();
        table.deal_to_table(3).unwrap();
        table.new_deal();

        let events = events.take();
        assert_eq!(4, events.len());
        assert_eq!(TableEvent::PlayerJoined(alice), events[0]);
        assert!(matches!(
            &events[1],
            TableEvent::HoleCardsDealt { player, cards } if *player == alice && cards.len() == 2
        ));
        assert!(matches!(
            &events[2],
            TableEvent::CommunityCardsDealt(cards) if cards.len() == 3
        ));
        assert_eq!(TableEvent::NewDeal, events[3]);
        assert_eq!(PlayerId(0), alice);
    }

    #[test]
    fn test_storage_borrowed_elsewhere() {
        let events = VecListener::new_storage();
        let mut listener = VecListener::new(events.clone());

        let _held = events.borrow_mut();
        assert!(listener.on_event(&TableEvent::NewDeal).is_err());
    }
}
