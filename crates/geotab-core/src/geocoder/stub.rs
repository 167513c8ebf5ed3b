//! Scripted geocoder for unit tests.

use super::{Geocoder, Location};
use crate::retry::GeocodeError;
use std::cell::RefCell;
use std::collections::VecDeque;

pub(crate) type Reply = Result<Option<Location>, GeocodeError>;

/// Answers each call with the next scripted reply and records every query.
pub(crate) struct ScriptedGeocoder {
    replies: RefCell<VecDeque<Reply>>,
    queries: RefCell<Vec<String>>,
}

impl ScriptedGeocoder {
    pub(crate) fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.queries.borrow().len()
    }
}

impl Geocoder for ScriptedGeocoder {
    fn geocode(&self, query: &str) -> Result<Option<Location>, GeocodeError> {
        self.queries.borrow_mut().push(query.to_string());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted geocode call for {query:?}"))
    }
}
