use crate::store::Store;
use std::sync::Arc;

pub type SharedState = axum::extract::State<Arc<State>>;
pub type NestedRouter = axum::Router<Arc<State>>;

#[derive(Debug)]
pub struct State {
    pub store: Store,
}

impl State {
    pub fn new(store: Store) -> State {
        State { store }
    }
}
