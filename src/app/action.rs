use crate::store::StoreAction;

#[derive(Debug, PartialEq)]
pub enum Action {
    Dispatch(StoreAction),
    Quit,
}
