use std::rc::Rc;

use yew::Reducible;

use common::{ChatAction, ChatState};

/// Yew store wrapper around the chat state machine, so components
/// dispatch discrete [`ChatAction`] transitions instead of mutating
/// ambient flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatStore(pub ChatState);

impl Reducible for ChatStore {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}
