pub mod cursor;
pub mod nav;
pub mod scope;

pub use cursor::{CursorState, HoverTarget, Point, Ripple, RippleId};
pub use nav::NavState;
pub use scope::{SharedSubscriptions, SubscriptionKey, Subscriptions, Timer};
