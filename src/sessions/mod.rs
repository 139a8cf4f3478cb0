mod store;
mod widget;
pub(crate) use self::store::{Seed, SessionStore, Status};
pub(crate) use self::widget::{ProgressRing, SessionList};
