//! Defines the properties for the `SchoolUpdatesComponent`.

use std::rc::Rc;

use common::config::AppConfig;
use yew::prelude::*;

/// Properties for the `SchoolUpdatesComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct SchoolUpdatesProps {
    /// Storage keys, login and animation settings. Read once, when the
    /// component is created; later changes are ignored.
    pub config: Rc<AppConfig>,
}
