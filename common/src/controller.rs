//! The view switch.
//!
//! `home → login`, `login → posts | admin`, `posts → detail | login`,
//! `detail → posts`, `admin → login`. Anything else is rejected and leaves the
//! current view as it was.

use crate::error::TransitionError;
use crate::model::view::{DetailPayload, View};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewController {
    current: View,
    detail: Option<DetailPayload>,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Payload of the detail view; `None` on every other view.
    pub fn detail(&self) -> Option<&DetailPayload> {
        self.detail.as_ref()
    }

    pub fn can_goto(&self, to: View) -> bool {
        reachable(self.current, to)
    }

    /// Moves to `to`. The detail view requires a payload; other views ignore it.
    pub fn goto(&mut self, to: View, payload: Option<DetailPayload>) -> Result<(), TransitionError> {
        if !self.can_goto(to) {
            return Err(TransitionError::Unreachable {
                from: self.current,
                to,
            });
        }
        self.detail = match to {
            View::Detail => Some(payload.ok_or(TransitionError::MissingDetail)?),
            _ => None,
        };
        log::debug!("view {} -> {}", self.current, to);
        self.current = to;
        Ok(())
    }

    /// Follows the "Back"/"Close" button of the current view.
    pub fn back(&mut self) -> Result<View, TransitionError> {
        let to = match self.current {
            View::Posts | View::Admin => View::Login,
            View::Detail => View::Posts,
            View::Home | View::Login => return Err(TransitionError::NoWayBack(self.current)),
        };
        self.goto(to, None)?;
        Ok(to)
    }
}

fn reachable(from: View, to: View) -> bool {
    matches!(
        (from, to),
        (View::Home, View::Login)
            | (View::Login, View::Posts)
            | (View::Login, View::Admin)
            | (View::Posts, View::Detail)
            | (View::Posts, View::Login)
            | (View::Detail, View::Posts)
            | (View::Admin, View::Login)
    )
}
