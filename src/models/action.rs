use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    #[serde(rename = "checkin")]
    CheckIn,
    #[serde(rename = "checkout")]
    CheckOut,
}

impl Action {
    /// Anything that is not recognisably a check-out counts as a check-in.
    pub fn from_input(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("checkout") {
            Action::CheckOut
        } else {
            Action::CheckIn
        }
    }

    /// Raw token used in storage and CSV.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CheckIn => "checkin",
            Action::CheckOut => "checkout",
        }
    }

    /// Badge text shown in the records table.
    pub fn label(&self) -> &'static str {
        match self {
            Action::CheckIn => "Check-In",
            Action::CheckOut => "Check-Out",
        }
    }

    /// Past-tense state, e.g. "checked in".
    pub fn state(&self) -> &'static str {
        match self {
            Action::CheckIn => "checked in",
            Action::CheckOut => "checked out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, Action::CheckIn)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, Action::CheckOut)
    }
}
