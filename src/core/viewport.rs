//! Viewport classification against the sidebar breakpoint.
//!
//! The media query listener reports a value long before the app knows it is
//! talking to a real window, so readings come in two stages:
//!
//! - [`ViewportReading::Provisional`] - reported by the listener, possibly
//!   still the conservative default (`Wide`)
//! - [`ViewportReading::Confirmed`] - measured directly against the window
//!   after the client finished mounting

/// Which side of the breakpoint the viewport is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportClass {
    /// Below the breakpoint (phones, small tablets).
    Narrow,
    /// At or above the breakpoint. Also the default before any measurement.
    #[default]
    Wide,
}

impl ViewportClass {
    /// Classify from a "does the narrow media query match" flag.
    pub fn from_narrow(narrow: bool) -> Self {
        if narrow { Self::Narrow } else { Self::Wide }
    }

    pub fn is_narrow(self) -> bool {
        self == Self::Narrow
    }
}

/// Two-stage classifier output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportReading {
    /// Value reported before a client-side measurement succeeded.
    Provisional(ViewportClass),
    /// Value measured directly against the window.
    Confirmed(ViewportClass),
}

impl Default for ViewportReading {
    fn default() -> Self {
        Self::Provisional(ViewportClass::Wide)
    }
}

impl ViewportReading {
    /// Combine the listener's report with an optional direct measurement.
    ///
    /// # Arguments
    ///
    /// * `reported_narrow` - Current value of the media query listener
    /// * `client_ready` - Whether the component has mounted on the client
    /// * `measured_narrow` - Direct `matchMedia` result, `None` when the
    ///   environment cannot answer
    pub fn resolve(reported_narrow: bool, client_ready: bool, measured_narrow: Option<bool>) -> Self {
        match (client_ready, measured_narrow) {
            (true, Some(narrow)) => Self::Confirmed(ViewportClass::from_narrow(narrow)),
            _ => Self::Provisional(ViewportClass::from_narrow(reported_narrow)),
        }
    }

    pub fn class(self) -> ViewportClass {
        match self {
            Self::Provisional(class) | Self::Confirmed(class) => class,
        }
    }

    pub fn is_narrow(self) -> bool {
        self.class().is_narrow()
    }
}
