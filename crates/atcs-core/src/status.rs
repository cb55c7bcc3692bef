//! Connection status presentation
//!
//! Pure derivation from the session phase; no state of its own. The
//! header renders exactly one of three label/color pairs, with the
//! location shown only while connected.

use serde::{Deserialize, Serialize};

use atcs_session::SessionPhase;

/// Location tag shown next to the status while connected
pub const STATUS_LOCATION: &str = "Indonesia";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    Connecting,
    Disconnected,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Connected => "Connected:",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "#ef4444",
            ConnectionStatus::Connecting => "#e3aa0d",
            ConnectionStatus::Connected => "#10b981",
        }
    }

    /// Auxiliary location label, present only while connected
    pub fn location(&self) -> Option<&'static str> {
        match self {
            ConnectionStatus::Connected => Some(STATUS_LOCATION),
            _ => None,
        }
    }
}

impl From<SessionPhase> for ConnectionStatus {
    fn from(phase: SessionPhase) -> Self {
        match phase {
            SessionPhase::Errored => ConnectionStatus::Disconnected,
            SessionPhase::Loading => ConnectionStatus::Connecting,
            SessionPhase::Ready => ConnectionStatus::Connected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_mapping() {
        assert_eq!(
            ConnectionStatus::from(SessionPhase::Errored),
            ConnectionStatus::Disconnected
        );
        assert_eq!(
            ConnectionStatus::from(SessionPhase::Loading),
            ConnectionStatus::Connecting
        );
        assert_eq!(
            ConnectionStatus::from(SessionPhase::Ready),
            ConnectionStatus::Connected
        );
    }

    #[test]
    fn test_labels_and_colors() {
        assert_eq!(ConnectionStatus::Disconnected.label(), "Disconnected");
        assert_eq!(ConnectionStatus::Connecting.label(), "Connecting...");
        assert_eq!(ConnectionStatus::Connected.label(), "Connected:");

        assert_eq!(ConnectionStatus::Disconnected.color(), "#ef4444");
        assert_eq!(ConnectionStatus::Connecting.color(), "#e3aa0d");
        assert_eq!(ConnectionStatus::Connected.color(), "#10b981");
    }

    #[test]
    fn test_location_only_when_connected() {
        assert_eq!(ConnectionStatus::Connected.location(), Some("Indonesia"));
        assert_eq!(ConnectionStatus::Connecting.location(), None);
        assert_eq!(ConnectionStatus::Disconnected.location(), None);
    }
}
