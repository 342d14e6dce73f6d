//! Typed identifier newtypes backed by database-assigned integers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw database identifier.
            #[must_use]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Access the raw database identifier.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Station`](crate::station::Station).
    StationId
);

define_id!(
    /// Unique identifier for a [`Mount`](crate::mount::Mount).
    MountId
);

define_id!(
    /// Unique identifier for a [`Remote`](crate::remote::Remote).
    RemoteId
);

define_id!(
    /// Unique identifier for a [`Playlist`](crate::playlist::Playlist).
    PlaylistId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = StationId::new(42);
        let text = id.to_string();
        assert_eq!(text, "42");
        let parsed: StationId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let id = MountId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let parsed: MountId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_id() {
        let result = PlaylistId::from_str("not-a-number");
        assert!(result.is_err());
    }

    #[test]
    fn should_order_by_raw_value() {
        assert!(RemoteId::new(3) < RemoteId::from(5));
        assert_eq!(RemoteId::new(9).get(), 9);
    }
}
