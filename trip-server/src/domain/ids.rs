//! Identifier newtypes.
//!
//! Catalog rows are keyed by integer ids. Wrapping each kind in its own type
//! keeps a place id from being passed where a destination id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Returns the raw integer id.
            pub fn get(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

catalog_id!(
    /// Identifies a destination (a city or region).
    DestinationId
);

catalog_id!(
    /// Identifies a point of interest.
    PlaceId
);

catalog_id!(
    /// Identifies a review of a point of interest.
    ReviewId
);

catalog_id!(
    /// Identifies the user a plan is made for.
    UserId
);
