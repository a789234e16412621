//! Newtype IDs for type-safe identifiers.
//!
//! Catalog ids are small positive integers compiled into the storefront.
//! Wrapping them keeps a product id from being confused with a quantity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate integer newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A positive integer identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a new ID.
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the raw integer value.
            pub const fn get(self) -> u32 {
                self.0
            }

            /// Check that the id is usable (ids start at 1).
            pub const fn is_valid(self) -> bool {
                self.0 > 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);
