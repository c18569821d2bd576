//! Strongly typed, zero-cost identifier wrappers.
//!
//! Two families live here:
//!
//! - **Dense ids** (`NodeId`, `VertexId`) index into `Vec`s.  `NodeId` is
//!   0-based storage order inside a graph; `VertexId` is the 1-based label
//!   written to the adjacency file.
//! - **Provider ids** (`OsmNodeId`, `OsmWayId`) are opaque OpenStreetMap
//!   integers.  They are only ever compared and hashed, never used as indices.

use std::fmt;

/// Generate a typed dense-index wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

/// Generate an opaque provider-id wrapper.  No `index()`: these are keys.
macro_rules! provider_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            /// Bare integer, as the provider prints it.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> Self {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// 0-based index of a node in a graph's storage order.
    pub struct NodeId(u32);
}

typed_id! {
    /// 1-based relabeled vertex, as written to the adjacency file.
    ///
    /// `index()` returns the label itself, so arrays indexed by `VertexId`
    /// are sized `V + 1` with slot 0 unused.
    pub struct VertexId(u32);
}

impl VertexId {
    /// The vertex label assigned to the node at 0-based position `pos`.
    #[inline]
    pub fn from_position(pos: NodeId) -> Self {
        VertexId(pos.0 + 1)
    }
}

provider_id! {
    /// OpenStreetMap node id.
    pub struct OsmNodeId(i64);
}

provider_id! {
    /// OpenStreetMap way id.
    pub struct OsmWayId(i64);
}
