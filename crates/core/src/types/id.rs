//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs with plain integers.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use little_lemon_core::define_id;
/// define_id!(TableId);
/// define_id!(ReservationId);
///
/// let table = TableId::new(1);
/// let reservation = ReservationId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: TableId = reservation;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(MenuItemId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_id_is_transparent_in_json() {
        let id = MenuItemId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");

        let parsed: MenuItemId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_menu_item_id_ordering_follows_value() {
        let mut ids = vec![MenuItemId::new(3), MenuItemId::new(1), MenuItemId::new(2)];
        ids.sort();
        let raw: Vec<i32> = ids.into_iter().map(i32::from).collect();
        assert_eq!(raw, vec![1, 2, 3]);
    }
}
