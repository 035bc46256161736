//! Newtype IDs for type-safe entity references.
//!
//! Every entity gets its own ID wrapper around the database's `BIGSERIAL`
//! primary key, so handlers cannot accidentally pass an order ID where a
//! customer ID is expected.

/// Define a type-safe ID wrapper around `i64`.
///
/// The generated type carries `Serialize`/`Deserialize` (transparent),
/// the usual derives, `new()`/`as_i64()` accessors, `From` conversions in
/// both directions, and — with the `postgres` feature — sqlx `Type`,
/// `Encode`, and `Decode` implementations so it can be bound and fetched
/// directly.
///
/// # Example
///
/// ```rust
/// # use gigmarket_core::define_id;
/// define_id!(ProjectId);
///
/// let id = ProjectId::new(7);
/// assert_eq!(id.as_i64(), 7);
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
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw database key.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// The underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Type<::sqlx::Postgres> for $name {
            fn type_info() -> ::sqlx::postgres::PgTypeInfo {
                <i64 as ::sqlx::Type<::sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
                <i64 as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
            }
        }

        #[cfg(feature = "postgres")]
        impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for $name {
            fn decode(
                value: ::sqlx::postgres::PgValueRef<'r>,
            ) -> ::core::result::Result<Self, ::sqlx::error::BoxDynError> {
                let id = <i64 as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
                Ok(Self(id))
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Encode<'_, ::sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut ::sqlx::postgres::PgArgumentBuffer,
            ) -> ::std::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
                <i64 as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }
    };
}

define_id!(UserId);
define_id!(CustomerId);
define_id!(ExecutorId);
define_id!(OrderId);
define_id!(ServiceId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct_types() {
        // Compile-time property; spot-check values and conversions here.
        let user = UserId::new(3);
        let order = OrderId::new(3);
        assert_eq!(user.as_i64(), order.as_i64());
        assert_eq!(i64::from(user), 3);
        assert_eq!(OrderId::from(9).as_i64(), 9);
    }

    #[test]
    fn test_display_matches_raw_value() {
        assert_eq!(CustomerId::new(42).to_string(), "42");
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = ExecutorId::new(11);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "11");
        let back: ExecutorId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
