use crate::{Binding, Error, Expressible, Expression, Primitive, Result, Value};
use anyhow::Context;
use rust_decimal::Decimal;
use std::any;
use time::{OffsetDateTime, PrimitiveDateTime};
use url::Url;
use uuid::Uuid;

const NANOS_IN_SEC: f64 = 1e9;

/// The conversion contract registering a native type as storable.
///
/// An implementation associates the native type with exactly one
/// [`Primitive`] datatype it round-trips through, a declared SQL column
/// type, a total native → primitive conversion and a fallible primitive →
/// native conversion. It is the only registration surface: a type becomes
/// storable by supplying one `AsValue` impl, nothing else.
///
/// # Implementing `AsValue` for custom types
/// Pick the primitive the type round-trips through and keep `as_primitive`
/// total: encoding must never fail, for any value. All validation belongs
/// in `try_from_primitive`, which returns a descriptive error including the
/// offending input; prefer `any::type_name::<Self>()` for uniform messages.
/// Types whose decode direction cannot fail additionally implement
/// [`SafeValue`].
///
/// # Examples
/// ```rust
/// use veneer::{AsValue, Value};
/// let v = 42i64.as_value();
/// assert_eq!(v, Value::Integer(42));
/// let n = i64::try_from_primitive(42).unwrap();
/// assert_eq!(n, 42);
/// ```
pub trait AsValue: Sized {
    /// The raw datatype this type round-trips through.
    type Primitive: Primitive;

    /// SQL column type used when declaring a column holding this type.
    /// A pure function of the type, never of an instance.
    fn declared_type() -> &'static str {
        Self::Primitive::SQL_TYPE
    }

    /// Encode into the raw datatype. Total: must not fail for any value.
    fn as_primitive(&self) -> Self::Primitive;

    /// Decode from the raw datatype, reporting malformed input.
    fn try_from_primitive(primitive: Self::Primitive) -> Result<Self>;

    /// Encode into the dynamically typed storage representation.
    fn as_value(&self) -> Value {
        self.as_primitive().into_value()
    }
}

/// Marker for contracts whose decode direction is total.
///
/// The provided `from_primitive` trusts `try_from_primitive` to succeed and
/// panics otherwise: a type claiming this trait while rejecting input it
/// produced is a defect in that impl, not a runtime condition to recover
/// from.
pub trait SafeValue: AsValue {
    fn from_primitive(primitive: Self::Primitive) -> Self {
        match Self::try_from_primitive(primitive) {
            Ok(value) => value,
            Err(e) => panic!(
                "total conversion to {} failed: {e:#}",
                any::type_name::<Self>()
            ),
        }
    }
}

macro_rules! impl_as_value {
    ($source:ty, $primitive:ty, $as:expr, $from:expr) => {
        impl AsValue for $source {
            type Primitive = $primitive;

            fn as_primitive(&self) -> Self::Primitive {
                $as(self)
            }
            fn try_from_primitive(primitive: Self::Primitive) -> Result<Self> {
                $from(primitive)
            }
        }
    };
}
macro_rules! impl_safe_value {
    ($source:ty, $primitive:ty, $as:expr, $from:expr) => {
        impl_as_value!($source, $primitive, $as, $from);
        impl SafeValue for $source {}
    };
}

impl_safe_value!(i64, i64, |v: &i64| *v, |p| Ok(p));
impl_safe_value!(f64, f64, |v: &f64| *v, |p| Ok(p));
impl_safe_value!(bool, i64, |v: &bool| *v as i64, |p: i64| Ok(p != 0));
impl_safe_value!(i32, i64, |v: &i32| *v as i64, |p: i64| {
    i32::try_from(p).map_err(|_| Error::msg(format!("Value {p}: i64 is out of range for i32")))
});
impl_safe_value!(String, String, |v: &String| v.clone(), |p| Ok(p));
impl_safe_value!(Box<[u8]>, Box<[u8]>, |v: &Box<[u8]>| v.clone(), |p| Ok(p));
impl_safe_value!(
    Vec<u8>,
    Box<[u8]>,
    |v: &Vec<u8>| v.as_slice().into(),
    |p: Box<[u8]>| Ok(p.into_vec())
);

/// Stored as seconds since the Unix epoch, sub-second precision preserved
/// down to what the mantissa of a REAL can carry (milliseconds for
/// present-day instants).
impl AsValue for OffsetDateTime {
    type Primitive = f64;

    fn as_primitive(&self) -> f64 {
        self.unix_timestamp_nanos() as f64 / NANOS_IN_SEC
    }
    fn try_from_primitive(primitive: f64) -> Result<Self> {
        Ok(
            Self::from_unix_timestamp_nanos((primitive * NANOS_IN_SEC).round() as i128)
                .unwrap_or_else(|_| {
                    log::warn!("timestamp {primitive} is outside the representable range, clamping");
                    if primitive < 0.0 {
                        PrimitiveDateTime::MIN.assume_utc()
                    } else {
                        PrimitiveDateTime::MAX.assume_utc()
                    }
                }),
        )
    }
}
impl SafeValue for OffsetDateTime {}

impl AsValue for Uuid {
    type Primitive = String;

    fn as_primitive(&self) -> String {
        self.hyphenated().to_string()
    }
    fn try_from_primitive(primitive: String) -> Result<Self> {
        Uuid::parse_str(&primitive).with_context(|| format!("Cannot parse `{primitive}` as a UUID"))
    }
}
impl SafeValue for Uuid {}

impl AsValue for Url {
    type Primitive = String;

    fn as_primitive(&self) -> String {
        self.as_str().into()
    }
    fn try_from_primitive(primitive: String) -> Result<Self> {
        Url::parse(&primitive).with_context(|| format!("Cannot parse `{primitive}` as a URL"))
    }
}

impl AsValue for Decimal {
    type Primitive = String;

    fn as_primitive(&self) -> String {
        self.to_string()
    }
    fn try_from_primitive(primitive: String) -> Result<Self> {
        Decimal::from_str_exact(&primitive)
            .with_context(|| format!("Cannot parse `{primitive}` as a Decimal"))
    }
}

macro_rules! impl_expressible {
    ($($source:ty),+ $(,)?) => {
        $(impl Expressible for $source {
            fn expression(&self) -> Expression {
                Expression::new("?", vec![Binding::Value(self.as_value())])
            }
        })+
    };
}
impl_expressible!(
    bool,
    i32,
    i64,
    f64,
    String,
    Vec<u8>,
    Box<[u8]>,
    Decimal,
    OffsetDateTime,
    Url,
    Uuid,
);

impl Expressible for &str {
    fn expression(&self) -> Expression {
        Expression::new("?", vec![Binding::Value(Value::Text((*self).into()))])
    }
}
