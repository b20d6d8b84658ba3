use crate::{AsValue, Primitive, SafeValue, Value, ValueKind};
use std::any;
use thiserror::Error;

/// Failure modes of the reporting unpack path.
#[derive(Debug, Error)]
pub enum UnpackError {
    /// The raw value's storage class is not the one the target type's
    /// contract declares.
    #[error("value {value:?} does not have the expected {expected} storage class")]
    DatatypeMismatch { value: Value, expected: ValueKind },
    /// The contract's decode rejected the raw datatype content.
    #[error("cannot convert a stored {stored} into {native}: {reason:#}")]
    ConversionFailed {
        stored: ValueKind,
        native: &'static str,
        reason: crate::Error,
    },
    /// A value was required but the column read produced NULL.
    #[error("required {native} value is missing")]
    MissingValue { native: &'static str },
}

/// Trusting unpack: recover a native value assuming the raw binding has the
/// exact shape the contract for `A` declares.
///
/// Only valid where the caller's typing discipline already guarantees the
/// assumptions: the value is present, carries the declared storage class
/// and decodes. A violation is a defect in the calling code and panics; it
/// is not an error channel. Use [`try_unpack`] whenever the shape cannot be
/// guaranteed statically, and always for fallible contracts (which do not
/// implement [`SafeValue`] and are rejected here at compile time).
pub fn unpack<A: SafeValue>(binding: Option<Value>) -> A {
    match try_unpack(binding) {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

/// Trusting unpack of a NULL-eligible read.
pub fn unpack_optional<A: SafeValue>(binding: Option<Value>) -> Option<A> {
    match try_unpack_optional(binding) {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

/// Reporting unpack: validate every assumption and surface a typed,
/// recoverable [`UnpackError`] instead of aborting.
///
/// Absence and a stored NULL are treated alike: both are a missing value
/// when a non-optional native type is requested.
pub fn try_unpack<A: AsValue>(binding: Option<Value>) -> Result<A, UnpackError> {
    let value = match binding {
        None | Some(Value::Null) => {
            return Err(UnpackError::MissingValue {
                native: any::type_name::<A>(),
            });
        }
        Some(value) => value,
    };
    let primitive =
        A::Primitive::from_value(value).map_err(|value| UnpackError::DatatypeMismatch {
            value,
            expected: A::Primitive::KIND,
        })?;
    A::try_from_primitive(primitive).map_err(|reason| UnpackError::ConversionFailed {
        stored: A::Primitive::KIND,
        native: any::type_name::<A>(),
        reason,
    })
}

/// Reporting unpack of a NULL-eligible read: absence and NULL map to
/// `None` instead of failing.
pub fn try_unpack_optional<A: AsValue>(binding: Option<Value>) -> Result<Option<A>, UnpackError> {
    match binding {
        None | Some(Value::Null) => Ok(None),
        present => try_unpack(present).map(Some),
    }
}
