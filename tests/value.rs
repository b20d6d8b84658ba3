#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use time::macros::datetime;
    use time::{Duration, OffsetDateTime};
    use url::Url;
    use uuid::Uuid;
    use veneer::{AsValue, Primitive, SafeValue, Value, ValueKind};

    #[test]
    fn value_kinds() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::Integer(1).kind(), ValueKind::Integer);
        assert_eq!(Value::Real(0.5).kind(), ValueKind::Real);
        assert_eq!(Value::Text("x".into()).kind(), ValueKind::Text);
        assert_eq!(
            Value::Blob(vec![1u8].into_boxed_slice()).kind(),
            ValueKind::Blob
        );
        assert!(Value::Null.is_null());
        assert!(!Value::Integer(0).is_null());
        assert_eq!(ValueKind::Blob.to_string(), "BLOB");
        assert_eq!(ValueKind::Integer.to_string(), "INTEGER");
    }

    #[test]
    fn primitives_return_the_original_value_on_mismatch() {
        assert_eq!(i64::from_value(Value::Integer(7)), Ok(7));
        assert_eq!(String::from_value(Value::Text("x".into())), Ok("x".into()));
        assert_eq!(String::from_value(Value::Integer(3)), Err(Value::Integer(3)));
        assert_eq!(f64::from_value(Value::Null), Err(Value::Null));
        assert_eq!(<Box<[u8]> as Primitive>::SQL_TYPE, "BLOB");
        assert_eq!(<String as Primitive>::KIND, ValueKind::Text);
    }

    #[test]
    fn byte_buffers_round_trip_losslessly() {
        let buffer = vec![1u8, 2, 3];
        assert_eq!(
            buffer.as_value(),
            Value::Blob(vec![1u8, 2, 3].into_boxed_slice())
        );
        let back = Vec::<u8>::from_primitive(buffer.as_primitive());
        assert_eq!(back, vec![1u8, 2, 3]);
        assert_eq!(Vec::<u8>::declared_type(), "BLOB");
    }

    #[test]
    fn integers_narrow_with_a_range_check() {
        assert_eq!(i32::try_from_primitive(123).unwrap(), 123);
        assert_eq!(i32::try_from_primitive(-1).unwrap(), -1);
        assert!(i32::try_from_primitive(i64::MAX).is_err());
        assert_eq!(i32::declared_type(), "INTEGER");
        assert_eq!((-5i32).as_value(), Value::Integer(-5));
    }

    #[test]
    fn booleans_store_as_integers() {
        assert_eq!(true.as_value(), Value::Integer(1));
        assert_eq!(false.as_value(), Value::Integer(0));
        assert_eq!(bool::from_primitive(0), false);
        assert_eq!(bool::from_primitive(2), true);
        assert_eq!(bool::declared_type(), "INTEGER");
    }

    #[test]
    fn date_times_store_as_epoch_seconds() {
        // 1e9 seconds after the epoch is exactly representable as a REAL.
        let instant = datetime!(2001-09-09 01:46:40 UTC);
        assert_eq!(instant.as_value(), Value::Real(1_000_000_000.0));
        assert_eq!(OffsetDateTime::from_primitive(1_000_000_000.0), instant);
        assert_eq!(OffsetDateTime::declared_type(), "REAL");
    }

    #[test]
    fn date_times_round_trip_at_millisecond_precision() {
        let instant = datetime!(2024-03-05 07:09:11.123 UTC);
        let back = OffsetDateTime::from_primitive(instant.as_primitive());
        assert!((back - instant).abs() < Duration::microseconds(1));
    }

    #[test]
    fn out_of_range_epoch_values_saturate() {
        let far = OffsetDateTime::from_primitive(f64::MAX);
        assert_eq!(far.year(), 9999);
        let early = OffsetDateTime::from_primitive(f64::MIN);
        assert_eq!(early.year(), -9999);
    }

    #[test]
    fn uuids_store_as_hyphenated_text() {
        let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(
            id.as_value(),
            Value::Text("67e55044-10b1-426f-9247-bb680e5fe0c8".into())
        );
        assert_eq!(Uuid::try_from_primitive(id.as_primitive()).unwrap(), id);
        assert!(Uuid::try_from_primitive("not a uuid".into()).is_err());
        assert_eq!(Uuid::declared_type(), "TEXT");
    }

    #[test]
    fn url_conversion_agrees_with_direct_parsing() {
        assert!(Url::try_from_primitive(String::new()).is_err());
        for candidate in ["", "/", "https://example.com", "not a url"] {
            assert_eq!(
                Url::try_from_primitive(candidate.into()).is_ok(),
                Url::parse(candidate).is_ok()
            );
        }
        let url = Url::try_from_primitive("https://example.com".into()).unwrap();
        assert_eq!(url, Url::parse("https://example.com").unwrap());
        assert_eq!(url.as_primitive(), "https://example.com/");
        assert_eq!(Url::declared_type(), "TEXT");
    }

    #[test]
    fn decimals_store_as_exact_text() {
        let price = Decimal::from_str("123.4500").unwrap();
        assert_eq!(price.as_value(), Value::Text("123.4500".into()));
        assert_eq!(
            Decimal::try_from_primitive("123.4500".into()).unwrap(),
            price
        );
        assert!(Decimal::try_from_primitive("12f.3".into()).is_err());
        assert_eq!(Decimal::declared_type(), "TEXT");
    }

    #[test]
    fn declared_types_are_constant_per_native_type() {
        assert_eq!(String::declared_type(), "TEXT");
        assert_eq!(i64::declared_type(), "INTEGER");
        assert_eq!(f64::declared_type(), "REAL");
        assert_eq!(<Box<[u8]>>::declared_type(), "BLOB");
    }
}
