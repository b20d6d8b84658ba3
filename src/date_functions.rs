use crate::{Context, Expressible, Expression, Result, wrap};
use time::{
    OffsetDateTime, PrimitiveDateTime, UtcOffset, format_description::BorrowedFormatItem,
    macros::format_description,
};

/// Fixed text layout for time-string values: UTC, millisecond precision,
/// e.g. `2024-03-05T07:09:11.123`.
///
/// Compiled once and immutable for the lifetime of the process; the helpers
/// below read it concurrently without synchronization. An application that
/// stores date-times in any other textual layout must bypass these helpers
/// and register its own [`AsValue`](crate::AsValue) contract instead.
pub static TIME_STRING_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]");

/// Render `value` through [`TIME_STRING_FORMAT`].
pub fn time_string(value: &OffsetDateTime) -> String {
    value
        .to_offset(UtcOffset::UTC)
        .format(TIME_STRING_FORMAT)
        .expect("the fixed time-string layout formats any date-time")
}

/// Parse text produced by [`time_string`] back into an instant.
pub fn parse_time_string(value: &str) -> Result<OffsetDateTime> {
    PrimitiveDateTime::parse(value, TIME_STRING_FORMAT)
        .map(PrimitiveDateTime::assume_utc)
        .with_context(|| format!("Cannot parse `{value}` as a time-string"))
}

/// The date() function returns the date in this format: YYYY-MM-DD.
///
/// All five date and time functions take a time string followed by zero or
/// more modifiers; every argument is bound as a parameter, never inlined
/// into the template. <https://www.sqlite.org/lang_datefunc.html>
pub fn date(timestring: &str, modifiers: &[&str]) -> Expression<Option<OffsetDateTime>> {
    timefunction("date", timestring, modifiers)
}

/// The time() function returns the time as HH:MM:SS.
pub fn time(timestring: &str, modifiers: &[&str]) -> Expression<Option<OffsetDateTime>> {
    timefunction("time", timestring, modifiers)
}

/// The datetime() function returns "YYYY-MM-DD HH:MM:SS".
pub fn datetime(timestring: &str, modifiers: &[&str]) -> Expression<Option<OffsetDateTime>> {
    timefunction("datetime", timestring, modifiers)
}

/// The julianday() function returns the Julian day, the number of days
/// since noon in Greenwich on November 24, 4714 B.C.
pub fn julianday(timestring: &str, modifiers: &[&str]) -> Expression<Option<OffsetDateTime>> {
    timefunction("julianday", timestring, modifiers)
}

/// The strftime() routine returns the date formatted according to the
/// format string specified as its first argument.
pub fn strftime(
    format: &str,
    timestring: &str,
    modifiers: &[&str],
) -> Expression<Option<OffsetDateTime>> {
    let mut operands: Vec<&dyn Expressible> = Vec::with_capacity(modifiers.len() + 2);
    operands.push(&format);
    operands.push(&timestring);
    for modifier in modifiers {
        operands.push(modifier);
    }
    wrap("strftime", &operands)
}

fn timefunction(
    name: &str,
    timestring: &str,
    modifiers: &[&str],
) -> Expression<Option<OffsetDateTime>> {
    let mut operands: Vec<&dyn Expressible> = Vec::with_capacity(modifiers.len() + 1);
    operands.push(&timestring);
    for modifier in modifiers {
        operands.push(modifier);
    }
    wrap(name, &operands)
}

/// Date and time function expressions anchored on a native value, which is
/// rendered through [`TIME_STRING_FORMAT`] and bound as the time-string
/// parameter.
pub trait DateTimeExpressions {
    fn date_expression(&self) -> Expression<Option<OffsetDateTime>>;
    fn time_expression(&self) -> Expression<Option<OffsetDateTime>>;
    fn datetime_expression(&self) -> Expression<Option<OffsetDateTime>>;
    fn julianday_expression(&self) -> Expression<Option<OffsetDateTime>>;
}

impl DateTimeExpressions for OffsetDateTime {
    fn date_expression(&self) -> Expression<Option<OffsetDateTime>> {
        date(&time_string(self), &[])
    }
    fn time_expression(&self) -> Expression<Option<OffsetDateTime>> {
        time(&time_string(self), &[])
    }
    fn datetime_expression(&self) -> Expression<Option<OffsetDateTime>> {
        datetime(&time_string(self), &[])
    }
    fn julianday_expression(&self) -> Expression<Option<OffsetDateTime>> {
        julianday(&time_string(self), &[])
    }
}

fn unixepoch<T>(name: &str, expression: &Expression<T>) -> Expression<T> {
    Expression::new(
        format!("{name}({}, 'unixepoch')", expression.template()),
        expression.bindings().to_vec(),
    )
}

macro_rules! impl_unixepoch {
    ($result:ty) => {
        /// Date and time functions over an expression already holding a
        /// date-time value: the stored REAL is interpreted as Unix epoch
        /// seconds via the `'unixepoch'` modifier, which stays inlined in
        /// the template.
        impl Expression<$result> {
            pub fn date(&self) -> Expression<$result> {
                unixepoch("date", self)
            }
            pub fn time(&self) -> Expression<$result> {
                unixepoch("time", self)
            }
            pub fn datetime(&self) -> Expression<$result> {
                unixepoch("datetime", self)
            }
            pub fn julianday(&self) -> Expression<$result> {
                unixepoch("julianday", self)
            }
        }
    };
}
impl_unixepoch!(OffsetDateTime);
impl_unixepoch!(Option<OffsetDateTime>);
