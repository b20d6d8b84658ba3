use crate::{Expression, infix, prefix};

macro_rules! comparison {
    ($name:ident, $op:literal) => {
        pub fn $name(&self, rhs: &Expression<T>) -> Expression<bool> {
            infix($op, self, rhs, true)
        }
    };
}

macro_rules! arithmetic {
    ($name:ident, $op:literal) => {
        pub fn $name(&self, rhs: &Expression<T>) -> Expression<T> {
            infix($op, self, rhs, true)
        }
    };
}

/// Typed SQL operators. Each method names its SQL token explicitly; the
/// methods below are the complete supported mapping.
impl<T> Expression<T> {
    comparison!(eq, "=");
    comparison!(ne, "!=");
    comparison!(lt, "<");
    comparison!(le, "<=");
    comparison!(gt, ">");
    comparison!(ge, ">=");
    arithmetic!(add, "+");
    arithmetic!(sub, "-");
    arithmetic!(mul, "*");
    arithmetic!(div, "/");

    pub fn is_null(&self) -> Expression<bool> {
        infix("IS", self, &Expression::<()>::literal("NULL"), true)
    }

    pub fn is_not_null(&self) -> Expression<bool> {
        infix("IS NOT", self, &Expression::<()>::literal("NULL"), true)
    }
}

impl Expression<bool> {
    pub fn and(&self, rhs: &Expression<bool>) -> Expression<bool> {
        infix("AND", self, rhs, true)
    }

    pub fn or(&self, rhs: &Expression<bool>) -> Expression<bool> {
        infix("OR", self, rhs, true)
    }

    pub fn not(&self) -> Expression<bool> {
        prefix("NOT", &[self])
    }
}

impl Expression<String> {
    pub fn like(&self, pattern: &Expression<String>) -> Expression<bool> {
        infix("LIKE", self, pattern, true)
    }
}
