/// Implement the `std::ops` operator for all owned / borrowed operand combinations by forwarding
/// to the `Number` method of the same meaning.
macro_rules! forward_binary_op {
    ($t:ty, $op:ident, $op_fn:ident, $number_fn:ident) => {
        impl std::ops::$op for $t {
            type Output = $t;

            fn $op_fn(self, rhs: $t) -> Self::Output {
                <$t as $crate::data::number_types::traits::Number>::$number_fn(&self, &rhs)
            }
        }

        impl std::ops::$op<&$t> for $t {
            type Output = $t;

            fn $op_fn(self, rhs: &$t) -> Self::Output {
                <$t as $crate::data::number_types::traits::Number>::$number_fn(&self, rhs)
            }
        }

        impl std::ops::$op<$t> for &$t {
            type Output = $t;

            fn $op_fn(self, rhs: $t) -> Self::Output {
                <$t as $crate::data::number_types::traits::Number>::$number_fn(self, &rhs)
            }
        }

        impl std::ops::$op<&$t> for &$t {
            type Output = $t;

            fn $op_fn(self, rhs: &$t) -> Self::Output {
                <$t as $crate::data::number_types::traits::Number>::$number_fn(self, rhs)
            }
        }
    };
}

/// Addition, subtraction and multiplication operators. Division stays on `Number::divide`,
/// because it can fail.
macro_rules! forward_ring_ops {
    ($t:ty) => {
        forward_binary_op!($t, Add, add, add);
        forward_binary_op!($t, Sub, sub, subtract);
        forward_binary_op!($t, Mul, mul, multiply);
    };
}
