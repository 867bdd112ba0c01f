#[allow(unused_macros)]
macro_rules! assert_close {
    ($left:expr, $right:expr, $tolerance:expr) => {
        assert_close!($left, $right, $tolerance, "values differ by more than the tolerance")
    };
    ($left:expr, $right:expr, $tolerance:expr, $msg:literal) => {{
        let (left, right, tolerance): (f64, f64, f64) = ($left, $right, $tolerance);
        assert!(
            (left - right).abs() <= tolerance,
            "{} (left: {}, right: {}, tolerance: {})",
            $msg,
            left,
            right,
            tolerance
        );
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_close;
