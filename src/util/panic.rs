/// Asserts that evaluating `$run` panics. The panic is caught so that the surrounding test can
/// continue.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:expr $(,)?) => {
        assert_panics!($run, "expression failed to panic")
    };
    ($run:expr, $($msg:tt)+) => {{
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = $run;
        }));
        assert!(outcome.is_err(), $($msg)+);
        println!("^ panic caught");
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
