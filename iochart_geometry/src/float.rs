// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `f64` math for builds without `std`.
//!
//! `core` has no `floor`, `log10`, `sin` and friends on `f64`. Modules that need them import
//! [`FloatExt`] under `cfg(not(feature = "std"))`, so the same method-call syntax resolves
//! to the inherent `std` methods or to `libm`.

pub(crate) trait FloatExt {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn log10(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn hypot(self, other: Self) -> Self;
    fn powi(self, n: i32) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
macro_rules! unary {
    ($($method:ident),* $(,)?) => {
        $(
            fn $method(self) -> Self {
                libm::$method(self)
            }
        )*
    };
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    unary!(floor, ceil, round, log10, sin, cos);

    fn hypot(self, other: Self) -> Self {
        libm::hypot(self, other)
    }

    // Only used for powers of ten, where `pow` with an integral exponent is exact enough.
    fn powi(self, n: i32) -> Self {
        libm::pow(self, f64::from(n))
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("iochart_geometry needs the `std` or `libm` feature for float math");
