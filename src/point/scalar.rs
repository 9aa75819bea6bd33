/// A primitive usable as the native storage of the provided point implementations.
///
/// Implemented for `f32`, `f64`, `i32` and `i64`. Conversions follow Rust's `as` semantics:
/// float to int truncates toward zero and saturates (NaN becomes 0), and `i64` to `i32`
/// saturates instead of wrapping.
pub trait Scalar: Copy + sealed::Sealed {
    /// Whether this primitive is a floating-point type.
    const FLOATING_POINT: bool;

    /// Converts to the float view of a coordinate.
    fn to_f32(self) -> f32;

    /// Converts to the int view of a coordinate.
    fn to_i32(self) -> i32;

    /// Converts from a float coordinate.
    fn from_f32(value: f32) -> Self;

    /// Converts from an int coordinate.
    fn from_i32(value: i32) -> Self;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

impl Scalar for f32 {
    const FLOATING_POINT: bool = true;

    fn to_f32(self) -> f32 {
        self
    }

    fn to_i32(self) -> i32 {
        self as i32
    }

    fn from_f32(value: f32) -> Self {
        value
    }

    fn from_i32(value: i32) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    const FLOATING_POINT: bool = true;

    fn to_f32(self) -> f32 {
        self as f32
    }

    fn to_i32(self) -> i32 {
        self as i32
    }

    fn from_f32(value: f32) -> Self {
        value.into()
    }

    fn from_i32(value: i32) -> Self {
        value.into()
    }
}

impl Scalar for i32 {
    const FLOATING_POINT: bool = false;

    fn to_f32(self) -> f32 {
        self as f32
    }

    fn to_i32(self) -> i32 {
        self
    }

    fn from_f32(value: f32) -> Self {
        value as i32
    }

    fn from_i32(value: i32) -> Self {
        value
    }
}

impl Scalar for i64 {
    const FLOATING_POINT: bool = false;

    fn to_f32(self) -> f32 {
        self as f32
    }

    fn to_i32(self) -> i32 {
        self.clamp(i32::MIN.into(), i32::MAX.into()) as i32
    }

    fn from_f32(value: f32) -> Self {
        value as i64
    }

    fn from_i32(value: i32) -> Self {
        value.into()
    }
}
