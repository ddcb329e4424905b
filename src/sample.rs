use std::fmt::Debug;

use num_traits::{Bounded, FromPrimitive, Num, ToPrimitive};

/// A raw audio sample value, in any of the packed formats a link negotiates.
pub trait AudioSample:
    Num
    + Copy
    + Send
    + Sync
    + PartialOrd
    + ToPrimitive
    + FromPrimitive
    + Bounded
    + Debug
    + 'static
{
    fn to_f64_normalized(self) -> f64;

    fn from_f64_normalized(value: f64) -> Self;
}

impl AudioSample for f32 {
    fn to_f64_normalized(self) -> f64 {
        self as f64
    }

    fn from_f64_normalized(value: f64) -> Self {
        value.clamp(-1.0, 1.0) as f32
    }
}

impl AudioSample for f64 {
    fn to_f64_normalized(self) -> f64 {
        self
    }

    fn from_f64_normalized(value: f64) -> Self {
        value.clamp(-1.0, 1.0)
    }
}

impl AudioSample for i16 {
    fn to_f64_normalized(self) -> f64 {
        self as f64 / i16::MAX as f64
    }

    fn from_f64_normalized(value: f64) -> Self {
        (value.clamp(-1.0, 1.0) * i16::MAX as f64) as i16
    }
}

impl AudioSample for i32 {
    fn to_f64_normalized(self) -> f64 {
        self as f64 / i32::MAX as f64
    }

    fn from_f64_normalized(value: f64) -> Self {
        (value.clamp(-1.0, 1.0) * i32::MAX as f64) as i32
    }
}

impl AudioSample for u8 {
    fn to_f64_normalized(self) -> f64 {
        (self as f64 - 128.0) / 128.0
    }

    fn from_f64_normalized(value: f64) -> Self {
        ((value.clamp(-1.0, 1.0) * 128.0) + 128.0) as u8
    }
}
