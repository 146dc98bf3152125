// MIT/Apache2 License

use num_traits::{AsPrimitive, Bounded, Float};

/// Tell if two floats are within `tolerance` of each other.
#[inline]
pub(crate) fn approx_eq<Num: Float>(a: Num, b: Num, tolerance: Num) -> bool {
    (a - b).abs() <= tolerance
}

/// Scale a value in the range [0, 1] onto the full range of an integer type. Values outside of that range are
/// clamped first.
#[inline]
pub(crate) fn clamp<N: Bounded + Copy + 'static>(value: f32) -> N
where
    f32: AsPrimitive<N>,
    N: AsPrimitive<f32>,
{
    let value = value.max(0.0).min(1.0);
    let max: f32 = N::max_value().as_();
    let min: f32 = N::min_value().as_();
    ((max - min) * value).round().as_()
}
