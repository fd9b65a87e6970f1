
/// Rounds `x` to `digits` decimals, ties toward positive infinity.
///
/// `round_half_up(0.36785, 4) == 0.3679` and `round_half_up(-0.00005, 4) == 0.0`.
pub fn round_half_up(x: f64, digits: u32) -> f64 {
    let pow1: f64;
    let pow2: f64;

    if digits > 22 {
        /* keep each factor below 1e22 so the scaling stays exact */
        pow1 = (10.0 as f64).powi((digits - 22) as i32);
        pow2 = 1e22;
    }
    else {
        pow1 = (10.0 as f64).powi(digits as i32);
        pow2 = 1.0;
    }

    let y = (x * pow1) * pow2;
    let z = (y + 0.5).floor();

    (z / pow2) / pow1
}

/// Rounding used for every CDF value before it is compared or returned.
pub fn round_probability(p: f64) -> f64 {
    round_half_up(p, 4)
}
