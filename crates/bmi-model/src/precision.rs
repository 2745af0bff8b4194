//! Half-precision quantization for BMI values.
//!
//! BMI values are stored at IEEE 754 half-precision (binary16). The
//! target only offers f32/f64 arithmetic, so the reduced precision is
//! reproduced with an explicit round trip through the 16-bit encoding,
//! using round-to-nearest-even. Quantization keeps category-boundary
//! behavior stable across ports of the pipeline.

/// Quantize a value to half-precision, widened back to `f32`.
///
/// The result is exactly representable in binary16: quantizing twice
/// is a no-op.
pub fn quantize_half(value: f64) -> f32 {
    f16_bits_to_f32(f32_to_f16_bits(value as f32))
}

/// Convert an `f32` to its binary16 encoding, rounding to nearest
/// even. Overflow saturates to infinity; values below the subnormal
/// range flush to zero.
fn f32_to_f16_bits(value: f32) -> u16 {
    let bits = value.to_bits();
    let sign = ((bits >> 16) & 0x8000) as u16;
    let exp = ((bits >> 23) & 0xff) as i32;
    let mant = bits & 0x007f_ffff;

    if exp == 255 {
        // Inf or NaN
        return if mant != 0 { sign | 0x7e00 } else { sign | 0x7c00 };
    }

    let unbiased = exp - 127;
    if unbiased > 15 {
        // Overflow to Inf
        return sign | 0x7c00;
    }
    if unbiased >= -14 {
        // Normal number: drop 13 mantissa bits with round-to-nearest-even.
        let mut m = mant >> 13;
        let mut e = (unbiased + 15) as u32;
        let round = mant & 0x1fff;
        if round > 0x1000 || (round == 0x1000 && m & 1 == 1) {
            m += 1;
            if m == 0x400 {
                m = 0;
                e += 1;
                if e >= 31 {
                    return sign | 0x7c00;
                }
            }
        }
        return sign | ((e as u16) << 10) | m as u16;
    }
    if unbiased >= -24 {
        // Subnormal range
        let m = mant | 0x0080_0000;
        let shift = (13 + (-14 - unbiased)) as u32;
        let mut v = m >> shift;
        let rem = m & ((1u32 << shift) - 1);
        let halfway = 1u32 << (shift - 1);
        if rem > halfway || (rem == halfway && v & 1 == 1) {
            v += 1;
        }
        return sign | v as u16;
    }
    // Underflow to zero
    sign
}

/// Widen a binary16 encoding back to `f32`. Exact for every finite
/// half-precision value.
fn f16_bits_to_f32(bits: u16) -> f32 {
    let sign = u32::from(bits & 0x8000) << 16;
    let exp = (bits >> 10) & 0x1f;
    let mant = u32::from(bits & 0x03ff);

    if exp == 0x1f {
        return if mant != 0 {
            f32::NAN
        } else if sign != 0 {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        };
    }
    if exp == 0 {
        // Zero or subnormal
        let magnitude = mant as f32 * 2f32.powi(-24);
        return if sign != 0 { -magnitude } else { magnitude };
    }
    let exp32 = (u32::from(exp) + 112) << 23;
    f32::from_bits(sign | exp32 | (mant << 13))
}
