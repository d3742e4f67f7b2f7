//! Coherent 2D value noise for the humidity field.
//!
//! Deterministic, dependency-free noise: an integer-lattice hash blended
//! with Hermite interpolation. The humidity field samples it once at
//! startup; nothing else in the engine draws from it.

/// Lattice hash seeds. Primes give a reasonable distribution.
const SEED_X: u32 = 1619;
const SEED_Y: u32 = 31337;

/// Maximum value for positive i32 as f64 for safe conversion
const MAX_I32_POSITIVE: f64 = 0x7fff_ffff as f64;

/// Simple hash function for deterministic pseudo-random values.
///
/// Based on integer hashing techniques for fast, deterministic noise.
/// Returns a value in [0, 1].
#[inline]
fn hash_2d(x: i32, y: i32, seed: u32) -> f32 {
    let mut n = (x.wrapping_mul(SEED_X as i32))
        .wrapping_add(y.wrapping_mul(SEED_Y as i32))
        .wrapping_add(seed as i32);
    n = (n << 13) ^ n;
    n = n
        .wrapping_mul(n.wrapping_mul(n).wrapping_mul(15731).wrapping_add(789221))
        .wrapping_add(1376312589);
    // Convert to [0, 1] using f64 to avoid precision loss
    (f64::from(n & 0x7fff_ffff) / MAX_I32_POSITIVE) as f32
}

/// Smooth interpolation function (Hermite curve)
#[inline]
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// 2D value noise with smooth spatial continuity.
///
/// Returns a value in [-1, 1], deterministic for a given
/// `(x, y, scale, seed)`. Larger `scale` means smoother variation.
pub fn value_noise_2d(x: f32, y: f32, scale: f32, seed: u32) -> f32 {
    let sx = x / scale;
    let sy = y / scale;

    let x0 = sx.floor() as i32;
    let y0 = sy.floor() as i32;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let fx = smoothstep(sx - sx.floor());
    let fy = smoothstep(sy - sy.floor());

    // Get corner values
    let v00 = hash_2d(x0, y0, seed);
    let v10 = hash_2d(x1, y0, seed);
    let v01 = hash_2d(x0, y1, seed);
    let v11 = hash_2d(x1, y1, seed);

    // Bilinear interpolation
    let v0 = v00 + fx * (v10 - v00);
    let v1 = v01 + fx * (v11 - v01);
    let v = v0 + fy * (v1 - v0);

    // Convert from [0, 1] to [-1, 1]
    v * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_range() {
        // Noise should be in [-1, 1]
        for i in 0..100 {
            let x = i as f32 * 7.3;
            let y = i as f32 * 11.1;
            let v = value_noise_2d(x, y, 10.0, 0);
            assert!((-1.0..=1.0).contains(&v), "Noise out of range: {v}");
        }
    }

    #[test]
    fn test_noise_deterministic() {
        // Same input should give same output
        let v1 = value_noise_2d(10.0, 20.0, 15.0, 42);
        let v2 = value_noise_2d(10.0, 20.0, 15.0, 42);
        assert!((v1 - v2).abs() < 1e-6, "Noise not deterministic");
    }

    #[test]
    fn test_noise_seed_decorrelates() {
        // Different seeds should disagree somewhere on a small sample
        let mut differs = false;
        for i in 0..32 {
            let x = i as f32 * 3.7;
            let a = value_noise_2d(x, x * 0.5, 10.0, 1);
            let b = value_noise_2d(x, x * 0.5, 10.0, 2);
            if (a - b).abs() > 1e-3 {
                differs = true;
                break;
            }
        }
        assert!(differs, "Seeds 1 and 2 produced identical noise");
    }
}
