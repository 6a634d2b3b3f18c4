/*
 * // Copyright (c) the quickblur developers. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

/// Largest radius the reciprocal tables cover.
pub const MAX_RADIUS: u32 = 254;

/// Multipliers approximating `1 / (radius + 1)^2` together with [`SHR_TABLE`].
///
/// The triangular window of radius `r` weighs `2r+1` samples as
/// `1, 2, .., r+1, .., 2, 1`, so the weights sum to `(r+1)^2`; normalizing a
/// window sum is `(sum * MUL_TABLE[r]) >> SHR_TABLE[r]` instead of a division.
pub(crate) static MUL_TABLE: [u32; 255] = [
    512, 512, 456, 512, 328, 456, 335, 512, 405, 328, 271, 456, 388, 335, 292, 512, 454, 405, 364,
    328, 298, 271, 496, 456, 420, 388, 360, 335, 312, 292, 273, 512, 482, 454, 428, 405, 383, 364,
    345, 328, 312, 298, 284, 271, 259, 496, 475, 456, 437, 420, 404, 388, 374, 360, 347, 335, 323,
    312, 302, 292, 282, 273, 265, 512, 497, 482, 468, 454, 441, 428, 417, 405, 394, 383, 373, 364,
    354, 345, 337, 328, 320, 312, 305, 298, 291, 284, 278, 271, 265, 259, 507, 496, 485, 475, 465,
    456, 446, 437, 428, 420, 412, 404, 396, 388, 381, 374, 367, 360, 354, 347, 341, 335, 329, 323,
    318, 312, 307, 302, 297, 292, 287, 282, 278, 273, 269, 265, 261, 512, 505, 497, 489, 482, 475,
    468, 461, 454, 447, 441, 435, 428, 422, 417, 411, 405, 399, 394, 389, 383, 378, 373, 368, 364,
    359, 354, 350, 345, 341, 337, 332, 328, 324, 320, 316, 312, 309, 305, 301, 298, 294, 291, 287,
    284, 281, 278, 274, 271, 268, 265, 262, 259, 257, 507, 501, 496, 491, 485, 480, 475, 470, 465,
    460, 456, 451, 446, 442, 437, 433, 428, 424, 420, 416, 412, 408, 404, 400, 396, 392, 388, 385,
    381, 377, 374, 370, 367, 363, 360, 357, 354, 350, 347, 344, 341, 338, 335, 332, 329, 326, 323,
    320, 318, 315, 312, 310, 307, 304, 302, 299, 297, 294, 292, 289, 287, 285, 282, 280, 278, 275,
    273, 271, 269, 267, 265, 263, 261, 259,
];

/// Right shift amounts paired with [`MUL_TABLE`].
pub(crate) static SHR_TABLE: [u32; 255] = [
    9, 11, 12, 13, 13, 14, 14, 15, 15, 15, 15, 16, 16, 16, 16, 17, 17, 17, 17, 17, 17, 17, 18, 18,
    18, 18, 18, 18, 18, 18, 18, 19, 19, 19, 19, 19, 19, 19, 19, 19, 19, 19, 19, 19, 19, 20, 20,
    20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 21, 21, 21, 21, 21, 21, 21,
    21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 22, 22, 22,
    22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22,
    22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23,
    23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23,
    23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 24, 24, 24, 24, 24, 24, 24, 24,
    24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
    24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
    24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
    24,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_cover_the_radius_range() {
        assert_eq!(MUL_TABLE.len(), MAX_RADIUS as usize + 1);
        assert_eq!(SHR_TABLE.len(), MAX_RADIUS as usize + 1);
    }

    #[test]
    fn test_radius_zero_is_exact() {
        // 512 >> 9 == 1, the identity divisor
        for sum in 0u64..=255 {
            assert_eq!((sum * MUL_TABLE[0] as u64) >> SHR_TABLE[0], sum);
        }
    }

    #[test]
    fn test_normalization_within_one_of_exact_division() {
        for radius in 0..=MAX_RADIUS as usize {
            let weight_sum = (radius as u64 + 1) * (radius as u64 + 1);
            let mul = MUL_TABLE[radius] as u64;
            let shr = SHR_TABLE[radius];
            let max_sum = 255 * weight_sum;
            let step = (max_sum / 971).max(1);
            let mut sum = 0u64;
            while sum <= max_sum {
                let approx = (sum * mul) >> shr;
                let exact = sum / weight_sum;
                let diff = approx.abs_diff(exact);
                assert!(
                    diff <= 1,
                    "radius {radius}: sum {sum} approximated as {approx}, exact {exact}"
                );
                sum += step;
            }
        }
    }

    #[test]
    fn test_uniform_sum_never_darkens() {
        // A flat field must survive normalization bit exact for every radius.
        for radius in 0..=MAX_RADIUS as usize {
            let weight_sum = (radius as u64 + 1) * (radius as u64 + 1);
            let mul = MUL_TABLE[radius] as u64;
            let shr = SHR_TABLE[radius];
            for value in [0u64, 1, 7, 77, 128, 254, 255] {
                let sum = value * weight_sum;
                assert_eq!(
                    ((sum * mul) >> shr).min(255),
                    value,
                    "radius {radius} value {value}"
                );
            }
        }
    }
}
