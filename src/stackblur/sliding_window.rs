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
use crate::sync_slice::SyncSlice;
use num_traits::AsPrimitive;
use std::ops::{AddAssign, Mul, SubAssign};

/// One RGB sample, or accumulator of samples, of the blur ring.
///
/// The alpha channel never enters the window; reads skip it and writes leave
/// the stored byte alone.
///
/// # Generics
/// `J` - accumulator type
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SlidingWindow<J: Copy> {
    pub r: J,
    pub g: J,
    pub b: J,
}

impl<J> SlidingWindow<J>
where
    J: Copy + Default + 'static,
{
    /// Reads the color channels of the pixel starting at `offset`.
    #[inline]
    pub fn read(pixels: &SyncSlice<u8>, offset: usize) -> SlidingWindow<J>
    where
        u8: AsPrimitive<J>,
    {
        SlidingWindow {
            r: pixels.get(offset).as_(),
            g: pixels.get(offset + 1).as_(),
            b: pixels.get(offset + 2).as_(),
        }
    }

    /// Stores the color channels at `offset`, leaving the alpha byte as is.
    ///
    /// SAFETY: the caller must be the only writer of this pixel for the
    /// duration of the pass.
    #[inline]
    pub unsafe fn write(self, pixels: &SyncSlice<u8>, offset: usize)
    where
        J: AsPrimitive<u8>,
    {
        pixels.write(offset, self.r.as_());
        pixels.write(offset + 1, self.g.as_());
        pixels.write(offset + 2, self.b.as_());
    }

    /// `(sum * mul) >> shr` per channel in widened arithmetic, clamped to the
    /// 8-bit range to guard against rounding overflow at the table edges.
    #[inline]
    pub fn normalized(self, mul_sum: u64, shr_sum: u64) -> SlidingWindow<J>
    where
        J: AsPrimitive<u64>,
        u64: AsPrimitive<J>,
    {
        let scale = |v: J| -> J {
            let widened: u64 = v.as_();
            (((widened * mul_sum) >> shr_sum).min(255)).as_()
        };
        SlidingWindow {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}

impl<J> Mul<J> for SlidingWindow<J>
where
    J: Copy + Mul<Output = J>,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: J) -> Self::Output {
        SlidingWindow {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl<J> AddAssign<SlidingWindow<J>> for SlidingWindow<J>
where
    J: Copy + AddAssign,
{
    #[inline]
    fn add_assign(&mut self, rhs: SlidingWindow<J>) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl<J> SubAssign<SlidingWindow<J>> for SlidingWindow<J>
where
    J: Copy + SubAssign,
{
    #[inline]
    fn sub_assign(&mut self, rhs: SlidingWindow<J>) {
        self.r -= rhs.r;
        self.g -= rhs.g;
        self.b -= rhs.b;
    }
}
