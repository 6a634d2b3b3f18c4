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
use crate::image::RGBA_CHANNELS;
use crate::partition::WorkerSlice;
use crate::stackblur::reciprocal::{MUL_TABLE, SHR_TABLE};
use crate::stackblur::sliding_window::SlidingWindow;
use crate::stackblur::StackBlurWorkingPass;
use crate::sync_slice::SyncSlice;
use crate::BlurError;
use num_traits::AsPrimitive;
use std::marker::PhantomData;
use std::ops::{AddAssign, Mul, SubAssign};

/// Walks columns with the row stride between samples; partitions columns
/// across workers.
///
/// Reads the output of the horizontal pass, so every horizontal worker must
/// have finished before this pass starts.
///
/// # Generics
/// `J` - accumulator type
pub(crate) struct VerticalStackBlurPass<J> {
    _phantom_j: PhantomData<J>,
}

impl<J> Default for VerticalStackBlurPass<J> {
    fn default() -> Self {
        VerticalStackBlurPass {
            _phantom_j: Default::default(),
        }
    }
}

impl<J> VerticalStackBlurPass<J>
where
    J: Copy
        + Default
        + 'static
        + AddAssign<J>
        + SubAssign<J>
        + Mul<Output = J>
        + AsPrimitive<u8>
        + AsPrimitive<u64>,
    u8: AsPrimitive<J>,
    u32: AsPrimitive<J>,
    u64: AsPrimitive<J>,
{
    fn pass_impl(
        &self,
        pixels: &SyncSlice<u8>,
        stride: u32,
        width: u32,
        height: u32,
        radius: u32,
        slice: WorkerSlice,
    ) -> Result<(), BlurError> {
        let div = (radius * 2) + 1;
        let mut ring = Vec::new();
        ring.try_reserve_exact(div as usize)
            .map_err(|_| BlurError::StackAllocationFailed)?;
        ring.resize(div as usize, SlidingWindow::<J>::default());

        let mul_sum = MUL_TABLE[radius as usize] as u64;
        let shr_sum = SHR_TABLE[radius as usize] as u64;

        let hm = height - 1;

        for x in slice.span(width) {
            let mut sum = SlidingWindow::default();
            let mut sum_in = SlidingWindow::default();
            let mut sum_out = SlidingWindow::default();

            let column_start = RGBA_CHANNELS * x as usize;
            let mut src_ptr = column_start;

            // Top edge clamps: the first pixel of the column fills the
            // trailing half of the ring with ascending weights.
            let src = SlidingWindow::read(pixels, src_ptr);
            for i in 0..=radius {
                ring[i as usize] = src;
                sum += src * (i + 1).as_();
                sum_out += src;
            }

            for i in 1..=radius {
                if i <= hm {
                    src_ptr += stride as usize;
                }
                let src = SlidingWindow::read(pixels, src_ptr);
                ring[(i + radius) as usize] = src;
                sum += src * (radius + 1 - i).as_();
                sum_in += src;
            }

            let mut sp = radius;
            let mut yp = radius.min(hm);

            src_ptr = column_start + stride as usize * yp as usize;
            let mut dst_ptr = column_start;
            for _ in 0..height {
                let blurred = sum.normalized(mul_sum, shr_sum);
                unsafe { blurred.write(pixels, dst_ptr) };
                dst_ptr += stride as usize;

                sum -= sum_out;

                let mut ring_start = sp + div - radius;
                if ring_start >= div {
                    ring_start -= div;
                }
                let tail = &mut ring[ring_start as usize];
                sum_out -= *tail;

                if yp < hm {
                    src_ptr += stride as usize;
                    yp += 1;
                }

                let src = SlidingWindow::read(pixels, src_ptr);
                *tail = src;
                sum_in += src;
                sum += sum_in;

                sp += 1;
                if sp >= div {
                    sp = 0;
                }
                let head = ring[sp as usize];
                sum_out += head;
                sum_in -= head;
            }
        }
        Ok(())
    }
}

impl<J> StackBlurWorkingPass for VerticalStackBlurPass<J>
where
    J: Copy
        + Default
        + 'static
        + AddAssign<J>
        + SubAssign<J>
        + Mul<Output = J>
        + AsPrimitive<u8>
        + AsPrimitive<u64>,
    u8: AsPrimitive<J>,
    u32: AsPrimitive<J>,
    u64: AsPrimitive<J>,
{
    fn pass(
        &self,
        pixels: &SyncSlice<u8>,
        stride: u32,
        width: u32,
        height: u32,
        radius: u32,
        slice: WorkerSlice,
    ) -> Result<(), BlurError> {
        self.pass_impl(pixels, stride, width, height, radius, slice)
    }
}
