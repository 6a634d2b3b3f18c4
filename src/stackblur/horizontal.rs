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

/// Walks rows with a pixel stride of one RGBA quad; partitions rows across
/// workers.
///
/// # Generics
/// `J` - accumulator type
pub(crate) struct HorizontalStackBlurPass<J> {
    _phantom_j: PhantomData<J>,
}

impl<J> Default for HorizontalStackBlurPass<J> {
    fn default() -> Self {
        HorizontalStackBlurPass {
            _phantom_j: Default::default(),
        }
    }
}

impl<J> HorizontalStackBlurPass<J>
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

        let wm = width - 1;

        for y in slice.span(height) {
            let mut sum = SlidingWindow::default();
            let mut sum_in = SlidingWindow::default();
            let mut sum_out = SlidingWindow::default();

            let row_start = stride as usize * y as usize;
            let mut src_ptr = row_start;

            // Left edge clamps: the first pixel fills the trailing half of
            // the ring with ascending weights.
            let src = SlidingWindow::read(pixels, src_ptr);
            for i in 0..=radius {
                ring[i as usize] = src;
                sum += src * (i + 1).as_();
                sum_out += src;
            }

            for i in 1..=radius {
                if i <= wm {
                    src_ptr += RGBA_CHANNELS;
                }
                let src = SlidingWindow::read(pixels, src_ptr);
                ring[(i + radius) as usize] = src;
                sum += src * (radius + 1 - i).as_();
                sum_in += src;
            }

            let mut sp = radius;
            let mut xp = radius.min(wm);

            src_ptr = row_start + RGBA_CHANNELS * xp as usize;
            let mut dst_ptr = row_start;
            for _ in 0..width {
                let blurred = sum.normalized(mul_sum, shr_sum);
                unsafe { blurred.write(pixels, dst_ptr) };
                dst_ptr += RGBA_CHANNELS;

                sum -= sum_out;

                let mut ring_start = sp + div - radius;
                if ring_start >= div {
                    ring_start -= div;
                }
                let tail = &mut ring[ring_start as usize];
                sum_out -= *tail;

                if xp < wm {
                    src_ptr += RGBA_CHANNELS;
                    xp += 1;
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

impl<J> StackBlurWorkingPass for HorizontalStackBlurPass<J>
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
