// Copyright (c) the quickblur developers. All rights reserved.
//
// Redistribution and use in source and binary forms, with or without modification,
// are permitted provided that the following conditions are met:
//
// 1.  Redistributions of source code must retain the above copyright notice, this
// list of conditions and the following disclaimer.
//
// 2.  Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3.  Neither the name of the copyright holder nor the names of its
// contributors may be used to endorse or promote products derived from
// this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use crate::stackblur::{HorizontalStackBlurPass, StackBlurWorkingPass, VerticalStackBlurPass};
use crate::sync_slice::SyncSlice;
use crate::{BlurError, BlurPass, BlurSurfaceMut, ThreadingPolicy, WorkerSlice, MAX_RADIUS};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

#[inline]
fn check_radius(radius: u32) -> Result<(), BlurError> {
    if radius > MAX_RADIUS {
        return Err(BlurError::RadiusOutOfRange(radius));
    }
    Ok(())
}

fn dispatch_pass(
    pixels: &SyncSlice<u8>,
    stride: u32,
    width: u32,
    height: u32,
    radius: u32,
    pass: BlurPass,
    slice: WorkerSlice,
) -> Result<(), BlurError> {
    match pass {
        BlurPass::Horizontal => HorizontalStackBlurPass::<u32>::default()
            .pass(pixels, stride, width, height, radius, slice),
        BlurPass::Vertical => VerticalStackBlurPass::<u32>::default()
            .pass(pixels, stride, width, height, radius, slice),
    }
}

/// Runs one worker's share of a single blur pass.
///
/// This is the entry point for hosts that manage their own worker threads:
/// invoke it once per worker with [`BlurPass::Horizontal`], wait for every
/// worker to return, then invoke it once per worker with
/// [`BlurPass::Vertical`]. The wait in between is mandatory; the vertical
/// pass reads rows produced by every horizontal worker. Workers of the same
/// pass may run concurrently, their slices never overlap.
///
/// # Arguments
/// * `image` - mutable RGBA surface used as both source and destination.
/// * `radius` - blur radius, `0..=254`; zero leaves the pixels unchanged.
/// * `pass` - which directional sweep to run.
/// * `slice` - this worker's share of the partitioned axis.
pub fn stack_blur_slice(
    image: &mut BlurSurfaceMut<'_>,
    radius: u32,
    pass: BlurPass,
    slice: WorkerSlice,
) -> Result<(), BlurError> {
    image.check_layout()?;
    check_radius(radius)?;
    let stride = image.row_stride();
    let width = image.width;
    let height = image.height;
    let pixels = SyncSlice::new(image.data.borrow_mut());
    dispatch_pass(&pixels, stride, width, height, radius, pass, slice)
}

/// Fast gaussian approximation using stack blur.
///
/// Blurs the color channels of an RGBA surface in place with a triangular
/// sliding window, horizontally then vertically; the alpha channel is left
/// untouched. Only integer arithmetic is used.
///
/// # Arguments
/// * `image` - mutable RGBA surface used as both source and destination.
/// * `radius` - blur radius, `0..=254`; zero leaves the pixels unchanged.
/// * `threading_policy` - Threads usage policy.
///
/// # Complexity
/// O(1) per pixel for any radius.
pub fn stack_blur(
    image: &mut BlurSurfaceMut<'_>,
    radius: u32,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    image.check_layout()?;
    check_radius(radius)?;
    let thread_count = threading_policy.thread_count(image.width, image.height) as u32;
    let stride = image.row_stride();
    let width = image.width;
    let height = image.height;
    if thread_count == 1 {
        let pixels = SyncSlice::new(image.data.borrow_mut());
        dispatch_pass(
            &pixels,
            stride,
            width,
            height,
            radius,
            BlurPass::Horizontal,
            WorkerSlice::SOLO,
        )?;
        return dispatch_pass(
            &pixels,
            stride,
            width,
            height,
            radius,
            BlurPass::Vertical,
            WorkerSlice::SOLO,
        );
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(thread_count as usize)
        .build()
        .unwrap();
    let pixels = SyncSlice::new(image.data.borrow_mut());
    for pass in [BlurPass::Horizontal, BlurPass::Vertical] {
        // The join at the end of each dispatch is the barrier the vertical
        // pass depends on.
        pool.install(|| {
            (0..thread_count).into_par_iter().try_for_each(|worker| {
                let slice = WorkerSlice::new(worker, thread_count)?;
                dispatch_pass(&pixels, stride, width, height, radius, pass, slice)
            })
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    fn fill_pattern(data: &mut [u8]) {
        let mut state = 0x2545_f491_4f6c_dd1du64;
        for byte in data.iter_mut() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            *byte = (state >> 56) as u8;
        }
    }

    fn rgba_row(pixels: &[[u8; 4]]) -> Vec<u8> {
        pixels.iter().flatten().copied().collect()
    }

    #[test]
    fn test_radius_zero_is_identity() {
        let width = 37u32;
        let height = 23u32;
        let mut data = vec![0u8; width as usize * height as usize * 4];
        fill_pattern(&mut data);
        let reference = data.clone();
        let mut image = BlurSurfaceMut::borrow(&mut data, width, height);
        stack_blur(&mut image, 0, ThreadingPolicy::Single).unwrap();
        assert_eq!(data, reference);
    }

    #[test]
    fn test_alpha_is_never_rewritten() {
        let width = 53u32;
        let height = 41u32;
        let mut data = vec![0u8; width as usize * height as usize * 4];
        fill_pattern(&mut data);
        let alphas: Vec<u8> = data.iter().skip(3).step_by(4).copied().collect();
        let mut image = BlurSurfaceMut::borrow(&mut data, width, height);
        stack_blur(
            &mut image,
            11,
            ThreadingPolicy::Fixed(NonZeroUsize::new(4).unwrap()),
        )
        .unwrap();
        let blurred_alphas: Vec<u8> = data.iter().skip(3).step_by(4).copied().collect();
        assert_eq!(alphas, blurred_alphas);
    }

    #[test]
    fn test_boundary_clamps_to_edge() {
        let mut data = rgba_row(&[
            [10, 20, 30, 1],
            [10, 20, 30, 2],
            [10, 20, 30, 3],
            [10, 20, 30, 4],
            [200, 200, 200, 5],
        ]);
        let mut image = BlurSurfaceMut::borrow(&mut data, 5, 1);
        stack_blur(&mut image, 1, ThreadingPolicy::Single).unwrap();
        // Window weights 1,2,1 over a clamped row; the vertical pass over a
        // single row is exact and changes nothing.
        let expected = rgba_row(&[
            [10, 20, 30, 1],
            [10, 20, 30, 2],
            [10, 20, 30, 3],
            [57, 65, 72, 4],
            [152, 155, 157, 5],
        ]);
        assert_eq!(data, expected);
        // The edge-adjacent pixel lies strictly between the two source
        // colors, pulled toward the solid side; the last pixel converges to
        // the clamped average of itself repeated.
        assert!(data[4 * 3] > 10 && data[4 * 3] < 105);
        assert!(data[4 * 4] > data[4 * 3] && data[4 * 4] < 200);
    }

    #[test]
    fn test_uniform_field_is_preserved() {
        for radius in [1u32, 4, 16, 254] {
            let width = 64u32;
            let height = 64u32;
            let mut data: Vec<u8> = [77u8, 130, 200, 255]
                .iter()
                .copied()
                .cycle()
                .take(width as usize * height as usize * 4)
                .collect();
            let reference = data.clone();
            let mut image = BlurSurfaceMut::borrow(&mut data, width, height);
            stack_blur(&mut image, radius, ThreadingPolicy::Single).unwrap();
            assert_eq!(data, reference, "radius {radius}");
        }
    }

    #[test]
    fn test_partitioning_does_not_change_the_result() {
        let width = 97u32;
        let height = 61u32;
        let mut solo = vec![0u8; width as usize * height as usize * 4];
        fill_pattern(&mut solo);
        let mut sliced = solo.clone();
        let mut pooled = solo.clone();

        let mut solo_image = BlurSurfaceMut::borrow(&mut solo, width, height);
        stack_blur(&mut solo_image, 9, ThreadingPolicy::Single).unwrap();

        // Host-managed partitioning: all horizontal slices, then all
        // vertical slices.
        let workers = 4u32;
        let mut sliced_image = BlurSurfaceMut::borrow(&mut sliced, width, height);
        for pass in [BlurPass::Horizontal, BlurPass::Vertical] {
            for worker in 0..workers {
                let slice = WorkerSlice::new(worker, workers).unwrap();
                stack_blur_slice(&mut sliced_image, 9, pass, slice).unwrap();
            }
        }

        let mut pooled_image = BlurSurfaceMut::borrow(&mut pooled, width, height);
        stack_blur(
            &mut pooled_image,
            9,
            ThreadingPolicy::Fixed(NonZeroUsize::new(4).unwrap()),
        )
        .unwrap();

        assert_eq!(solo, sliced);
        assert_eq!(solo, pooled);
    }

    #[test]
    fn test_step_edge_stays_monotone() {
        let width = 64usize;
        let mut data = vec![0u8; width * 4];
        for x in width / 2..width {
            data[x * 4] = 255;
            data[x * 4 + 1] = 255;
            data[x * 4 + 2] = 255;
        }
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        let mut image = BlurSurfaceMut::borrow(&mut data, width as u32, 1);
        stack_blur(&mut image, 5, ThreadingPolicy::Single).unwrap();
        for channel in 0..3 {
            let values: Vec<u8> = data.iter().skip(channel).step_by(4).copied().collect();
            for pair in values.windows(2) {
                assert!(pair[1] >= pair[0], "channel {channel}: {values:?}");
            }
        }
    }

    #[test]
    fn test_flat_field_large_image_stays_flat() {
        let width: usize = 148;
        let height: usize = 148;
        let mut dst = vec![43u8; width * height * 4];
        let mut dst_image = BlurSurfaceMut::borrow(&mut dst, width as u32, height as u32);
        stack_blur(&mut dst_image, 5, ThreadingPolicy::Single).unwrap();
        for (i, &cn) in dst.iter().enumerate() {
            let diff = (cn as i32 - 43).abs();
            assert!(
                diff == 0,
                "Diff expected to be zero but it was {diff} at {i}"
            );
        }
    }

    #[test]
    fn test_invalid_radius_mutates_nothing() {
        let width = 16u32;
        let height = 16u32;
        let mut data = vec![0u8; width as usize * height as usize * 4];
        fill_pattern(&mut data);
        let reference = data.clone();
        let mut image = BlurSurfaceMut::borrow(&mut data, width, height);
        assert_eq!(
            stack_blur(&mut image, 255, ThreadingPolicy::Single),
            Err(BlurError::RadiusOutOfRange(255))
        );
        assert_eq!(data, reference);
    }

    #[test]
    fn test_zero_sized_surface_is_rejected() {
        let mut data = vec![0u8; 64];
        let mut image = BlurSurfaceMut::borrow(&mut data, 4, 0);
        assert_eq!(
            stack_blur(&mut image, 3, ThreadingPolicy::Single),
            Err(BlurError::ZeroBaseSize)
        );
    }

    #[test]
    fn test_radius_larger_than_image() {
        let width = 7u32;
        let height = 5u32;
        let mut data = vec![0u8; width as usize * height as usize * 4];
        fill_pattern(&mut data);
        let inputs: Vec<Vec<u8>> = (0..3)
            .map(|channel| data.iter().skip(channel).step_by(4).copied().collect())
            .collect();
        let mut image = BlurSurfaceMut::borrow(&mut data, width, height);
        stack_blur(&mut image, 254, ThreadingPolicy::Single).unwrap();
        // The window dwarfs the image; every output is a clamped weighted
        // average and must stay inside the input range of its channel.
        for channel in 0..3 {
            let min = *inputs[channel].iter().min().unwrap();
            let max = *inputs[channel].iter().max().unwrap();
            for (i, &value) in data.iter().skip(channel).step_by(4).enumerate() {
                assert!(
                    value >= min.saturating_sub(1) && value <= max.saturating_add(1),
                    "channel {channel} at {i}: {value} outside {min}..={max}"
                );
            }
        }
    }
}
