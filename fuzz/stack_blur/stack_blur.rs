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

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quickblur::{stack_blur, stack_blur_slice, BlurPass, BlurSurfaceMut, ThreadingPolicy, WorkerSlice};

#[derive(Clone, Debug, Arbitrary)]
pub struct BlurInput {
    pub width: u16,
    pub height: u16,
    pub radius: u8,
    pub workers: u8,
    pub seed: u64,
}

fuzz_target!(|data: BlurInput| {
    if data.width == 0 || data.height == 0 {
        return;
    }
    if data.width > 192 || data.height > 192 {
        return;
    }
    let workers = (data.workers % 8).max(1) as u32;
    let radius = (data.radius as u32).min(quickblur::MAX_RADIUS);
    fuzz_partition_equivalence(data.width as u32, data.height as u32, radius, workers, data.seed);
});

fn fill(seed: u64, buffer: &mut [u8]) {
    let mut state = seed | 1;
    for byte in buffer.iter_mut() {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        *byte = (state >> 56) as u8;
    }
}

fn fuzz_partition_equivalence(width: u32, height: u32, radius: u32, workers: u32, seed: u64) {
    let mut reference = vec![0u8; width as usize * height as usize * 4];
    fill(seed, &mut reference);
    let alphas: Vec<u8> = reference.iter().skip(3).step_by(4).copied().collect();
    let mut partitioned = reference.clone();

    let mut reference_image = BlurSurfaceMut::borrow(&mut reference, width, height);
    stack_blur(&mut reference_image, radius, ThreadingPolicy::Single).unwrap();

    // Every horizontal slice must land before the first vertical one runs.
    let mut partitioned_image = BlurSurfaceMut::borrow(&mut partitioned, width, height);
    for pass in [BlurPass::Horizontal, BlurPass::Vertical] {
        for worker in 0..workers {
            let slice = WorkerSlice::new(worker, workers).unwrap();
            stack_blur_slice(&mut partitioned_image, radius, pass, slice).unwrap();
        }
    }

    assert_eq!(reference, partitioned);
    let blurred_alphas: Vec<u8> = reference.iter().skip(3).step_by(4).copied().collect();
    assert_eq!(alphas, blurred_alphas);
}
