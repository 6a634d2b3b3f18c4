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

use std::num::NonZeroUsize;
use std::thread::available_parallelism;

/// Pixels one worker is expected to handle before another one pays off.
const PIXELS_PER_WORKER: usize = 256 * 256;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
/// Set threading policy.
pub enum ThreadingPolicy {
    /// Use only one thread, current is preferred.
    Single,
    /// Compute adaptive thread count between 1..available CPUs.
    #[default]
    Adaptive,
    /// Use specified number of threads.
    Fixed(NonZeroUsize),
}

impl ThreadingPolicy {
    /// Returns the number of workers to use for the given image dimensions
    /// under the selected policy variant.
    ///
    /// Must return at least 1.
    pub fn thread_count(&self, width: u32, height: u32) -> usize {
        match self {
            ThreadingPolicy::Single => 1,
            ThreadingPolicy::Adaptive => {
                let pixels = width as usize * height as usize;
                (pixels / PIXELS_PER_WORKER).clamp(1, Self::available_parallelism())
            }
            ThreadingPolicy::Fixed(fixed) => fixed.get(),
        }
    }

    // Even a single core CPU benefits from two workers when multi-threading
    // was requested
    fn available_parallelism() -> usize {
        available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
            .max(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_is_one() {
        assert_eq!(ThreadingPolicy::Single.thread_count(10_000, 10_000), 1);
    }

    #[test]
    fn test_adaptive_small_image_stays_sequential() {
        assert_eq!(ThreadingPolicy::Adaptive.thread_count(128, 128), 1);
    }

    #[test]
    fn test_fixed_is_exact() {
        let policy = ThreadingPolicy::Fixed(NonZeroUsize::new(5).unwrap());
        assert_eq!(policy.thread_count(16, 16), 5);
    }
}
