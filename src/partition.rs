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

use crate::BlurError;
use std::ops::Range;

/// Selects which axis a single blur invocation walks.
///
/// The horizontal pass partitions rows across workers, the vertical pass
/// partitions columns. The vertical pass reads pixels produced by every
/// worker of the horizontal pass, so all horizontal invocations must have
/// finished before the first vertical one starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlurPass {
    Horizontal,
    Vertical,
}

/// The contiguous share of the iteration space owned by one worker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WorkerSlice {
    index: u32,
    count: u32,
}

impl WorkerSlice {
    /// The whole iteration space as a single worker's share.
    pub const SOLO: WorkerSlice = WorkerSlice { index: 0, count: 1 };

    pub fn new(index: u32, count: u32) -> Result<WorkerSlice, BlurError> {
        if count == 0 || index >= count {
            return Err(BlurError::InvalidWorkerSlice { index, count });
        }
        Ok(WorkerSlice { index, count })
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Lines of `extent` assigned to this worker.
    ///
    /// Slices of all workers tile `0..extent` without gaps or overlap; a
    /// slice may be empty when there are more workers than lines.
    #[inline]
    pub fn span(&self, extent: u32) -> Range<u32> {
        let start = (self.index as u64 * extent as u64 / self.count as u64) as u32;
        let end = ((self.index as u64 + 1) * extent as u64 / self.count as u64) as u32;
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_slices() {
        assert!(WorkerSlice::new(0, 0).is_err());
        assert!(WorkerSlice::new(3, 3).is_err());
        assert!(WorkerSlice::new(5, 2).is_err());
        assert!(WorkerSlice::new(0, 1).is_ok());
    }

    #[test]
    fn test_spans_tile_the_extent() {
        for count in 1..=9u32 {
            for extent in [1u32, 2, 3, 7, 64, 480, 1081] {
                let mut covered = 0u32;
                let mut previous_end = 0u32;
                for index in 0..count {
                    let span = WorkerSlice::new(index, count).unwrap().span(extent);
                    assert_eq!(span.start, previous_end);
                    previous_end = span.end;
                    covered += span.end - span.start;
                }
                assert_eq!(previous_end, extent);
                assert_eq!(covered, extent);
            }
        }
    }

    #[test]
    fn test_more_workers_than_lines() {
        let lines: Vec<Range<u32>> = (0..8)
            .map(|i| WorkerSlice::new(i, 8).unwrap().span(3))
            .collect();
        let nonempty: u32 = lines.iter().map(|r| r.end - r.start).sum();
        assert_eq!(nonempty, 3);
    }
}
