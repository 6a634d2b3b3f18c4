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

//! Fast approximate Gaussian blur for RGBA images.
//!
//! The blur is a stack blur: two separable passes of a triangular-weighted
//! sliding window over the same buffer, normalized with a precomputed
//! multiply/shift reciprocal table so the hot loop never divides and never
//! touches floating point. The alpha channel is passed through untouched.
//!
//! ```no_run
//! use quickblur::{stack_blur, BlurSurfaceMut, ThreadingPolicy};
//!
//! let mut pixels = vec![0u8; 640 * 480 * 4];
//! let mut surface = BlurSurfaceMut::borrow(&mut pixels, 640, 480);
//! stack_blur(&mut surface, 25, ThreadingPolicy::Adaptive).unwrap();
//! ```
//!
//! Hosts that run their own worker pool can drive the partitioned entry
//! point [`stack_blur_slice`] instead; see its documentation for the
//! two-pass-with-barrier contract.
#![allow(clippy::too_many_arguments)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod image;
mod partition;
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
mod stack_blur_image;
mod stackblur;
mod sync_slice;
mod threading_policy;
mod util;

pub use image::{BlurSurfaceMut, BufferStore};
pub use partition::{BlurPass, WorkerSlice};
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
pub use stack_blur_image::stack_blur_image;
pub use stackblur::{stack_blur, stack_blur_slice, MAX_RADIUS};
pub use threading_policy::ThreadingPolicy;
pub use util::{BlurError, MismatchedSize};
