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
use crate::{stack_blur, BlurSurfaceMut, ThreadingPolicy, MAX_RADIUS};
use image::{DynamicImage, RgbaImage};

/// Performs stack blur on the image
///
/// The image is converted to RGBA8 if it is not stored that way already;
/// alpha is carried through unblurred.
///
/// # Arguments
///
/// * `image`: Dynamic image provided by image crate
/// * `radius`: blur radius, values above 254 are clamped
/// * `threading_policy` - Threads usage policy
///
#[must_use]
pub fn stack_blur_image(
    image: DynamicImage,
    radius: u32,
    threading_policy: ThreadingPolicy,
) -> Option<DynamicImage> {
    let radius = radius.min(MAX_RADIUS);
    let rgba_image = image.to_rgba8();
    let width = rgba_image.width();
    let height = rgba_image.height();
    let mut raw_buffer = rgba_image.into_raw();
    let mut surface = BlurSurfaceMut::borrow(&mut raw_buffer, width, height);
    stack_blur(&mut surface, radius, threading_policy).ok()?;
    let blurred = RgbaImage::from_raw(width, height, raw_buffer)?;
    Some(DynamicImage::ImageRgba8(blurred))
}
