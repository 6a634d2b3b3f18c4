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
use crate::{BlurError, MismatchedSize};

/// Bytes per pixel. The blur only ever touches the first three.
pub(crate) const RGBA_CHANNELS: usize = 4;

#[derive(Debug)]
pub enum BufferStore<'a, T: Copy + std::fmt::Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + std::fmt::Debug> BufferStore<'_, T> {
    #[allow(clippy::should_implement_trait)]
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

/// Mutable RGBA8 pixel surface.
///
/// The blur reads and writes the same surface; only the color bytes of each
/// pixel are ever rewritten, the alpha byte stays as stored.
pub struct BlurSurfaceMut<'a> {
    pub data: BufferStore<'a, u8>,
    pub width: u32,
    pub height: u32,
    /// Row stride in bytes, zero means tightly packed rows
    pub stride: u32,
}

impl<'a> BlurSurfaceMut<'a> {
    /// Allocates a zeroed surface with tightly packed rows.
    pub fn alloc(width: u32, height: u32) -> BlurSurfaceMut<'static> {
        BlurSurfaceMut {
            data: BufferStore::Owned(vec![
                0u8;
                width as usize * height as usize * RGBA_CHANNELS
            ]),
            width,
            height,
            stride: width * RGBA_CHANNELS as u32,
        }
    }

    /// Borrows existing RGBA data with tightly packed rows.
    pub fn borrow(arr: &'a mut [u8], width: u32, height: u32) -> Self {
        Self {
            data: BufferStore::Borrowed(arr),
            width,
            height,
            stride: width * RGBA_CHANNELS as u32,
        }
    }

    /// Borrows existing RGBA data with an explicit row stride in bytes.
    pub fn borrow_with_stride(arr: &'a mut [u8], width: u32, height: u32, stride: u32) -> Self {
        Self {
            data: BufferStore::Borrowed(arr),
            width,
            height,
            stride,
        }
    }

    /// Returns row stride in bytes
    #[inline]
    pub fn row_stride(&self) -> u32 {
        if self.stride == 0 {
            self.width * RGBA_CHANNELS as u32
        } else {
            self.stride
        }
    }

    #[inline]
    pub fn check_layout(&self) -> Result<(), BlurError> {
        if self.width == 0 || self.height == 0 {
            return Err(BlurError::ZeroBaseSize);
        }
        let stride = self.row_stride() as usize;
        let row_width = self.width as usize * RGBA_CHANNELS;
        let data_len = self.data.borrow().len();
        if data_len < stride * (self.height as usize - 1) + row_width {
            return Err(BlurError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: stride * self.height as usize,
                received: data_len,
            }));
        }
        if stride < row_width {
            return Err(BlurError::MinimumStrideSizeMismatch(MismatchedSize {
                expected: row_width,
                received: stride,
            }));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_zero_size() {
        let mut data = vec![0u8; 16];
        let surface = BlurSurfaceMut::borrow(&mut data, 0, 1);
        assert_eq!(surface.check_layout(), Err(BlurError::ZeroBaseSize));
    }

    #[test]
    fn test_layout_short_buffer() {
        let mut data = vec![0u8; 4 * 4 * 4 - 1];
        let surface = BlurSurfaceMut::borrow(&mut data, 4, 4);
        assert!(matches!(
            surface.check_layout(),
            Err(BlurError::MinimumSliceSizeMismatch(_))
        ));
    }

    #[test]
    fn test_layout_narrow_stride() {
        let mut data = vec![0u8; 4 * 4 * 4];
        let surface = BlurSurfaceMut::borrow_with_stride(&mut data, 4, 4, 8);
        assert!(matches!(
            surface.check_layout(),
            Err(BlurError::MinimumStrideSizeMismatch(_))
        ));
    }

    #[test]
    fn test_layout_padded_stride() {
        let mut data = vec![0u8; 24 * 3];
        let surface = BlurSurfaceMut::borrow_with_stride(&mut data, 5, 3, 24);
        assert_eq!(surface.check_layout(), Ok(()));
        assert_eq!(surface.row_stride(), 24);
    }
}
