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
use image::ImageReader;
use quickblur::{stack_blur, BlurSurfaceMut, ThreadingPolicy};
use std::time::Instant;

fn main() {
    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| {
        eprintln!("usage: quickblur-app <input image> [radius] [output image]");
        std::process::exit(2);
    });
    let radius: u32 = args
        .next()
        .map(|r| r.parse().expect("radius must be an integer"))
        .unwrap_or(25);
    let output = args.next().unwrap_or_else(|| "blurred.png".to_owned());

    let img = ImageReader::open(&input)
        .expect("could not open the input image")
        .decode()
        .expect("could not decode the input image");
    let rgba = img.to_rgba8();
    let width = rgba.width();
    let height = rgba.height();
    let mut raw = rgba.into_raw();

    {
        let mut warm = raw.clone();
        let mut surface = BlurSurfaceMut::borrow(&mut warm, width, height);
        let start = Instant::now();
        stack_blur(&mut surface, radius, ThreadingPolicy::Single).unwrap();
        println!("single thread: {:?}", start.elapsed());
    }

    let mut surface = BlurSurfaceMut::borrow(&mut raw, width, height);
    let start = Instant::now();
    stack_blur(&mut surface, radius, ThreadingPolicy::Adaptive).unwrap();
    println!("adaptive: {:?}", start.elapsed());

    image::RgbaImage::from_raw(width, height, raw)
        .expect("blurred buffer has the wrong size")
        .save(&output)
        .expect("could not save the output image");
    println!("saved {output}");
}
