/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
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
mod artistic;
mod din99;
mod gamut;
mod hexagonal;
mod ipt;
mod lab;
mod matrix_spaces;
mod oklab;
mod osa;
mod polar;
mod rgb;
mod xyz;

pub use artistic::{
    from_cubehelix, from_hcl, from_paletton_hsv, from_ryb, to_cubehelix, to_hcl,
    to_paletton_hsv, to_ryb,
};
pub use din99::{
    from_din99, from_din99b, from_din99c, from_din99d, from_din99o, to_din99, to_din99b,
    to_din99c, to_din99d, to_din99o,
};
pub use hexagonal::{
    from_glhs, from_hsi, from_hsl, from_hsv, from_hwb, hue, hue_polar, to_glhs, to_hsi, to_hsl,
    to_hsv, to_hwb,
};
pub use ipt::{from_igpgtg, from_ipt, from_jab, to_igpgtg, to_ipt, to_jab};
pub use lab::{
    from_hunter_lab, from_hunter_lab_with_white_point, from_lab, from_lab_with_white_point,
    from_luv, from_luv_with_white_point, to_hunter_lab, to_hunter_lab_with_white_point, to_lab,
    to_lab_with_white_point, to_luv, to_luv_with_white_point,
};
pub use matrix_spaces::{
    from_ycbcr, from_ydbdr, from_yiq, from_yuv, to_ycbcr, to_ydbdr, to_yiq, to_yuv,
};
pub use oklab::{
    from_okhsl, from_okhsv, from_okhwb, from_oklab, to_okhsl, to_okhsv, to_okhwb, to_oklab,
};
pub use osa::{from_osa, to_osa};
pub use polar::{
    from_jch, from_lch, from_lch_with_white_point, from_lchuv, from_lchuv_with_white_point,
    from_luma_color_hue, from_oklch, to_jch, to_lch, to_lch_with_white_point, to_lchuv,
    to_lchuv_with_white_point, to_luma_color_hue, to_oklch,
};
pub use rgb::{
    from_cmy, from_gray, from_linear_rgb, from_ohta, from_rgb, from_srgb, from_ycgco, from_ypbpr,
    to_cmy, to_gray, to_linear_rgb, to_ohta, to_rgb, to_srgb, to_ycgco, to_ypbpr,
};
pub use xyz::{
    from_lms, from_ucs, from_uvw, from_uvw_with_white_point, from_xyy, from_xyz, to_lms, to_ucs,
    to_uvw, to_uvw_with_white_point, to_xyy, to_xyz,
};
pub(crate) use xyz::xyz_from_rgb;
