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
#![allow(clippy::manual_clamp, clippy::excessive_precision)]
#![deny(unreachable_pub)]
mod channels;
mod cluster;
mod color;
mod colorspace;
mod conversions;
mod distance;
mod err;
mod gradient;
mod interpolation;
/// Thin facade over `pxfm` plus the Newton solver shared by the iterative inverses
mod math;
mod matrix;
mod mixing;
mod paletton;
mod presets;
mod ranges;
mod source;
mod white_point;

pub use channels::{
    adjust, brighten, complementary, darken, desaturate, get_channel, lab_luma, luma, modulate,
    negate, saturate, set_alpha, set_channel,
};
pub use cluster::{Clusterer, KMeans, reduce_palette};
pub use color::{Color, Pixel};
pub use colorspace::{ColorSpace, Conversion, Kernel, lookup, lookup_normalized};
pub use conversions::{
    from_cmy, from_cubehelix, from_din99, from_din99b, from_din99c, from_din99d, from_din99o,
    from_glhs, from_gray, from_hcl, from_hsi, from_hsl, from_hsv, from_hunter_lab,
    from_hunter_lab_with_white_point, from_hwb, from_igpgtg, from_ipt, from_jab, from_jch,
    from_lab, from_lab_with_white_point, from_lch, from_lch_with_white_point, from_lchuv,
    from_lchuv_with_white_point, from_linear_rgb, from_lms, from_luma_color_hue, from_luv,
    from_luv_with_white_point, from_ohta, from_okhsl, from_okhsv, from_okhwb, from_oklab,
    from_oklch, from_osa, from_paletton_hsv, from_rgb, from_ryb, from_srgb, from_ucs, from_uvw,
    from_uvw_with_white_point, from_xyy, from_xyz, from_ycbcr, from_ycgco, from_ydbdr, from_yiq,
    from_ypbpr, from_yuv, hue, hue_polar, to_cmy, to_cubehelix, to_din99, to_din99b, to_din99c,
    to_din99d, to_din99o, to_glhs, to_gray, to_hcl, to_hsi, to_hsl, to_hsv, to_hunter_lab,
    to_hunter_lab_with_white_point, to_hwb, to_igpgtg, to_ipt, to_jab, to_jch, to_lab,
    to_lab_with_white_point, to_lch, to_lch_with_white_point, to_lchuv,
    to_lchuv_with_white_point, to_linear_rgb, to_lms, to_luma_color_hue, to_luv,
    to_luv_with_white_point, to_ohta, to_okhsl, to_okhsv, to_okhwb, to_oklab, to_oklch, to_osa,
    to_paletton_hsv, to_rgb, to_ryb, to_srgb, to_ucs, to_uvw, to_uvw_with_white_point, to_xyy,
    to_xyz, to_ycbcr, to_ycgco, to_ydbdr, to_yiq, to_ypbpr, to_yuv,
};
pub use distance::{
    DeltaE94, DeltaE2000, DeltaECmc, NoticeableDifference, ciede2000, contrast_ratio, delta_c,
    delta_e_94, delta_e_2000, delta_e_cie, delta_e_cmc, delta_e_euclidean, delta_e_hyab,
    delta_e_z, delta_h, noticeably_different,
};
pub use err::{ColorError, ColorResult};
pub use gradient::{Gradient, GradientOptions, resample};
pub use interpolation::{Easing, Extrapolation, InterpolationMethod, Interpolator};
pub use matrix::{Matrix3d, Vector3d};
pub use mixing::{
    PigmentMixer, SubtractiveMixer, average, lerp, lerp_minus, lerp_plus, mix, mix_pigments,
    mixsub, weighted_average,
};
pub use paletton::{PalettonOptions, PalettonPreset, PalettonScheme, paletton, paletton_from_color};
pub use presets::{
    GradientPreset, color_names, gradient_names, gradient_preset, named_color, palette,
    palette_names,
};
pub use ranges::{
    ChannelRange, from_cmy_normalized, from_cubehelix_normalized, from_din99_normalized,
    from_din99b_normalized, from_din99c_normalized, from_din99d_normalized,
    from_din99o_normalized, from_glhs_normalized, from_gray_normalized, from_hcl_normalized,
    from_hsi_normalized, from_hsl_normalized, from_hsv_normalized, from_hunter_lab_normalized,
    from_hwb_normalized, from_igpgtg_normalized, from_ipt_normalized, from_jab_normalized,
    from_jch_normalized, from_lab_normalized, from_lch_normalized, from_lchuv_normalized,
    from_linear_rgb_normalized, from_lms_normalized, from_luv_normalized, from_ohta_normalized,
    from_okhsl_normalized, from_okhsv_normalized, from_okhwb_normalized, from_oklab_normalized,
    from_oklch_normalized, from_osa_normalized, from_paletton_hsv_normalized,
    from_rgb_normalized, from_ryb_normalized, from_srgb_normalized, from_ucs_normalized,
    from_uvw_normalized, from_xyy_normalized, from_xyz_normalized, from_ycbcr_normalized,
    from_ycgco_normalized, from_ydbdr_normalized, from_yiq_normalized, from_ypbpr_normalized,
    from_yuv_normalized, to_cmy_normalized, to_cubehelix_normalized, to_din99_normalized,
    to_din99b_normalized, to_din99c_normalized, to_din99d_normalized, to_din99o_normalized,
    to_glhs_normalized, to_gray_normalized, to_hcl_normalized, to_hsi_normalized,
    to_hsl_normalized, to_hsv_normalized, to_hunter_lab_normalized, to_hwb_normalized,
    to_igpgtg_normalized, to_ipt_normalized, to_jab_normalized, to_jch_normalized,
    to_lab_normalized, to_lch_normalized, to_lchuv_normalized, to_linear_rgb_normalized,
    to_lms_normalized, to_luv_normalized, to_ohta_normalized, to_okhsl_normalized,
    to_okhsv_normalized, to_okhwb_normalized, to_oklab_normalized, to_oklch_normalized,
    to_osa_normalized, to_paletton_hsv_normalized, to_rgb_normalized, to_ryb_normalized,
    to_srgb_normalized, to_ucs_normalized, to_uvw_normalized, to_xyy_normalized,
    to_xyz_normalized, to_ycbcr_normalized, to_ycgco_normalized, to_ydbdr_normalized,
    to_yiq_normalized, to_ypbpr_normalized, to_yuv_normalized,
};
pub use source::{
    ColorSource, denormalize, is_valid_color, normalize, possible_color, possible_palette,
    to_hex, to_packed, try_color,
};
pub use white_point::{AdaptationMethod, Illuminant, Observer, WhitePoint, adapt_xyz, adaptation_matrix};
