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
//! Per colorspace channel ranges and the `[0, 255]` normalized kernels built from them.
use crate::color::{Color, MAX_CHANNEL};
use crate::conversions::*;

/// Observed `[min, max]` of each channel over the sRGB cube.
///
/// The tables below come from sweeping the forward kernels over the cube
/// faces at a step of 3 plus the interior at a step of 15.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChannelRange {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl ChannelRange {
    pub const fn new(min: [f64; 3], max: [f64; 3]) -> ChannelRange {
        ChannelRange { min, max }
    }

    /// Affine map of each channel onto `[0, 255]`.
    #[inline]
    pub fn normalize(&self, c: Color) -> Color {
        let n = |v: f64, i: usize| (v - self.min[i]) / self.span(i) * MAX_CHANNEL;
        c.with_channels(n(c.c0, 0), n(c.c1, 1), n(c.c2, 2))
    }

    #[inline]
    pub fn denormalize(&self, c: Color) -> Color {
        let d = |v: f64, i: usize| v / MAX_CHANNEL * self.span(i) + self.min[i];
        c.with_channels(d(c.c0, 0), d(c.c1, 1), d(c.c2, 2))
    }

    /// Width of channel `index`.
    #[inline]
    pub fn span(&self, index: usize) -> f64 {
        self.max[index] - self.min[index]
    }
}

pub(crate) const DEVICE_RANGE: ChannelRange = ChannelRange::new([0.; 3], [255.; 3]);
const HUE_UNIT: ChannelRange = ChannelRange::new([0.; 3], [360., 1., 1.]);

pub(crate) const OHTA_RANGE: ChannelRange =
    ChannelRange::new([0., -127.5, -127.5], [255., 127.5, 127.5]);
pub(crate) const XYZ_RANGE: ChannelRange =
    ChannelRange::new([0.; 3], [95.047, 100.00001, 108.883]);
pub(crate) const XYY_RANGE: ChannelRange = ChannelRange::new(
    [0.; 3],
    [0.6399999255194091, 0.6000000167796455, 100.00001],
);
pub(crate) const UCS_RANGE: ChannelRange = ChannelRange::new(
    [0.; 3],
    [63.364666666666665, 100.00001, 156.91801500000003],
);
pub(crate) const UVW_RANGE: ChannelRange = ChannelRange::new(
    [-82.16427995341836, -87.16901538845593, -17.0],
    [171.80573314634273, 70.81193020647221, 99.03972470831003],
);
pub(crate) const LMS_RANGE: ChannelRange = ChannelRange::new(
    [0.; 3],
    [100.00007007600001, 99.996828653, 99.9763706],
);
pub(crate) const LAB_RANGE: ChannelRange = ChannelRange::new(
    [0., -86.1827164205346, -107.8601617541481],
    [100.00000386666655, 98.23431188800402, 94.47797505367028],
);
pub(crate) const LUV_RANGE: ChannelRange = ChannelRange::new(
    [0., -83.07756224415776, -134.1022667983715],
    [100.00000386666655, 175.01502994692706, 107.39854124004405],
);
pub(crate) const HUNTER_LAB_RANGE: ChannelRange = ChannelRange::new(
    [0., -69.07980536543107, -199.77815384305654],
    [100.00000499999987, 109.45704153179841, 55.719650986765515],
);
pub(crate) const LCH_RANGE: ChannelRange =
    ChannelRange::new([0.; 3], [100.00000386666655, 133.80761485376166, 360.]);
pub(crate) const LCHUV_RANGE: ChannelRange =
    ChannelRange::new([0.; 3], [100.00000386666655, 179.04136013696302, 360.]);
pub(crate) const HCL_RANGE: ChannelRange =
    ChannelRange::new([0.; 3], [360., 170.0, 135.26590615814683]);
pub(crate) const HSV_RANGE: ChannelRange = HUE_UNIT;
pub(crate) const HSL_RANGE: ChannelRange = HUE_UNIT;
pub(crate) const HSI_RANGE: ChannelRange = HUE_UNIT;
pub(crate) const HWB_RANGE: ChannelRange = HUE_UNIT;
pub(crate) const GLHS_RANGE: ChannelRange = ChannelRange::new([0.; 3], [1., 360., 1.]);
pub(crate) const YPBPR_RANGE: ChannelRange =
    ChannelRange::new([0., -236.589, -200.787], [255., 236.589, 200.787]);
pub(crate) const YDBDR_RANGE: ChannelRange =
    ChannelRange::new([0., -339.915, -339.915], [255., 339.915, 339.915]);
pub(crate) const YCBCR_RANGE: ChannelRange =
    ChannelRange::new([0., 0.5, 0.5], [255., 255.5, 255.5]);
pub(crate) const YUV_RANGE: ChannelRange = ChannelRange::new(
    [0., -111.17745000000001, -156.825],
    [255., 111.17999999999999, 156.825],
);
pub(crate) const YIQ_RANGE: ChannelRange = ChannelRange::new(
    [0., -151.90758, -133.260705],
    [255., 151.90758, 133.260705],
);
pub(crate) const YCGCO_RANGE: ChannelRange =
    ChannelRange::new([0., -127.5, -127.5], [255., 127.5, 127.5]);
pub(crate) const OKLAB_RANGE: ChannelRange = ChannelRange::new(
    [0., -0.23388757418790818, -0.3115281476783751],
    [0.9999999934735462, 0.27621306317752015, 0.19856975465179516],
);
pub(crate) const OKLCH_RANGE: ChannelRange = ChannelRange::new(
    [0.; 3],
    [0.9999999934735462, 0.32249096477516437, 360.],
);
pub(crate) const OKHSV_RANGE: ChannelRange =
    ChannelRange::new([0.; 3], [360., 1.011928673056095, 1.0000000319591924]);
pub(crate) const OKHSL_RANGE: ChannelRange =
    ChannelRange::new([0.; 3], [360., 1.0048265952924003, 0.9999999923961898]);
pub(crate) const OKHWB_RANGE: ChannelRange = ChannelRange::new(
    [0., -0.01139006950598202, 0.],
    [360., 0.9999999235285321, 1.],
);
pub(crate) const IPT_RANGE: ChannelRange = ChannelRange::new(
    [0., -0.45339262819322823, -0.7484710495421323],
    [0.9999879031114021, 0.6624322295429048, 0.6514644832211638],
);
pub(crate) const IGPGTG_RANGE: ChannelRange = ChannelRange::new(
    [0., -0.35382473050275776, -0.4117865479621412],
    [0.9741525406250655, 0.3939802592966543, 0.43676609858770077],
);
pub(crate) const JAB_RANGE: ChannelRange = ChannelRange::new(
    [0., -0.09286167571571327, -0.15632011039989116],
    [0.1671735529864959, 0.10900425466836208, 0.11522917352709072],
);
pub(crate) const JCH_RANGE: ChannelRange =
    ChannelRange::new([0.; 3], [0.1671735529864959, 0.1593481577431883, 360.]);
pub(crate) const OSA_RANGE: ChannelRange = ChannelRange::new(
    [-13.507581921540849, -157.66201044402044, -87.33839415332712],
    [7.137750277772522, 498.43328922421017, 385.9130865137459],
);
pub(crate) const DIN99_RANGE: ChannelRange = ChannelRange::new(
    [0., -27.45028321093215, -33.39553606011985],
    [100.00031419048679, 36.17532491408435, 31.154790455122185],
);
pub(crate) const DIN99O_RANGE: ChannelRange = ChannelRange::new(
    [0., -40.08946579103739, -40.469697997647266],
    [99.99967218928515, 45.501458407313, 44.34398966308523],
);
pub(crate) const DIN99B_RANGE: ChannelRange = ChannelRange::new(
    [0., -40.109510523932904, -40.489932846646084],
    [99.99967218928515, 45.52420913651665, 44.36616165791678],
);
pub(crate) const DIN99C_RANGE: ChannelRange = ChannelRange::new(
    [0., -39.03869421540671, -45.76265218151625],
    [99.99963482734906, 44.75282729343984, 44.16613130304386],
);
pub(crate) const DIN99D_RANGE: ChannelRange = ChannelRange::new(
    [0., -38.14303561558093, -45.84988500741363],
    [100.00017738075398, 43.68665359270781, 43.631766535969234],
);
pub(crate) const PALETTON_HSV_RANGE: ChannelRange = HUE_UNIT;
pub(crate) const CUBEHELIX_RANGE: ChannelRange =
    ChannelRange::new([0.; 3], [360., 4.614386868039719, 1.]);

macro_rules! normalized_kernel {
    ($to_name: ident, $from_name: ident, $to: ident, $from: ident, $range: ident) => {
        pub fn $to_name(c: Color) -> Color {
            $range.normalize($to(c))
        }

        pub fn $from_name(c: Color) -> Color {
            $from($range.denormalize(c))
        }
    };
}

normalized_kernel!(to_rgb_normalized, from_rgb_normalized, to_rgb, from_rgb, DEVICE_RANGE);
normalized_kernel!(to_srgb_normalized, from_srgb_normalized, to_srgb, from_srgb, DEVICE_RANGE);
normalized_kernel!(
    to_linear_rgb_normalized,
    from_linear_rgb_normalized,
    to_linear_rgb,
    from_linear_rgb,
    DEVICE_RANGE
);
normalized_kernel!(to_gray_normalized, from_gray_normalized, to_gray, from_gray, DEVICE_RANGE);
normalized_kernel!(to_cmy_normalized, from_cmy_normalized, to_cmy, from_cmy, DEVICE_RANGE);
normalized_kernel!(to_ohta_normalized, from_ohta_normalized, to_ohta, from_ohta, OHTA_RANGE);
normalized_kernel!(to_xyz_normalized, from_xyz_normalized, to_xyz, from_xyz, XYZ_RANGE);
normalized_kernel!(to_xyy_normalized, from_xyy_normalized, to_xyy, from_xyy, XYY_RANGE);
normalized_kernel!(to_ucs_normalized, from_ucs_normalized, to_ucs, from_ucs, UCS_RANGE);
normalized_kernel!(to_uvw_normalized, from_uvw_normalized, to_uvw, from_uvw, UVW_RANGE);
normalized_kernel!(to_lms_normalized, from_lms_normalized, to_lms, from_lms, LMS_RANGE);
normalized_kernel!(to_lab_normalized, from_lab_normalized, to_lab, from_lab, LAB_RANGE);
normalized_kernel!(to_luv_normalized, from_luv_normalized, to_luv, from_luv, LUV_RANGE);
normalized_kernel!(
    to_hunter_lab_normalized,
    from_hunter_lab_normalized,
    to_hunter_lab,
    from_hunter_lab,
    HUNTER_LAB_RANGE
);
normalized_kernel!(to_lch_normalized, from_lch_normalized, to_lch, from_lch, LCH_RANGE);
normalized_kernel!(
    to_lchuv_normalized,
    from_lchuv_normalized,
    to_lchuv,
    from_lchuv,
    LCHUV_RANGE
);
normalized_kernel!(to_hcl_normalized, from_hcl_normalized, to_hcl, from_hcl, HCL_RANGE);
normalized_kernel!(to_hsv_normalized, from_hsv_normalized, to_hsv, from_hsv, HSV_RANGE);
normalized_kernel!(to_hsl_normalized, from_hsl_normalized, to_hsl, from_hsl, HSL_RANGE);
normalized_kernel!(to_hsi_normalized, from_hsi_normalized, to_hsi, from_hsi, HSI_RANGE);
normalized_kernel!(to_hwb_normalized, from_hwb_normalized, to_hwb, from_hwb, HWB_RANGE);
normalized_kernel!(to_glhs_normalized, from_glhs_normalized, to_glhs, from_glhs, GLHS_RANGE);
normalized_kernel!(
    to_ypbpr_normalized,
    from_ypbpr_normalized,
    to_ypbpr,
    from_ypbpr,
    YPBPR_RANGE
);
normalized_kernel!(
    to_ydbdr_normalized,
    from_ydbdr_normalized,
    to_ydbdr,
    from_ydbdr,
    YDBDR_RANGE
);
normalized_kernel!(
    to_ycbcr_normalized,
    from_ycbcr_normalized,
    to_ycbcr,
    from_ycbcr,
    YCBCR_RANGE
);
normalized_kernel!(to_yuv_normalized, from_yuv_normalized, to_yuv, from_yuv, YUV_RANGE);
normalized_kernel!(to_yiq_normalized, from_yiq_normalized, to_yiq, from_yiq, YIQ_RANGE);
normalized_kernel!(
    to_ycgco_normalized,
    from_ycgco_normalized,
    to_ycgco,
    from_ycgco,
    YCGCO_RANGE
);
normalized_kernel!(
    to_oklab_normalized,
    from_oklab_normalized,
    to_oklab,
    from_oklab,
    OKLAB_RANGE
);
normalized_kernel!(
    to_oklch_normalized,
    from_oklch_normalized,
    to_oklch,
    from_oklch,
    OKLCH_RANGE
);
normalized_kernel!(
    to_okhsv_normalized,
    from_okhsv_normalized,
    to_okhsv,
    from_okhsv,
    OKHSV_RANGE
);
normalized_kernel!(
    to_okhsl_normalized,
    from_okhsl_normalized,
    to_okhsl,
    from_okhsl,
    OKHSL_RANGE
);
normalized_kernel!(
    to_okhwb_normalized,
    from_okhwb_normalized,
    to_okhwb,
    from_okhwb,
    OKHWB_RANGE
);
normalized_kernel!(to_ipt_normalized, from_ipt_normalized, to_ipt, from_ipt, IPT_RANGE);
normalized_kernel!(
    to_igpgtg_normalized,
    from_igpgtg_normalized,
    to_igpgtg,
    from_igpgtg,
    IGPGTG_RANGE
);
normalized_kernel!(to_jab_normalized, from_jab_normalized, to_jab, from_jab, JAB_RANGE);
normalized_kernel!(to_jch_normalized, from_jch_normalized, to_jch, from_jch, JCH_RANGE);
normalized_kernel!(to_osa_normalized, from_osa_normalized, to_osa, from_osa, OSA_RANGE);
normalized_kernel!(
    to_din99_normalized,
    from_din99_normalized,
    to_din99,
    from_din99,
    DIN99_RANGE
);
normalized_kernel!(
    to_din99o_normalized,
    from_din99o_normalized,
    to_din99o,
    from_din99o,
    DIN99O_RANGE
);
normalized_kernel!(
    to_din99b_normalized,
    from_din99b_normalized,
    to_din99b,
    from_din99b,
    DIN99B_RANGE
);
normalized_kernel!(
    to_din99c_normalized,
    from_din99c_normalized,
    to_din99c,
    from_din99c,
    DIN99C_RANGE
);
normalized_kernel!(
    to_din99d_normalized,
    from_din99d_normalized,
    to_din99d,
    from_din99d,
    DIN99D_RANGE
);
normalized_kernel!(to_ryb_normalized, from_ryb_normalized, to_ryb, from_ryb, DEVICE_RANGE);
normalized_kernel!(
    to_paletton_hsv_normalized,
    from_paletton_hsv_normalized,
    to_paletton_hsv,
    from_paletton_hsv,
    PALETTON_HSV_RANGE
);
normalized_kernel!(
    to_cubehelix_normalized,
    from_cubehelix_normalized,
    to_cubehelix,
    from_cubehelix,
    CUBEHELIX_RANGE
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalized_lab_spans_the_device_band() {
        let black = to_lab_normalized(Color::BLACK);
        let white = to_lab_normalized(Color::WHITE);
        assert_abs_diff_eq!(black.c0, 0., epsilon = 1e-9);
        assert_abs_diff_eq!(white.c0, 255., epsilon = 1e-3);
    }

    #[test]
    fn normalize_is_invertible() {
        let c = Color::new(0.3, -0.1, 0.05, 17.);
        let back = OKLAB_RANGE.denormalize(OKLAB_RANGE.normalize(c));
        assert_abs_diff_eq!(back.c0, c.c0, epsilon = 1e-12);
        assert_abs_diff_eq!(back.c1, c.c1, epsilon = 1e-12);
        assert_abs_diff_eq!(back.c2, c.c2, epsilon = 1e-12);
        assert_eq!(back.alpha, 17.);
        assert_eq!(HUE_UNIT.span(0), 360.);
        assert_eq!(HUE_UNIT.normalize(Color::new(180., 0.5, 1., 0.)).c0, 127.5);
    }

    #[test]
    fn normalized_kernels_round_trip() {
        let c = Color::rgb(40., 180., 220.);
        let back = from_okhsl_normalized(to_okhsl_normalized(c));
        assert_abs_diff_eq!(back.c0, c.c0, epsilon = 1e-6);
        assert_abs_diff_eq!(back.c1, c.c1, epsilon = 1e-6);
        assert_abs_diff_eq!(back.c2, c.c2, epsilon = 1e-6);
    }
}
