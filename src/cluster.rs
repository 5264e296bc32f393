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
//! Palette reduction by clustering colors.
use crate::color::Color;
use crate::colorspace::ColorSpace;
use crate::err::{ColorError, ColorResult};
use crate::mixing::average;

/// Partitions points into at most `k` groups.
pub trait Clusterer {
    /// Returns member indices of every non empty cluster.
    fn cluster(&self, points: &[[f64; 3]], k: usize) -> Vec<Vec<usize>>;
}

/// Lloyd's k-means with evenly strided initial centroids, so results are
/// reproducible.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KMeans {
    pub max_iterations: usize,
}

impl Default for KMeans {
    fn default() -> Self {
        Self {
            max_iterations: 100,
        }
    }
}

#[inline]
fn distance_sq(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let d0 = a[0] - b[0];
    let d1 = a[1] - b[1];
    let d2 = a[2] - b[2];
    d0 * d0 + d1 * d1 + d2 * d2
}

fn nearest(point: &[f64; 3], centroids: &[[f64; 3]]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, c) in centroids.iter().enumerate() {
        let d = distance_sq(point, c);
        if d < best_distance {
            best = i;
            best_distance = d;
        }
    }
    best
}

impl Clusterer for KMeans {
    fn cluster(&self, points: &[[f64; 3]], k: usize) -> Vec<Vec<usize>> {
        let n = points.len();
        let k = k.min(n);
        if k == 0 {
            return Vec::new();
        }
        let mut centroids: Vec<[f64; 3]> = (0..k).map(|i| points[i * n / k]).collect();
        let mut assignment = vec![usize::MAX; n];
        for _ in 0..self.max_iterations {
            let mut changed = false;
            for (slot, p) in assignment.iter_mut().zip(points.iter()) {
                let c = nearest(p, &centroids);
                if *slot != c {
                    *slot = c;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
            let mut sums = vec![[0f64; 3]; k];
            let mut counts = vec![0usize; k];
            for (&c, p) in assignment.iter().zip(points.iter()) {
                counts[c] += 1;
                for j in 0..3 {
                    sums[c][j] += p[j];
                }
            }
            // Empty clusters keep their previous centroid.
            for ((centroid, sum), &count) in centroids.iter_mut().zip(sums.iter()).zip(counts.iter()) {
                if count > 0 {
                    *centroid = sum.map(|v| v / count as f64);
                }
            }
        }
        let mut clusters = vec![Vec::new(); k];
        for (i, &c) in assignment.iter().enumerate() {
            clusters[c].push(i);
        }
        clusters.retain(|c| !c.is_empty());
        clusters
    }
}

/// Reduces `colors` to at most `k` representatives, each the average of a
/// cluster found in `space`. Larger clusters come first.
pub fn reduce_palette<C: Clusterer + ?Sized>(
    colors: &[Color],
    k: usize,
    space: ColorSpace,
    clusterer: &C,
) -> ColorResult<Vec<Color>> {
    if k == 0 {
        return Err(ColorError::InvalidInput(
            "palette must be reduced to at least one color".to_string(),
        ));
    }
    if colors.len() <= k {
        return Ok(colors.to_vec());
    }
    let points: Vec<[f64; 3]> = colors.iter().map(|&c| space.forward(c).channels()).collect();
    let mut clusters = clusterer.cluster(&points, k);
    clusters.sort_by(|a, b| b.len().cmp(&a.len()));
    clusters
        .iter()
        .map(|members| {
            let group: Vec<Color> = members.iter().map(|&i| colors[i]).collect();
            average(&group, space)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn separates_obvious_groups() {
        let points = [
            [0., 0., 0.],
            [1., 0., 0.],
            [100., 100., 100.],
            [0., 1., 0.],
            [101., 100., 100.],
        ];
        let mut clusters = KMeans::default().cluster(&points, 2);
        clusters.sort();
        assert_eq!(clusters, vec![vec![0, 1, 3], vec![2, 4]]);
    }

    #[test]
    fn degenerate_requests() {
        assert!(KMeans::default().cluster(&[], 3).is_empty());
        assert_eq!(KMeans::default().cluster(&[[1., 2., 3.]], 4), vec![vec![0]]);
    }

    #[test]
    fn reduces_to_cluster_means() {
        let colors = [
            Color::rgb(250., 0., 0.),
            Color::rgb(0., 0., 250.),
            Color::rgb(255., 10., 0.),
            Color::rgb(245., 5., 5.),
        ];
        let reduced = reduce_palette(&colors, 2, ColorSpace::Rgb, &KMeans::default()).unwrap();
        assert_eq!(reduced.len(), 2);
        assert_abs_diff_eq!(reduced[0].c0, 250., epsilon = 1e-9);
        assert_abs_diff_eq!(reduced[0].c1, 5., epsilon = 1e-9);
        assert_eq!(reduced[1], Color::rgb(0., 0., 250.));
    }

    #[test]
    fn small_palettes_pass_through() {
        let colors = [Color::WHITE, Color::BLACK];
        assert_eq!(
            reduce_palette(&colors, 5, ColorSpace::Lab, &KMeans::default()).unwrap(),
            colors.to_vec()
        );
        assert!(reduce_palette(&colors, 0, ColorSpace::Lab, &KMeans::default()).is_err());
    }
}
