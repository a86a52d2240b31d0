#![allow(dead_code)]

use ndarray::{Array2, Array3};
use pavemap_core::raster::{BinaryMask, RasterImage};

/// Build a mask from rows of '#' (foreground) and '.' (background).
pub fn mask_from_rows(rows: &[&str]) -> BinaryMask {
    let h = rows.len();
    let w = rows.first().map_or(0, |r| r.len());
    Array2::from_shape_fn((h, w), |(row, col)| rows[row].as_bytes()[col] == b'#')
}

/// Build an RGB raster filled with a single color given on the 0..=255 scale.
pub fn solid_raster(h: usize, w: usize, rgb: [u8; 3]) -> RasterImage {
    RasterImage::new(Array3::from_shape_fn((h, w, 3), |(_, _, ch)| {
        rgb[ch] as f32 / 255.0
    }))
}

/// Paint a single pixel of a raster, color on the 0..=255 scale.
pub fn paint(image: &mut RasterImage, row: usize, col: usize, rgb: [u8; 3]) {
    for (ch, &v) in rgb.iter().enumerate() {
        image.data[[row, col, ch]] = v as f32 / 255.0;
    }
}

/// Reference component count: union-find over 8-adjacency.
pub fn union_find_count(mask: &BinaryMask) -> usize {
    let (h, w) = mask.dim();
    let mut parent: Vec<usize> = (0..h * w).collect();

    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }

    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }
            // Previously visited neighbours: left, up-left, up, up-right.
            let mut neighbours = Vec::with_capacity(4);
            if col > 0 {
                neighbours.push((row, col - 1));
            }
            if row > 0 {
                if col > 0 {
                    neighbours.push((row - 1, col - 1));
                }
                neighbours.push((row - 1, col));
                if col + 1 < w {
                    neighbours.push((row - 1, col + 1));
                }
            }
            for (nr, nc) in neighbours {
                if mask[[nr, nc]] {
                    let a = find(&mut parent, row * w + col);
                    let b = find(&mut parent, nr * w + nc);
                    if a != b {
                        parent[a.max(b)] = a.min(b);
                    }
                }
            }
        }
    }

    let mut roots = std::collections::HashSet::new();
    for row in 0..h {
        for col in 0..w {
            if mask[[row, col]] {
                roots.insert(find(&mut parent, row * w + col));
            }
        }
    }
    roots.len()
}

/// Deterministic pseudo-random mask (xorshift), roughly `density` foreground.
pub fn pseudo_random_mask(h: usize, w: usize, seed: u64, density: f64) -> BinaryMask {
    let mut state = seed.max(1);
    Array2::from_shape_fn((h, w), |_| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % 1000) as f64 / 1000.0 < density
    })
}
