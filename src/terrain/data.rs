//! Authored terrain content.
//!
//! A 2×2-cell patch on the slope `y = z / 2`, spanning x, z ∈ [-1, 1]. Vertices are listed row by
//! row (increasing z), each row in increasing x; vertex `i` sits in row `i / 3`, column `i % 3`.
//!
//! Replace this patch with exported data to ship a different surface; the numbers below are the
//! whole of the terrain's definition.

use crate::{nested, GeometrySource};

/// Normal of the plane `2y - z = 0`, i.e. `(0, 2, -1) / √5`.
const N: [f64; 3] = [0.0, 0.894_427_190_999_915_9, -0.447_213_595_499_957_9];

pub(super) fn source() -> GeometrySource {
    GeometrySource {
        position: nested![
            [[-1.0, -0.5, -1.0], [0.0, -0.5, -1.0], [1.0, -0.5, -1.0]],
            [[-1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
            [[-1.0, 0.5, 1.0], [0.0, 0.5, 1.0], [1.0, 0.5, 1.0]],
        ],
        normal: nested![[N, N, N], [N, N, N], [N, N, N]],
        uv: nested![
            [[0.0, 0.0], [0.5, 0.0], [1.0, 0.0]],
            [[0.0, 0.5], [0.5, 0.5], [1.0, 0.5]],
            [[0.0, 1.0], [0.5, 1.0], [1.0, 1.0]],
        ],
        // two triangles per cell, wound counter-clockwise when seen along -N
        index: nested![
            [[0, 3, 1], [1, 3, 4]],
            [[1, 4, 2], [2, 4, 5]],
            [[3, 6, 4], [4, 6, 7]],
            [[4, 7, 5], [5, 7, 8]],
        ],
    }
}
