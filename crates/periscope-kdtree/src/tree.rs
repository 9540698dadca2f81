//! Median-split k-d tree over a fixed 3D point set.

use periscope_core::{sq_distance, Point};

/// Default maximum number of points per leaf.
pub const DEFAULT_BUCKET_SIZE: usize = 10;

/// A balanced k-d tree over a fixed set of 3D points.
///
/// Built once from a slice of points; indices returned by queries refer to
/// positions in that original slice. The split axis cycles x, y, z with
/// depth and each split is at the median of the active axis, so the tree is
/// balanced to `O(log n)` depth for any input distribution.
///
/// # Examples
///
/// ```
/// use periscope_kdtree::KdTree;
///
/// let points = [
///     [2.0, 2.0, 2.0],
///     [5.0, 5.0, 5.0],
///     [1.1, 1.1, 1.1],
/// ];
/// let tree = KdTree::build(&points);
/// assert_eq!(tree.query_radius(&[5.0, 5.0, 5.0], 1.5), vec![1]);
/// assert_eq!(tree.query_radius(&[0.0, 0.0, 0.0], 4.0), vec![0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct KdTree {
    points: Vec<Point>,
    /// Permutation of `0..points.len()`; each leaf owns a contiguous range.
    order: Vec<usize>,
    /// Node arena. Children are pushed before their parent, so the root is
    /// always the last node.
    nodes: Vec<Node>,
    bucket_size: usize,
}

#[derive(Debug, Clone)]
struct Node {
    /// Axis-aligned bounding box of every point under this node.
    min: Point,
    max: Point,
    kind: NodeKind,
}

#[derive(Debug, Clone)]
enum NodeKind {
    /// Range into `KdTree::order`.
    Leaf { start: usize, end: usize },
    /// Child node ids in the arena.
    Split { left: usize, right: usize },
}

impl KdTree {
    /// Build a tree with [`DEFAULT_BUCKET_SIZE`].
    pub fn build(points: &[Point]) -> Self {
        Self::with_bucket_size(points, DEFAULT_BUCKET_SIZE)
    }

    /// Build a tree whose leaves hold at most `bucket_size` points.
    ///
    /// A `bucket_size` of zero is treated as one. Larger buckets trade tree
    /// depth for longer leaf scans; the default suits a few thousand points.
    pub fn with_bucket_size(points: &[Point], bucket_size: usize) -> Self {
        let bucket_size = bucket_size.max(1);
        let points: Vec<Point> = points.to_vec();
        let mut order: Vec<usize> = (0..points.len()).collect();
        let mut nodes = Vec::new();
        if !points.is_empty() {
            build_node(&points, &mut order, 0, 0, bucket_size, &mut nodes);
        }
        Self {
            points,
            order,
            nodes,
            bucket_size,
        }
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximum number of points per leaf.
    pub fn bucket_size(&self) -> usize {
        self.bucket_size
    }

    /// Indices of every stored point within `radius` of `center`, ascending.
    ///
    /// The boundary is inclusive: a point at exactly `radius` is returned.
    /// A negative or NaN radius returns nothing.
    pub fn query_radius(&self, center: &Point, radius: f64) -> Vec<usize> {
        let mut out = Vec::new();
        self.query_radius_into(center, radius, &mut out);
        out
    }

    /// As [`query_radius`](Self::query_radius), reusing `out` for the
    /// results. The buffer is cleared first.
    pub fn query_radius_into(&self, center: &Point, radius: f64, out: &mut Vec<usize>) {
        out.clear();
        let Some(root) = self.nodes.len().checked_sub(1) else {
            return;
        };
        if radius.is_nan() || radius < 0.0 {
            return;
        }
        self.visit(root, center, radius * radius, out);
        out.sort_unstable();
    }

    fn visit(&self, id: usize, center: &Point, r_sq: f64, out: &mut Vec<usize>) {
        let node = &self.nodes[id];
        if sq_distance_to_box(center, &node.min, &node.max) > r_sq {
            return;
        }
        match node.kind {
            NodeKind::Leaf { start, end } => {
                for &idx in &self.order[start..end] {
                    if sq_distance(center, &self.points[idx]) <= r_sq {
                        out.push(idx);
                    }
                }
            }
            NodeKind::Split { left, right } => {
                self.visit(left, center, r_sq, out);
                self.visit(right, center, r_sq, out);
            }
        }
    }
}

// ── Private helpers ─────────────────────────────────────────────

/// Recursively build the subtree over `order`, a sub-slice whose absolute
/// offset into the full permutation is `base`. Returns the node id.
fn build_node(
    points: &[Point],
    order: &mut [usize],
    base: usize,
    depth: usize,
    bucket_size: usize,
    nodes: &mut Vec<Node>,
) -> usize {
    let (min, max) = bounding_box(points, order);
    if order.len() <= bucket_size {
        nodes.push(Node {
            min,
            max,
            kind: NodeKind::Leaf {
                start: base,
                end: base + order.len(),
            },
        });
        return nodes.len() - 1;
    }

    let axis = depth % 3;
    let mid = order.len() / 2;
    order.select_nth_unstable_by(mid, |&a, &b| points[a][axis].total_cmp(&points[b][axis]));
    let (lo, hi) = order.split_at_mut(mid);
    let left = build_node(points, lo, base, depth + 1, bucket_size, nodes);
    let right = build_node(points, hi, base + mid, depth + 1, bucket_size, nodes);
    nodes.push(Node {
        min,
        max,
        kind: NodeKind::Split { left, right },
    });
    nodes.len() - 1
}

fn bounding_box(points: &[Point], order: &[usize]) -> (Point, Point) {
    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];
    for &idx in order {
        for axis in 0..3 {
            min[axis] = min[axis].min(points[idx][axis]);
            max[axis] = max[axis].max(points[idx][axis]);
        }
    }
    (min, max)
}

/// Squared distance from `p` to the nearest point of the box `[min, max]`;
/// zero when `p` is inside.
fn sq_distance_to_box(p: &Point, min: &Point, max: &Point) -> f64 {
    let mut acc = 0.0;
    for axis in 0..3 {
        let d = if p[axis] < min[axis] {
            min[axis] - p[axis]
        } else if p[axis] > max[axis] {
            p[axis] - max[axis]
        } else {
            0.0
        };
        acc += d * d;
    }
    acc
}
