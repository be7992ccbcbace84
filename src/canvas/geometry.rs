//! SVG path data for links between nodes

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::theme::ConnectionStyle;
use crate::store::SkillNode;

/// Offset from a node's position to the centre of its 80px box
pub const NODE_ANCHOR_OFFSET: f64 = 40.0;
pub const MAX_CURVATURE: f64 = 150.0;
/// Hand-drawn control points move by up to this much on each axis
pub const JITTER: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub fn anchor(node: &SkillNode) -> Point {
    Point {
        x: node.x + NODE_ANCHOR_OFFSET,
        y: node.y + NODE_ANCHOR_OFFSET,
    }
}

/// Where hand-drawn wobble comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JitterMode {
    /// Fresh randomness on every render
    #[default]
    PerRender,
    /// Derived from the link id, identical across renders
    Seeded,
}

impl JitterMode {
    pub fn rng_for(self, link_id: &str) -> StdRng {
        match self {
            JitterMode::PerRender => StdRng::from_entropy(),
            JitterMode::Seeded => {
                let mut hasher = DefaultHasher::new();
                link_id.hash(&mut hasher);
                StdRng::seed_from_u64(hasher.finish())
            }
        }
    }
}

fn jitter<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(-JITTER..JITTER)
}

/// Path between the anchors of `source` and `target`
pub fn path_data<R: Rng>(
    style: ConnectionStyle,
    source: &SkillNode,
    target: &SkillNode,
    rng: &mut R,
) -> String {
    let Point { x: sx, y: sy } = anchor(source);
    let Point { x: tx, y: ty } = anchor(target);

    match style {
        ConnectionStyle::Straight => format!("M {sx} {sy} L {tx} {ty}"),
        ConnectionStyle::Circuit => {
            let mid_y = (sy + ty) / 2.0;
            format!("M {sx} {sy} L {sx} {mid_y} L {tx} {mid_y} L {tx} {ty}")
        }
        ConnectionStyle::HandDrawn => {
            let cx1 = sx + (tx - sx) / 3.0 + jitter(rng);
            let cy1 = sy + (ty - sy) / 3.0 + jitter(rng);
            let cx2 = sx + 2.0 * (tx - sx) / 3.0 + jitter(rng);
            let cy2 = sy + 2.0 * (ty - sy) / 3.0 + jitter(rng);
            format!("M {sx} {sy} C {cx1} {cy1}, {cx2} {cy2}, {tx} {ty}")
        }
        ConnectionStyle::Bezier => {
            let dist = ((tx - sx).powi(2) + (ty - sy).powi(2)).sqrt();
            let c = (dist * 0.5).min(MAX_CURVATURE);
            format!(
                "M {sx} {sy} C {} {sy}, {} {ty}, {tx} {ty}",
                sx + c,
                tx - c
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    fn pair(a: &str, b: &str) -> (SkillNode, SkillNode) {
        let trees = seed::skill_trees();
        (
            trees.get_node("fullstack", a).cloned().unwrap(),
            trees.get_node("fullstack", b).cloned().unwrap(),
        )
    }

    #[test]
    fn test_straight_and_circuit() {
        let (html, git) = pair("html-basics", "git-init");
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            path_data(ConnectionStyle::Straight, &html, &git, &mut rng),
            "M 440 340 L 440 490"
        );
        assert_eq!(
            path_data(ConnectionStyle::Circuit, &html, &git, &mut rng),
            "M 440 340 L 440 415 L 440 415 L 440 490"
        );
    }

    #[test]
    fn test_bezier_curvature_is_capped() {
        let mut rng = StdRng::seed_from_u64(0);

        // 200px apart: curvature is half the distance
        let (html, css) = pair("html-basics", "css-basics");
        assert_eq!(
            path_data(ConnectionStyle::Bezier, &html, &css, &mut rng),
            "M 440 340 C 540 340, 540 340, 640 340"
        );

        // 400px apart: capped at 150
        let (js, fetch) = pair("js-syntax", "fetch-api");
        assert_eq!(
            path_data(ConnectionStyle::Bezier, &js, &fetch, &mut rng),
            "M 840 340 C 990 340, 1090 340, 1240 340"
        );
    }

    #[test]
    fn test_hand_drawn_jitter_bounds() {
        let (html, css) = pair("html-basics", "css-basics");
        let mut rng = JitterMode::PerRender.rng_for("html-basics-css-basics");

        for _ in 0..100 {
            let path = path_data(ConnectionStyle::HandDrawn, &html, &css, &mut rng);
            let nums: Vec<f64> = path
                .split(|c: char| c == ' ' || c == ',')
                .filter_map(|t| t.parse().ok())
                .collect();
            // sx sy cx1 cy1 cx2 cy2 tx ty
            assert_eq!(nums.len(), 8);
            assert!((nums[2] - (440.0 + 200.0 / 3.0)).abs() <= JITTER + 1e-9);
            assert!((nums[3] - 340.0).abs() <= JITTER + 1e-9);
            assert!((nums[4] - (440.0 + 400.0 / 3.0)).abs() <= JITTER + 1e-9);
            assert!((nums[5] - 340.0).abs() <= JITTER + 1e-9);
            assert_eq!(&nums[6..], &[640.0, 340.0]);
        }
    }

    #[test]
    fn test_seeded_jitter_is_stable() {
        let (html, css) = pair("html-basics", "css-basics");
        let first = path_data(
            ConnectionStyle::HandDrawn,
            &html,
            &css,
            &mut JitterMode::Seeded.rng_for("html-basics-css-basics"),
        );
        let second = path_data(
            ConnectionStyle::HandDrawn,
            &html,
            &css,
            &mut JitterMode::Seeded.rng_for("html-basics-css-basics"),
        );
        assert_eq!(first, second);
    }
}
