//! Proximity links between particles

use glam::DVec2;

/// Stroke alpha for a link between two points `distance` apart.
///
/// Returns `None` when the pair is too far apart to link (`distance >= max_distance`).
/// Otherwise the alpha fades linearly from `base_alpha` at zero distance.
#[inline]
pub fn link_alpha(distance: f64, max_distance: f64, base_alpha: f64) -> Option<f64> {
    if distance < max_distance {
        Some(base_alpha * (1.0 - distance / max_distance))
    } else {
        None
    }
}

/// A link to draw between particles `i` and `j` (`i < j`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub i: usize,
    pub j: usize,
    pub alpha: f64,
}

/// Every unordered pair closer than `max_distance`, in (i, j) scan order
pub fn find_links(
    positions: &[DVec2],
    max_distance: f64,
    base_alpha: f64,
) -> impl Iterator<Item = Link> + '_ {
    (0..positions.len()).flat_map(move |i| {
        (i + 1..positions.len()).filter_map(move |j| {
            let d = positions[i].distance(positions[j]);
            link_alpha(d, max_distance, base_alpha).map(|alpha| Link { i, j, alpha })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{LINK_ALPHA, LINK_DISTANCE};

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(link_alpha(100.0, LINK_DISTANCE, LINK_ALPHA), None);
        assert_eq!(link_alpha(150.0, LINK_DISTANCE, LINK_ALPHA), None);

        let alpha = link_alpha(99.999, LINK_DISTANCE, LINK_ALPHA).unwrap();
        assert_eq!(alpha, 0.1 * (1.0 - 99.999 / 100.0));
        assert!((alpha - 1e-6).abs() < 1e-12);
    }

    #[test]
    fn test_alpha_fades_linearly() {
        assert_eq!(link_alpha(0.0, LINK_DISTANCE, LINK_ALPHA), Some(0.1));
        let a = link_alpha(10.0, LINK_DISTANCE, LINK_ALPHA).unwrap();
        assert!((a - 0.09).abs() < 1e-12);
        let a = link_alpha(50.0, LINK_DISTANCE, LINK_ALPHA).unwrap();
        assert!((a - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_find_links_pairs_once() {
        let positions = [
            DVec2::new(0.0, 0.0),
            DVec2::new(30.0, 40.0), // 50 from #0
            DVec2::new(0.0, 100.0), // exactly 100 from #0
            DVec2::new(500.0, 500.0),
        ];
        let links: Vec<_> = find_links(&positions, LINK_DISTANCE, LINK_ALPHA).collect();
        let pairs: Vec<_> = links.iter().map(|l| (l.i, l.j)).collect();
        // #1 to #2 is sqrt(30² + 60²) ≈ 67.1
        assert_eq!(pairs, vec![(0, 1), (1, 2)]);
        assert!((links[0].alpha - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_find_links_empty_and_single() {
        assert_eq!(find_links(&[], LINK_DISTANCE, LINK_ALPHA).count(), 0);
        assert_eq!(
            find_links(&[DVec2::ZERO], LINK_DISTANCE, LINK_ALPHA).count(),
            0
        );
    }
}
