//! Seed generators.
//!
//! Every generator maps board dimensions to the locations that are alive at
//! generation zero, and can be passed to [`Life::new`](crate::Life::new)
//! directly. The shape generators tile their shape over the board as many
//! times as it fits, with a spacer wide enough that copies never interact.

use crate::{get_config, Dimensions, Location};

/// Repeats `shape` over the board in a grid of `tile_width` by `tile_height`
/// tiles (spacer included).
///
/// When a side of the board is exactly one cell short of a tile, the spacer
/// isn't needed and one copy still fits along that side.
fn tiled(
    dims: Dimensions,
    tile_width: usize,
    tile_height: usize,
    shape: &[(usize, usize)],
) -> Vec<Location> {
    let fit = |side: usize, tile: usize| match side / tile {
        0 if side + 1 == tile => 1,
        n => n,
    };
    let (cols, rows) = (fit(dims.width, tile_width), fit(dims.height, tile_height));

    let mut seed = Vec::with_capacity(cols * rows * shape.len());
    for row in 0..rows {
        for col in 0..cols {
            let (x0, y0) = (col * tile_width, row * tile_height);
            seed.extend(
                shape
                    .iter()
                    .map(|&(x, y)| Location::new(x0 + x, y0 + y))
                    .filter(|&loc| dims.contains(loc)),
            );
        }
    }
    seed
}

/// Every cell is alive with probability `fill_rate` (the configured default
/// when `None`).
///
/// `seed` - random seed (if `None`, then random seed is generated)
pub fn random(dims: Dimensions, fill_rate: Option<f64>, seed: Option<u64>) -> Vec<Location> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let fill_rate = match fill_rate.unwrap_or_else(|| get_config().fill_rate) {
        p if p.is_nan() => 0.,
        p => p.clamp(0., 1.),
    };
    let mut rng = match seed {
        Some(x) => ChaCha8Rng::seed_from_u64(x),
        None => ChaCha8Rng::from_entropy(),
    };
    dims.locations()
        .filter(|_| rng.gen_bool(fill_rate))
        .collect()
}

// Oscillators

/// Period 2.
/// ```text
/// ---    -0-
/// 000    -0-
/// ---    -0-
/// ```
pub fn blinkers(dims: Dimensions) -> Vec<Location> {
    tiled(dims, 4, 4, &[(0, 1), (1, 1), (2, 1)])
}

/// Period 2.
/// ```text
/// ----    --0-
/// -000    0--0
/// 000-    0--0
/// ----    -0--
/// ```
pub fn toads(dims: Dimensions) -> Vec<Location> {
    tiled(
        dims,
        5,
        5,
        &[(1, 1), (2, 1), (3, 1), (0, 2), (1, 2), (2, 2)],
    )
}

/// Period 2.
/// ```text
/// 00--    00--
/// 0---    00--
/// ---0    --00
/// --00    --00
/// ```
pub fn beacons(dims: Dimensions) -> Vec<Location> {
    tiled(
        dims,
        6,
        6,
        &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
    )
}

/// Period 3, 15x15 with a spacer.
pub fn pulsar(dims: Dimensions) -> Vec<Location> {
    let mut shape = Vec::with_capacity(48);
    for y in [1, 6, 8, 13] {
        for x in [3, 4, 5, 9, 10, 11] {
            shape.push((x, y));
        }
    }
    for y in [3, 4, 5, 9, 10, 11] {
        for x in [1, 6, 8, 13] {
            shape.push((x, y));
        }
    }
    tiled(dims, 16, 16, &shape)
}

// Spaceships

/// Moves one cell diagonally every 4 generations.
/// ```text
/// -0-
/// --0
/// 000
/// ```
pub fn gliders(dims: Dimensions) -> Vec<Location> {
    tiled(dims, 4, 4, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
}

// Still lifes

/// ```text
/// 00
/// 00
/// ```
pub fn blocks(dims: Dimensions) -> Vec<Location> {
    tiled(dims, 3, 3, &[(0, 0), (1, 0), (0, 1), (1, 1)])
}

/// ```text
/// -00-
/// 0--0
/// -00-
/// ```
pub fn beehive(dims: Dimensions) -> Vec<Location> {
    tiled(
        dims,
        5,
        4,
        &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
    )
}

/// ```text
/// -00-
/// 0--0
/// -0-0
/// --0-
/// ```
pub fn loaf(dims: Dimensions) -> Vec<Location> {
    tiled(
        dims,
        6,
        6,
        &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (3, 2), (2, 3)],
    )
}

/// ```text
/// 00-
/// 0-0
/// -0-
/// ```
pub fn boat(dims: Dimensions) -> Vec<Location> {
    tiled(dims, 5, 5, &[(0, 0), (1, 0), (0, 1), (2, 1), (1, 2)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pond, Processor, Simultaneous, Standard, Topology};
    use serial_test::serial;

    fn sorted(mut locations: Vec<Location>) -> Vec<Location> {
        locations.sort();
        locations
    }

    fn evolve(dims: Dimensions, seed: &[Location], steps: usize) -> Vec<Location> {
        let mut pond = Pond::new(dims, Topology::All).unwrap();
        pond.set_organisms(seed).unwrap();
        for _ in 0..steps {
            Simultaneous.apply(&mut pond, &Standard).unwrap();
        }
        sorted(pond.all_living())
    }

    #[test]
    fn test_blinker_fits_3x3() {
        let seed = blinkers(Dimensions::new(3, 3));
        assert_eq!(
            seed,
            [Location::new(0, 1), Location::new(1, 1), Location::new(2, 1)]
        );
    }

    #[test]
    fn test_tiling() {
        let dims = Dimensions::new(8, 8);
        assert_eq!(blinkers(dims).len(), 4 * 3);
        assert_eq!(blocks(Dimensions::new(6, 9)).len(), 6 * 4);
        assert!(blocks(Dimensions::new(1, 1)).is_empty());
        let generators: [fn(Dimensions) -> Vec<Location>; 9] = [
            blinkers, toads, beacons, pulsar, gliders, blocks, beehive, loaf, boat,
        ];
        for generator in generators {
            let dims = Dimensions::new(17, 23);
            assert!(generator(dims).into_iter().all(|loc| dims.contains(loc)));
        }
    }

    #[test]
    fn test_oscillator_periods() {
        let cases: [(fn(Dimensions) -> Vec<Location>, Dimensions, usize); 4] = [
            (blinkers, Dimensions::new(8, 8), 2),
            (toads, Dimensions::new(10, 10), 2),
            (beacons, Dimensions::new(12, 12), 2),
            (pulsar, Dimensions::new(16, 16), 3),
        ];
        for (generator, dims, period) in cases {
            let seed = generator(dims);
            assert_ne!(evolve(dims, &seed, 1), sorted(seed.clone()));
            assert_eq!(evolve(dims, &seed, period), sorted(seed));
        }
    }

    #[test]
    fn test_still_lifes() {
        let dims = Dimensions::new(12, 12);
        let generators: [fn(Dimensions) -> Vec<Location>; 4] = [blocks, beehive, loaf, boat];
        for generator in generators {
            let seed = generator(dims);
            assert!(!seed.is_empty());
            assert_eq!(evolve(dims, &seed, 1), sorted(seed));
        }
    }

    #[test]
    fn test_glider_moves() {
        let dims = Dimensions::new(10, 10);
        let seed = tiled(dims, 10, 10, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let moved = seed
            .iter()
            .map(|loc| Location::new(loc.x + 1, loc.y + 1))
            .collect::<Vec<_>>();
        assert_eq!(evolve(dims, &seed, 4), sorted(moved));
    }

    #[test]
    #[serial]
    fn test_random_is_reproducible() {
        let dims = Dimensions::new(32, 32);
        let a = random(dims, Some(0.3), Some(42));
        let b = random(dims, Some(0.3), Some(42));
        assert_eq!(a, b);
        assert!(!a.is_empty() && a.len() < dims.area());

        assert!(random(dims, Some(0.), Some(1)).is_empty());
        assert_eq!(random(dims, Some(1.), Some(1)).len(), dims.area());
        assert!(!random(dims, None, Some(3)).is_empty());
    }
}
