use std::collections::BTreeSet;

use glam::DVec3;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro128PlusPlus;
use terrain::normals::face_normal;
use terrain::{Terrain, TerrainConfig, TerrainError};

const EPSILON: f64 = 1e-9;

fn flat(div: u32) -> Terrain {
    Terrain::new(&TerrainConfig::flat(div, -1., 1., -1., 1.)).unwrap()
}

#[test]
fn buffer_lengths_follow_divisions() {
    for div in [1u32, 2, 5, 10, 33] {
        let terrain = flat(div);
        let d = div as usize;
        let vertices = (d + 1) * (d + 1);

        assert_eq!(terrain.vertex_count(), vertices);
        assert_eq!(terrain.position_buffer().len(), 3 * vertices);
        assert_eq!(terrain.normal_buffer().len(), 3 * vertices);
        assert_eq!(terrain.index_buffer().len(), 6 * d * d);
        assert_eq!(terrain.edge_buffer().len(), 12 * d * d);

        let max = vertices as u32;
        assert!(terrain.index_buffer().iter().all(|&i| i < max));
        assert!(terrain.edge_buffer().iter().all(|&i| i < max));
    }
}

#[test]
fn single_cell_scenario() {
    let terrain = flat(1);

    assert_eq!(
        terrain.positions(),
        &[
            DVec3::new(-1., -1., 0.),
            DVec3::new(1., -1., 0.),
            DVec3::new(-1., 1., 0.),
            DVec3::new(1., 1., 0.),
        ]
    );
    assert_eq!(terrain.triangles(), &[[0, 1, 2], [1, 3, 2]]);
    for n in terrain.normals() {
        assert!(n.abs_diff_eq(DVec3::Z, EPSILON));
    }
}

#[test]
fn unpartitioned_grid_is_flat_and_evenly_spaced() {
    let config = TerrainConfig::flat(7, -4., 10., 0.5, 2.);
    let terrain = Terrain::new(&config).unwrap();
    let grid = terrain.grid();

    for (i, j) in grid.grid_points() {
        let v = grid.vertex(i, j);
        let x = config.min_x + j as f64 * (config.max_x - config.min_x) / 7.;
        let y = config.min_y + i as f64 * (config.max_y - config.min_y) / 7.;
        assert!((v.x - x).abs() < EPSILON);
        assert!((v.y - y).abs() < EPSILON);
        assert_eq!(v.z, 0.);
    }
}

#[test]
fn triangulation_is_deterministic() {
    let a = flat(12);
    let b = flat(12);
    assert_eq!(a.index_buffer(), b.index_buffer());
    assert_eq!(a.edge_buffer(), b.edge_buffer());
    assert_eq!(a.position_buffer(), b.position_buffer());
}

#[test]
fn flat_grid_winding_is_uniform() {
    let terrain = flat(6);
    let positions = terrain.positions();
    for &[a, b, c] in terrain.triangles() {
        let n = face_normal(
            positions[a as usize],
            positions[b as usize],
            positions[c as usize],
        )
        .unwrap();
        assert!(n.abs_diff_eq(DVec3::Z, EPSILON));
    }
}

#[test]
fn normals_are_unit_length_after_partitioning() {
    let config = TerrainConfig::flat(32, -2., 2., -2., 2.)
        .with_faults(200, 0.01)
        .with_seed(7);
    let terrain = Terrain::new(&config).unwrap();
    for n in terrain.normals() {
        assert!((n.length() - 1.).abs() < EPSILON);
    }
}

#[test]
fn heights_stay_within_total_displacement() {
    for seed in 0..5 {
        let iterations = 60;
        let delta = 0.02;
        let config = TerrainConfig::flat(20, 0., 1., 0., 1.)
            .with_faults(iterations, delta)
            .with_seed(seed);
        let terrain = Terrain::new(&config).unwrap();
        let bound = iterations as f64 * delta + EPSILON;
        assert!(terrain.positions().iter().all(|v| v.z.abs() <= bound));
    }
}

#[test]
fn partitioning_only_moves_heights() {
    let config = TerrainConfig::flat(9, -3., 3., -1., 5.);
    let flat = Terrain::new(&config).unwrap();
    let rough = Terrain::new(&config.clone().with_faults(50, 0.1).with_seed(21)).unwrap();

    for (a, b) in flat.positions().iter().zip(rough.positions()) {
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y);
    }
}

#[test]
fn one_fault_pass_uses_three_heights() {
    let mut rng = Xoshiro128PlusPlus::seed_from_u64(2019);
    for _ in 0..20 {
        let config = TerrainConfig::flat(4, -1., 1., -1., 1.).with_faults(1, 0.1);
        let terrain = Terrain::generate(&config, &mut rng).unwrap();

        // heights are compared in tenths so every value is an exact integer
        let steps = terrain
            .positions()
            .iter()
            .map(|v| (v.z * 10.).round() as i64)
            .collect::<BTreeSet<i64>>();
        assert!(steps.is_subset(&BTreeSet::from([-1, 0, 1])));
        for v in terrain.positions() {
            assert!(v.z == 0. || v.z == 0.1 || v.z == -0.1);
        }
        // the vertex under the fault point always stays put
        assert!(steps.contains(&0));
    }
}

#[test]
fn invalid_configs_are_rejected() {
    let cases = [
        TerrainConfig::flat(0, -1., 1., -1., 1.),
        TerrainConfig::flat(4, 1., -1., -1., 1.),
        TerrainConfig::flat(4, -1., 1., 2., 2.),
        TerrainConfig::flat(4, -1., f64::INFINITY, -1., 1.),
    ];
    for config in cases {
        assert!(Terrain::new(&config).is_err());
    }

    let err = Terrain::new(&TerrainConfig::flat(0, -1., 1., -1., 1.)).unwrap_err();
    assert!(matches!(err, TerrainError::InvalidDivisions(0)));
    assert!(err.to_string().contains("at least one division"));
}

#[test]
fn default_config_generates() {
    let config = TerrainConfig {
        div: 32,
        seed: Some(1),
        ..TerrainConfig::default()
    };
    let terrain = Terrain::new(&config).unwrap();
    let stats = terrain.stats();
    assert_eq!(stats.vertices, 33 * 33);
    assert!(stats.max_height > stats.min_height);
}

#[test]
fn extreme_configs_fail_validation_not_generation() {
    let cases = [
        TerrainConfig::flat(1, -1e160, 1e160, -1e160, 1e160),
        TerrainConfig::flat(2, -1e308, 1e308, -1., 1.),
        TerrainConfig::flat(1, 0., 1e-100, 0., 1e-100),
    ];
    for config in cases {
        assert!(config.validate().is_err());
        let err = Terrain::new(&config).unwrap_err();
        assert!(!matches!(
            err,
            TerrainError::DegenerateFace { .. } | TerrainError::DegenerateNormal { .. }
        ));
    }
}

#[test]
fn validated_extreme_scale_generates() {
    let config = TerrainConfig::flat(8, -1e50, 1e50, -1e50, 1e50)
        .with_faults(50, 1e48)
        .with_seed(3);
    config.validate().unwrap();
    let terrain = Terrain::new(&config).unwrap();
    for n in terrain.normals() {
        assert!((n.length() - 1.).abs() < EPSILON);
    }
}
