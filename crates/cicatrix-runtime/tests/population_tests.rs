//! Population generator tests.

use cicatrix_core::prelude::*;
use cicatrix_runtime::config::ScenarioConfig;
use cicatrix_runtime::population::generate;
use cicatrix_runtime::region::Region;
use cicatrix_runtime::rng::SeededSampler;

/// Wraps a seeded sampler and counts how many draws were taken.
struct CountingSampler {
    inner: SeededSampler,
    draws: usize,
}

impl CountingSampler {
    fn new(seed: u64) -> Self {
        Self {
            inner: SeededSampler::new(seed),
            draws: 0,
        }
    }
}

impl UniformSampler for CountingSampler {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.draws += 1;
        self.inner.uniform(low, high)
    }
}

fn generate_into_vec(config: &ScenarioConfig, seed: u64) -> Vec<Agent> {
    let mut rng = SeededSampler::new(seed);
    let mut agents = Vec::new();
    generate(config, &mut rng, &mut agents).unwrap();
    agents
}

#[test]
fn every_agent_sits_in_its_region() {
    let config = ScenarioConfig::default().with_target_count(2_000);
    let agents = generate_into_vec(&config, 7);

    for agent in &agents {
        let p = agent.position();
        let region = config.geometry.classify(p.x, p.y);
        match agent.kind() {
            CellKind::Platelet => assert!(
                matches!(region, Region::Wound | Region::ExposedDermis),
                "platelet at {p:?} classified {region}"
            ),
            CellKind::Keratinocyte => assert_eq!(region, Region::Epidermis, "keratinocyte at {p:?}"),
            CellKind::Neutrophil | CellKind::Fibroblast | CellKind::Macrophage => assert!(
                matches!(region, Region::Dermis | Region::ExposedDermis),
                "{} at {p:?} classified {region}",
                agent.kind()
            ),
        }
    }
}

#[test]
fn positions_stay_inside_the_sampling_cube() {
    let config = ScenarioConfig::default().with_target_count(1_000);
    for agent in generate_into_vec(&config, 11) {
        let p = agent.position();
        for c in [p.x, p.y, p.z] {
            assert!((0.0..100.0).contains(&c), "coordinate {c} out of bounds");
        }
    }
}

#[test]
fn agent_count_is_between_one_and_four_per_sample() {
    let n = 1_500;
    let config = ScenarioConfig::default().with_target_count(n);
    let mut rng = SeededSampler::new(99);
    let mut agents = Vec::new();
    let report = generate(&config, &mut rng, &mut agents).unwrap();

    assert_eq!(report.samples, n);
    assert_eq!(report.inserted, agents.len());
    assert!(agents.len() >= n && agents.len() <= 4 * n);
    assert_eq!(report.regions.values().sum::<usize>(), n);
    assert_eq!(report.census.values().sum::<usize>(), agents.len());
}

#[test]
fn default_geometry_never_exposes_collagen() {
    let config = ScenarioConfig::default().with_target_count(3_000);
    let mut rng = SeededSampler::new(5);
    let mut agents = Vec::new();
    let report = generate(&config, &mut rng, &mut agents).unwrap();

    assert_eq!(report.samples_in(Region::ExposedDermis), 0);
    assert_eq!(report.count(CellKind::Platelet), report.samples_in(Region::Wound));
    let dermis = report.samples_in(Region::Dermis);
    assert_eq!(report.count(CellKind::Neutrophil), dermis);
    assert_eq!(report.count(CellKind::Fibroblast), dermis);
    assert_eq!(report.count(CellKind::Macrophage), dermis);
}

#[test]
fn shallower_exposure_depth_adds_platelets_to_the_dermis() {
    let mut config = ScenarioConfig::default().with_target_count(4_000);
    config.geometry.collagen_exposure_depth = 10.0;
    assert_eq!(config.geometry.classify(50.0, 15.0), Region::ExposedDermis);
    assert_eq!(config.geometry.classify(50.0, 5.0), Region::Dermis);

    let mut rng = SeededSampler::new(21);
    let mut agents = Vec::new();
    let report = generate(&config, &mut rng, &mut agents).unwrap();

    let exposed = report.samples_in(Region::ExposedDermis);
    assert!(exposed > 0);
    assert_eq!(
        report.count(CellKind::Platelet),
        report.samples_in(Region::Wound) + exposed
    );
}

#[test]
fn same_seed_same_population() {
    let config = ScenarioConfig::default().with_target_count(500);
    let a = generate_into_vec(&config, 1234);
    let b = generate_into_vec(&config, 1234);
    assert_eq!(a, b);

    let c = generate_into_vec(&config, 4321);
    assert_ne!(a, c);
}

#[test]
fn three_draws_per_sample() {
    let config = ScenarioConfig::default().with_target_count(250);
    let mut rng = CountingSampler::new(3);
    let mut agents = Vec::new();
    generate(&config, &mut rng, &mut agents).unwrap();
    assert_eq!(rng.draws, 750);
}

#[test]
fn zero_samples_creates_nothing() {
    let config = ScenarioConfig::default().with_target_count(0);
    let mut rng = CountingSampler::new(3);
    let mut agents = Vec::new();
    let report = generate(&config, &mut rng, &mut agents).unwrap();
    assert!(agents.is_empty());
    assert_eq!(report.inserted, 0);
    assert_eq!(rng.draws, 0);
}

#[test]
fn degenerate_bounds_place_every_sample_at_one_point() {
    let config = ScenarioConfig::default()
        .with_target_count(10)
        .with_bounds(5.0, 5.0);
    let agents = generate_into_vec(&config, 8);

    // (5, 5) is deep in the dermis.
    assert_eq!(agents.len(), 30);
    for agent in &agents {
        assert_eq!(agent.position(), Position::new(5.0, 5.0, 5.0));
    }
}

#[test]
fn inverted_bounds_fail_before_anything_is_drawn() {
    let config = ScenarioConfig::default()
        .with_target_count(100)
        .with_bounds(100.0, 0.0);
    let mut rng = CountingSampler::new(3);
    let mut agents = Vec::new();

    let err = generate(&config, &mut rng, &mut agents).unwrap_err();
    assert!(err.is_config());
    assert!(agents.is_empty());
    assert_eq!(rng.draws, 0);
}

#[test]
fn bounds_too_wide_to_sample_fail_validation() {
    let config = ScenarioConfig::default()
        .with_target_count(10)
        .with_bounds(-1e308, 1e308);
    let mut rng = CountingSampler::new(3);
    let mut agents = Vec::new();

    let err = generate(&config, &mut rng, &mut agents).unwrap_err();
    assert!(matches!(
        err,
        CicatrixError::Config(ConfigError::InvalidBounds { .. })
    ));
    assert!(agents.is_empty());
    assert_eq!(rng.draws, 0);
}

#[test]
fn undefined_substance_fails_without_inserting() {
    let mut config = ScenarioConfig::default().with_target_count(100);
    config.substances.retain(|s| s.name.as_str() != PDGF);
    let mut rng = CountingSampler::new(3);
    let mut agents = Vec::new();

    let err = generate(&config, &mut rng, &mut agents).unwrap_err();
    assert_eq!(
        err,
        CicatrixError::Config(ConfigError::UndefinedSubstance(PDGF.into()))
    );
    assert!(agents.is_empty());
    assert_eq!(rng.draws, 0);
}

#[test]
fn fibroblast_growth_switch_is_honored() {
    let mut config = ScenarioConfig::default().with_target_count(500);
    let without = generate_into_vec(&config, 2);
    assert!(without.iter().all(|a| !a.has_growth()));

    config.fibroblast_growth = true;
    let with = generate_into_vec(&config, 2);
    for agent in &with {
        assert_eq!(agent.has_growth(), agent.kind() == CellKind::Fibroblast);
    }
}
