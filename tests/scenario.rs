use approx::assert_relative_eq;
use gwspace_detectors::config::{OrbitConfig, presets};
use gwspace_detectors::scenario::{
    DEFAULT_CATALOG_DIR, ScenarioError, find_detector, load_catalog, resolve_detector,
};

#[test]
fn default_catalog_contains_both_geometries() {
    let catalog = load_catalog(DEFAULT_CATALOG_DIR).expect("detector catalog");
    assert_eq!(catalog.len(), 2);
    assert!(
        catalog
            .iter()
            .any(|d| matches!(d.orbit, OrbitConfig::Heliocentric(_)))
    );
    assert!(
        catalog
            .iter()
            .any(|d| matches!(d.orbit, OrbitConfig::Geocentric(_)))
    );
}

#[test]
fn catalog_files_agree_with_presets() {
    let catalog = load_catalog(DEFAULT_CATALOG_DIR).expect("detector catalog");
    for preset in presets::all() {
        let loaded = find_detector(&catalog, &preset.name).expect("catalog entry");
        let a = loaded.config();
        assert_relative_eq!(a.noise.arm_length_m, preset.noise.arm_length_m, max_relative = 1e-12);
        assert_relative_eq!(
            a.noise.transfer_frequency_hz,
            preset.noise.transfer_frequency_hz,
            max_relative = 1e-12
        );
        for t in [0.0, 2.5e6] {
            let p = loaded.positions(t);
            let q = gwspace_detectors::orbits::spacecraft_positions(&preset.orbit, t);
            for i in 0..3 {
                for k in 0..3 {
                    assert_relative_eq!(p[i][k], q[i][k], max_relative = 1e-10, epsilon = 1.0);
                }
            }
        }
    }
}

#[test]
fn lookup_falls_back_to_presets() {
    let detector = resolve_detector(None, "tianqin").expect("preset");
    assert_eq!(detector.name(), "TianQin");
    assert_relative_eq!(detector.nominal_arm_length(), 3.0_f64.sqrt() * 1.0e8);
}

#[test]
fn unknown_detector_is_reported() {
    match resolve_detector(None, "DECIGO") {
        Err(ScenarioError::NotFound(name)) => assert_eq!(name, "DECIGO"),
        other => panic!("unexpected: {other:?}"),
    }
}
