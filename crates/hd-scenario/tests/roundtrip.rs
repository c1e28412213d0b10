use hd_scenario::schema::*;
use hd_scenario::{load_json, load_yaml, save_json, save_yaml, validate_scenario};

fn methane_scenario() -> Scenario {
    Scenario {
        version: LATEST_VERSION,
        name: "Methane seawater".to_string(),
        gas: GasDef::Builtin {
            key: "CH4".to_string(),
        },
        salt: "NaCl".to_string(),
        pressure_mpa: 6.65,
        model: ModelDef::default(),
        sweep: Some(SweepDef {
            initial_salinity: 8.0,
            supercooling_min_k: 0.5,
            supercooling_max_k: 5.0,
            point_count: 50,
        }),
        grid: None,
    }
}

fn custom_scenario() -> Scenario {
    Scenario {
        version: LATEST_VERSION,
        name: "Custom former".to_string(),
        gas: GasDef::Custom {
            name: "lab-mix".to_string(),
            structure: "sII".to_string(),
            raw_beta: -1.0,
            points: vec![
                ReferencePointDef {
                    temperature_k: 274.0,
                    pressure_mpa: 0.5,
                },
                ReferencePointDef {
                    temperature_k: 278.0,
                    pressure_mpa: 1.2,
                },
            ],
        },
        salt: "CaCl2".to_string(),
        pressure_mpa: 1.0,
        model: ModelDef {
            fit_method: "spline".to_string(),
            structure_ii_correction: true,
        },
        sweep: None,
        grid: Some(GridDef {
            salinity_min: 1.0,
            salinity_max: 10.0,
            salinity_step: 1.0,
            temperature_min_k: 268.0,
            temperature_max_k: 280.0,
            temperature_step_k: 0.5,
            mas_window_min: 0.0,
            mas_window_max: 0.2,
            hide_near_zero: true,
        }),
    }
}

#[test]
fn roundtrip_yaml_builtin_gas() {
    let scenario = methane_scenario();
    validate_scenario(&scenario).unwrap();

    let path = std::env::temp_dir().join("hd_scenario_roundtrip_builtin.yaml");
    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_json_custom_gas() {
    let scenario = custom_scenario();
    validate_scenario(&scenario).unwrap();

    let path = std::env::temp_dir().join("hd_scenario_roundtrip_custom.json");
    save_json(&path, &scenario).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn defaults_fill_missing_blocks() {
    let yaml = r#"
version: 1
name: minimal
gas:
  type: Builtin
  key: CO2
salt: KCl
pressure_mpa: 3.0
sweep:
  initial_salinity: 3.5
  supercooling_min_k: 0.5
  supercooling_max_k: 4.0
"#;
    let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(scenario.model, ModelDef::default());
    assert_eq!(scenario.model.fit_method, "polynomial");
    assert_eq!(scenario.sweep.as_ref().unwrap().point_count, 50);
    assert!(scenario.grid.is_none());
    validate_scenario(&scenario).unwrap();

    let condition = scenario.operating_condition().unwrap().unwrap();
    assert_eq!(condition.point_count, 50);
    assert_eq!(condition.supercooling.ordered(), (0.5, 4.0));
}

#[test]
fn save_rejects_invalid_scenario() {
    let mut scenario = methane_scenario();
    scenario.pressure_mpa = -2.0;
    let path = std::env::temp_dir().join("hd_scenario_invalid.yaml");
    assert!(save_yaml(&path, &scenario).is_err());
}

#[test]
fn validation_catches_bad_fields() {
    let mut bad_gas = methane_scenario();
    bad_gas.gas = GasDef::Builtin {
        key: "H2".to_string(),
    };

    let mut bad_method = methane_scenario();
    bad_method.model.fit_method = "cubic".to_string();

    let mut bad_salinity = methane_scenario();
    if let Some(sweep) = bad_salinity.sweep.as_mut() {
        sweep.initial_salinity = 100.0;
    }

    let mut bad_version = methane_scenario();
    bad_version.version = LATEST_VERSION + 1;

    let mut bad_window = custom_scenario();
    if let Some(grid) = bad_window.grid.as_mut() {
        grid.mas_window_max = grid.mas_window_min;
    }

    let mut one_point = custom_scenario();
    if let GasDef::Custom { points, .. } = &mut one_point.gas {
        points.truncate(1);
    }

    for scenario in [bad_gas, bad_method, bad_salinity, bad_version, bad_window, one_point] {
        assert!(validate_scenario(&scenario).is_err(), "{}", scenario.name);
    }
}

#[test]
fn custom_gas_converts_to_engine_input() {
    let scenario = custom_scenario();
    let gas = scenario.gas().unwrap();
    assert!(gas.builtin().is_none());
    assert_eq!(gas.to_string(), "custom:lab-mix");

    let options = scenario.model_options().unwrap();
    assert!(options.structure_ii_correction);
    assert_eq!(options.fit_method, hd_fit::FitMethod::MonotoneSpline);

    let spec = scenario.grid_spec().unwrap();
    assert!(spec.hide_near_zero);
    assert_eq!(spec.mas_window_max, 0.2);
}
