#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use circle_pack::io::ext_repr::ExtCircleSpec;
    use circle_pack::util::assertions;
    use float_cmp::approx_eq;
    use panels::config::PanelConfig;
    use panels::io;
    use panels::io::output::PanelOutput;
    use panels::panel::{generate_panels, panel_seeds, write_panel};
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .is_test(true)
            .try_init();
    }

    fn scratch_folder(name: &str) -> PathBuf {
        let folder = std::env::temp_dir().join(format!("panels_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&folder);
        fs::create_dir_all(&folder).unwrap();
        folder
    }

    #[test]
    fn default_config_matches_dashboard_defaults() {
        let config = PanelConfig::default();
        assert_eq!((config.canvas.width, config.canvas.height), (1000, 1000));
        assert!(approx_eq!(f64, config.gap, 5.0));
        let specs = config
            .specs
            .iter()
            .map(|s| (s.color.as_str(), s.radius, s.count))
            .collect::<Vec<_>>();
        assert_eq!(specs, vec![("red", 20, 30), ("blue", 10, 20), ("green", 5, 10)]);
        assert_eq!(config.max_attempts_per_circle, 1000);
        assert_eq!(config.prng_seed, Some(0));
    }

    #[test]
    fn config_survives_json_round_trip() {
        let config = PanelConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PanelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn optional_config_fields_have_defaults() {
        let json = r##"{
            "canvas": {"width": 300, "height": 200},
            "gap": 2.0,
            "specs": [{"color": "#FF8800", "radius": 12, "count": 4, "label": "orange"}],
            "max_attempts_per_circle": 100,
            "prng_seed": null
        }"##;
        let config: PanelConfig = serde_json::from_str(json).unwrap();
        assert!(!config.monochrome);
        assert!(!config.svg_draw_options.monochrome);
        assert!(config.svg_draw_options.draw_label);
        assert_eq!(config.prng_seed, None);
        assert_eq!(config.specs[0].label.as_deref(), Some("orange"));
    }

    #[test_case(Some(7), 3, vec![Some(7), Some(8), Some(9)]; "seeded")]
    #[test_case(Some(u32::MAX), 2, vec![Some(u32::MAX), Some(0)]; "wrapping")]
    #[test_case(None, 2, vec![None, None]; "entropy")]
    #[test_case(Some(1), 0, vec![]; "no panels")]
    fn seeds_are_consecutive(prng_seed: Option<u32>, n_panels: usize, expected: Vec<Option<u32>>) {
        assert_eq!(panel_seeds(prng_seed, n_panels), expected);
    }

    #[test]
    fn invalid_config_is_rejected_before_generation() {
        let mut config = PanelConfig::default();
        config.specs.push(ExtCircleSpec {
            color: "black".into(),
            radius: -3,
            count: 1,
            label: None,
        });
        assert!(generate_panels(&config, 2).is_err());
    }

    #[test]
    fn panels_are_generated_and_written() {
        init_logger();
        let mut config = PanelConfig::default();
        config.prng_seed = Some(11);
        let (placement_config, panels) = generate_panels(&config, 2).unwrap();

        assert_eq!(panels.len(), 2);
        assert_eq!(panels[1].seed, Some(12));
        assert_ne!(panels[0].result.placed, panels[1].result.placed);
        for panel in &panels {
            assert!(panel.result.is_complete());
            assert!(assertions::no_overlaps(&panel.result.placed, config.gap));
        }

        let folder = scratch_folder("written");
        let panel = &panels[0];
        write_panel(panel, &config, &placement_config.canvas, &folder, "panel_0").unwrap();

        let csv = fs::read_to_string(folder.join("panel_0.csv")).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("id,type,color,x,y,radius,canvas_width,canvas_height,gap")
        );
        assert!(lines.next().unwrap().starts_with("1,Red,red,"));
        assert_eq!(csv.lines().count(), 1 + panel.result.total_placed());

        let png = fs::read(folder.join("panel_0.png")).unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));

        let svg = fs::read_to_string(folder.join("panel_0.svg")).unwrap();
        assert_eq!(svg.matches("<circle").count(), panel.result.total_placed());

        let output: PanelOutput =
            serde_json::from_reader(fs::File::open(folder.join("panel_0.json")).unwrap()).unwrap();
        assert_eq!(output.config, config);
        assert_eq!(output.report.seed, Some(11));
        assert_eq!(output.report.circles.len(), panel.result.total_placed());

        let _ = fs::remove_dir_all(&folder);
    }

    #[test]
    fn config_is_read_from_file() {
        let folder = scratch_folder("config");
        let path = folder.join("custom.json");
        let mut config = PanelConfig::default();
        config.gap = 1.5;
        config.monochrome = true;
        io::write_json(&config, &path).unwrap();

        assert_eq!(io::read_config(&path).unwrap(), config);
        assert!(io::read_config(&folder.join("missing.json")).is_err());

        let _ = fs::remove_dir_all(&folder);
    }
}
