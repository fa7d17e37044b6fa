//! Manifest-to-SVG integration tests.

use arcgauge_core::svg;
use arcgauge_yaml::{GaugeConfig, GaugeManifest, ParseError, Theme};
use proptest::prelude::*;

const DASHBOARD: &str = r##"
theme: light
gauges:
  - name: cpu
    value: 12
    label: CPU
  - name: memory
    value: 55
    label: Memory
  - name: disk
    value: 91
    label: Disk
"##;

#[test]
fn test_dashboard_renders_every_gauge_in_order() {
    let manifest = GaugeManifest::from_yaml(DASHBOARD).unwrap();
    let renderer = manifest.renderer().unwrap();
    let specs = manifest.specs().unwrap();

    let names: Vec<_> = specs.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["cpu", "memory", "disk"]);

    let strokes: Vec<_> = specs
        .iter()
        .map(|(_, spec)| renderer.render(spec).color.to_hex())
        .collect();
    assert_eq!(strokes, ["#ef4444", "#eab308", "#22c55e"]);
}

#[test]
fn test_dashboard_svg_contains_labels() {
    let manifest = GaugeManifest::from_yaml(DASHBOARD).unwrap();
    let renderer = manifest.renderer().unwrap();
    for (name, spec) in manifest.specs().unwrap() {
        let document = svg::to_svg(&renderer.render(&spec));
        assert!(document.contains("role=\"meter\""), "{name}");
        assert!(document.contains(&format!(">{}</text>", spec.label().unwrap())));
    }
}

#[test]
fn test_validate_reports_first_bad_gauge() {
    let yaml = "gauges:\n  - {name: ok, value: 1}\n  - {name: bad, value: 1, size: 10, stroke_width: 12}\n";
    let manifest = GaugeManifest::from_yaml(yaml).unwrap();
    let err = manifest.validate().unwrap_err();
    assert!(matches!(err, ParseError::Spec { ref gauge, .. } if gauge == "bad"));
    assert!(err.to_string().contains("stroke width (12) must be less than size (10)"));
}

proptest! {
    #[test]
    fn prop_manifest_roundtrip_preserves_specs(
        value in -1.0e4f64..1.0e4,
        min in -100.0f64..0.0,
        width in 0.5f64..500.0,
        precision in proptest::option::of(0usize..6),
        dark in any::<bool>(),
    ) {
        let mut gauge = GaugeConfig::new("g", value);
        gauge.min = min;
        gauge.max = min + width;
        let manifest = GaugeManifest {
            theme: if dark { Theme::Dark } else { Theme::Light },
            precision,
            gauges: vec![gauge],
            ..GaugeManifest::default()
        };

        let reparsed = GaugeManifest::from_yaml(&manifest.to_yaml().unwrap()).unwrap();
        let renderer = reparsed.renderer().unwrap();
        let (_, spec) = reparsed.specs().unwrap().remove(0);
        let expected = manifest.renderer().unwrap().render(&manifest.specs().unwrap()[0].1);
        prop_assert_eq!(renderer.render(&spec), expected);
    }
}

#[test]
fn test_demo_dashboard_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/dashboard.yaml");
    let manifest = GaugeManifest::from_yaml(&std::fs::read_to_string(path).unwrap()).unwrap();
    manifest.validate().unwrap();

    let renderer = manifest.renderer().unwrap();
    let bands: Vec<_> = manifest
        .specs()
        .unwrap()
        .iter()
        .map(|(_, spec)| renderer.render(spec).band)
        .collect();
    assert_eq!(
        bands,
        [
            arcgauge_core::ColorBand::Low,
            arcgauge_core::ColorBand::Medium,
            arcgauge_core::ColorBand::High,
            arcgauge_core::ColorBand::High,
        ]
    );
}
