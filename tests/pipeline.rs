//! End-to-end tests: token file in, IR and CSS out.

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use dtok::{
    generate, to_css, validate, DtokError, Family, Mode, ModeCategory, Options, ProjectFile,
    ScaleTokens, StepRef, StepTokens, TokenConfig, TokenFamily,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn theme() -> ProjectFile {
    ProjectFile::load(&fixture("theme.yaml")).unwrap()
}

fn spacing_modes() -> Family<ScaleTokens> {
    Family::new(vec![
        Mode::new("default", ScaleTokens::new("px", 8.0, 4.0, 12)).as_default(),
        Mode::new("small", ScaleTokens::new("px", 4.0, 2.0, 12)),
    ])
}

#[test]
fn spacing_only_end_to_end() {
    let project = ProjectFile::parse_json(
        r#"{"spacing": {"modes": [{"name": "default", "isDefault": true,
            "tokens": {"unit": "px", "base": 8, "min": 4, "range": 2}}]}}"#,
    )
    .unwrap();
    let ir = generate(&project.tokens, &project.options).unwrap();

    let values: Vec<(&str, &str)> = ir
        .tokens
        .values()
        .map(|t| (t.name.as_str(), t.value.as_str()))
        .collect();
    assert_eq!(
        values,
        vec![("sp-min", "4px"), ("sp-1", "8px"), ("sp-2", "16px")]
    );
    assert_eq!(
        to_css(&ir, &project.options.selectors),
        ":root {\n  --sp-min: 4px;\n  --sp-1: 8px;\n  --sp-2: 16px;\n}"
    );
}

#[test]
fn full_theme_css() {
    let project = theme();
    let ir = generate(&project.tokens, &project.options).unwrap();
    let css = to_css(&ir, &project.options.selectors);

    insta::assert_snapshot!(css, @r#"
:root {
  --clr-bg: oklch(0.98 0 0);
  --clr-bg-a-lo: oklch(0.98 0 0 / 0.25);
  --clr-bg-a-hi: oklch(0.98 0 0 / 0.75);
  --clr-fg: oklch(0.26 0 0);
  --clr-fg-a-lo: oklch(0.26 0 0 / 0.25);
  --clr-fg-a-hi: oklch(0.26 0 0 / 0.75);
  --sp-min: 4px;
  --sp-1: 8px;
  --sp-2: 16px;
  --sp-3: 24px;
  --gap-s: 8px;
  --gap-m: 16px;
  --gap-xs: 4px;
  --fs-min: 0.75rem;
  --fs-1: 1rem;
  --fs-2: 1.25rem;
  --fs-3: 1.5rem;
  --bdr-sm: 2px;
  --bdr-md: 4px;
  --bdw: 1px;
  --t-min: 50ms;
  --t-1: 100ms;
  --t-2: 200ms;
  --t-animation-min: 100ms;
  --t-animation-1: 250ms;
  --t-animation-2: 500ms;
}

[data-color-mode="dark"] {
  --clr-bg: oklch(0.2 0 0);
  --clr-bg-a-lo: oklch(0.2 0 0 / 0.25);
  --clr-bg-a-hi: oklch(0.2 0 0 / 0.75);
}

[data-size-mode="small"] {
  --sp-min: 2px;
  --sp-1: 4px;
  --sp-2: 8px;
  --sp-3: 12px;
  --gap-s: 4px;
}
"#);
}

#[test]
fn full_theme_modes() {
    let project = theme();
    let ir = generate(&project.tokens, &project.options).unwrap();

    assert_eq!(ir.modes.color.default.as_deref(), Some("light"));
    assert_eq!(ir.modes.color.overrides, vec!["dark"]);
    assert_eq!(ir.modes.size.default.as_deref(), Some("default"));
    assert_eq!(ir.modes.size.overrides, vec!["small"]);
    assert_eq!(ir.modes.time.default.as_deref(), Some("standard"));
    assert_eq!(ir.modes.time.overrides, vec!["animation"]);

    assert_eq!(ir.tokens["bdr-md"].reference.as_deref(), Some("sp-1"));
    assert_eq!(ir.tokens["gap-xs"].reference.as_deref(), Some("sp-min"));
}

#[test]
fn gap_resolves_spacing_by_mode_name() {
    let config = TokenConfig {
        spacing: Some(spacing_modes()),
        gap: Some(Family::new(vec![
            Mode::new("default", StepTokens::new([("s", StepRef::index(1))])),
            Mode::new("small", StepTokens::new([("s", StepRef::index(1))])),
        ])),
        ..Default::default()
    };
    let ir = generate(&config, &Options::default()).unwrap();

    assert_eq!(ir.tokens["gap-s"].value, "8px");
    assert_eq!(ir.override_tokens["small"]["gap-s"].value, "4px");
}

#[test]
fn explicit_spacing_mode_beats_name_match() {
    let config = TokenConfig {
        spacing: Some(spacing_modes()),
        gap: Some(Family::new(vec![Mode::new(
            "small",
            StepTokens::new([("s", StepRef::index(3))]).with_spacing_mode("default"),
        )])),
        ..Default::default()
    };
    let ir = generate(&config, &Options::default()).unwrap();
    assert_eq!(ir.tokens["gap-s"].value, "24px");
}

#[test]
fn override_modes_stay_in_their_category() {
    let project = theme();
    let ir = generate(&project.tokens, &project.options).unwrap();
    let css = to_css(&ir, &project.options.selectors);

    assert!(!css.contains("[data-size-mode=\"dark\"]"));
    assert!(!css.contains("[data-time-mode=\"dark\"]"));
    assert!(!css.contains("[data-color-mode=\"small\"]"));
    assert_eq!(ir.categories_of("dark"), vec![ModeCategory::Color]);
    assert_eq!(ir.categories_of("small"), vec![ModeCategory::Size]);

    for token in ir.override_tokens["dark"].values() {
        assert_eq!(token.family, TokenFamily::Color);
    }
}

#[test]
fn unknown_override_mode_is_dropped() {
    let project = theme();
    let mut ir = generate(&project.tokens, &project.options).unwrap();
    let stray = ir.tokens["sp-1"].clone();
    ir.override_tokens
        .entry("sepia".to_string())
        .or_default()
        .insert(stray.name.clone(), stray);

    let css = to_css(&ir, &project.options.selectors);
    assert!(!css.contains("sepia"));
}

#[test]
fn generation_is_pure() {
    let first = theme();
    let second = theme();
    let before = first.clone();

    let a = generate(&first.tokens, &first.options).unwrap();
    let b = generate(&second.tokens, &second.options).unwrap();

    assert_eq!(a, b);
    assert_eq!(first, before);
    assert_eq!(
        to_css(&a, &first.options.selectors),
        to_css(&a, &first.options.selectors)
    );
}

#[test]
fn materialized_mode_fills_forward() {
    let project = theme();
    let ir = generate(&project.tokens, &project.options).unwrap();
    let dark = ir.materialize("dark");

    assert_eq!(dark.len(), ir.tokens.len());
    assert_eq!(dark["clr-bg"].value, "oklch(0.2 0 0)");
    assert_eq!(dark["clr-fg"].value, "oklch(0.26 0 0)");
}

#[test]
fn bad_ranges_fail_before_generation() {
    for range in ["0", "-1", "2.5", "4000000000"] {
        let yaml = format!(
            "spacing:\n  modes:\n    - name: default\n      tokens: {{ unit: px, base: 8, min: 4, range: {range} }}\n"
        );
        let project = ProjectFile::parse_yaml(&yaml).unwrap();

        let err = generate(&project.tokens, &project.options).unwrap_err();
        assert_eq!(err.path(), Some("spacing.modes[0].tokens.range"), "range {range}");
    }
}

#[test]
fn alpha_above_one_fails_validation() {
    let yaml = "color:\n  alpha: { max: 1.5 }\n  modes:\n    - name: light\n      tokens:\n        bg: { l: 1, c: 0, h: 0 }\n";
    let project = ProjectFile::parse_yaml(yaml).unwrap();

    let err = validate(&project.tokens).unwrap_err();
    assert!(matches!(err, DtokError::Validation { .. }));
    assert_eq!(err.path(), Some("color.alpha.max"));
}

#[test]
fn gap_without_spacing_is_rejected() {
    let config = TokenConfig {
        gap: Some(Family::new(vec![Mode::new(
            "default",
            StepTokens::new([("s", StepRef::min())]),
        )])),
        ..Default::default()
    };
    let err = validate(&config).unwrap_err();
    assert_eq!(err.path(), Some("gap"));
}

#[test]
fn ir_serializes_to_json() {
    let project = theme();
    let ir = generate(&project.tokens, &project.options).unwrap();
    let json = serde_json::to_value(&ir).unwrap();
    assert_eq!(json["modes"]["size"]["overrides"][0], "small");

    insta::assert_json_snapshot!(ir.tokens["clr-bg-a-lo"], @r#"
{
  "family": "color",
  "name": "clr-bg-a-lo",
  "value": "oklch(0.98 0 0 / 0.25)",
  "rawValue": 0.25,
  "metadata": {
    "kind": "color",
    "base": "bg",
    "isAlphaVariant": true,
    "level": "lo"
  }
}
"#);
}
