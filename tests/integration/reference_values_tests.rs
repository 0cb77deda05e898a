//! EPA reference values through the three public operations.

use epa_aqi::Category::{
    self, Good, Hazardous, Moderate, Unhealthy, UnhealthyForSensitiveGroups as Usg, VeryUnhealthy,
};
use epa_aqi::{Pollutant, calculate_overall_aqi, calculate_pm10_aqi, calculate_pm25_aqi};

struct Case {
    name: &'static str,
    concentration: f64,
    aqi: i32,
    category: Category,
    color_name: &'static str,
}

const fn case(
    name: &'static str,
    concentration: f64,
    aqi: i32,
    category: Category,
    color_name: &'static str,
) -> Case {
    Case {
        name,
        concentration,
        aqi,
        category,
        color_name,
    }
}

const PM25_CASES: &[Case] = &[
    case("good low", 5.0, 21, Good, "Green"),
    case("good high", 12.0, 50, Good, "Green"),
    case("moderate low", 12.1, 51, Moderate, "Yellow"),
    case("moderate mid", 23.75, 75, Moderate, "Yellow"),
    case("moderate high", 35.4, 100, Moderate, "Yellow"),
    case("usg low", 35.5, 101, Usg, "Orange"),
    case("usg high", 55.4, 150, Usg, "Orange"),
    case("unhealthy low", 55.5, 151, Unhealthy, "Red"),
    case("unhealthy mid", 100.0, 174, Unhealthy, "Red"),
    case("unhealthy high", 150.4, 200, Unhealthy, "Red"),
    case("very unhealthy low", 150.5, 201, VeryUnhealthy, "Purple"),
    case("very unhealthy high", 250.4, 300, VeryUnhealthy, "Purple"),
    case("hazardous low", 250.5, 301, Hazardous, "Maroon"),
    case("hazardous high", 500.4, 500, Hazardous, "Maroon"),
    case("beyond scale", 600.0, 566, Hazardous, "Maroon"),
];

const PM10_CASES: &[Case] = &[
    case("good low", 25.0, 23, Good, "Green"),
    case("good high", 54.0, 50, Good, "Green"),
    case("moderate low", 55.0, 51, Moderate, "Yellow"),
    case("moderate mid", 100.0, 73, Moderate, "Yellow"),
    case("moderate high", 154.0, 100, Moderate, "Yellow"),
    case("usg low", 155.0, 101, Usg, "Orange"),
    case("usg high", 254.0, 150, Usg, "Orange"),
    case("unhealthy low", 255.0, 151, Unhealthy, "Red"),
    case("unhealthy high", 354.0, 200, Unhealthy, "Red"),
    case("very unhealthy low", 355.0, 201, VeryUnhealthy, "Purple"),
    case("hazardous", 425.0, 301, Hazardous, "Maroon"),
    case("hazardous high", 604.0, 500, Hazardous, "Maroon"),
];

fn check(cases: &[Case], calc: fn(f64) -> epa_aqi::AqiResult, label: &str) {
    for c in cases {
        let r = calc(c.concentration);
        assert_eq!(r.aqi, c.aqi, "{label} {}: aqi for {}", c.name, c.concentration);
        assert_eq!(r.category, c.category, "{label} {}: category", c.name);
        assert_eq!(r.category.color_name(), c.color_name, "{label} {}: colour", c.name);
        assert_eq!(r.color, c.category.color(), "{label} {}: rgb", c.name);
        assert_eq!(r.is_sensitive_group_alert(), c.aqi > 100, "{label} {}: advisory", c.name);
    }
}

#[test]
fn pm25_reference_values() {
    check(PM25_CASES, calculate_pm25_aqi, "PM2.5");
}

#[test]
fn pm10_reference_values() {
    check(PM10_CASES, calculate_pm10_aqi, "PM10");
}

#[test]
fn overall_reference_values() {
    let cases = [
        ("both good", 10.0, 40.0, 42, Good, Pollutant::Pm25),
        ("pm2.5 higher", 35.5, 100.0, 101, Usg, Pollutant::Pm25),
        ("pm10 higher", 20.0, 200.0, 123, Usg, Pollutant::Pm10),
        ("both unhealthy", 100.0, 300.0, 174, Unhealthy, Pollutant::Pm25),
    ];
    for (name, pm25, pm10, aqi, category, pollutant) in cases {
        let r = calculate_overall_aqi(pm25, pm10);
        assert_eq!(r.aqi, aqi, "{name}");
        assert_eq!(r.category, category, "{name}");
        assert_eq!(r.pollutant, pollutant, "{name}");
    }
}

#[test]
fn sensitive_group_wording_is_shared() {
    let pm25 = calculate_pm25_aqi(80.0);
    let pm10 = calculate_pm10_aqi(300.0);
    assert!(!pm25.sensitive_group.is_empty());
    assert_eq!(pm25.sensitive_group, pm10.sensitive_group);
    assert_eq!(pm25.sensitive_group, epa_aqi::aqi::SENSITIVE_GROUPS);
}

#[test]
fn out_of_range_inputs_still_produce_results() {
    assert_eq!(calculate_pm25_aqi(-5.0).aqi, 0);
    assert_eq!(calculate_pm10_aqi(-5.0).category, Good);
    assert_eq!(calculate_pm10_aqi(10_000.0).category, Hazardous);
    assert!(calculate_pm10_aqi(10_000.0).aqi > 500);
}
