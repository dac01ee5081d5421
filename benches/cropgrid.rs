use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cropgrid::{aggregate_features, LatLon, SoilResponse, WeatherResponse};

const WEATHER_BODY: &str = r#"{
    "daily": {
        "time": ["2025-06-01", "2025-06-02", "2025-06-03"],
        "temperature_2m_max": [30.0, 32.0, null],
        "temperature_2m_min": [18.0, 19.0, 20.0],
        "relative_humidity_2m_max": [40.0, 44.0, 42.0]
    }
}"#;

const SOIL_BODY: &str = r#"{
    "properties": {
        "layers": [
            {"name": "nitrogen", "depths": [{"values": {"mean": 140.0}}]},
            {"name": "clay", "depths": [{"values": {"mean": 33.0}}]},
            {"name": "sand", "depths": [{"values": {"mean": 41.0}}]},
            {"name": "cec", "depths": [{"values": {"mean": 139.0}}]}
        ]
    }
}"#;

fn bench_aggregation(c: &mut Criterion) {
    let weather: WeatherResponse = serde_json::from_str(WEATHER_BODY).unwrap();
    let soil: SoilResponse = serde_json::from_str(SOIL_BODY).unwrap();

    c.bench_function("aggregate_features", |b| {
        b.iter(|| {
            aggregate_features(
                black_box(LatLon(34.0, 3.0)),
                black_box(Some(weather.clone())),
                black_box(Some(soil.clone())),
            )
        })
    });
    c.bench_function("decode_soil_payload", |b| {
        b.iter(|| serde_json::from_str::<SoilResponse>(black_box(SOIL_BODY)).unwrap())
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
