//! FILENAME: tests/common/mod.rs
//! Fixtures and a recording renderer for reshape-engine integration tests.

#![allow(dead_code)]

use engine::{row, CellValue, ColumnDescriptor, ColumnType, TabularDataset};
use reshape_engine::{ReshapedResult, SeriesConsumer};

/// Traffic report fixture: (country, device, sessions, bounce rate).
pub struct TrafficFixture;

impl TrafficFixture {
    pub fn dimensions() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::typed("country", "Country", ColumnType::Text),
            ColumnDescriptor::typed("device", "Device", ColumnType::Text),
        ]
    }

    pub fn metrics() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::typed("sessions", "Sessions", ColumnType::Number),
            ColumnDescriptor::typed("bounce", "Bounce Rate", ColumnType::Number),
        ]
    }

    pub fn data() -> Vec<(&'static str, &'static str, f64, f64)> {
        vec![
            ("US", "mobile", 1200.0, 0.42),
            ("US", "desktop", 800.0, 0.31),
            ("FR", "mobile", 350.0, 0.55),
            ("DE", "tablet", 90.0, 0.61),
        ]
    }

    pub fn dataset() -> TabularDataset {
        let rows = Self::data()
            .into_iter()
            .map(|(country, device, sessions, bounce)| {
                row(vec![
                    CellValue::from(country),
                    CellValue::from(device),
                    CellValue::from(sessions),
                    CellValue::from(bounce),
                ])
            })
            .collect();
        TabularDataset::new(Self::dimensions(), Self::metrics(), rows)
    }

    pub fn payload() -> &'static str {
        r#"{
            "dimensionDescriptors": [
                {"id": "country", "name": "Country", "columnType": "Text"},
                {"id": "device", "name": "Device", "columnType": "Text"}
            ],
            "metricDescriptors": [
                {"id": "sessions", "name": "Sessions", "columnType": "Number"},
                {"id": "bounce", "name": "Bounce Rate", "columnType": "Number"}
            ],
            "rows": [
                ["US", "mobile", 1200, 0.42],
                ["US", "desktop", 800, 0.31],
                ["FR", "mobile", 350, 0.55],
                ["DE", "tablet", 90, 0.61]
            ]
        }"#
    }
}

/// Renderer stand-in that keeps every result it was asked to draw.
#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<ReshapedResult>,
}

impl SeriesConsumer for RecordingRenderer {
    fn draw(&mut self, result: &ReshapedResult) {
        self.frames.push(result.clone());
    }
}
