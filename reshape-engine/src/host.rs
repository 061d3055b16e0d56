//! FILENAME: reshape-engine/src/host.rs
//! Host adapter - connects a dashboard host to a renderer.
//!
//! The host delivers a dataset (or its JSON form) once per draw cycle. The
//! adapter reshapes it and hands the result to the injected
//! `SeriesConsumer`. Nothing is registered globally: whoever owns the
//! host subscription owns the adapter and calls `on_data`/`on_payload`.

use engine::TabularDataset;

use crate::definition::ReshapeOptions;
use crate::engine::reshape_with;
use crate::error::ReshapeError;
use crate::view::ReshapedResult;

/// The rendering collaborator that draws reshaped series.
pub trait SeriesConsumer {
    fn draw(&mut self, result: &ReshapedResult);
}

impl<F> SeriesConsumer for F
where
    F: FnMut(&ReshapedResult),
{
    fn draw(&mut self, result: &ReshapedResult) {
        self(result)
    }
}

/// Decodes a host payload.
///
/// Blank input and JSON `null` mean "no data yet" and decode to `None`.
pub fn decode_payload(json: &str) -> Result<Option<TabularDataset>, ReshapeError> {
    if json.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<TabularDataset>>(json)?)
}

pub struct HostAdapter<C: SeriesConsumer> {
    consumer: C,
    options: ReshapeOptions,
    draws: u64,
}

impl<C: SeriesConsumer> HostAdapter<C> {
    pub fn new(consumer: C) -> Self {
        Self::with_options(consumer, ReshapeOptions::default())
    }

    pub fn with_options(consumer: C, options: ReshapeOptions) -> Self {
        crate::log_info!(
            "HOST",
            "adapter ready: row policy {:?}, type validation {}",
            options.row_length_policy,
            options.validate_column_types
        );
        HostAdapter {
            consumer,
            options,
            draws: 0,
        }
    }

    pub fn options(&self) -> &ReshapeOptions {
        &self.options
    }

    /// Reshapes `dataset` and draws it. The consumer is not called when
    /// reshaping fails.
    pub fn on_data(&mut self, dataset: Option<&TabularDataset>) -> Result<(), ReshapeError> {
        let result = reshape_with(dataset, &self.options)?;
        self.consumer.draw(&result);
        self.draws += 1;
        crate::log_debug!(
            "HOST",
            "draw #{}: {} row(s)",
            self.draws,
            result.row_count()
        );
        Ok(())
    }

    pub fn on_payload(&mut self, json: &str) -> Result<(), ReshapeError> {
        let dataset = decode_payload(json).map_err(|e| {
            crate::log_warn!("HOST", "rejected host payload: {}", e);
            e
        })?;
        self.on_data(dataset.as_ref())
    }

    /// Number of successful draws so far.
    pub fn draw_count(&self) -> u64 {
        self.draws
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    pub fn into_consumer(self) -> C {
        self.consumer
    }
}
