// WebAssembly bindings for the converter widget
use crate::convert::{self, ConversionRequest, Converter};
use crate::params::UrlParams;
use crate::time::{self, TimeUnit};
use std::sync::Once;
use wasm_bindgen::prelude::*;

static INIT: Once = Once::new();

#[wasm_bindgen]
pub struct UnixTimeWasm {
    converter: Converter,
}

impl Default for UnixTimeWasm {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_unit(code: &str) -> Result<TimeUnit, JsValue> {
    code.parse::<TimeUnit>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
impl UnixTimeWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        INIT.call_once(|| {
            console_error_panic_hook::set_once();
            tracing_wasm::set_as_global_default();
        });
        Self {
            converter: Converter::new(),
        }
    }

    /// Detected unit code ("s", "ms", "us" or "ns") for a raw number
    #[wasm_bindgen]
    pub fn detect_unit(&self, magnitude: f64) -> String {
        time::detect_unit(magnitude).code().to_string()
    }

    #[wasm_bindgen]
    pub fn normalize_to_millis(&self, value: f64, unit: &str) -> Result<f64, JsValue> {
        Ok(time::normalize_to_millis(value, parse_unit(unit)?))
    }

    #[wasm_bindgen]
    pub fn unit_label(&self, unit: &str) -> Result<String, JsValue> {
        Ok(parse_unit(unit)?.label().to_string())
    }

    /// Convert typed input; returns the conversion as JSON, or "null" when
    /// there is nothing to show yet
    #[wasm_bindgen]
    pub fn convert(
        &self,
        input: &str,
        unit: Option<String>,
        tz: Option<String>,
    ) -> Result<String, JsValue> {
        let unit = unit.as_deref().map(parse_unit).transpose()?;
        let timezone = match tz.as_deref() {
            Some(name) => {
                time::resolve_timezone(name).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => time::local_timezone(),
        };

        let request = ConversionRequest::new(input)
            .with_unit(unit)
            .with_timezone(timezone);
        let result = self.converter.convert(&request, &time::clock::now());

        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize conversion: {}", e)))
    }

    /// Date picker value to `{"seconds": .., "millis": ..}` JSON, read in
    /// the browser's zone unless `tz` is given
    #[wasm_bindgen]
    pub fn date_to_timestamp(&self, input: &str, tz: Option<String>) -> Result<String, JsValue> {
        let timezone = match tz.as_deref() {
            Some(name) => {
                time::resolve_timezone(name).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => time::local_timezone(),
        };
        let result = convert::date_to_timestamp(input, timezone)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize timestamp: {}", e)))
    }

    /// Read `time`, `unit` and `tz` from `window.location.search`
    #[wasm_bindgen]
    pub fn parse_url_params(&self, query: &str) -> Result<String, JsValue> {
        serde_json::to_string(&UrlParams::parse(query))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize params: {}", e)))
    }

    /// Timezones for the selector, as a JSON array
    #[wasm_bindgen]
    pub fn timezones(&self) -> Result<String, JsValue> {
        serde_json::to_string(time::TIMEZONES)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize timezones: {}", e)))
    }

    /// Initial value for the zone selector
    #[wasm_bindgen]
    pub fn local_timezone(&self) -> String {
        time::local_timezone().name().to_string()
    }

    #[wasm_bindgen]
    pub fn current_timestamp(&self) -> f64 {
        time::current_timestamp() as f64
    }
}
