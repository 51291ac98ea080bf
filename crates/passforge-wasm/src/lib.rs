// WASM bindings for passforge.
//
// Exposes the one-call generator plus the date helpers to JavaScript.
// Option names are passed as plain strings and unknown names are ignored,
// matching the library. The optional config object uses the same camelCase
// field names as `GeneratorConfig` and is decoded with serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   generate(["anna", "1990-02-14"], ["capitalize", "leet"]);
//   generate(["a", "b", "c"], [], { cap: 6, maxCandidates: null });
//   prepare(["rex"], ["upper"]);  // => { tokens: ["rex", "REX"], candidateCount: "2" }
//   candidateCount(3, 4);         // => 9
//   isDate("2024-03-05");         // => true
//   expandDate("2024-03-05");     // => ["March", "mars", "03", ...]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use passforge_engine::date;
use passforge_engine::{Engine, GenerateError, GeneratorConfig, candidate_count};

/// Serializable summary of a prepared run.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRunSummary {
    tokens: Vec<String>,
    candidate_count: Option<String>,
}

fn generate_error_to_js(e: GenerateError) -> JsError {
    JsError::new(&e.to_string())
}

fn decode_config(config: JsValue) -> Result<GeneratorConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(GeneratorConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))
}

fn build_engine(options: Vec<String>, config: JsValue) -> Result<Engine, JsError> {
    Ok(Engine::new()
        .with_option_names(options)
        .with_config(decode_config(config)?))
}

/// Generate the candidate list for `words` under `options`.
///
/// Fails if the run exceeds the configured candidate limit.
#[wasm_bindgen]
pub fn generate(
    words: Vec<String>,
    options: Vec<String>,
    config: JsValue,
) -> Result<Vec<String>, JsError> {
    build_engine(options, config)?
        .generate(&words)
        .map_err(generate_error_to_js)
}

/// Run the mutation pipeline only and report the token set and the exact
/// candidate count (as a decimal string, since it may exceed 2^53).
#[wasm_bindgen(js_name = prepare)]
pub fn prepare(
    words: Vec<String>,
    options: Vec<String>,
    config: JsValue,
) -> Result<JsValue, JsError> {
    let run = build_engine(options, config)?
        .prepare(&words)
        .map_err(generate_error_to_js)?;
    let summary = JsRunSummary {
        candidate_count: run.count().map(|n| n.to_string()),
        tokens: run.tokens().to_vec(),
    };
    serde_wasm_bindgen::to_value(&summary).map_err(|e| JsError::new(&e.to_string()))
}

/// Exact candidate count for `n` tokens under growth cap `cap`.
///
/// Returns `undefined` on overflow or when the value exceeds 2^53.
#[wasm_bindgen(js_name = candidateCount)]
pub fn candidate_count_js(n: usize, cap: usize) -> Option<f64> {
    const MAX_SAFE: u128 = (1 << 53) - 1;
    candidate_count(n, cap)
        .filter(|&c| c <= MAX_SAFE)
        .map(|c| c as f64)
}

/// Whether `token` is a strict `YYYY-MM-DD` date.
#[wasm_bindgen(js_name = isDate)]
pub fn is_date(token: &str) -> bool {
    date::is_date(token)
}

/// The 8 tokens derived from a date, or `undefined` for non-dates.
#[wasm_bindgen(js_name = expandDate)]
pub fn expand_date(token: &str) -> Result<JsValue, JsError> {
    match date::expand_date(token) {
        Some(tokens) => {
            serde_wasm_bindgen::to_value(&tokens).map_err(|e| JsError::new(&e.to_string()))
        }
        None => Ok(JsValue::UNDEFINED),
    }
}
