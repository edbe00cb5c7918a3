//! Browser entry points
//!
//! The page's own script keeps the DOM; these exports carry JSON strings
//! across the wasm boundary and talk to LocalStorage underneath.

use chrono::Utc;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;

use crate::form::{self, ApplicationForm};
use crate::report;
use crate::store::{ApplicationStore, LocalStorageBackend};

/// Set up logging before anything else runs
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Kiro careers page logic ready");
}

/// Handle a form submission; resolves to the saved record as JSON
///
/// Rejections carry the message the page alerts with.
#[wasm_bindgen]
pub fn submit_application(form_json: &str) -> Result<String, JsValue> {
    let form: ApplicationForm = serde_json::from_str(form_json)
        .map_err(|err| JsValue::from_str(&format!("Bad form payload: {err}")))?;

    let mut store = ApplicationStore::new(LocalStorageBackend);
    let mut rng = Pcg32::seed_from_u64(js_sys::Date::now() as u64);

    let record = form::submit(form, &mut store, &mut rng)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    serde_json::to_string(&record).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Look up an application by email; resolves to the check result as JSON
#[wasm_bindgen]
pub fn check_status(email: &str) -> Result<String, JsValue> {
    let store = ApplicationStore::new(LocalStorageBackend);
    let result = report::check_status(&store, email, Utc::now());
    serde_json::to_string(&result).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Advisory email check for the page's blur styling
#[wasm_bindgen]
pub fn email_field_valid(email: &str) -> bool {
    form::email_looks_valid(email)
}

/// Advisory age check for the page's input styling
#[wasm_bindgen]
pub fn age_field_valid(age: u32) -> bool {
    form::age_in_range(age)
}
