//! Kiro careers entry point
//!
//! The real surface is the wasm library; the native binary runs a smoke pass
//! against the in-memory store.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Kiro careers (native) starting...");
    log::info!("Native mode has no browser storage - build for wasm32 to serve the page");

    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the library's page::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use chrono::Utc;
    use kiro_careers::form::{self, ApplicationForm};
    use kiro_careers::report::{self, StatusCheck};
    use kiro_careers::store::{ApplicationStore, MemoryBackend};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    let mut store = ApplicationStore::new(MemoryBackend::new());
    let mut rng = Pcg32::seed_from_u64(42);

    let form_data = ApplicationForm {
        full_name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        age: "25".to_string(),
        reason: "I want to build with Kiro.".to_string(),
        resume_file_name: None,
    };

    let record = form::submit(form_data, &mut store, &mut rng).expect("submission should save");
    log::info!(
        "Saved application for {} ({})",
        record.full_name,
        record.status.as_str()
    );

    let check = report::check_status(&store, "JANE@EXAMPLE.COM", Utc::now());
    assert!(
        matches!(check, StatusCheck::Found(_)),
        "lookup should find the saved record"
    );
    println!("✓ Application store smoke run passed!");
}
