use utoipa::OpenApi;

/// Writes the OpenAPI document of the pod API to the path given as the
/// first argument, or `openapi.json`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out = std::env::args().nth(1).unwrap_or_else(|| "openapi.json".to_string());
    let spec = podview_backend::api::openapi::ApiDoc::openapi();
    std::fs::write(&out, spec.to_pretty_json()?)?;
    println!("Wrote {}", out);
    Ok(())
}
