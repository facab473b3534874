use playground_runtime::Normalizer;
use std::error::Error;
use std::fs;
use std::path::Path;

pub fn execute(file_path: &str, normalizer: Normalizer) -> Result<bool, Box<dyn Error>> {
    let path = Path::new(file_path);

    // Check if file exists
    if !path.exists() {
        return Err(format!("Script not found \"{}\".", path.display()).into());
    }

    let code = fs::read_to_string(path)?;
    tracing::info!(file = %path.display(), "running script");

    super::execute_once(&code, normalizer)
}
