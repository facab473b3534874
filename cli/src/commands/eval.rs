use playground_runtime::Normalizer;
use std::error::Error;

pub fn execute(code: &str, normalizer: Normalizer) -> Result<bool, Box<dyn Error>> {
    super::execute_once(code, normalizer)
}
