use super::{base_report, json_pretty, EXIT_SUCCESS};
use deploybase_schema::Base;
use std::io::Read;

pub fn run(input: &str, json: bool) -> Result<u8, String> {
    let content = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        buf
    } else {
        std::fs::read_to_string(input).map_err(|e| format!("failed to read {input}: {e}"))?
    };

    let base = Base::from_json(&content).map_err(|e| e.to_string())?;
    if let Err(e) = base.validate() {
        tracing::warn!(error = %e, "decoded record does not describe a valid base");
    }

    if json {
        println!("{}", json_pretty(&base_report(&base))?);
    } else {
        println!("{base}");
    }
    Ok(EXIT_SUCCESS)
}
