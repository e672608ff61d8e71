use super::{base_report, json_pretty, EXIT_SUCCESS};
use deploybase_schema::parse_base_with_architectures;

pub fn run(input: &str, arches: &[String], json: bool) -> Result<u8, String> {
    let base = parse_base_with_architectures(input, arches).map_err(|e| e.to_string())?;
    if json {
        println!("{}", json_pretty(&base_report(&base))?);
    } else {
        println!("{base}");
    }
    Ok(EXIT_SUCCESS)
}
