use super::EXIT_SUCCESS;
use deploybase_schema::Base;

pub fn run(input: &str, toml: bool) -> Result<u8, String> {
    let base = input.parse::<Base>().map_err(|e| e.to_string())?;
    let record = if toml {
        base.to_toml()
    } else {
        base.to_json_pretty()
    }
    .map_err(|e| e.to_string())?;
    println!("{}", record.trim_end());
    Ok(EXIT_SUCCESS)
}
