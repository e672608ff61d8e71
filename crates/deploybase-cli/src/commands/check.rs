use super::{base_report, json_pretty, mark_fail, mark_ok, EXIT_SUCCESS};
use deploybase_schema::parse_manifest_file;
use std::path::Path;

pub fn run(manifest_path: &Path, json: bool) -> Result<u8, String> {
    let manifest = parse_manifest_file(manifest_path).map_err(|e| e.to_string())?;
    let bases = match manifest.resolve() {
        Ok(bases) => bases,
        Err(e) => {
            if !json {
                println!("{}", mark_fail(&manifest_path.display().to_string()));
            }
            return Err(e.to_string());
        }
    };
    tracing::debug!(
        manifest = %manifest_path.display(),
        targets = bases.len(),
        "manifest resolved"
    );

    if json {
        let reports: Vec<_> = bases.iter().map(base_report).collect();
        println!("{}", json_pretty(&reports)?);
    } else {
        for base in &bases {
            println!("{}", mark_ok(&base.to_string()));
        }
    }
    Ok(EXIT_SUCCESS)
}
