use super::{json_pretty, EXIT_SUCCESS};
use deploybase_schema::{parse_base_with_architectures, Base, TargetSection, TargetsManifest};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

fn write_atomic(dest: &Path, content: &str) -> Result<(), String> {
    let dir = dest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| format!("write temp file: {e}"))?;
    use std::io::Write;
    tmp.write_all(content.as_bytes())
        .map_err(|e| format!("write temp file: {e}"))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| format!("fsync temp file: {e}"))?;
    tmp.persist(dest)
        .map_err(|e| format!("persist manifest: {}", e.error))?;
    Ok(())
}

fn starter_manifest(base: &Base) -> TargetsManifest {
    TargetsManifest {
        manifest_version: 1,
        targets: vec![TargetSection {
            base: base.display_name(),
            architectures: base
                .architectures
                .iter()
                .map(ToString::to_string)
                .collect(),
        }],
    }
}

pub fn run(
    dest: &Path,
    base: &str,
    arches: &[String],
    force: bool,
    json: bool,
) -> Result<u8, String> {
    if dest.exists() && !force {
        return Err(format!(
            "refusing to overwrite existing {} (pass --force)",
            dest.display()
        ));
    }

    let base = parse_base_with_architectures(base, arches).map_err(|e| e.to_string())?;
    let manifest = starter_manifest(&base);
    let toml =
        toml::to_string_pretty(&manifest).map_err(|e| format!("TOML serialization failed: {e}"))?;
    write_atomic(dest, &toml)?;

    if json {
        let payload = serde_json::json!({
            "status": "written",
            "path": dest,
            "base": base.to_string(),
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        println!("wrote {} for '{base}'", dest.display());
    }
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deploybase_schema::parse_manifest_str;

    #[test]
    fn starter_manifest_resolves_to_same_base() {
        let base =
            parse_base_with_architectures("Ubuntu/22.04/Stable", &["x86_64", "aarch64"]).unwrap();
        let text = toml::to_string_pretty(&starter_manifest(&base)).unwrap();
        let bases = parse_manifest_str(&text).unwrap().resolve().unwrap();
        assert_eq!(bases, vec![base]);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("deploybase.toml");
        std::fs::write(&dest, "manifest_version = 1\n").unwrap();
        let err = run(&dest, "ubuntu/22.04/stable", &[], false, false).unwrap_err();
        assert!(err.contains("--force"));
    }
}
