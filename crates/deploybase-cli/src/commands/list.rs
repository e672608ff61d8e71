use super::{json_pretty, EXIT_SUCCESS};
use deploybase_schema::{Arch, OsType};

pub fn run_os(json: bool) -> Result<u8, String> {
    if json {
        println!("{}", json_pretty(&OsType::ALL)?);
    } else {
        for os in OsType::ALL {
            println!("{os}");
        }
    }
    Ok(EXIT_SUCCESS)
}

pub fn run_arches(json: bool) -> Result<u8, String> {
    if json {
        let entries: Vec<_> = Arch::ALL
            .iter()
            .map(|arch| {
                serde_json::json!({
                    "name": arch.as_str(),
                    "aliases": &arch.aliases()[1..],
                })
            })
            .collect();
        println!("{}", json_pretty(&entries)?);
    } else {
        println!("{:<10} ALIASES", "ARCH");
        for arch in Arch::ALL {
            println!("{:<10} {}", arch.as_str(), arch.aliases()[1..].join(", "));
        }
    }
    Ok(EXIT_SUCCESS)
}
