use crate::base::{parse_base_with_architectures, Base};
use crate::manifest::{ManifestError, TargetsManifest};

impl TargetsManifest {
    /// Validate every target and return the canonical bases in file order.
    ///
    /// Targets that resolve to an identical base (same OS, channel and
    /// architecture list) are kept once.
    pub fn resolve(&self) -> Result<Vec<Base>, ManifestError> {
        if self.manifest_version != 1 {
            return Err(ManifestError::UnsupportedVersion(self.manifest_version));
        }
        if self.targets.is_empty() {
            return Err(ManifestError::NoTargets);
        }

        let mut bases: Vec<Base> = Vec::with_capacity(self.targets.len());
        for (index, target) in self.targets.iter().enumerate() {
            let base = parse_base_with_architectures(&target.base, &target.architectures)
                .map_err(|source| ManifestError::InvalidTarget { index, source })?;
            if !bases.contains(&base) {
                bases.push(base);
            }
        }
        Ok(bases)
    }
}
