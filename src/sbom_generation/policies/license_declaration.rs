use crate::sbom_generation::domain::spdx_document::NOASSERTION;
use crate::sbom_generation::domain::{LicenseFile, OtherLicense, Package};
use sha2::{Digest, Sha256};

/// Hex digits of the path digest kept in a `LicenseRef-` token
const LICENSE_REF_DIGITS: usize = 16;

/// Declared license of one package, plus any license texts it introduced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredLicense {
    pub expression: String,
    pub other_licenses: Vec<OtherLicense>,
}

/// LicenseDeclaration policy for the declared license field of a package node
///
/// Priority order:
/// 1. license names, joined with ` and `
/// 2. a `LicenseRef-` token per license file; every file is registered as
///    an other license and the last one becomes the declared value
/// 3. `NOASSERTION`
pub struct LicenseDeclaration;

impl LicenseDeclaration {
    pub fn declare(package: &Package) -> DeclaredLicense {
        if !package.licenses().is_empty() {
            let expression = package
                .licenses()
                .iter()
                .map(|l| l.name())
                .collect::<Vec<_>>()
                .join(" and ");
            return DeclaredLicense {
                expression,
                other_licenses: Vec::new(),
            };
        }

        let other_licenses: Vec<OtherLicense> = package
            .license_files()
            .iter()
            .map(|file| OtherLicense {
                license_id: Self::license_ref(file),
                extracted_text: file.content().to_string(),
            })
            .collect();

        let expression = other_licenses
            .last()
            .map(|l| l.license_id.clone())
            .unwrap_or_else(|| NOASSERTION.to_string());

        DeclaredLicense {
            expression,
            other_licenses,
        }
    }

    /// `LicenseRef-` token derived from the license file path only, so the
    /// same file yields the same token across runs and hosts
    pub fn license_ref(file: &LicenseFile) -> String {
        let digest = Sha256::digest(file.path().to_string_lossy().as_bytes());
        let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
        format!("LicenseRef-{}", &hex[..LICENSE_REF_DIGITS])
    }
}
