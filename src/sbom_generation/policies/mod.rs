mod copyright_licenses;
mod license_declaration;

pub use copyright_licenses::CopyrightLicenses;
pub use license_declaration::{DeclaredLicense, LicenseDeclaration};
