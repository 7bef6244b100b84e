/// Package probe adapters, one per ecosystem
mod columns;
mod dpkg;
mod npm;
mod rpm;
#[cfg(test)]
mod test_support;

pub use dpkg::DpkgProbe;
pub use npm::NpmProbe;
pub use rpm::RpmProbe;
