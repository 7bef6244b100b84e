mod diff_engine;
mod sbom_generator;
mod spdx_synthesizer;

pub use diff_engine::DiffEngine;
pub use sbom_generator::SbomGenerator;
pub use spdx_synthesizer::SpdxSynthesizer;
