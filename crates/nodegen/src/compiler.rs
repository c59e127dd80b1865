use std::path::Path;
use std::process::Command;

use crate::error::NodegenError;

/// External service that turns a config source file into a structured value.
///
/// The contract is two-phase: given one entry source file and a target JSON
/// path, the service either fully writes a JSON rendering of the module's
/// default export at the target, or fails. It never leaves a partially
/// usable artifact behind. Keeping this behind a trait decouples the
/// resolver from any particular module-loading mechanism.
pub trait ConfigCompiler {
    fn compile(&self, entry: &Path, out: &Path) -> Result<(), NodegenError>;
}

/// Default compiler: bundles the TypeScript source with esbuild, then
/// evaluates the bundle with node and captures its default export as JSON.
pub struct EsbuildCompiler;

/// Evaluated with `node --input-type=module -e`, so `process.argv` carries
/// the bundle path and the JSON target path after the executable path.
const LOADER: &str = "\
const [entry, out] = process.argv.slice(1);\n\
const { writeFileSync } = await import('node:fs');\n\
const mod = await import('file://' + entry);\n\
writeFileSync(out, JSON.stringify(mod.default));\n";

impl ConfigCompiler for EsbuildCompiler {
    fn compile(&self, entry: &Path, out: &Path) -> Result<(), NodegenError> {
        let bundle = out.with_extension("mjs");

        let output = Command::new("esbuild")
            .arg(entry)
            .arg("--bundle")
            .arg("--platform=node")
            .arg("--format=esm")
            .arg("--target=node14")
            .arg(format!("--outfile={}", bundle.display()))
            .output()
            .map_err(|e| NodegenError::Transpile(format!("failed to run esbuild: {}", e)))?;

        if !output.status.success() {
            return Err(NodegenError::Transpile(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        // The dynamic import in the loader needs an absolute file:// URL.
        let bundle = bundle
            .canonicalize()
            .map_err(|e| NodegenError::Load(format!("transpiled bundle missing: {}", e)))?;

        let output = Command::new("node")
            .arg("--input-type=module")
            .arg("-e")
            .arg(LOADER)
            .arg(&bundle)
            .arg(out)
            .output()
            .map_err(|e| NodegenError::Load(format!("failed to run node: {}", e)))?;

        if !output.status.success() {
            return Err(NodegenError::Load(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        Ok(())
    }
}
