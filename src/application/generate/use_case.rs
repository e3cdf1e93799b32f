//! Generate use case
//!
//! 1. Build the layout (all validation happens here, before any I/O)
//! 2. Render descriptors and the deploy script
//! 3. Create the output directory and write every file
//! 4. Mark the deploy script executable
//!
//! Files are written one by one; a failure part way leaves the earlier files
//! in place.

use tracing::{debug, info};

use crate::domain::entities::OutputKind;
use crate::domain::ports::{FileSystem, SecretSource};
use crate::domain::services::{BuildSettings, TargetBuilder};
use crate::error::ComposeResult;
use crate::infrastructure::ComposeRenderer;

use super::options::GenerateOptions;
use super::result::{GenerateResult, GeneratedFile};

/// Generate use case, parameterized by its ports
pub struct GenerateUseCase<FS, S>
where
    FS: FileSystem,
    S: SecretSource,
{
    file_system: FS,
    secrets: S,
    settings: BuildSettings,
    renderer: ComposeRenderer,
}

impl<FS, S> GenerateUseCase<FS, S>
where
    FS: FileSystem,
    S: SecretSource,
{
    pub fn new(
        file_system: FS,
        secrets: S,
        settings: BuildSettings,
        renderer: ComposeRenderer,
    ) -> Self {
        Self {
            file_system,
            secrets,
            settings,
            renderer,
        }
    }

    pub fn execute(&self, options: &GenerateOptions) -> ComposeResult<GenerateResult> {
        let layout = TargetBuilder::new(&self.settings).build(
            &options.brokers,
            &options.zookeepers,
            &options.managers,
            &self.secrets,
        )?;
        let outputs = self.renderer.render(&layout)?;
        debug!(files = outputs.len(), "rendered cluster layout");
        let dir = &options.output_dir;

        if !options.dry_run && !self.file_system.exists(dir) {
            info!(dir = %dir.display(), "creating output directory");
            self.file_system.create_dir_all(dir)?;
        }

        let mut files = Vec::with_capacity(outputs.len());
        for output in &outputs {
            let path = dir.join(output.path());

            if !options.dry_run {
                self.file_system.write(&path, output.content())?;
                if output.is_executable() {
                    self.file_system.set_executable(&path)?;
                }
                info!(path = %path.display(), "wrote");
            }

            files.push(GeneratedFile {
                path,
                host: output.host().map(str::to_string),
                services: match output.kind() {
                    OutputKind::Descriptor { services, .. } => services.clone(),
                    OutputKind::Script => Vec::new(),
                },
                hash: output.hash(),
                executable: output.is_executable(),
            });
        }

        Ok(GenerateResult {
            directory: dir.clone(),
            dry_run: options.dry_run,
            files,
        })
    }
}
