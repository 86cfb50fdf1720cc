//! Export service
//!
//! Ties the stitch model, optimizer, encoders and validator together:
//! optional optimization, machine checks, encoding, DST structure checks,
//! and chunked file output.

use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use stitchkit_core::{Point, Result, StitchModel, StitchSegment};
use stitchkit_formats::{
    dst, exp, svg, validate_dst, validate_dst_stitches, validate_for_machine,
    validate_stitch_count, validate_stitch_deltas, ExportFormat, GcodeGenerator,
};
use stitchkit_optimizer::{apply_pull_compensation, PathOptimizer};
use stitchkit_settings::Config;

/// Encoded design ready to be saved
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    /// Format the bytes are encoded in
    pub format: ExportFormat,
    /// Encoded file content
    pub bytes: Vec<u8>,
    /// Suggested file name
    pub file_name: String,
    /// MIME type of the content
    pub content_type: &'static str,
}

/// Encodes stitch models according to a configuration
#[derive(Debug, Clone, Default)]
pub struct ExportService {
    config: Config,
    generated_at: Option<DateTime<Utc>>,
}

impl ExportService {
    /// Create a service using `config`
    pub fn new(config: Config) -> Self {
        Self {
            config,
            generated_at: None,
        }
    }

    /// Stamp G-code output with a generation time
    pub fn with_timestamp(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build a model from vectorized polylines.
    ///
    /// Every stroke is split so that no stitch is longer than the configured
    /// maximum stitch length.
    pub fn model_from_polylines(&self, paths: &[Vec<Point>], scale: f64) -> StitchModel {
        let mut model = StitchModel::new();
        model.add_polylines(paths, scale, Some(self.config.export.max_stitch_length));
        model
    }

    /// Apply the configured optimizer and pull compensation.
    ///
    /// The model is borrowed unchanged when neither is enabled.
    pub fn prepare<'a>(&self, model: &'a StitchModel) -> Cow<'a, StitchModel> {
        let optimizer = &self.config.optimizer;
        if !optimizer.enabled && optimizer.pull_compensation == 0.0 {
            return Cow::Borrowed(model);
        }

        let mut steps = model.steps().to_vec();
        if optimizer.enabled {
            steps = PathOptimizer::new(optimizer.merge_threshold).optimize(&steps);
        }
        if optimizer.pull_compensation != 0.0 {
            steps = apply_pull_compensation(&steps, optimizer.pull_compensation);
        }
        Cow::Owned(StitchModel::from_steps(steps))
    }

    /// Encode `model` in `format`
    pub fn export(&self, model: &StitchModel, format: ExportFormat, name: &str) -> Result<ExportArtifact> {
        let prepared = self.prepare(model);
        let steps = prepared.steps();
        let machine = &self.config.machine;

        let bytes = match format {
            ExportFormat::Dst => {
                self.check_machine_design(steps)?;
                let bytes = dst::encode(steps, name, prepared.max_x(), prepared.max_y());
                validate_dst(&bytes)?;
                validate_dst_stitches(&bytes)?;
                bytes
            }
            ExportFormat::Exp => {
                self.check_machine_design(steps)?;
                exp::encode(steps)
            }
            ExportFormat::Svg => svg::encode(steps, prepared.max_x(), prepared.max_y()).into_bytes(),
            ExportFormat::Gcode => {
                let mut generator =
                    GcodeGenerator::new(machine.limits()).with_z_step(self.config.export.gcode_z_step);
                if let Some(at) = self.generated_at {
                    generator = generator.with_timestamp(at);
                }
                generator.generate(steps, name).into_bytes()
            }
        };

        tracing::info!(
            format = %format,
            steps = steps.len(),
            bytes = bytes.len(),
            "Exported design '{}'",
            name
        );

        Ok(ExportArtifact {
            format,
            bytes,
            file_name: format.file_name(name),
            content_type: format.content_type(),
        })
    }

    /// Checks for formats that drive an embroidery machine directly.
    ///
    /// Deltas must always fit a record byte. Dimensions and stitch count are
    /// only checked with bounds checking on. G-code scales itself to the
    /// machine limits and SVG is a preview, so neither goes through here.
    fn check_machine_design(&self, steps: &[StitchSegment]) -> Result<()> {
        let machine = &self.config.machine;
        if machine.bounds_checking {
            validate_for_machine(steps, &machine.limits())?;
            validate_stitch_count(steps, machine.max_stitches)?;
        }
        validate_stitch_deltas(steps)?;
        Ok(())
    }

    /// Encode using a format name such as `"dst"` or `"gcode"`
    pub fn export_named(&self, model: &StitchModel, format: &str, name: &str) -> Result<ExportArtifact> {
        let format: ExportFormat = format.parse()?;
        self.export(model, format, name)
    }

    /// Encode and write to `path` in configured chunk sizes
    pub fn export_to_file(
        &self,
        model: &StitchModel,
        format: ExportFormat,
        name: &str,
        path: &Path,
    ) -> Result<ExportArtifact> {
        let artifact = self.export(model, format, name)?;
        write_chunked(path, &artifact.bytes, self.config.export.chunk_size)?;
        Ok(artifact)
    }

    /// Encode and write into `dir` under the artifact's file name
    pub fn export_to_dir(
        &self,
        model: &StitchModel,
        format: ExportFormat,
        name: &str,
        dir: &Path,
    ) -> Result<PathBuf> {
        let artifact = self.export(model, format, name)?;
        let path = dir.join(&artifact.file_name);
        write_chunked(&path, &artifact.bytes, self.config.export.chunk_size)?;
        Ok(path)
    }
}

/// Write `bytes` to `path` in pieces of at most `chunk_size` bytes.
///
/// Returns the number of chunks written. A zero chunk size writes one byte
/// at a time.
pub fn write_chunked(path: &Path, bytes: &[u8], chunk_size: usize) -> Result<usize> {
    let mut file = File::create(path)?;
    let mut chunks = 0;
    for chunk in bytes.chunks(chunk_size.max(1)) {
        file.write_all(chunk)?;
        chunks += 1;
    }
    file.flush()?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), chunks, "Wrote file");
    Ok(chunks)
}

/// Read a DST file into a stitch model
pub fn import_dst(path: &Path) -> Result<StitchModel> {
    let bytes = std::fs::read(path)?;
    let steps = dst::decode(&bytes)?;
    tracing::debug!(path = %path.display(), steps = steps.len(), "Imported DST");
    Ok(StitchModel::from_steps(steps))
}
