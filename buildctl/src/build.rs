use std::io::{self, Stdout, Write};

use anyhow::Context;
use tracing::info_span;

/// Performs a build with a resolved configuration.
pub trait Builder {
  /// Build into `build_dir`, cleaning it first if `clean` is true.
  ///
  /// # Errors
  ///
  /// Returns an error when the build fails.
  fn build(&mut self, clean: bool, build_dir: &str) -> Result<(), anyhow::Error>;
}

impl<B: Builder + ?Sized> Builder for &mut B {
  #[inline]
  fn build(&mut self, clean: bool, build_dir: &str) -> Result<(), anyhow::Error> {
    (**self).build(clean, build_dir)
  }
}

/// [`Builder`] that reports the configuration it was invoked with to a writer.
#[derive(Debug)]
pub struct ReportingBuilder<W> {
  writer: W,
}

impl ReportingBuilder<Stdout> {
  /// Create a [`ReportingBuilder`] that reports to stdout.
  #[inline]
  pub fn with_stdout() -> Self { Self::new(io::stdout()) }
}

impl<W: Write> ReportingBuilder<W> {
  /// Create a [`ReportingBuilder`] that reports to `writer`.
  #[inline]
  pub fn new(writer: W) -> Self { Self { writer } }

  /// Consume this builder, returning its writer.
  #[inline]
  pub fn into_writer(self) -> W { self.writer }
}

impl<W: Write> Builder for ReportingBuilder<W> {
  fn build(&mut self, clean: bool, build_dir: &str) -> Result<(), anyhow::Error> {
    let _span = info_span!("build", clean, build_dir).entered();
    writeln!(self.writer, "clean: {}", clean).context("failed to write build report")?;
    writeln!(self.writer, "build_dir: {}", build_dir).context("failed to write build report")?;
    self.writer.flush().context("failed to flush build report")?;
    Ok(())
  }
}
