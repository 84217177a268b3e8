//! PDF rendering of invoices.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};
use thiserror::Error;

use stockkeep_core::DomainError;
use stockkeep_invoicing::{
    FONT_SIZE_PT, Invoice, InvoiceId, ItemDirectory, PAGE_HEIGHT_PT, PAGE_WIDTH_PT,
};

#[derive(Debug, Error)]
pub enum RenderError {
    /// A line referenced an unknown item; nothing was written.
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to write invoice at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build invoice document: {0}")]
    Pdf(String),
}

/// Writes one single-page PDF per invoice into `output_dir`.
#[derive(Debug, Clone)]
pub struct InvoiceRenderer {
    output_dir: PathBuf,
}

impl InvoiceRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, invoice_id: &InvoiceId) -> PathBuf {
        self.output_dir.join(invoice_id.file_name())
    }

    /// Lay out `invoice` against `directory` and write it.
    ///
    /// The layout is computed first, so an unknown item leaves no file and no
    /// output directory behind. Returns the path of the written document.
    pub fn render(
        &self,
        invoice: &Invoice,
        directory: &impl ItemDirectory,
    ) -> Result<PathBuf, RenderError> {
        let layout = invoice.layout(directory)?;

        fs::create_dir_all(&self.output_dir).map_err(|source| RenderError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        let title = format!("Invoice {}", invoice.id());
        let (doc, page, layer) = PdfDocument::new(
            title.as_str(),
            Mm::from(Pt(PAGE_WIDTH_PT)),
            Mm::from(Pt(PAGE_HEIGHT_PT)),
            "Layer 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(format!("{e:?}")))?;

        let canvas = doc.get_page(page).get_layer(layer);
        for line in &layout.lines {
            canvas.use_text(
                line.text.as_str(),
                FONT_SIZE_PT,
                Mm::from(Pt(line.x)),
                Mm::from(Pt(line.y)),
                &font,
            );
        }

        let path = self.path_for(invoice.id());
        let file = File::create(&path).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| RenderError::Pdf(format!("{e:?}")))?;

        tracing::info!(
            invoice_id = %invoice.id(),
            lines = invoice.sales().len(),
            total = %layout.total,
            path = %path.display(),
            "invoice rendered"
        );
        Ok(path)
    }
}
