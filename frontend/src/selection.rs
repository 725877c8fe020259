//! File selection rules for the upload surface.
//!
//! Kept free of DOM calls so the rules can be unit-tested natively:
//! the component feeds [`web_sys::File`] values through the
//! [`PickedFile`] trait.

use web_sys::File;

use crate::PDF_MIME_TYPE;

/// A file handed over by the picker or a drop event.
pub trait PickedFile {
    fn file_name(&self) -> String;
    /// Size in bytes.
    fn size_bytes(&self) -> f64;
    fn mime_type(&self) -> String;
}

impl PickedFile for File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn size_bytes(&self) -> f64 {
        self.size()
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Whether a MIME type is accepted for upload.
pub fn is_pdf(mime: &str) -> bool {
    mime == PDF_MIME_TYPE
}

/// Human-readable size, e.g. `"1.25 MB"`.
pub fn format_megabytes(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1024.0 / 1024.0)
}

/// Files waiting to be submitted.
///
/// `generation` changes whenever the list changes, so rendered rows can
/// be keyed on it: a re-picked file with the same name and position
/// still gets a fresh row.
#[derive(Clone, Debug, PartialEq)]
pub struct FileSelection<F> {
    files: Vec<F>,
    generation: u64,
}

impl<F> Default for FileSelection<F> {
    fn default() -> Self {
        Self { files: Vec::new(), generation: 0 }
    }
}

impl<F: PickedFile> FileSelection<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer newly picked or dropped files.
    ///
    /// Non-PDF files are discarded. If any PDF remains it replaces the
    /// whole selection; otherwise the selection is left untouched.
    /// Returns the number of files accepted.
    pub fn offer<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = F>,
    {
        let accepted: Vec<F> = files
            .into_iter()
            .filter(|f| is_pdf(&f.mime_type()))
            .collect();

        let count = accepted.len();
        if count > 0 {
            self.files = accepted;
            self.generation += 1;
        }
        count
    }

    /// Remove the file at `index`. Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) -> Option<F> {
        if index < self.files.len() {
            self.generation += 1;
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    /// Empty the selection, handing the files to the caller.
    pub fn take(&mut self) -> Vec<F> {
        if !self.files.is_empty() {
            self.generation += 1;
        }
        std::mem::take(&mut self.files)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &F> {
        self.files.iter()
    }
}
