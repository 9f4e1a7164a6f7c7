use mime::Mime;

/// Reference to the candidate résumé file. The engine never reads the bytes;
/// it only inspects the metadata the picker reports.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub name: String,
    pub byte_size: u64,
    pub mime_type: Mime,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AttachmentError {
    #[error("only PDF files are accepted (got {found})")]
    InvalidFileType { found: Mime },
}

/// Holds the currently selected résumé, enforcing the PDF-only rule at
/// selection time. Size is a gate concern, not a selection concern: an
/// oversized PDF is stored but keeps the draft unsubmittable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttachmentGuard {
    current: Option<Attachment>,
}

impl AttachmentGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a candidate file, replacing any prior selection. Non-PDF types
    /// are rejected and nothing is stored, so the caller's file input resets
    /// to empty.
    pub fn select(&mut self, candidate: Attachment) -> Result<(), AttachmentError> {
        if candidate.mime_type != mime::APPLICATION_PDF {
            return Err(AttachmentError::InvalidFileType {
                found: candidate.mime_type,
            });
        }
        self.current = Some(candidate);
        Ok(())
    }

    /// Drop the current selection.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Attachment> {
        self.current.as_ref()
    }
}
